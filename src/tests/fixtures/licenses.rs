use crate::modules::licenses::core::license::{License, User};

pub fn make_license(id: &str, max_users: u32) -> License {
    License {
        id: id.to_string(),
        name: format!("License {id}"),
        email: "owner@x.com".to_string(),
        activation_email: "activation@x.com".to_string(),
        activation_password: "p".to_string(),
        default_password: String::new(),
        max_users,
        users: Vec::new(),
    }
}

pub fn make_user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("User {id}"),
        email: format!("{id}@x.com"),
        password: String::new(),
        default_password: String::new(),
    }
}
