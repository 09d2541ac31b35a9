// License aggregate and the users seated on it.
//
// Purpose
// - Hold the license record exactly as it travels over the wire and sits in storage.
//
// Responsibilities
// - Keep `users.len() <= max_users` whenever a user is admitted.
// - Never perform input or output.

use serde::{Deserialize, Serialize};

use crate::modules::licenses::core::errors::LicenseError;

pub const DEFAULT_MAX_USERS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub default_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub activation_email: String,
    #[serde(default)]
    pub activation_password: String,
    #[serde(default)]
    pub default_password: String,
    pub max_users: u32,
    #[serde(default)]
    pub users: Vec<User>,
}

/// A validated license that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLicense {
    pub name: String,
    pub email: String,
    pub activation_email: String,
    pub activation_password: String,
    pub default_password: String,
    pub max_users: u32,
}

impl NewLicense {
    pub fn into_license(self, id: String) -> License {
        License {
            id,
            name: self.name,
            email: self.email,
            activation_email: self.activation_email,
            activation_password: self.activation_password,
            default_password: self.default_password,
            max_users: self.max_users,
            users: Vec::new(),
        }
    }
}

/// A validated user that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub default_password: String,
}

impl NewUser {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            default_password: self.default_password,
        }
    }
}

impl License {
    pub fn has_capacity(&self) -> bool {
        self.users.len() < self.max_users as usize
    }

    pub fn available_seats(&self) -> usize {
        (self.max_users as usize).saturating_sub(self.users.len())
    }

    /// Seats `user` on this license, refusing once every seat is taken.
    pub fn admit(&mut self, user: User) -> Result<(), LicenseError> {
        if !self.has_capacity() {
            return Err(LicenseError::CapacityExceeded {
                license_id: self.id.clone(),
                max_users: self.max_users,
            });
        }
        self.users.push(user);
        Ok(())
    }

    pub fn dismiss(&mut self, user_id: &str) -> Option<User> {
        let position = self.users.iter().position(|u| u.id == user_id)?;
        Some(self.users.remove(position))
    }

    /// True when `id` names this license or one of its users.
    pub fn uses_id(&self, id: &str) -> bool {
        self.id == id || self.users.iter().any(|u| u.id == id)
    }
}
