// Command data type for seating a user on a license.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub default_password: Option<String>,
}
