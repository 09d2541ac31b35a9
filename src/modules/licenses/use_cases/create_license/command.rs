// Command data type for creating a license.
//
// Purpose
// - Carry the caller's fields as given; absent fields stay `None` until the decider validates them.
//
// Responsibilities
// - Be independent of transport layer details.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLicense {
    pub name: Option<String>,
    pub email: Option<String>,
    pub activation_email: Option<String>,
    pub activation_password: Option<String>,
    pub default_password: Option<String>,
    pub max_users: Option<u32>,
}
