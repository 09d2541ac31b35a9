// Command data type for a partial license update.
//
// Every `Some` field overwrites the stored value; `None` keeps it. A JSON null arrives as `None`.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateLicense {
    pub name: Option<String>,
    pub email: Option<String>,
    pub activation_email: Option<String>,
    pub activation_password: Option<String>,
    pub default_password: Option<String>,
    pub max_users: Option<u32>,
}

impl UpdateLicense {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.activation_email.is_none()
            && self.activation_password.is_none()
            && self.default_password.is_none()
            && self.max_users.is_none()
    }
}
