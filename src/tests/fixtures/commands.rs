// Builders for license commands, filled with the values of the "A" license used across tests.

use crate::modules::licenses::use_cases::add_user::command::AddUser;
use crate::modules::licenses::use_cases::create_license::command::CreateLicense;

pub struct CreateLicenseBuilder {
    inner: CreateLicense,
}

impl Default for CreateLicenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateLicenseBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateLicense {
                name: Some("A".into()),
                email: Some("a@x.com".into()),
                activation_email: Some("a@x.com".into()),
                activation_password: Some("p".into()),
                default_password: None,
                max_users: Some(2),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn max_users(mut self, v: u32) -> Self {
        self.inner.max_users = Some(v);
        self
    }

    pub fn build(self) -> CreateLicense {
        self.inner
    }
}

pub struct AddUserBuilder {
    inner: AddUser,
}

impl Default for AddUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AddUserBuilder {
    pub fn new() -> Self {
        Self {
            inner: AddUser {
                name: Some("U1".into()),
                email: Some("u1@x.com".into()),
                password: None,
                default_password: None,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = Some(v.into());
        self
    }

    pub fn build(self) -> AddUser {
        self.inner
    }
}
