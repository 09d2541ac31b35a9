// Pure decision function for a new user.
//
// Responsibilities
// - Require name and email; default both passwords to "".
// - Capacity is checked later against the stored license, see `License::admit`.

use crate::modules::licenses::core::errors::{LicenseError, require_fields};
use crate::modules::licenses::core::license::NewUser;
use crate::modules::licenses::use_cases::add_user::command::AddUser;

pub fn decide_add_user(command: AddUser) -> Result<NewUser, LicenseError> {
    require_fields(&[
        ("name", command.name.is_some()),
        ("email", command.email.is_some()),
    ])?;

    Ok(NewUser {
        name: command.name.unwrap_or_default(),
        email: command.email.unwrap_or_default(),
        password: command.password.unwrap_or_default(),
        default_password: command.default_password.unwrap_or_default(),
    })
}
