// Pure decision function for license creation.
//
// Responsibilities
// - Require name, email, activationEmail and activationPassword.
// - Default defaultPassword to "" and maxUsers to 5; reject a zero capacity.
// - Never perform input or output.

use crate::modules::licenses::core::errors::{LicenseError, require_fields};
use crate::modules::licenses::core::license::{DEFAULT_MAX_USERS, NewLicense};
use crate::modules::licenses::use_cases::create_license::command::CreateLicense;

pub fn decide_create(command: CreateLicense) -> Result<NewLicense, LicenseError> {
    require_fields(&[
        ("name", command.name.is_some()),
        ("email", command.email.is_some()),
        ("activationEmail", command.activation_email.is_some()),
        ("activationPassword", command.activation_password.is_some()),
    ])?;

    let max_users = command.max_users.unwrap_or(DEFAULT_MAX_USERS);
    if max_users == 0 {
        return Err(LicenseError::InvalidCapacity);
    }

    Ok(NewLicense {
        name: command.name.unwrap_or_default(),
        email: command.email.unwrap_or_default(),
        activation_email: command.activation_email.unwrap_or_default(),
        activation_password: command.activation_password.unwrap_or_default(),
        default_password: command.default_password.unwrap_or_default(),
        max_users,
    })
}
