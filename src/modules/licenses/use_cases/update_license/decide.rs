// Pure decision function for partial license updates.
//
// Responsibilities
// - Overwrite only the fields the command carries; users are never touched.
// - Keep maxUsers positive and never below the number of seated users.

use crate::modules::licenses::core::errors::LicenseError;
use crate::modules::licenses::core::license::License;
use crate::modules::licenses::use_cases::update_license::command::UpdateLicense;

pub fn decide_update(license: &License, command: UpdateLicense) -> Result<License, LicenseError> {
    if command.is_empty() {
        return Err(LicenseError::EmptyUpdate);
    }

    if let Some(max_users) = command.max_users {
        if max_users == 0 {
            return Err(LicenseError::InvalidCapacity);
        }
        if (max_users as usize) < license.users.len() {
            return Err(LicenseError::CapacityBelowUsers {
                max_users,
                user_count: license.users.len(),
            });
        }
    }

    let mut updated = license.clone();
    if let Some(name) = command.name {
        updated.name = name;
    }
    if let Some(email) = command.email {
        updated.email = email;
    }
    if let Some(activation_email) = command.activation_email {
        updated.activation_email = activation_email;
    }
    if let Some(activation_password) = command.activation_password {
        updated.activation_password = activation_password;
    }
    if let Some(default_password) = command.default_password {
        updated.default_password = default_password;
    }
    if let Some(max_users) = command.max_users {
        updated.max_users = max_users;
    }
    Ok(updated)
}
