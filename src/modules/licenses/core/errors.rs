use thiserror::Error;

/// Rule violations raised by the license model and its commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LicenseError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("no fields provided")]
    EmptyUpdate,

    #[error("maxUsers must be greater than zero")]
    InvalidCapacity,

    #[error("maxUsers {max_users} is below the {user_count} users already assigned")]
    CapacityBelowUsers { max_users: u32, user_count: usize },

    #[error("license {license_id} has no available seats (maxUsers {max_users})")]
    CapacityExceeded { license_id: String, max_users: u32 },
}

/// Fails with every field name whose flag is `false`, in the order given.
pub fn require_fields(fields: &[(&'static str, bool)]) -> Result<(), LicenseError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LicenseError::MissingFields(missing))
    }
}
