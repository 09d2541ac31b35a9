// Aggregate seat usage across every license.
//
// Derived on each request from the current licenses; never stored.

use serde::Serialize;

use crate::modules::licenses::core::license::License;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseStats {
    pub total_licenses: u64,
    pub total_users: u64,
    pub total_slots: u64,
    pub available_slots: i64,
    pub usage_percentage: u64,
}

impl LicenseStats {
    pub fn from_licenses(licenses: &[License]) -> Self {
        let total_licenses = licenses.len() as u64;
        let total_users: u64 = licenses.iter().map(|l| l.users.len() as u64).sum();
        let total_slots: u64 = licenses.iter().map(|l| u64::from(l.max_users)).sum();

        Self {
            total_licenses,
            total_users,
            total_slots,
            available_slots: total_slots as i64 - total_users as i64,
            usage_percentage: usage_percentage(total_users, total_slots),
        }
    }
}

// round(users / slots * 100) with halves rounded up, in integer arithmetic.
fn usage_percentage(total_users: u64, total_slots: u64) -> u64 {
    if total_slots == 0 {
        return 0;
    }
    (total_users * 200 + total_slots) / (total_slots * 2)
}
