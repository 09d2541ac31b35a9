// Pure decision function for a one-shot import.
//
// Responsibilities
// - Skip licenses whose id is already stored.
// - Reject licenses that would break capacity or reuse an id held by any stored license or user.
// - Log each rejection; never touch storage.

use std::collections::HashSet;

use tracing::warn;

use crate::modules::licenses::core::license::License;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub licenses_added: usize,
    pub users_added: usize,
    pub skipped: usize,
    pub rejected: usize,
}

pub struct ImportDecision {
    pub accepted: Vec<License>,
    pub summary: ImportSummary,
}

pub fn decide_import(existing: &[License], incoming: Vec<License>) -> ImportDecision {
    let stored_licenses: HashSet<&str> = existing.iter().map(|l| l.id.as_str()).collect();
    let mut taken: HashSet<String> = existing
        .iter()
        .flat_map(|l| std::iter::once(l.id.clone()).chain(l.users.iter().map(|u| u.id.clone())))
        .collect();

    let mut accepted = Vec::new();
    let mut summary = ImportSummary::default();

    for license in incoming {
        if stored_licenses.contains(license.id.as_str()) {
            summary.skipped += 1;
            continue;
        }
        if let Some(reason) = rejection_reason(&license, &taken) {
            warn!(license_id = %license.id, reason, "license rejected during import");
            summary.rejected += 1;
            continue;
        }

        taken.insert(license.id.clone());
        taken.extend(license.users.iter().map(|u| u.id.clone()));
        summary.licenses_added += 1;
        summary.users_added += license.users.len();
        accepted.push(license);
    }

    ImportDecision { accepted, summary }
}

fn rejection_reason(license: &License, taken: &HashSet<String>) -> Option<&'static str> {
    if license.max_users == 0 {
        return Some("maxUsers is zero");
    }
    if license.users.len() > license.max_users as usize {
        return Some("more users than maxUsers");
    }
    if taken.contains(&license.id) {
        return Some("license id already used");
    }
    let mut seen = HashSet::new();
    for user in &license.users {
        if user.id == license.id || taken.contains(&user.id) || !seen.insert(user.id.as_str()) {
            return Some("duplicate user id");
        }
    }
    None
}
