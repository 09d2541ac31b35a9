use std::sync::Arc;

use crate::modules::licenses::adapters::outbound::in_memory_store::InMemoryLicenseStore;
use crate::modules::licenses::core::license::License;
use crate::modules::licenses::repository::LicenseRepository;
use crate::shared::core::ids::MillisIdGenerator;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    make_seeded_state(Vec::new())
}

pub fn make_seeded_state(licenses: Vec<License>) -> AppState {
    let store = Arc::new(InMemoryLicenseStore::with_licenses(licenses));
    AppState {
        licenses: Arc::new(LicenseRepository::new(store, Arc::new(MillisIdGenerator::new()))),
    }
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryLicenseStore::new();
    store.toggle_offline();
    AppState {
        licenses: Arc::new(LicenseRepository::new(
            Arc::new(store),
            Arc::new(MillisIdGenerator::new()),
        )),
    }
}

/// Loads `licenses` but fails every save.
pub fn make_read_only_store_state(licenses: Vec<License>) -> AppState {
    let mut store = InMemoryLicenseStore::with_licenses(licenses);
    store.toggle_read_only();
    AppState {
        licenses: Arc::new(LicenseRepository::new(
            Arc::new(store),
            Arc::new(MillisIdGenerator::new()),
        )),
    }
}
