// In memory implementation of the LicenseStore port.
//
// Purpose
// - Support repository and handler tests, and local runs without a data file.
//
// Responsibilities
// - Keep the last saved snapshot of licenses.
// - Fail every call while toggled offline, or only saves while toggled read only.

use crate::modules::licenses::core::license::License;
use crate::modules::licenses::core::ports::{LicenseStore, StoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLicenseStore {
    licenses: RwLock<Vec<License>>,
    is_offline: bool,
    is_read_only: bool,
}

impl InMemoryLicenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_licenses(licenses: Vec<License>) -> Self {
        Self {
            licenses: RwLock::new(licenses),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_read_only(&mut self) {
        self.is_read_only = !self.is_read_only;
    }
}

#[async_trait::async_trait]
impl LicenseStore for InMemoryLicenseStore {
    async fn load(&self) -> Result<Vec<License>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("License store offline".into()));
        }
        Ok(self.licenses.read().await.clone())
    }

    async fn save(&self, licenses: &[License]) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("License store offline".into()));
        }
        if self.is_read_only {
            return Err(StoreError::Backend("License store is read only".into()));
        }
        *self.licenses.write().await = licenses.to_vec();
        Ok(())
    }
}
