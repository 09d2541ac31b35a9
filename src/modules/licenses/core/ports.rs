// Ports define what the license core needs from the outside world, without implementing it.
//
// Purpose
// - Describe storage as a trait so the repository never knows whether it talks to a file or memory.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Use the in memory store, toggled offline, to exercise storage failures.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::licenses::core::license::License;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage format error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Whole-snapshot storage: every save replaces the full list of licenses.
#[async_trait]
pub trait LicenseStore: Send + Sync {
    async fn load(&self) -> Result<Vec<License>, StoreError>;
    async fn save(&self, licenses: &[License]) -> Result<(), StoreError>;
}
