// File backed implementation of the LicenseStore port.
//
// Purpose
// - Persist every license in one JSON array, the layout the registry has always used on disk.
//
// Responsibilities
// - Treat a missing or blank file as an empty registry.
// - Rewrite the whole array on every save, through a temporary file and a rename.
// - Flush the temporary file to disk before the rename, so a crash leaves either the old or the new array.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::modules::licenses::core::license::License;
use crate::modules::licenses::core::ports::{LicenseStore, StoreError};

#[derive(Debug, Clone)]
pub struct JsonFileLicenseStore {
    path: PathBuf,
}

impl JsonFileLicenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait::async_trait]
impl LicenseStore for JsonFileLicenseStore {
    async fn load(&self) -> Result<Vec<License>, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, licenses: &[License]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(licenses)?;
        let staging = self.staging_path();
        let mut file = File::create(&staging).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&staging, &self.path).await?;
        sync_parent(&self.path).await?;
        debug!(path = %self.path.display(), licenses = licenses.len(), "license file written");
        Ok(())
    }
}

// Persists the rename itself; directories cannot be opened as files outside unix.
#[cfg(unix)]
async fn sync_parent(path: &Path) -> Result<(), StoreError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    File::open(parent).await?.sync_all().await?;
    Ok(())
}

#[cfg(not(unix))]
async fn sync_parent(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}
