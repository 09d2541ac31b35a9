// Process configuration read from the environment.
//
// Responsibilities
// - Resolve bind address, route prefix and storage backend, with defaults for local runs.
// - Reject values that cannot be used instead of silently falling back.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::modules::licenses::adapters::outbound::in_memory_store::InMemoryLicenseStore;
use crate::modules::licenses::adapters::outbound::json_file_store::JsonFileLicenseStore;
use crate::modules::licenses::core::ports::LicenseStore;

pub const HOST_ENV: &str = "LICENSES_HOST";
pub const PORT_ENV: &str = "LICENSES_PORT";
pub const API_PREFIX_ENV: &str = "LICENSES_API_PREFIX";
pub const STORE_ENV: &str = "LICENSES_STORE";
pub const DATA_FILE_ENV: &str = "LICENSES_DATA_FILE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_API_PREFIX: &str = "/api";
/// Kept apart from `data/licenses.json`, the legacy file the import tool reads by default.
pub const DEFAULT_DATA_FILE: &str = "data/registry.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LICENSES_PORT is not a valid port: {0}")]
    InvalidPort(String),

    #[error("LICENSES_HOST is not a valid IP address: {0}")]
    InvalidHost(String),

    #[error("LICENSES_STORE must be \"file\" or \"memory\", got {0}")]
    UnknownStore(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    JsonFile(PathBuf),
}

impl StoreConfig {
    pub fn build(&self) -> Arc<dyn LicenseStore> {
        match self {
            StoreConfig::Memory => Arc::new(InMemoryLicenseStore::new()),
            StoreConfig::JsonFile(path) => Arc::new(JsonFileLicenseStore::new(path.clone())),
        }
    }

    pub fn data_file(&self) -> Option<&Path> {
        match self {
            StoreConfig::Memory => None,
            StoreConfig::JsonFile(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Empty when routes are served from the root.
    pub api_prefix: String,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.trim().parse().map_err(|_| ConfigError::InvalidHost(host))?;

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_prefix =
            normalize_prefix(&lookup(API_PREFIX_ENV).unwrap_or_else(|| DEFAULT_API_PREFIX.into()));

        let store = match lookup(STORE_ENV).as_deref().map(str::trim) {
            None | Some("file") => StoreConfig::JsonFile(
                lookup(DATA_FILE_ENV)
                    .unwrap_or_else(|| DEFAULT_DATA_FILE.into())
                    .into(),
            ),
            Some("memory") => StoreConfig::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            api_prefix,
            store,
        })
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
