// One-shot import of a legacy licenses JSON file into the configured store.
//
// Usage: import_licenses [path]. Without a path, data/licenses.json then licenses.json are tried.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};

use license_registry::modules::licenses::repository::LicenseRepository;
use license_registry::modules::licenses::use_cases::import_licenses::record::parse_license_file;
use license_registry::modules::licenses::use_cases::import_licenses::source::{
    is_store_file, locate_license_file,
};
use license_registry::shared::core::ids::MillisIdGenerator;
use license_registry::shell::config::{AppConfig, StoreConfig};
use license_registry::shell::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    if config.store == StoreConfig::Memory {
        bail!("importing into the in-memory store would discard the data on exit; set LICENSES_STORE=file");
    }

    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let cwd = std::env::current_dir()?;
    let Some(path) = locate_license_file(explicit, &cwd) else {
        bail!("licenses.json not found in data/ or the current directory");
    };
    if config
        .store
        .data_file()
        .is_some_and(|store_file| is_store_file(&path, store_file))
    {
        bail!(
            "{} is the store's own data file; pass the legacy file or change LICENSES_DATA_FILE",
            path.display()
        );
    }

    tracing::info!(path = %path.display(), "reading license file");
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let licenses = parse_license_file(&raw)
        .with_context(|| format!("{} is not a valid licenses file", path.display()))?;

    let repository = LicenseRepository::new(config.store.build(), Arc::new(MillisIdGenerator::new()));
    repository.import(licenses).await?;
    Ok(())
}
