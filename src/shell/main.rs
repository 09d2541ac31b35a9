use std::sync::Arc;

use license_registry::modules::licenses::repository::LicenseRepository;
use license_registry::shared::core::ids::MillisIdGenerator;
use license_registry::shell::config::{AppConfig, StoreConfig};
use license_registry::shell::http::app;
use license_registry::shell::state::AppState;
use license_registry::shell::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    match &config.store {
        StoreConfig::JsonFile(path) => {
            tracing::info!(path = %path.display(), "using JSON file license store")
        }
        StoreConfig::Memory => tracing::warn!("using in-memory license store, data is lost on exit"),
    }

    let repository = LicenseRepository::new(config.store.build(), Arc::new(MillisIdGenerator::new()));
    let state = AppState {
        licenses: Arc::new(repository),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "License API: http://{}{}/licenses",
        config.bind_addr,
        config.api_prefix
    );
    axum::serve(listener, app(state, &config.api_prefix)).await?;
    Ok(())
}
