// Composition root for the license registry.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the configured license store and the repository on top of it.
// - Wire the repository into the HTTP handlers.

pub mod config;
pub mod http;
pub mod state;
pub mod telemetry;
