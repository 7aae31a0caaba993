//! # Vigil Core
//!
//! Business logic for the Vigil keep-alive daemon: token loading, the
//! browser-emulating API client, per-account session bootstrap, the
//! heartbeat loop with failure classification, and the bounded
//! orchestrator that fans one task out per account.

pub mod client;
pub mod endpoints;
pub mod orchestrator;
pub mod ping;
pub mod session;
pub mod tokens;

pub use client::ApiClient;
pub use endpoints::Endpoints;
pub use orchestrator::{run, OrchestratorConfig};
pub use ping::RetryCounter;
