//! Bounded fan-out of per-account tasks.
//!
//! One tokio task per token, gated by a semaphore so a huge token list
//! cannot spawn unbounded concurrent work. Each task bootstraps its
//! account and, on success, runs the heartbeat loop until shutdown.
//! Accounts share nothing except the API client's connection pool and the
//! process-wide retry counter.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use vigil_types::{AccountRecord, ApiError};

use crate::client::ApiClient;
use crate::endpoints::Endpoints;
use crate::ping::{self, RetryCounter};
use crate::session;

/// Default upper bound on concurrently active account units.
pub const MAX_CONCURRENT_ACCOUNTS: usize = 1000;

/// Orchestrator settings.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Endpoint set to talk to
    pub endpoints: Endpoints,
    /// Optional proxy replacing the base-proxy sentinel for every account
    pub proxy: Option<String>,
    /// Maximum number of simultaneously active account units
    pub max_concurrency: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            proxy: None,
            max_concurrency: MAX_CONCURRENT_ACCOUNTS,
        }
    }
}

/// Run one unit per token until every unit finishes.
///
/// A unit only finishes when bootstrap fails for all of its proxies or
/// `shutdown` is cancelled; a successfully bootstrapped account pings
/// forever, so this call effectively blocks until process shutdown.
pub async fn run(
    tokens: Vec<String>,
    config: OrchestratorConfig,
    shutdown: CancellationToken,
) -> Result<(), ApiError> {
    let client = Arc::new(ApiClient::new(config.proxy.as_deref())?);
    let endpoints = Arc::new(config.endpoints);
    let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
    let retries = RetryCounter::new();

    tracing::info!(
        "[Orchestrator] Spawning {} account unit(s) (max {} concurrent)",
        tokens.len(),
        config.max_concurrency.max(1)
    );

    let handles: Vec<_> = tokens
        .into_iter()
        .map(|token| {
            let client = client.clone();
            let endpoints = endpoints.clone();
            let semaphore = semaphore.clone();
            let retries = retries.clone();
            let shutdown = shutdown.clone();
            let proxy = config.proxy.clone();

            tokio::spawn(async move {
                let permit = tokio::select! {
                    () = shutdown.cancelled() => return,
                    permit = semaphore.acquire_owned() => permit,
                };
                // Semaphore is never closed while units are running
                let Ok(_permit) = permit else { return };

                let mut account = match proxy {
                    Some(p) => AccountRecord::with_proxies(token, vec![p]),
                    None => AccountRecord::new(token),
                };

                if session::bootstrap(&client, &endpoints, &mut account).await {
                    ping::run_ping_loop(&client, &endpoints, account, retries, shutdown).await;
                } else {
                    tracing::warn!(
                        "[Orchestrator] Account {} abandoned, bootstrap failed",
                        account.token_label()
                    );
                }
            })
        })
        .collect();

    for result in join_all(handles).await {
        if let Err(e) = result {
            tracing::error!("[Orchestrator] Account unit panicked: {}", e);
        }
    }

    tracing::info!("[Orchestrator] All account units finished");
    Ok(())
}
