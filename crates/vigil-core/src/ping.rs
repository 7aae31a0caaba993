//! Heartbeat loop and failure classification.
//!
//! Each account runs one infinite loop: sleep a fixed interval, then walk
//! the ping endpoint list until one call succeeds. Failures never abort the
//! loop; they are classified into connection-state transitions and counted
//! on a process-wide retry counter. The loop exits only through cooperative
//! cancellation at shutdown.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use vigil_types::{AccountRecord, ConnectionState};

use crate::client::ApiClient;
use crate::endpoints::Endpoints;

/// Fixed sleep between ping attempts.
pub const PING_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Once the shared counter passes this, the retry-limit warning fires.
pub const RETRY_THRESHOLD: u32 = 2;

/// Structured code the service uses for revoked/unauthorized sessions.
const FORBIDDEN_CODE: i64 = 403;

/// Process-wide failure counter, shared across every account task.
///
/// One account's failures raise the count seen by all others. That coupling
/// is deliberate here: the counter is a handle owned by the orchestrator and
/// cloned into each task, so the sharing is explicit rather than a global.
#[derive(Debug, Clone, Default)]
pub struct RetryCounter(Arc<AtomicU32>);

impl RetryCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new value.
    pub fn increment(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed).saturating_add(1)
    }

    /// Current value.
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a ping attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The call itself failed (network, timeout, non-2xx, bad body)
    Transport,
    /// The service answered with a non-zero status code
    ServerCode,
}

/// Unified failure contract handed to the classifier, whether the attempt
/// died in transport or came back as an error-coded response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingFailure {
    /// Failure category
    pub kind: FailureKind,
    /// Structured status code, when the service supplied one
    pub code: Option<i64>,
    /// Human-readable description for logging
    pub message: String,
}

impl PingFailure {
    /// Failure from a thrown transport/parse error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self { kind: FailureKind::Transport, code: None, message: message.into() }
    }

    /// Failure from an error-coded response body.
    pub fn server_code(code: i64) -> Self {
        Self {
            kind: FailureKind::ServerCode,
            code: Some(code),
            message: format!("server returned code {}", code),
        }
    }
}

/// Classify a failed ping attempt and update `account` accordingly.
///
/// A 403-coded failure means the session is gone: logout handling resets
/// the record. Anything else marks the account disconnected; past the
/// retry threshold an extra warning notes that the same proxy is kept
/// regardless (there is no proxy rotation).
pub fn classify_failure(account: &mut AccountRecord, failure: &PingFailure, retries: &RetryCounter) {
    let count = retries.increment();

    if failure.code == Some(FORBIDDEN_CODE) {
        handle_logout(account);
        return;
    }

    account.connection_state = ConnectionState::Disconnected;
    account.last_ping_status = format!("Ping failed: {}", failure.message);

    if count >= RETRY_THRESHOLD {
        tracing::warn!(
            "[Ping] Retry limit exceeded for account {}, continuing with the same proxy",
            account.token_label()
        );
    }
}

/// Logout handling: clear the session and report it. Persistence of the
/// logged-out marker is a status report, not durable storage.
fn handle_logout(account: &mut AccountRecord) {
    account.reset();
    tracing::error!(
        "[Ping] Logged out and cleared session info for account {}",
        account.token_label()
    );
}

/// Run one ping cycle: walk the endpoint list in order, stopping at the
/// first success. Other outcomes advance to the next endpoint after the
/// classifier (or a format log) has run.
pub async fn ping_cycle(
    client: &ApiClient,
    endpoints: &Endpoints,
    account: &mut AccountRecord,
    proxy: &str,
    retries: &RetryCounter,
) {
    let label = account.token_label();

    for url in &endpoints.ping {
        let now = chrono::Utc::now().timestamp();
        account.stats.record_attempt();
        let payload = json!({
            "id": account.uid(),
            "browser_id": &account.stats,
            "timestamp": now,
        });

        match client.call(url, &payload, &account.token).await {
            Ok(response) => match response.get("code").and_then(|c| c.as_i64()) {
                Some(0) => {
                    account.stats.record_success(now);
                    account.last_ping_status = "Ping successful".to_string();
                    tracing::info!(
                        "[Ping] Ping successful for token {} using proxy {}",
                        label,
                        proxy
                    );
                    return;
                }
                Some(code) => {
                    tracing::error!(
                        "[Ping] Ping failed for token {} with code {} using proxy {}",
                        label,
                        code,
                        proxy
                    );
                    classify_failure(account, &PingFailure::server_code(code), retries);
                }
                None => {
                    tracing::error!(
                        "[Ping] Unexpected response format for token {} using proxy {}: {}",
                        label,
                        proxy,
                        response
                    );
                }
            },
            Err(e) => {
                tracing::error!(
                    "[Ping] Ping failed for token {} using URL {} and proxy {}: {}",
                    label,
                    url,
                    proxy,
                    e
                );
                classify_failure(account, &PingFailure::transport(e.to_string()), retries);
            }
        }
    }
}

/// Run one ping cycle raced against `shutdown`. Returns `false` when the
/// cycle was cut short by cancellation; the dropped call tears its
/// connection down with it.
pub async fn ping_cycle_with_shutdown(
    client: &ApiClient,
    endpoints: &Endpoints,
    account: &mut AccountRecord,
    proxy: &str,
    retries: &RetryCounter,
    shutdown: &CancellationToken,
) -> bool {
    tokio::select! {
        () = shutdown.cancelled() => false,
        () = ping_cycle(client, endpoints, account, proxy, retries) => true,
    }
}

/// Infinite per-account heartbeat loop. Sleeps [`PING_INTERVAL`] before each
/// attempt and only returns when `shutdown` is cancelled; cancellation is
/// observed at the sleep point and during the in-flight call so shutdown
/// never waits out the network timeout.
pub async fn run_ping_loop(
    client: &ApiClient,
    endpoints: &Endpoints,
    mut account: AccountRecord,
    retries: RetryCounter,
    shutdown: CancellationToken,
) {
    let label = account.token_label();
    tracing::info!("[Ping] Starting ping for token {}", label);

    loop {
        for proxy in account.proxies.clone() {
            tokio::select! {
                () = shutdown.cancelled() => {
                    tracing::info!("[Ping] Ping task for token {} was cancelled", label);
                    return;
                }
                () = tokio::time::sleep(PING_INTERVAL) => {}
            }

            let completed = ping_cycle_with_shutdown(
                client,
                endpoints,
                &mut account,
                &proxy,
                &retries,
                &shutdown,
            )
            .await;
            if !completed {
                tracing::info!("[Ping] Ping task for token {} was cancelled", label);
                return;
            }
        }
    }
}
