//! Account model and related types.

use super::PingStats;
use serde::{Deserialize, Serialize};

/// Default proxy sentinel. No rotation happens at runtime; the record keeps
/// a list for shape compatibility but the first entry is always used.
pub const BASE_PROXY: &str = "ONLY BASE PROXY";

/// Connection status of a single account towards the remote service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// Session established and actively heartbeating
    Connected,
    /// A ping cycle failed; session may be stale server-side
    Disconnected,
    /// No session yet (initial state, or after a forced logout)
    #[default]
    NoConnection,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::NoConnection => "no_connection",
        };
        f.write_str(s)
    }
}

/// One record per credential token, owned exclusively by that account's task
/// for the whole process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    /// Opaque credential string, immutable identity of the account
    pub token: String,
    /// Ordered proxy addresses to try (single sentinel by default)
    pub proxies: Vec<String>,
    /// Current connection status
    pub connection_state: ConnectionState,
    /// Remote profile data; empty object until bootstrap succeeds, must
    /// contain a non-empty `uid` afterwards
    pub profile: serde_json::Value,
    /// Free-text status string for observability
    pub last_ping_status: String,
    /// Heartbeat bookkeeping sent with every ping payload
    pub stats: PingStats,
}

impl AccountRecord {
    /// Create a new record for the given token, using the fixed base proxy.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_proxies(token, vec![BASE_PROXY.to_string()])
    }

    /// Create a new record with an explicit proxy list.
    pub fn with_proxies(token: impl Into<String>, proxies: Vec<String>) -> Self {
        Self {
            token: token.into(),
            proxies,
            connection_state: ConnectionState::NoConnection,
            profile: serde_json::Value::Object(serde_json::Map::new()),
            last_ping_status: "Waiting...".to_string(),
            stats: PingStats::new(),
        }
    }

    /// Unique identifier from the bootstrapped profile, if present.
    pub fn uid(&self) -> Option<&str> {
        self.profile.get("uid").and_then(|v| v.as_str()).filter(|s| !s.is_empty())
    }

    /// Whether a session has been established (profile carries a uid).
    pub fn has_session(&self) -> bool {
        self.uid().is_some()
    }

    /// Logout handling: back to no-connection, profile cleared, status marker
    /// set for reporting.
    pub fn reset(&mut self) {
        self.connection_state = ConnectionState::NoConnection;
        self.profile = serde_json::Value::Object(serde_json::Map::new());
        self.last_ping_status = "Logged out".to_string();
    }

    /// Short token prefix safe for log lines. Full tokens never hit the logs.
    pub fn token_label(&self) -> String {
        let prefix: String = self.token.chars().take(8).collect();
        format!("{}…", prefix)
    }
}
