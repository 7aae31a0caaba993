//! Fixed endpoint set for the remote service.
//!
//! The production values are compile-time constants; the struct exists so
//! tests can point the client at a local mock server. Nothing here is
//! runtime-configurable.

/// Session bootstrap endpoint.
pub const SESSION_URL: &str = "http://api.nodepay.ai/api/auth/session";

/// Heartbeat endpoints, tried in order within one ping cycle.
pub const PING_URLS: &[&str] = &["https://nw.nodepay.org/api/network/ping"];

/// The endpoint set one daemon instance talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Session bootstrap URL
    pub session: String,
    /// Ordered ping URLs
    pub ping: Vec<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            session: SESSION_URL.to_string(),
            ping: PING_URLS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_production_values() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.session, SESSION_URL);
        assert_eq!(endpoints.ping.len(), 1);
        assert_eq!(endpoints.ping[0], PING_URLS[0]);
    }
}
