//! Ping statistics model.

use serde::{Deserialize, Serialize};

/// Per-account ping bookkeeping, sent back to the server as part of every
/// ping payload and used for local reporting.
///
/// Serializes under the wire names the remote service expects
/// (`ping_count`, `successful_pings`, `score`, `start_time`,
/// `last_ping_time`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PingStats {
    /// Total number of ping attempts since startup
    pub ping_count: u64,
    /// Number of pings that received a zero status code
    pub successful_pings: u64,
    /// Success ratio as a percentage (0.0 - 100.0)
    pub score: f64,
    /// Unix timestamp when this account's loop started
    pub start_time: i64,
    /// Unix timestamp of the last successful ping, if any
    pub last_ping_time: Option<i64>,
}

impl PingStats {
    /// Create fresh stats with `start_time` set to now.
    pub fn new() -> Self {
        Self {
            ping_count: 0,
            successful_pings: 0,
            score: 0.0,
            start_time: chrono::Utc::now().timestamp(),
            last_ping_time: None,
        }
    }

    /// Record one ping attempt.
    pub fn record_attempt(&mut self) {
        self.ping_count = self.ping_count.saturating_add(1);
        self.recompute_score();
    }

    /// Record a successful ping at the given timestamp.
    pub fn record_success(&mut self, timestamp: i64) {
        self.successful_pings = self.successful_pings.saturating_add(1);
        self.last_ping_time = Some(timestamp);
        self.recompute_score();
    }

    fn recompute_score(&mut self) {
        if self.ping_count == 0 {
            self.score = 0.0;
        } else {
            self.score = (self.successful_pings as f64 / self.ping_count as f64) * 100.0;
        }
    }
}

impl Default for PingStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tracks_success_ratio() {
        let mut stats = PingStats::new();
        stats.record_attempt();
        stats.record_success(1_700_000_000);
        assert_eq!(stats.score, 100.0);

        stats.record_attempt();
        assert_eq!(stats.ping_count, 2);
        assert_eq!(stats.successful_pings, 1);
        assert_eq!(stats.score, 50.0);
        assert_eq!(stats.last_ping_time, Some(1_700_000_000));
    }

    #[test]
    fn test_fresh_stats_are_empty() {
        let stats = PingStats::new();
        assert_eq!(stats.ping_count, 0);
        assert_eq!(stats.successful_pings, 0);
        assert_eq!(stats.score, 0.0);
        assert!(stats.last_ping_time.is_none());
        assert!(stats.start_time > 0);
    }
}
