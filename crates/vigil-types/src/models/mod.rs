//! Core domain models for Vigil.
//!
//! This module contains the shared data structures used across the daemon.

mod account;
mod stats;

// Re-export all models
pub use account::{AccountRecord, ConnectionState, BASE_PROXY};
pub use stats::PingStats;
