//! # Vigil Types
//!
//! Core types, models, and error definitions for the Vigil keep-alive daemon.
//!
//! This crate sits at the bottom of the dependency graph:
//!
//! ```text
//!     vigil-types (this crate)
//!           │
//!           ▼
//!      vigil-core
//!           │
//!           ▼
//!      vigil-daemon
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for wire payloads and reporting
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ApiError, TokenError};

// Re-export core model types
pub use models::{AccountRecord, ConnectionState, PingStats};
