//! Token source errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading the token list.
///
/// These are fatal: the daemon has no partial-success mode at startup.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum TokenError {
    /// The token file could not be read at all
    #[error("Failed to load tokens from {path}: {message}")]
    Unreadable {
        /// Path that was attempted
        path: String,
        /// Underlying I/O failure
        message: String,
    },

    /// The file was readable but yielded no usable tokens
    #[error("Token file {path} contains no tokens")]
    Empty {
        /// Path that was read
        path: String,
    },
}
