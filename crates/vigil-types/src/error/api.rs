//! Remote API call errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the API client.
///
/// Transport failures, non-2xx statuses, and unparseable bodies are all
/// collapsed into the uniform [`ApiError::CallFailed`] after the underlying
/// cause has been logged. Callers classify failures from response bodies,
/// not from this error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
    /// The call did not produce a usable JSON response
    #[error("Failed API call to {url}")]
    CallFailed {
        /// Endpoint that was being called
        url: String,
    },

    /// The HTTP client itself could not be constructed
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild {
        /// Description of the builder failure
        message: String,
    },

    /// The proxy address could not be parsed
    #[error("Invalid proxy url: {message}")]
    InvalidProxy {
        /// Description of the parse failure
        message: String,
    },
}
