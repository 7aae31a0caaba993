//! Typed error definitions for Vigil.
//!
//! This module provides structured error types per domain. All errors are
//! designed to be:
//!
//! - **Serializable** for reporting via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod api;
mod token;

pub use api::ApiError;
pub use token::TokenError;
