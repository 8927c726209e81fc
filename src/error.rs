//! Crate error type.
//!
//! The classifier itself is a total function and never fails; only the host
//! boundary (cookie persistence) can. Services log these errors at `warn`
//! and degrade to empty data rather than propagating them into analytics.

use thiserror::Error;

/// Errors surfaced by host-boundary capabilities.
#[derive(Debug, Error)]
pub enum UrsError {
    /// The injected cookie store failed to read or write a cookie.
    #[error("cookie store error: {0}")]
    CookieStore(String),
}

impl UrsError {
    pub fn cookie(message: impl Into<String>) -> Self {
        Self::CookieStore(message.into())
    }
}
