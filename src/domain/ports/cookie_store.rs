//! Cookie persistence capability.

use crate::error::UrsError;

/// Small-value persistence with the semantics of browser cookies.
///
/// Values are plain strings; expiry is day-granular. A `None` expiry means
/// session scope - the value lives until the host discards it.
///
/// Failures are host failures. Every service in this crate treats a failed
/// read as an absent cookie and logs failed writes at `warn`, so a broken
/// store degrades classification instead of blocking it.
#[cfg_attr(test, mockall::automock)]
pub trait CookieStore: Send + Sync {
    /// Reads a cookie, `None` when absent or expired.
    ///
    /// # Errors
    ///
    /// Returns [`UrsError::CookieStore`] when the host store is unavailable.
    fn get(&self, name: &str) -> Result<Option<String>, UrsError>;

    /// Writes a cookie, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`UrsError::CookieStore`] when the host store is unavailable.
    fn set(&self, name: &str, value: &str, expire_days: Option<i64>) -> Result<(), UrsError>;
}
