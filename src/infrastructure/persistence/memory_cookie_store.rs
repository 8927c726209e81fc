//! In-memory cookie store.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::domain::ports::CookieStore;
use crate::error::UrsError;

struct StoredCookie {
    value: String,
    /// `None` means session scope: lives until the store is dropped.
    expires_at: Option<DateTime<Utc>>,
}

/// [`CookieStore`] backed by a process-local map.
///
/// Honors day-granular expiry the way a browser jar would: an expired
/// cookie reads as absent. Suitable for embedding outside a browser host
/// and for tests; nothing survives the process.
#[derive(Default)]
pub struct MemoryCookieStore {
    cookies: Mutex<HashMap<String, StoredCookie>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, UrsError> {
        let cookies = self
            .cookies
            .lock()
            .map_err(|_| UrsError::cookie("cookie store poisoned"))?;

        Ok(cookies.get(name).and_then(|cookie| {
            match cookie.expires_at {
                Some(expires_at) if expires_at <= Utc::now() => None,
                _ => Some(cookie.value.clone()),
            }
        }))
    }

    fn set(&self, name: &str, value: &str, expire_days: Option<i64>) -> Result<(), UrsError> {
        let mut cookies = self
            .cookies
            .lock()
            .map_err(|_| UrsError::cookie("cookie store poisoned"))?;

        cookies.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                expires_at: expire_days.map(|days| Utc::now() + Duration::days(days)),
            },
        );

        Ok(())
    }
}
