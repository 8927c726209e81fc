//! Cross-visit channel history ("channel stacking").

use std::sync::Arc;

use tracing::warn;

use crate::config::ChannelStackConfig;
use crate::domain::ports::CookieStore;

/// Sentinel some legacy deployments stored for "no history".
const EMPTY_SENTINEL: &str = "none";

/// Bounded, ordered, persisted list of the channel prefixes a visitor most
/// recently arrived through.
///
/// Storage is a single cookie holding a comma-joined list, most-recent-first,
/// at most `depth` entries. A push equal to the current head is suppressed,
/// so the head never repeats, but older duplicates are allowed.
pub struct ChannelStackService<C: CookieStore> {
    cookies: Arc<C>,
}

impl<C: CookieStore> ChannelStackService<C> {
    pub fn new(cookies: Arc<C>) -> Self {
        Self { cookies }
    }

    /// Pushes `new_value` onto the visitor's channel stack (unless it is
    /// empty or duplicates the current head) and returns the resulting view:
    /// oldest first, joined by the configured delimiter.
    ///
    /// An empty `new_value` renders the existing history without writing.
    /// Absent or corrupt cookie data reads as empty history; store failures
    /// are logged and treated the same way.
    pub fn stacked_view(&self, config: &ChannelStackConfig, new_value: &str) -> String {
        // Apostrophes would corrupt the cookie-quoted value downstream.
        let candidate = new_value.replace('\'', "");

        let mut history = self.read_history(&config.cookie_name);

        if !candidate.is_empty() && history.first().map(String::as_str) != Some(candidate.as_str())
        {
            history.insert(0, candidate);
            history.truncate(config.depth);

            if let Err(e) = self.cookies.set(
                &config.cookie_name,
                &history.join(","),
                Some(config.expire_days),
            ) {
                warn!(cookie = %config.cookie_name, error = %e, "failed to persist channel stack");
            }
        }

        let delimiter = config.delimiter.to_string();
        history
            .iter()
            .rev()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(&delimiter)
    }

    fn read_history(&self, cookie_name: &str) -> Vec<String> {
        let raw = match self.cookies.get(cookie_name) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!(cookie = %cookie_name, error = %e, "failed to read channel stack");
                String::new()
            }
        };

        if raw.is_empty() || raw == EMPTY_SENTINEL {
            return Vec::new();
        }

        raw.split(',').map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UrsConfig;
    use crate::domain::ports::{CookieStore as _, MockCookieStore};
    use crate::infrastructure::MemoryCookieStore;

    fn stack_config() -> ChannelStackConfig {
        UrsConfig::default().channel_stack
    }

    fn service() -> ChannelStackService<MemoryCookieStore> {
        ChannelStackService::new(Arc::new(MemoryCookieStore::new()))
    }

    #[test]
    fn test_first_push_creates_history() {
        let config = stack_config();
        let service = service();

        assert_eq!(service.stacked_view(&config, "sem"), "sem");
    }

    #[test]
    fn test_consecutive_duplicate_is_suppressed() {
        let config = stack_config();
        let service = service();

        service.stacked_view(&config, "sem");
        assert_eq!(service.stacked_view(&config, "sem"), "sem");
    }

    #[test]
    fn test_non_consecutive_duplicate_is_kept() {
        let config = stack_config();
        let service = service();

        service.stacked_view(&config, "sem");
        service.stacked_view(&config, "email");
        assert_eq!(service.stacked_view(&config, "sem"), "sem>email>sem");
    }

    #[test]
    fn test_view_renders_oldest_first() {
        let config = stack_config();
        let service = service();

        service.stacked_view(&config, "a");
        service.stacked_view(&config, "b");
        assert_eq!(service.stacked_view(&config, "c"), "a>b>c");
    }

    #[test]
    fn test_depth_bound_drops_oldest() {
        let config = stack_config();
        let service = service();

        for value in ["a", "b", "c", "d", "e", "f"] {
            service.stacked_view(&config, value);
        }
        assert_eq!(service.stacked_view(&config, ""), "b>c>d>e>f");
    }

    #[test]
    fn test_empty_candidate_reads_without_writing() {
        let config = stack_config();
        let cookies = Arc::new(MemoryCookieStore::new());
        let service = ChannelStackService::new(cookies.clone());

        service.stacked_view(&config, "seo");
        assert_eq!(service.stacked_view(&config, ""), "seo");
        assert_eq!(
            cookies.get(&config.cookie_name).unwrap().as_deref(),
            Some("seo")
        );
    }

    #[test]
    fn test_empty_candidate_on_empty_history() {
        let config = stack_config();
        assert_eq!(service().stacked_view(&config, ""), "");
    }

    #[test]
    fn test_none_sentinel_reads_as_empty_history() {
        let config = stack_config();
        let cookies = Arc::new(MemoryCookieStore::new());
        cookies.set(&config.cookie_name, "none", None).unwrap();

        let service = ChannelStackService::new(cookies);
        assert_eq!(service.stacked_view(&config, "sem"), "sem");
    }

    #[test]
    fn test_apostrophes_are_stripped_from_candidate() {
        let config = stack_config();
        assert_eq!(service().stacked_view(&config, "o'brien"), "obrien");
    }

    #[test]
    fn test_store_read_failure_degrades_to_empty_history() {
        let config = stack_config();

        let mut cookies = MockCookieStore::new();
        cookies
            .expect_get()
            .returning(|_| Err(crate::UrsError::cookie("store offline")));
        cookies.expect_set().returning(|_, _, _| Ok(()));

        let service = ChannelStackService::new(Arc::new(cookies));
        assert_eq!(service.stacked_view(&config, "sem"), "sem");
    }

    #[test]
    fn test_store_write_failure_still_returns_view() {
        let config = stack_config();

        let mut cookies = MockCookieStore::new();
        cookies.expect_get().returning(|_| Ok(None));
        cookies
            .expect_set()
            .returning(|_, _, _| Err(crate::UrsError::cookie("store offline")));

        let service = ChannelStackService::new(Arc::new(cookies));
        assert_eq!(service.stacked_view(&config, "sem"), "sem");
    }
}
