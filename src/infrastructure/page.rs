//! Fixed-value page context.

use crate::domain::ports::PageContext;

/// [`PageContext`] with fixed values.
///
/// Used when the embedder resolves the page environment once up front, and
/// throughout the test suite. Defaults to no referrer, an empty query
/// string, and a focused page.
#[derive(Debug, Clone)]
pub struct StaticPage {
    referrer: Option<String>,
    location_search: String,
    focused: bool,
}

impl StaticPage {
    pub fn new() -> Self {
        Self {
            referrer: None,
            location_search: String::new(),
            focused: true,
        }
    }

    /// Sets the document referrer.
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// Sets the location query string (no leading `?`).
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.location_search = query.into();
        self
    }

    /// Sets the focus state.
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Default for StaticPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageContext for StaticPage {
    fn referrer(&self) -> Option<String> {
        self.referrer.clone()
    }

    fn location_search(&self) -> String {
        self.location_search.clone()
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}
