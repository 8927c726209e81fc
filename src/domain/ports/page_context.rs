//! Page context capability.

/// What the services need to know about the current page.
///
/// Stands in for the host's `document`/`window` globals: the last-known
/// referrer, the location query string, and whether the page currently has
/// input focus. All reads are infallible; a host with no answer returns the
/// empty case.
#[cfg_attr(test, mockall::automock)]
pub trait PageContext: Send + Sync {
    /// The document referrer, `None` when the visit had none.
    fn referrer(&self) -> Option<String>;

    /// The location query string without its leading `?`, empty when absent.
    fn location_search(&self) -> String;

    /// Whether the page currently has input focus.
    ///
    /// Checked per interaction event, never cached, so focus changes between
    /// events are observed.
    fn has_focus(&self) -> bool;
}
