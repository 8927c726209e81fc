//! Host capability traits.
//!
//! The original runtime reached for its host's cookie primitives, document
//! referrer, location query string, and window focus state directly. Here
//! each of those is an injected capability so the services stay testable
//! without a browser-like host:
//!
//! - [`CookieStore`] - small-value persistence with day-granularity expiry
//! - [`PageContext`] - referrer, query string, and focus state of the page
//!
//! # Implementations
//!
//! - [`crate::infrastructure::MemoryCookieStore`] - in-memory store
//! - [`crate::infrastructure::StaticPage`] - fixed-value page context
//! - Test mocks available with `cfg(test)`

mod cookie_store;
mod page_context;

pub use cookie_store::CookieStore;
pub use page_context::PageContext;

#[cfg(test)]
pub use cookie_store::MockCookieStore;
#[cfg(test)]
pub use page_context::MockPageContext;
