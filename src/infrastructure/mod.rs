//! Concrete implementations of the host capability ports.
//!
//! Real deployments back these with their host runtime; the implementations
//! here cover embedding, development, and tests:
//!
//! - [`MemoryCookieStore`] - in-memory [`CookieStore`] with real expiry
//! - [`StaticPage`] - fixed-value [`PageContext`]
//!
//! [`CookieStore`]: crate::domain::ports::CookieStore
//! [`PageContext`]: crate::domain::ports::PageContext

pub mod page;
pub mod persistence;

pub use page::StaticPage;
pub use persistence::MemoryCookieStore;
