//! Cookie persistence implementations.

mod memory_cookie_store;

pub use memory_cookie_store::MemoryCookieStore;
