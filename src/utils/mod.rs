//! Pure helper functions shared across the services.
//!
//! - [`query_string`] - named-parameter extraction from URL query strings

pub mod query_string;
