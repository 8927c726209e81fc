//! Application layer: classification and scoring services.

pub mod services;
