//! Core domain types and host capability traits.
//!
//! This layer has no dependencies on any concrete host: entities are plain
//! data, and the [`ports`] traits describe the capabilities a host must
//! provide (cookie persistence, page context).

pub mod entities;
pub mod ports;
