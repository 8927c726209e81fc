//! # NCI URS
//!
//! Traffic-source classification ("URS") for web analytics: turns two weak
//! signals — a campaign tracking code and an HTTP referrer — into a structured
//! marketing-attribution record, and maintains a rolling per-visitor history
//! of recent channels ("channel stacking"). A passive engagement scorer
//! accumulates a visit-level engagement metric from DOM interaction events.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and host capability traits
//! - **Application Layer** ([`application`]) - Classification and scoring services
//! - **Infrastructure Layer** ([`infrastructure`]) - Cookie store and page-context
//!   implementations
//! - **Host Layer** ([`host`]) - Analytics-tracker augmentation hook
//!
//! The core services never touch a browser directly. Everything host-specific
//! (cookies, the document referrer, the location query string, window focus)
//! is injected through the [`domain::ports`] traits, so the classifier is a
//! total, synchronous function that can be tested without a browser-like host.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use nci_urs::config::UrsConfig;
//! use nci_urs::infrastructure::{MemoryCookieStore, StaticPage};
//! use nci_urs::prelude::*;
//!
//! let config = Arc::new(UrsConfig::default());
//! let cookies = Arc::new(MemoryCookieStore::new());
//! let page = Arc::new(StaticPage::new().with_referrer("https://www.google.com/search?q=cancer"));
//!
//! let urs = UrsService::new(config, cookies, page);
//! let record = urs.classify(None, None);
//!
//! assert_eq!(record.traffic_type.as_str(), "organic_search");
//! assert_eq!(record.value, "[seo]_google.com");
//! ```
//!
//! ## Failure Semantics
//!
//! Classification must never block page analytics: every missing or malformed
//! signal degrades to an empty field rather than an error. Only the host
//! boundary (the cookie store) can fail, and those failures are logged and
//! treated as absent data.

pub mod application;
pub mod domain;
pub mod error;
pub mod host;
pub mod infrastructure;
pub mod utils;

pub mod config;

pub use error::UrsError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CampaignCodeService, ChannelStackService, EngagementService, UrsService,
    };
    pub use crate::config::UrsConfig;
    pub use crate::domain::entities::{ParsedReferrer, TrafficType, UrsRecord};
    pub use crate::domain::ports::{CookieStore, PageContext};
    pub use crate::error::UrsError;
}
