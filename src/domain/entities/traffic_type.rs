//! Marketing channel tags.

use serde::{Serialize, Serializer};
use std::fmt;

/// The classified marketing source category.
///
/// Serializes (and `Display`s) as the wire tag used in analytics payloads,
/// e.g. `organic_search` or `direct-dnt`. [`TrafficType::Custom`] carries an
/// unrecognized tracking-code prefix promoted to a self-describing label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrafficType {
    /// No signal at all; empty tag.
    None,
    /// No campaign, no referrer - direct visit, do not track as a channel.
    DirectDnt,
    Display,
    Affiliate,
    Partner,
    /// Direct response (`dr`).
    DirectResponse,
    Email,
    Social,
    PaidSocial,
    PaidSearch,
    Internal,
    /// Campaign present but unrecognized; replaced by [`TrafficType::Custom`]
    /// once the prefix has been derived.
    Unknown,
    /// Internal referring domain - do not track as a channel.
    InternalDnt,
    OrganicSearch,
    GovernmentDomains,
    EducationDomains,
    ReferringDomains,
    /// Self-describing label taken from an unrecognized tracking-code prefix.
    Custom(String),
}

impl TrafficType {
    /// The wire tag for this channel.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::DirectDnt => "direct-dnt",
            Self::Display => "display",
            Self::Affiliate => "affiliate",
            Self::Partner => "partner",
            Self::DirectResponse => "dr",
            Self::Email => "email",
            Self::Social => "social",
            Self::PaidSocial => "paid_social",
            Self::PaidSearch => "paid_search",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
            Self::InternalDnt => "internal-dnt",
            Self::OrganicSearch => "organic_search",
            Self::GovernmentDomains => "government_domains",
            Self::EducationDomains => "education_domains",
            Self::ReferringDomains => "referring_domains",
            Self::Custom(label) => label,
        }
    }
}

impl fmt::Display for TrafficType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TrafficType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
