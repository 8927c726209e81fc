//! The classifier's output record.

use serde::Serialize;

use super::TrafficType;

/// A single traffic-source classification, ready for an analytics payload.
///
/// Not persisted; the channel stack is the only cross-visit state, and its
/// rendered view appears here as [`UrsRecord::stacked`].
#[derive(Debug, Clone, Serialize)]
pub struct UrsRecord {
    /// The tracking code the classifier was given, echoed verbatim.
    pub campaign: String,
    /// The resolved referrer (explicit argument or document referrer).
    pub referrer: String,
    /// Registrable referring domain, subdomain/cname stripped.
    pub ref_domain: String,
    /// Final attribution value: the raw campaign code, a synthesized
    /// `[tag]_domain` string, or empty.
    pub value: String,
    /// Portion of `value` before the first prefix delimiter.
    pub prefix: String,
    /// Channel-stack view after this call's update, oldest first.
    pub stacked: String,
    pub traffic_type: TrafficType,
    /// Organic search keyword, or a `not provided|...` / `not organic search`
    /// marker.
    pub seo_keyword: String,
    /// Paid search keyword, or a `not provided|...` / `not paid search`
    /// marker.
    pub ppc_keyword: String,
}
