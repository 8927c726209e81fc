//! Referrer URL decomposition.

use serde::Serialize;

/// Host information derived from a referrer URL.
///
/// The registrable domain is computed by stripping the leading
/// subdomain/cname label when the host has more than two labels; exactly one
/// label is ever stripped, so `a.b.c.example.com` yields `b.c.example.com`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedReferrer {
    /// Host including all subdomains; empty when there is no referrer.
    pub full_host: String,
    /// Host with the leading subdomain/cname label stripped (see above).
    pub registrable_domain: String,
    /// Last dot-delimited label of the registrable domain (`gov`, `edu`, ...).
    pub top_level_label: String,
}

impl ParsedReferrer {
    /// Parses a referrer URL into its host parts.
    ///
    /// Never fails: an empty referrer, or one without a `//`-delimited host
    /// section (no scheme), yields all-empty fields. Classification treats
    /// those identically to a missing referrer domain.
    pub fn parse(referrer: &str) -> Self {
        if referrer.is_empty() {
            return Self::default();
        }

        // Host is the third `/`-delimited segment of `scheme://host/...`.
        let Some(host) = referrer.split('/').nth(2) else {
            return Self::default();
        };

        let labels: Vec<&str> = host.split('.').collect();
        let registrable_domain = if labels.len() > 2 {
            labels[1..].join(".")
        } else {
            host.to_string()
        };
        let top_level_label = registrable_domain
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            full_host: host.to_string(),
            registrable_domain,
            top_level_label,
        }
    }
}
