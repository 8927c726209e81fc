//! Tracking-code extraction from the page URL.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::PageContext;
use crate::utils::query_string::extract_from_query;

/// The five standard UTM parameters, in synthesis order.
const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

/// Placeholder substituted for a missing UTM parameter.
const UTM_PLACEHOLDER: &str = "_";

/// Extracts a campaign tracking code from a bare query string (no leading
/// `?`), `None` when the query carries no campaign signal.
///
/// Priority order:
///
/// 1. Adobe-style tracking code (`cid`)
/// 2. Google click identifier (`gclid`)
/// 3. Synthesized from the five UTM parameters, joined with `|`, missing
///    ones replaced by `_`; all five missing means no code at all
pub fn campaign_code_from_query(query: &str) -> Option<String> {
    let cid = extract_from_query(&["cid"], query);
    if !cid.is_empty() {
        return Some(cid);
    }

    let gclid = extract_from_query(&["gclid"], query);
    if !gclid.is_empty() {
        return Some(gclid);
    }

    let synthesized = UTM_KEYS
        .iter()
        .map(|key| {
            let value = extract_from_query(&[key], query);
            if value.is_empty() {
                UTM_PLACEHOLDER.to_string()
            } else {
                value
            }
        })
        .collect::<Vec<_>>()
        .join("|");

    // All five missing is no signal, not a literal code.
    (synthesized != "_|_|_|_|_").then_some(synthesized)
}

/// Derives the campaign tracking code for the current page.
///
/// Thin wrapper binding [`campaign_code_from_query`] to the injected page
/// context; the extraction itself is pure.
pub struct CampaignCodeService<P: PageContext> {
    page: Arc<P>,
}

impl<P: PageContext> CampaignCodeService<P> {
    pub fn new(page: Arc<P>) -> Self {
        Self { page }
    }

    /// Extracts the campaign code from the current page URL, `None` when the
    /// visit carries no campaign signal.
    pub fn campaign_code(&self) -> Option<String> {
        let code = campaign_code_from_query(&self.page.location_search());
        debug!(campaign = code.as_deref().unwrap_or(""), "extracted campaign code");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cid_takes_priority() {
        let query = "cid=bn_home&gclid=abc&utm_source=google";
        assert_eq!(campaign_code_from_query(query), Some("bn_home".to_string()));
    }

    #[test]
    fn test_gclid_beats_utm() {
        let query = "gclid=Cj0KCQiA&utm_source=google";
        assert_eq!(campaign_code_from_query(query), Some("Cj0KCQiA".to_string()));
    }

    #[test]
    fn test_partial_utm_synthesis() {
        let query = "utm_source=google&utm_medium=cpc";
        assert_eq!(
            campaign_code_from_query(query),
            Some("google|cpc|_|_|_".to_string())
        );
    }

    #[test]
    fn test_full_utm_synthesis_preserves_order() {
        let query =
            "utm_content=ad1&utm_term=cancer&utm_campaign=spring&utm_medium=cpc&utm_source=google";
        assert_eq!(
            campaign_code_from_query(query),
            Some("google|cpc|spring|cancer|ad1".to_string())
        );
    }

    #[test]
    fn test_all_utm_missing_is_absent() {
        assert_eq!(campaign_code_from_query("page=1"), None);
        assert_eq!(campaign_code_from_query(""), None);
    }

    #[test]
    fn test_reads_page_query_string() {
        use crate::infrastructure::StaticPage;

        let page = Arc::new(StaticPage::new().with_search("cid=em_news"));
        let service = CampaignCodeService::new(page);
        assert_eq!(service.campaign_code(), Some("em_news".to_string()));
    }
}
