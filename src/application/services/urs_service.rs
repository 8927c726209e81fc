//! The traffic-source decision procedure ("URS").

use std::sync::Arc;

use tracing::debug;

use crate::config::UrsConfig;
use crate::domain::entities::{ParsedReferrer, TrafficType, UrsRecord};
use crate::domain::ports::{CookieStore, PageContext};
use crate::utils::query_string::extract_query_param;

use super::ChannelStackService;

/// Query keys consulted for an organic-search keyword.
const SEO_KEYWORD_KEYS: [&str; 4] = ["q", "query", "search", "text"];
/// Query keys consulted for a paid-search keyword.
const PPC_KEYWORD_KEYS: [&str; 3] = ["q", "query", "search"];

/// Classifies a visit into a marketing channel from its tracking code and
/// referrer, and maintains the visitor's channel stack as a side effect.
///
/// The decision procedure is a strict priority chain: campaign-code patterns
/// first (in registry order), then referrer-domain taxonomies. It is a total
/// function - every missing or malformed signal degrades to an empty field,
/// never an error.
pub struct UrsService<C: CookieStore, P: PageContext> {
    config: Arc<UrsConfig>,
    page: Arc<P>,
    stack: ChannelStackService<C>,
}

impl<C: CookieStore, P: PageContext> UrsService<C, P> {
    pub fn new(config: Arc<UrsConfig>, cookies: Arc<C>, page: Arc<P>) -> Self {
        Self {
            config,
            page,
            stack: ChannelStackService::new(cookies),
        }
    }

    /// Classifies one visit.
    ///
    /// `campaign` is the tracking code (see
    /// [`super::campaign_code_from_query`]); when `referrer` is absent or
    /// empty the document referrer from the page context is used instead.
    pub fn classify(&self, campaign: Option<&str>, referrer: Option<&str>) -> UrsRecord {
        let campaign = campaign.unwrap_or_default().to_string();
        let referrer = referrer
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .or_else(|| self.page.referrer().filter(|r| !r.is_empty()))
            .unwrap_or_default();

        let parsed = ParsedReferrer::parse(&referrer);
        let ref_domain = parsed.registrable_domain.clone();

        let mut traffic_type = TrafficType::None;
        let mut value = String::new();
        let mut seo_keyword = String::new();
        let mut ppc_keyword = String::new();
        // The legacy `eblast|` schema overrides the prefix delimiter for
        // this call only; threading it locally keeps the registry immutable
        // and prevents cross-call leakage.
        let mut prefix_delimiter = self.config.campaign_prefix_delimiter;

        if campaign.is_empty() && referrer.is_empty() && ref_domain.is_empty() {
            traffic_type = TrafficType::DirectDnt;
        } else if let Some(rule) = self
            .config
            .campaign_rules
            .iter()
            .find(|rule| rule.pattern.is_match(&campaign))
        {
            traffic_type = rule.traffic_type.clone();
            value = campaign.clone();

            match traffic_type {
                TrafficType::Email => {
                    if self.config.eblast_pattern.is_match(&campaign) {
                        prefix_delimiter = '|';
                    }
                }
                TrafficType::PaidSearch => {
                    if !referrer.is_empty() {
                        ppc_keyword = extract_query_param(&PPC_KEYWORD_KEYS, &referrer);
                    }
                    if ppc_keyword.is_empty() {
                        ppc_keyword =
                            format!("not provided|{}", fallback_label(&ref_domain, &traffic_type));
                    }
                }
                _ => {}
            }
        } else if !campaign.is_empty() {
            // Unexpected prefix; promoted to a self-describing label below.
            traffic_type = TrafficType::Unknown;
            value = campaign.clone();
        } else if !referrer.is_empty()
            && (contains(&self.config.internal_domains, &ref_domain)
                || contains(&self.config.internal_domains, &parsed.full_host))
        {
            // Internal navigation is not a marketing channel.
            traffic_type = TrafficType::InternalDnt;
        } else if (!referrer.is_empty() && contains(&self.config.social_networks, &ref_domain))
            || parsed.full_host == "plus.google.com"
        {
            // Checked before organic search because of plus.google.com.
            traffic_type = TrafficType::Social;
            value = format!("[soc]_{ref_domain}");
        } else if self.is_search_referrer(&referrer, &ref_domain) {
            traffic_type = TrafficType::OrganicSearch;
            value = format!("[seo]_{ref_domain}");

            seo_keyword = extract_query_param(&SEO_KEYWORD_KEYS, &referrer);
            if seo_keyword.is_empty() {
                seo_keyword =
                    format!("not provided|{}", fallback_label(&ref_domain, &traffic_type));
            }
        } else if !referrer.is_empty()
            && parsed.top_level_label == "gov"
            && !contains(&self.config.internal_domains, &ref_domain)
        {
            traffic_type = TrafficType::GovernmentDomains;
            value = format!("[gov]_{ref_domain}");
        } else if !referrer.is_empty() && parsed.top_level_label == "edu" {
            traffic_type = TrafficType::EducationDomains;
            value = format!("[edu]_{ref_domain}");
        } else if !referrer.is_empty() && !contains(&self.config.gov_domains, &ref_domain) {
            traffic_type = TrafficType::ReferringDomains;
            value = format!("[ref]_{ref_domain}");
        }

        let prefix = if value.is_empty() {
            String::new()
        } else {
            value
                .split(prefix_delimiter)
                .next()
                .unwrap_or_default()
                .to_string()
        };

        if traffic_type == TrafficType::Unknown {
            traffic_type = TrafficType::Custom(prefix.clone());
        }

        if !value.is_empty() && traffic_type != TrafficType::OrganicSearch {
            seo_keyword = "not organic search".to_string();
        }
        if !value.is_empty() && traffic_type != TrafficType::PaidSearch {
            ppc_keyword = "not paid search".to_string();
        }

        let stacked = self
            .stack
            .stacked_view(&self.config.channel_stack, &prefix);

        debug!(
            traffic_type = %traffic_type,
            value = %value,
            ref_domain = %ref_domain,
            "classified traffic source"
        );

        UrsRecord {
            campaign,
            referrer,
            ref_domain,
            value,
            prefix,
            stacked,
            traffic_type,
            seo_keyword,
            ppc_keyword,
        }
    }

    /// Whether the referrer indicates a known search engine.
    ///
    /// The big three are recognized by substring on the full referrer URL;
    /// everything else by exact membership of the registrable domain in the
    /// search-engine table.
    fn is_search_referrer(&self, referrer: &str, ref_domain: &str) -> bool {
        let is_google = referrer.contains(".google.");
        let is_yahoo = referrer.contains("search.yahoo.com");
        let is_yandex = referrer.contains(".yandex.");

        if is_google || is_yahoo || is_yandex {
            return true;
        }

        !referrer.is_empty() && contains(&self.config.search_engines, ref_domain)
    }
}

fn contains(table: &[String], domain: &str) -> bool {
    table.iter().any(|entry| entry == domain)
}

/// Keyword fallback label: the referring domain when known, else the tag.
fn fallback_label<'a>(ref_domain: &'a str, traffic_type: &'a TrafficType) -> &'a str {
    if ref_domain.is_empty() {
        traffic_type.as_str()
    } else {
        ref_domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockCookieStore, MockPageContext};

    fn service(page: MockPageContext) -> UrsService<MockCookieStore, MockPageContext> {
        let mut cookies = MockCookieStore::new();
        cookies.expect_get().returning(|_| Ok(None));
        cookies.expect_set().returning(|_, _, _| Ok(()));

        UrsService::new(
            Arc::new(UrsConfig::default()),
            Arc::new(cookies),
            Arc::new(page),
        )
    }

    #[test]
    fn test_falls_back_to_document_referrer() {
        let mut page = MockPageContext::new();
        page.expect_referrer()
            .returning(|| Some("https://www.twitter.com/nci".to_string()));

        let record = service(page).classify(None, None);
        assert_eq!(record.traffic_type, TrafficType::Social);
        assert_eq!(record.referrer, "https://www.twitter.com/nci");
    }

    #[test]
    fn test_empty_document_referrer_is_a_direct_visit() {
        let mut page = MockPageContext::new();
        page.expect_referrer().returning(|| Some(String::new()));

        let record = service(page).classify(None, None);
        assert_eq!(record.traffic_type, TrafficType::DirectDnt);
    }

    #[test]
    fn test_empty_explicit_referrer_falls_through_to_document() {
        let mut page = MockPageContext::new();
        page.expect_referrer()
            .returning(|| Some("https://www.linkedin.com/feed".to_string()));

        let record = service(page).classify(None, Some(""));
        assert_eq!(record.traffic_type, TrafficType::Social);
    }

    #[test]
    fn test_cookie_failures_never_block_classification() {
        let mut cookies = MockCookieStore::new();
        cookies
            .expect_get()
            .returning(|_| Err(crate::UrsError::cookie("store offline")));
        cookies
            .expect_set()
            .returning(|_, _, _| Err(crate::UrsError::cookie("store offline")));

        let mut page = MockPageContext::new();
        page.expect_referrer().returning(|| None);

        let service = UrsService::new(
            Arc::new(UrsConfig::default()),
            Arc::new(cookies),
            Arc::new(page),
        );

        let record = service.classify(Some("sem_brand"), None);
        assert_eq!(record.traffic_type, TrafficType::PaidSearch);
        assert_eq!(record.stacked, "sem");
    }
}
