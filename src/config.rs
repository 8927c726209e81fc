//! Classification rules and operational settings.
//!
//! [`UrsConfig::default`] carries the production rule set: the ordered
//! campaign-code patterns, the referrer-domain taxonomies, and the
//! channel-stack and engagement settings. The registry is immutable during
//! classification — the one legacy delimiter quirk (`eblast|` tracking codes)
//! is handled as per-call state inside the classifier, never as a mutation
//! of this configuration.
//!
//! ## Environment Overrides
//!
//! The operational knobs (not the rules) can be overridden via
//! [`UrsConfig::from_env`]:
//!
//! - `URS_STACK_COOKIE` - Channel-stack cookie name (default: `nci_urs_stack`)
//! - `URS_STACK_DEPTH` - Channels retained per visitor (default: 5)
//! - `URS_STACK_EXPIRE_DAYS` - Stack cookie lifetime (default: 180)
//! - `URS_ENGAGEMENT_COOKIE` - Engagement cookie name (default: `engagementTracking`)
//! - `URS_POLL_INTERVAL_MS` - Engagement polling interval (default: 10000)

use anyhow::{Context, Result};
use regex::Regex;
use std::env;
use std::time::Duration;

use crate::domain::entities::TrafficType;

/// A single campaign-code detection rule.
///
/// Rules are evaluated against the raw tracking code in registry order,
/// first match wins.
#[derive(Debug, Clone)]
pub struct CampaignRule {
    pub traffic_type: TrafficType,
    pub pattern: Regex,
}

/// Channel-stack ("cross-visit participation") settings.
#[derive(Debug, Clone)]
pub struct ChannelStackConfig {
    /// Cookie holding the stacked channel prefixes.
    pub cookie_name: String,
    /// Maximum number of channel prefixes retained.
    pub depth: usize,
    /// Delimiter used when rendering the stack as a single string.
    pub delimiter: char,
    /// Cookie lifetime in days.
    pub expire_days: i64,
}

/// Passive engagement scoring settings.
#[derive(Debug, Clone)]
pub struct EngagementConfig {
    /// Cookie holding the accumulated engagement score.
    pub cookie_name: String,
    /// Milliseconds between engagement polls.
    pub polling_interval_ms: u64,
    /// Score contributed by each observed interaction kind per interval.
    pub per_action_score: u32,
    /// Reward added to the persisted score for an engaged interval.
    pub score_per_interval: u32,
    /// Interval score at or above which the visitor counts as engaged.
    pub minimum_engagement_score: u32,
}

impl EngagementConfig {
    pub fn polling_interval(&self) -> Duration {
        Duration::from_millis(self.polling_interval_ms)
    }
}

/// Immutable URS configuration: pattern registry plus operational settings.
#[derive(Debug, Clone)]
pub struct UrsConfig {
    /// Separates the channel prefix from the rest of a tracking code.
    pub campaign_prefix_delimiter: char,

    /// Referring domains never attributed as an external channel.
    pub internal_domains: Vec<String>,
    /// Known search-engine domains (exact registrable-domain match).
    pub search_engines: Vec<String>,
    /// Known social-network domains (exact registrable-domain match).
    pub social_networks: Vec<String>,
    /// Government domains excluded from the referring-domains bucket.
    pub gov_domains: Vec<String>,
    /// Education domains; kept for registry completeness, the `.edu`
    /// branch matches on top-level label alone.
    pub edu_domains: Vec<String>,

    /// Ordered campaign-code rules, first match wins.
    pub campaign_rules: Vec<CampaignRule>,
    /// Non-compliant email tracking codes that use `|` as their prefix
    /// delimiter instead of the configured one.
    pub eblast_pattern: Regex,

    pub channel_stack: ChannelStackConfig,
    pub engagement: EngagementConfig,

    /// Debug cookie; the value `true` enables verbose engagement logging.
    pub verbose_cookie: String,
}

fn rule(traffic_type: TrafficType, pattern: &str) -> CampaignRule {
    CampaignRule {
        traffic_type,
        pattern: Regex::new(pattern).expect("static campaign pattern"),
    }
}

impl Default for UrsConfig {
    fn default() -> Self {
        Self {
            campaign_prefix_delimiter: '_',

            internal_domains: vec![
                "cancer.gov".into(),
                "nci.nih.gov".into(),
                "smokefree.gov".into(),
            ],
            search_engines: vec![
                "alibaba.com".into(),
                "aol.".into(),
                "ask.com".into(),
                "baidu.com".into(),
                "bing.com".into(),
                "duckduckgo.com".into(),
                "google.".into(),
                "msn.com".into(),
                "search.yahoo.".into(),
                "yandex.".into(),
            ],
            social_networks: vec![
                "facebook.com".into(),
                "flickr.com".into(),
                "instagram.com".into(),
                "linkedin.com".into(),
                "pinterest.com".into(),
                "plus.google.com".into(),
                "reddit.com".into(),
                "t.co".into(),
                "tumblr.com".into(),
                "twitter.com".into(),
                "yelp.com".into(),
                "youtube.com".into(),
            ],
            gov_domains: vec![".gov".into()],
            edu_domains: vec![".edu".into()],

            // Priority order of the decision procedure; the email rule's
            // second alternative is deliberately unanchored.
            campaign_rules: vec![
                rule(TrafficType::Display, r"(?i)^bn_"),
                rule(TrafficType::Affiliate, r"(?i)^aff_"),
                rule(TrafficType::Partner, r"(?i)^ptnr_"),
                rule(TrafficType::DirectResponse, r"(?i)^dr_"),
                rule(TrafficType::Email, r"(?i)^(e(b|m)_)|((eblast|email)\|)"),
                rule(
                    TrafficType::Social,
                    r"(?i)^((soc|tw|fb)_|(twitter|facebook)\||sf\d{8}$)",
                ),
                rule(TrafficType::PaidSocial, r"(?i)^psoc_"),
                rule(TrafficType::PaidSearch, r"(?i)^(sem|ppc)_"),
                rule(TrafficType::Internal, r"(?i)^int_"),
            ],
            eblast_pattern: Regex::new(r"(?i)^eblast\|").expect("static campaign pattern"),

            channel_stack: ChannelStackConfig {
                cookie_name: "nci_urs_stack".into(),
                depth: 5,
                delimiter: '>',
                expire_days: 180,
            },
            engagement: EngagementConfig {
                cookie_name: "engagementTracking".into(),
                polling_interval_ms: 10_000,
                per_action_score: 10,
                score_per_interval: 10,
                minimum_engagement_score: 1,
            },

            verbose_cookie: "nci_evo_verbose".into(),
        }
    }
}

impl UrsConfig {
    /// Loads the default configuration with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is present but unparseable, or if the
    /// resulting configuration fails [`Self::validate`].
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("URS_STACK_COOKIE") {
            config.channel_stack.cookie_name = name;
        }
        if let Ok(depth) = env::var("URS_STACK_DEPTH") {
            config.channel_stack.depth = depth
                .parse()
                .context("URS_STACK_DEPTH must be a positive integer")?;
        }
        if let Ok(days) = env::var("URS_STACK_EXPIRE_DAYS") {
            config.channel_stack.expire_days = days
                .parse()
                .context("URS_STACK_EXPIRE_DAYS must be a positive integer")?;
        }
        if let Ok(name) = env::var("URS_ENGAGEMENT_COOKIE") {
            config.engagement.cookie_name = name;
        }
        if let Ok(interval) = env::var("URS_POLL_INTERVAL_MS") {
            config.engagement.polling_interval_ms = interval
                .parse()
                .context("URS_POLL_INTERVAL_MS must be a positive integer")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the stack depth is zero
    /// - a cookie name is empty
    /// - the stack expiry is not positive
    /// - the polling interval is shorter than one second
    pub fn validate(&self) -> Result<()> {
        if self.channel_stack.depth == 0 {
            anyhow::bail!("URS_STACK_DEPTH must be at least 1");
        }

        if self.channel_stack.cookie_name.is_empty() {
            anyhow::bail!("channel stack cookie name must not be empty");
        }

        if self.channel_stack.expire_days < 1 {
            anyhow::bail!(
                "URS_STACK_EXPIRE_DAYS must be at least 1, got {}",
                self.channel_stack.expire_days
            );
        }

        if self.engagement.cookie_name.is_empty() {
            anyhow::bail!("engagement cookie name must not be empty");
        }

        if self.engagement.polling_interval_ms < 1_000 {
            anyhow::bail!(
                "URS_POLL_INTERVAL_MS must be at least 1000, got {}",
                self.engagement.polling_interval_ms
            );
        }

        Ok(())
    }
}
