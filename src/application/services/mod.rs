//! Services orchestrating the domain over the host capability ports.
//!
//! - [`UrsService`] - the traffic-source decision procedure
//! - [`ChannelStackService`] - bounded cross-visit channel history
//! - [`CampaignCodeService`] - tracking-code extraction from the page URL
//! - [`EngagementService`] - passive engagement scoring

mod campaign_code_service;
mod channel_stack_service;
mod engagement_service;
mod urs_service;

pub use campaign_code_service::{campaign_code_from_query, CampaignCodeService};
pub use channel_stack_service::ChannelStackService;
pub use engagement_service::{run_engagement_loop, EngagementCookie, EngagementService};
pub use urs_service::UrsService;
