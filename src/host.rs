//! Analytics-tracker augmentation.
//!
//! The host tag-management runtime owns an analytics tracker object; this
//! crate only attaches capabilities to it. When no tracker is present the
//! attachment is skipped with a warning - never an error, since a missing
//! tracker must not break the page.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::services::{CampaignCodeService, EngagementService, UrsService};
use crate::domain::entities::UrsRecord;
use crate::domain::ports::{CookieStore, PageContext};

/// The three capabilities attached to the host tracker.
///
/// Boxed closures rather than service references, so the tracker side needs
/// no knowledge of this crate's generics.
pub struct TrackerPlugins {
    /// Campaign tracking code for the current page, if any.
    pub get_campaign_code: Box<dyn FnMut() -> Option<String> + Send>,
    /// Traffic-source classification of `(campaign, referrer)`.
    pub get_urs: Box<dyn FnMut(Option<&str>, Option<&str>) -> UrsRecord + Send>,
    /// Accumulated engagement score, read-and-reset.
    pub get_engagement: Box<dyn FnMut() -> String + Send>,
}

impl TrackerPlugins {
    /// Builds the plugin set over the three services.
    ///
    /// The engagement service stays with its polling loop; only its cookie
    /// handle is captured here.
    pub fn new<C, P>(
        campaign: Arc<CampaignCodeService<P>>,
        urs: Arc<UrsService<C, P>>,
        engagement: &EngagementService<C, P>,
    ) -> Self
    where
        C: CookieStore + 'static,
        P: PageContext + 'static,
    {
        let cookie = engagement.cookie_handle();

        Self {
            get_campaign_code: Box::new(move || campaign.campaign_code()),
            get_urs: Box::new(move |campaign, referrer| urs.classify(campaign, referrer)),
            get_engagement: Box::new(move || cookie.get_and_reset()),
        }
    }
}

/// A host analytics tracker willing to accept the plugins.
pub trait Tracker {
    fn install(&mut self, plugins: TrackerPlugins);
}

/// Attaches the plugins to the tracker when one is present.
pub fn augment_tracker<T: Tracker>(tracker: Option<&mut T>, plugins: TrackerPlugins) {
    match tracker {
        Some(tracker) => {
            info!("augmenting analytics tracker");
            tracker.install(plugins);
        }
        None => warn!("no analytics tracker found"),
    }
}
