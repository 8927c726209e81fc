//! Passive engagement scoring.
//!
//! Infers visitor engagement from three interaction kinds (scroll, mouse,
//! click) observed while the page has focus, and periodically folds them
//! into an accumulated score persisted in a cookie.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::config::EngagementConfig;
use crate::domain::entities::EngagementStatus;
use crate::domain::ports::{CookieStore, PageContext};

/// Accumulates passive engagement for one page load.
///
/// The three interaction flags are plain mutable state under single-owner
/// discipline: the event recorders and the polling tick are expected to run
/// on one event queue. Callers driving them from parallel threads must wrap
/// the service in a mutex, which is exactly what [`run`] does.
pub struct EngagementService<C: CookieStore, P: PageContext> {
    cookies: Arc<C>,
    page: Arc<P>,
    config: EngagementConfig,
    verbose: bool,
    has_scrolled: bool,
    has_moused: bool,
    has_clicked: bool,
    interval_score: u32,
}

impl<C: CookieStore, P: PageContext> EngagementService<C, P> {
    /// Creates the accumulator and reads the verbose-logging debug cookie.
    pub fn new(
        config: EngagementConfig,
        verbose_cookie: &str,
        cookies: Arc<C>,
        page: Arc<P>,
    ) -> Self {
        let verbose = cookies
            .get(verbose_cookie)
            .ok()
            .flatten()
            .is_some_and(|v| v == "true");
        info!("engagement tracking initialized");

        Self {
            cookies,
            page,
            config,
            verbose,
            has_scrolled: false,
            has_moused: false,
            has_clicked: false,
            interval_score: 0,
        }
    }

    /// Records a scroll event. Ignored when the page lacks focus.
    pub fn record_scroll(&mut self) {
        if self.page.has_focus() {
            self.log_verbose("scroll");
            self.has_scrolled = true;
        }
    }

    /// Records a mouse-movement event. Ignored when the page lacks focus.
    pub fn record_mouse(&mut self) {
        if self.page.has_focus() {
            self.log_verbose("mouse");
            self.has_moused = true;
        }
    }

    /// Records a click event. Ignored when the page lacks focus.
    pub fn record_click(&mut self) {
        if self.page.has_focus() {
            self.log_verbose("click");
            self.has_clicked = true;
        }
    }

    /// Snapshot of the flags and the running interval score.
    pub fn status(&self) -> EngagementStatus {
        EngagementStatus {
            has_scrolled: self.has_scrolled,
            has_moused: self.has_moused,
            has_clicked: self.has_clicked,
            interval_score: self.interval_score,
        }
    }

    /// One polling tick.
    ///
    /// Consumes the flags in scroll, mouse, click order, each contributing
    /// the per-action score, then - if the interval score reaches the
    /// engagement threshold - adds the fixed per-interval reward to the
    /// persisted score and resets the interval score. A single tick grants
    /// at most one reward regardless of how far above the threshold the
    /// interval score lands.
    pub fn poll_tick(&mut self) {
        self.consume_flags();

        let accumulated = self.read_accumulated();

        if self.interval_score >= self.config.minimum_engagement_score {
            let new_score = accumulated + u64::from(self.config.score_per_interval);
            self.write_accumulated(new_score);
            self.log_verbose(&format!(
                "accumulated score: {accumulated} -> {new_score}"
            ));
            self.interval_score = 0;
        } else {
            self.log_verbose(&format!("accumulated score: {accumulated} (no change)"));
        }
    }

    /// Returns the persisted accumulated score and resets the cookie to `0`.
    ///
    /// This is the value handed to the host tracker when it reads the
    /// engagement plugin; see [`EngagementCookie`].
    pub fn get_and_reset_cookie(&self) -> String {
        self.cookie_handle().get_and_reset()
    }

    /// A lightweight handle for reading and resetting the engagement cookie
    /// without holding the accumulator itself.
    pub fn cookie_handle(&self) -> EngagementCookie<C> {
        EngagementCookie {
            cookies: Arc::clone(&self.cookies),
            cookie_name: self.config.cookie_name.clone(),
        }
    }

    fn consume_flags(&mut self) {
        // Score computed, then flag cleared; order matters.
        for flag in [
            &mut self.has_scrolled,
            &mut self.has_moused,
            &mut self.has_clicked,
        ] {
            if *flag {
                self.interval_score += self.config.per_action_score;
            }
            *flag = false;
        }
    }

    fn read_accumulated(&self) -> u64 {
        match self.cookies.get(&self.config.cookie_name) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                warn!(error = %e, "failed to read engagement cookie");
                0
            }
        }
    }

    fn write_accumulated(&self, score: u64) {
        // Session-scoped: the engagement cookie carries no explicit expiry.
        if let Err(e) = self
            .cookies
            .set(&self.config.cookie_name, &score.to_string(), None)
        {
            warn!(error = %e, "failed to persist engagement score");
        }
    }

    fn log_verbose(&self, message: &str) {
        if self.verbose {
            info!(target: "nci_urs::engagement", "{message}");
        }
    }
}

/// Reads and resets the persisted engagement score.
pub struct EngagementCookie<C: CookieStore> {
    cookies: Arc<C>,
    cookie_name: String,
}

impl<C: CookieStore> EngagementCookie<C> {
    /// Returns the current accumulated score (empty string when the cookie
    /// is absent) and rewrites the cookie to `0`.
    pub fn get_and_reset(&self) -> String {
        let value = match self.cookies.get(&self.cookie_name) {
            Ok(current) => current.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "failed to read engagement cookie");
                String::new()
            }
        };

        if let Err(e) = self.cookies.set(&self.cookie_name, "0", None) {
            warn!(error = %e, "failed to reset engagement cookie");
        }

        value
    }
}

/// Drives the polling loop for the lifetime of the page.
///
/// Ticks every [`EngagementConfig::polling_interval`]; callers spawn this on
/// their event loop and keep the same `Arc` for the event recorders. There
/// is no teardown - the loop runs until the process ends, matching the
/// lifetime of the page it scores.
pub async fn run_engagement_loop<C: CookieStore, P: PageContext>(
    service: Arc<Mutex<EngagementService<C, P>>>,
) {
    let period = service.lock().await.config.polling_interval();

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; polling starts one period in.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        service.lock().await.poll_tick();
    }
}
