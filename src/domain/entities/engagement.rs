//! Engagement scoring snapshot.

use serde::Serialize;

/// Read-only snapshot of the engagement accumulator.
///
/// Flags report interactions observed since they were last consumed by a
/// polling tick; `interval_score` is the score those consumptions have
/// produced so far in the current interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngagementStatus {
    pub has_scrolled: bool,
    pub has_moused: bool,
    pub has_clicked: bool,
    pub interval_score: u32,
}
