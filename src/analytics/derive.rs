//! Summary-statistic derivation over a grouped calendar.
//!
//! Every statistic is a pure read projection over the filed events; none
//! depends on another or on event order, and nothing here mutates the
//! calendar.

use crate::model::StatusClass;

use super::bucketing::iso_week;
use super::types::{AnalyticsError, AnalyticsResult, LogCalendar, ResourceRank, SummaryStats};

/// Compute all summary statistics from a grouped calendar: the status-class
/// tally, per-resource access counts, and the per-ISO-week event counts.
pub fn summarize(calendar: &LogCalendar) -> SummaryStats {
    let mut stats = SummaryStats::default();
    for event in calendar.events() {
        match event.status_class() {
            StatusClass::Success => stats.status.success += 1,
            StatusClass::Redirect => stats.status.redirect += 1,
            StatusClass::Error => stats.status.error += 1,
        }
        *stats.resources.entry(event.resource.clone()).or_default() += 1;
        *stats.weekly.entry(iso_week(event.date)).or_default() += 1;
    }
    stats
}

impl SummaryStats {
    /// Percentage of error-class (≥400) responses over all classified events.
    pub fn error_pct(&self) -> AnalyticsResult<f64> {
        pct(self.status.error, self.status.total())
    }

    /// Percentage of redirect-class (3xx) responses over all classified
    /// events.
    pub fn redirect_pct(&self) -> AnalyticsResult<f64> {
        pct(self.status.redirect, self.status.total())
    }

    /// Highest-count resource, or `None` when no events parsed.
    ///
    /// Ties at the maximum are broken by the lexicographically smallest
    /// resource name, so repeated runs report the same winner. Any tied
    /// member would be a correct answer; the tie-break only pins the choice.
    pub fn most_requested(&self) -> Option<ResourceRank> {
        self.resources
            .iter()
            .max_by(|(a_name, a_count), (b_name, b_count)| {
                a_count.cmp(b_count).then_with(|| b_name.cmp(a_name))
            })
            .map(|(name, count)| ResourceRank {
                resource: name.clone(),
                count: *count,
            })
    }

    /// Lowest-count resource, or `None` when no events parsed. Same
    /// tie-break as [`most_requested`](Self::most_requested).
    pub fn least_requested(&self) -> Option<ResourceRank> {
        self.resources
            .iter()
            .min_by(|(a_name, a_count), (b_name, b_count)| {
                a_count.cmp(b_count).then_with(|| a_name.cmp(b_name))
            })
            .map(|(name, count)| ResourceRank {
                resource: name.clone(),
                count: *count,
            })
    }
}

/// Percentage that refuses a zero denominator instead of producing NaN or a
/// silent zero.
fn pct(part: u64, total: u64) -> AnalyticsResult<f64> {
    if total == 0 {
        return Err(AnalyticsError::EmptyDataset);
    }
    Ok(part as f64 / total as f64 * 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
