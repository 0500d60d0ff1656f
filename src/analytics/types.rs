//! Shared types for the aggregation layer.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::Serialize;
use thiserror::Error;

use crate::model::types::LogEvent;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Aggregation-level error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Zero successfully parsed events — percentage-of-total is undefined.
    #[error("no successfully parsed events; percentages are undefined")]
    EmptyDataset,
}

/// Convenience alias.
pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;

// ---------------------------------------------------------------------------
// Calendar grouping containers
// ---------------------------------------------------------------------------

/// Events of one calendar month, keyed by day-of-month.
///
/// Sparse: only days with at least one event are present. Each day keeps its
/// events in arrival order (file order, not necessarily chronological).
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct MonthBucket {
    days: BTreeMap<u8, Vec<LogEvent>>,
}

impl MonthBucket {
    /// File an event under its day-of-month, preserving arrival order.
    pub fn push(&mut self, event: LogEvent) {
        self.days
            .entry(event.date.day() as u8)
            .or_default()
            .push(event);
    }

    /// Events filed under `day`, in arrival order. Empty slice for days
    /// without events.
    pub fn day(&self, day: u8) -> &[LogEvent] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// (day, events) pairs, ascending by day-of-month.
    pub fn days(&self) -> impl Iterator<Item = (u8, &[LogEvent])> {
        self.days.iter().map(|(day, events)| (*day, events.as_slice()))
    }

    /// Total events in this month; 0 for months with no events.
    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Year-wide grouping: one [`MonthBucket`] per calendar month, fixed size 12,
/// pre-initialized empty.
///
/// Invariant: every event with date D sits in `month(D.month).day(D.day)`,
/// and the union of all buckets is exactly the set of successfully parsed
/// events. Events are never mutated or removed once filed.
#[derive(Debug, Default, Clone)]
pub struct LogCalendar {
    months: [MonthBucket; 12],
}

impl LogCalendar {
    /// Build the calendar from events in arrival order.
    pub fn from_events(events: impl IntoIterator<Item = LogEvent>) -> Self {
        let mut calendar = Self::default();
        for event in events {
            calendar.push(event);
        }
        calendar
    }

    /// File one event under its month and day.
    pub fn push(&mut self, event: LogEvent) {
        self.months[event.date.month0() as usize].push(event);
    }

    /// Bucket for a 1-based calendar `month`.
    ///
    /// # Panics
    /// If `month` is outside 1..=12.
    pub fn month(&self, month: u32) -> &MonthBucket {
        &self.months[(month - 1) as usize]
    }

    /// (month number, bucket) pairs, January first. Includes empty months.
    pub fn months(&self) -> impl Iterator<Item = (u32, &MonthBucket)> {
        self.months
            .iter()
            .enumerate()
            .map(|(i, bucket)| (i as u32 + 1, bucket))
    }

    /// Count of all filed events.
    pub fn total_events(&self) -> usize {
        self.months.iter().map(MonthBucket::total).sum()
    }

    /// Every filed event: months then days ascending, arrival order within a
    /// day. The derived statistics do not depend on this order.
    pub fn events(&self) -> impl Iterator<Item = &LogEvent> {
        self.months.iter().flat_map(|m| m.days.values().flatten())
    }
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Counters for the three HTTP status classes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub success: u64,
    pub redirect: u64,
    pub error: u64,
}

impl StatusTally {
    /// All classified events. Equals the count of successfully parsed events,
    /// since every status code falls in exactly one class.
    pub fn total(&self) -> u64 {
        self.success + self.redirect + self.error
    }
}

/// A resource name together with its access count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRank {
    pub resource: String,
    pub count: u64,
}

/// Derived statistics for one run.
///
/// Pure read-only projections over the filed events, recomputed each run by
/// [`summarize`](super::derive::summarize); independent of each other and of
/// event order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SummaryStats {
    /// Success / redirect / error counters.
    pub status: StatusTally,
    /// Resource name → access count.
    pub resources: HashMap<String, u64>,
    /// ISO-8601 week number → event count; the map order is the ascending
    /// report order.
    pub weekly: BTreeMap<u32, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(month: u32, day: u32) -> LogEvent {
        LogEvent {
            date: NaiveDate::from_ymd_opt(2023, month, day).unwrap(),
            resource: "/".to_string(),
            status: 200,
        }
    }

    #[test]
    fn calendar_starts_with_twelve_empty_months() {
        let calendar = LogCalendar::default();
        assert_eq!(calendar.months().count(), 12);
        for (_, bucket) in calendar.months() {
            assert!(bucket.is_empty());
            assert_eq!(bucket.total(), 0);
        }
    }

    #[test]
    fn push_files_event_under_month_and_day() {
        let mut calendar = LogCalendar::default();
        calendar.push(event(10, 10));
        assert_eq!(calendar.month(10).day(10).len(), 1);
        assert_eq!(calendar.month(10).total(), 1);
        assert_eq!(calendar.month(9).total(), 0);
    }

    #[test]
    fn grouping_invariant_total_matches_input() {
        let events = vec![event(1, 1), event(1, 1), event(1, 31), event(12, 25)];
        let calendar = LogCalendar::from_events(events.clone());
        let bucket_sum: usize = calendar
            .months()
            .map(|(_, m)| m.days().map(|(_, evs)| evs.len()).sum::<usize>())
            .sum();
        assert_eq!(bucket_sum, events.len());
        assert_eq!(calendar.total_events(), events.len());
    }

    #[test]
    fn day_lists_keep_arrival_order() {
        let mut first = event(3, 14);
        first.resource = "/a".to_string();
        let mut second = event(3, 14);
        second.resource = "/b".to_string();
        let calendar = LogCalendar::from_events(vec![first, second]);
        let day = calendar.month(3).day(14);
        assert_eq!(day[0].resource, "/a");
        assert_eq!(day[1].resource, "/b");
    }

    #[test]
    fn month_bucket_days_ascend() {
        let calendar = LogCalendar::from_events(vec![event(5, 20), event(5, 3), event(5, 11)]);
        let days: Vec<u8> = calendar.month(5).days().map(|(d, _)| d).collect();
        assert_eq!(days, vec![3, 11, 20]);
    }

    #[test]
    fn month_bucket_serializes_day_keyed_object() {
        let calendar = LogCalendar::from_events(vec![event(10, 10)]);
        let json = serde_json::to_value(calendar.month(10)).unwrap();
        let entries = json.as_object().unwrap();
        assert_eq!(entries.len(), 1);
        let day_events = entries.get("10").unwrap().as_array().unwrap();
        assert_eq!(day_events.len(), 1);
        assert_eq!(day_events[0]["date"], "2023-10-10");
    }
}
