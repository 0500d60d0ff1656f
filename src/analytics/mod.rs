//! Aggregation and summary statistics over parsed log events.
//!
//! # Module structure
//!
//! - [`types`] — calendar grouping containers, tallies, error type
//! - [`bucketing`] — calendar / ISO-week key helpers
//! - [`derive`] — summary statistics derived from a grouped calendar

pub mod bucketing;
pub mod derive;
pub mod types;

pub use derive::summarize;
pub use types::{
    AnalyticsError, AnalyticsResult, LogCalendar, MonthBucket, ResourceRank, StatusTally,
    SummaryStats,
};
