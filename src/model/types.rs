//! Core record types shared by the parser and the aggregation layer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed month-abbreviation table, index 0 = January.
///
/// Shared by the parser (name → number lookup) and the exporter (number →
/// name for the per-month output file names).
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Resolve a three-letter month abbreviation to its 1-based month number.
/// Anything outside the fixed table is `None`.
pub fn month_number(abbrev: &str) -> Option<u32> {
    MONTH_ABBREV
        .iter()
        .position(|m| *m == abbrev)
        .map(|i| i as u32 + 1)
}

/// One successfully parsed access-log line.
///
/// Immutable once created: the parser constructs it, the aggregation layer
/// owns it afterwards and only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Calendar date from the bracketed timestamp. Serializes as ISO 8601
    /// `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Second whitespace-delimited token of the quoted request line, i.e.
    /// the requested path.
    pub resource: String,
    /// Three-digit HTTP status code; 100–599 by construction.
    pub status: u16,
}

/// HTTP status classes used by the summary tally.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    /// Codes ≤ 299.
    Success,
    /// Codes 300–399.
    Redirect,
    /// Codes ≥ 400.
    Error,
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Redirect => write!(f, "redirect"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl LogEvent {
    /// Classify the status code. The parser never emits codes below 100, so
    /// the three classes cover every event.
    pub fn status_class(&self) -> StatusClass {
        match self.status {
            ..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            _ => StatusClass::Error,
        }
    }

    /// 1-based calendar month of the event.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day-of-month of the event.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}
