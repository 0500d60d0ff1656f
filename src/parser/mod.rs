//! Access-log line parsing.
//!
//! One public entry point, [`parse_line`]: a pure function from a raw line to
//! either a [`LogEvent`] or a [`ParseFailure`]. Malformed lines never abort a
//! run; the caller skips them, counts them, and keeps going.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::types::{LogEvent, month_number};

/// Canonical access-log line shape: a bracketed `DD/Mon/YYYY:...` timestamp,
/// a quoted request line whose second whitespace-delimited token is the
/// resource, and a trailing 3-digit status code. Fields outside those groups
/// (client address, identity, timezone, protocol, byte count) are ignored and
/// may vary.
static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\[(\d{1,2})/([A-Za-z]{3})/(\d{4}):[^\]]*\]\s+"\S+\s+(\S+)\s+[^"]*"\s+(\d{3})"#)
        .expect("access log line regex")
});

/// A line that did not match the canonical shape. Retained only so the
/// caller can count it (and optionally log the raw text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// The raw, unparsed line.
    pub line: String,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unparsable log line: {:?}", self.line)
    }
}

/// Parse one raw log line into a [`LogEvent`].
///
/// Fails (never panics) when the line does not match the canonical shape,
/// when the month token is not in the fixed Jan..Dec table, when day/year do
/// not form a real calendar date, or when the status code falls outside
/// 100–599.
pub fn parse_line(line: &str) -> Result<LogEvent, ParseFailure> {
    let fail = || ParseFailure {
        line: line.to_string(),
    };

    let caps = LINE_RE.captures(line).ok_or_else(fail)?;
    let day: u32 = caps[1].parse().map_err(|_| fail())?;
    let month = month_number(&caps[2]).ok_or_else(fail)?;
    let year: i32 = caps[3].parse().map_err(|_| fail())?;
    let status: u16 = caps[5].parse().map_err(|_| fail())?;

    if !(100..=599).contains(&status) {
        return Err(fail());
    }
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(fail)?;

    Ok(LogEvent {
        date,
        resource: caps[4].to_string(),
        status,
    })
}
