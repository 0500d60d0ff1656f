//! Report surface: the end-of-run textual summary.

use std::io::Write;

use anyhow::Result;

use crate::analytics::{LogCalendar, SummaryStats};
use crate::model::MONTH_ABBREV;

/// Render the textual summary: per-month/day event counts, weekly counts
/// ascending by week number, the parse-failure count, overall error/redirect
/// percentages (4 significant digits), and the most- and least-requested
/// resources.
///
/// The parse-failure count is printed before the percentage lines, so it is
/// surfaced even when an empty dataset makes the percentages an error.
pub fn render(
    calendar: &LogCalendar,
    stats: &SummaryStats,
    failed_lines: u64,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Events Per Month/Day/Week:")?;
    for (month, bucket) in calendar.months() {
        writeln!(
            out,
            "\n{}: [{} total events]",
            MONTH_ABBREV[(month - 1) as usize],
            bucket.total()
        )?;
        for (day, events) in bucket.days() {
            writeln!(out, "\t{} - {} events", day, events.len())?;
        }
    }

    writeln!(out, "\nRequests per week:")?;
    for (week, count) in &stats.weekly {
        writeln!(out, "\t{week} - {count} events")?;
    }

    writeln!(out, "\nTotal Requests: {}", stats.status.total())?;
    writeln!(out, "{failed_lines} lines could not be parsed.")?;

    writeln!(
        out,
        "\nPercentage failure (4xx): {} %",
        sig4(stats.error_pct()?)
    )?;
    writeln!(
        out,
        "Percentage redirected (3xx): {} %",
        sig4(stats.redirect_pct()?)
    )?;

    if let Some(most) = stats.most_requested() {
        writeln!(
            out,
            "\nMost requested file: {} (accessed {} times)",
            most.resource, most.count
        )?;
    }
    if let Some(least) = stats.least_requested() {
        writeln!(
            out,
            "Least requested file: {} (accessed {} times)",
            least.resource, least.count
        )?;
    }
    Ok(())
}

/// Format with 4 significant digits, trailing zeros trimmed (printf `%.4g`
/// for the value range percentages live in).
pub fn sig4(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (3 - magnitude).max(0) as usize;
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
