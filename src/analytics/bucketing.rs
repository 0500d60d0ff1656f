//! Calendar / ISO-week key helpers for the aggregation layer.

use chrono::{Datelike, NaiveDate};

/// ISO-8601 week number for a date (weeks start Monday, week 1 contains the
/// year's first Thursday).
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_week_of_known_date() {
        // 2023-10-10 is a Tuesday in ISO week 41.
        let date = NaiveDate::from_ymd_opt(2023, 10, 10).unwrap();
        assert_eq!(iso_week(date), 41);
    }

    #[test]
    fn iso_week_spans_monday_to_sunday() {
        // 2025-01-06 (Monday) through 2025-01-12 (Sunday) are all week 2.
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        assert_eq!(iso_week(monday), 2);
        assert_eq!(iso_week(sunday), 2);
    }

    #[test]
    fn iso_week_one_contains_first_thursday() {
        // 2021-01-01 is a Friday; ISO week 1 of 2021 starts 2021-01-04, so
        // Jan 1–3 belong to week 53 of the previous ISO year.
        let jan1 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(iso_week(jan1), 53);
        let jan4 = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
        assert_eq!(iso_week(jan4), 1);
    }
}
