//! Property test: a canonical line formatted from any valid event parses back
//! to an equal event.

use access_log_digest::model::{LogEvent, MONTH_ABBREV};
use access_log_digest::parser::parse_line;
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

fn format_line(event: &LogEvent) -> String {
    format!(
        "host.example.com - - [{:02}/{}/{}:23:59:01 +0000] \"GET {} HTTP/1.0\" {} 1024",
        event.date.day(),
        MONTH_ABBREV[event.date.month0() as usize],
        event.date.year(),
        event.resource,
        event.status,
    )
}

proptest! {
    #[test]
    fn roundtrip(
        year in 1990i32..=2030,
        month in 1u32..=12,
        day in 1u32..=28,
        status in 100u16..=599,
        resource in "/[A-Za-z0-9_.~/-]{1,24}",
    ) {
        let event = LogEvent {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            resource,
            status,
        };
        let parsed = parse_line(&format_line(&event)).unwrap();
        prop_assert_eq!(parsed, event);
    }

    #[test]
    fn garbage_never_panics(line in ".{0,120}") {
        // Any outcome is fine; the parser must just not panic.
        let _ = parse_line(&line);
    }
}
