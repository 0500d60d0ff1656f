//! Sink collaborator: per-month JSON documents.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::analytics::LogCalendar;
use crate::model::MONTH_ABBREV;

/// Write one `<Mon>.json` per calendar month into `out_dir` (all twelve
/// months, empty ones included) and return the paths written.
///
/// Each document is a JSON object mapping day number to the ordered list of
/// `{date, resource, status}` records for that day, dates as `YYYY-MM-DD`.
pub fn write_month_files(calendar: &LogCalendar, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(12);
    for (month, bucket) in calendar.months() {
        let path = out_dir.join(format!("{}.json", MONTH_ABBREV[(month - 1) as usize]));
        let file =
            File::create(&path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), bucket)
            .with_context(|| format!("serialize {}", path.display()))?;
        debug!(path = %path.display(), events = bucket.total(), "wrote month file");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogEvent;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn writes_all_twelve_month_files() {
        let tmp = TempDir::new().unwrap();
        let calendar = LogCalendar::default();
        let written = write_month_files(&calendar, tmp.path()).unwrap();
        assert_eq!(written.len(), 12);
        for name in MONTH_ABBREV {
            assert!(tmp.path().join(format!("{name}.json")).exists(), "{name}");
        }
    }

    #[test]
    fn month_file_contains_day_keyed_records() {
        let tmp = TempDir::new().unwrap();
        let calendar = LogCalendar::from_events(vec![LogEvent {
            date: NaiveDate::from_ymd_opt(2023, 10, 10).unwrap(),
            resource: "/index.html".to_string(),
            status: 200,
        }]);
        write_month_files(&calendar, tmp.path()).unwrap();

        let oct: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(tmp.path().join("Oct.json")).unwrap())
                .unwrap();
        let day = oct.get("10").unwrap().as_array().unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0]["date"], "2023-10-10");
        assert_eq!(day[0]["resource"], "/index.html");
        assert_eq!(day[0]["status"], 200);

        let jan: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(tmp.path().join("Jan.json")).unwrap())
                .unwrap();
        assert_eq!(jan, serde_json::json!({}));
    }

    #[test]
    fn creates_missing_output_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("out/months");
        write_month_files(&LogCalendar::default(), &nested).unwrap();
        assert!(nested.join("Dec.json").exists());
    }
}
