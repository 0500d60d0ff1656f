//! Access-log digest: parse an HTTP access log, group events by calendar
//! date, and summarize per-month/day/ISO-week activity.
//!
//! Pipeline: [`source`] produces raw lines; [`parser`] turns each line into a
//! [`model::LogEvent`] or a counted parse failure; [`analytics`] groups
//! events into a fixed 12-month calendar and derives summary statistics;
//! [`report`] renders the textual summary and [`export`] writes the
//! per-month JSON files.

pub mod analytics;
pub mod export;
pub mod model;
pub mod parser;
pub mod report;
pub mod source;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info, warn};

/// Default location of the access-log dataset.
pub const DEFAULT_LOG_URL: &str = "https://s3.amazonaws.com/tcmg476/http_access_log";

#[derive(Parser, Debug)]
#[command(
    name = "alog",
    version,
    about = "Summarize an HTTP access log by month, day, and ISO week"
)]
pub struct Cli {
    /// Path of the (cached) access log; downloaded here when missing.
    #[arg(long, default_value = "http.log")]
    pub input: PathBuf,

    /// URL to download the log from when the input file does not exist.
    #[arg(long, default_value = DEFAULT_LOG_URL)]
    pub url: String,

    /// Directory receiving the twelve per-month JSON files.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Never download; fail if the input file is missing.
    #[arg(long)]
    pub offline: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One full run: ensure the input file, parse it line by line, group and
/// summarize, render the report to stdout, write the month files.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.input.exists() {
        info!(path = %cli.input.display(), "using cached log file");
    } else {
        if cli.offline {
            bail!(
                "input file {} not found and --offline was given",
                cli.input.display()
            );
        }
        info!(url = %cli.url, path = %cli.input.display(), "no cached log found, downloading");
        source::fetch_log(&cli.url, &cli.input)?;
    }

    let mut events = Vec::new();
    let mut failed: u64 = 0;
    for line in source::read_lines(&cli.input)? {
        let line = line.context("read log line")?;
        match parser::parse_line(&line) {
            Ok(event) => events.push(event),
            Err(failure) => {
                debug!(line = %failure.line, "unparsed line");
                failed += 1;
            }
        }
    }
    info!(parsed = events.len(), failed, "parse pass complete");
    if failed > 0 {
        warn!(failed, "some lines could not be parsed");
    }

    let calendar = analytics::LogCalendar::from_events(events);
    let stats = analytics::summarize(&calendar);

    let stdout = std::io::stdout();
    report::render(&calendar, &stats, failed, &mut stdout.lock())?;

    let written = export::write_month_files(&calendar, &cli.out_dir)?;
    info!(files = written.len(), "wrote per-month JSON files");
    Ok(())
}
