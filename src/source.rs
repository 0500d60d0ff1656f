//! Data-source collaborator: cached download and line iteration.
//!
//! The parsing/aggregation core only sees an iterator of raw lines; how the
//! bytes arrive (fresh download or cached file) is decided here. Errors
//! propagate to the caller unchanged — retries, if any, are the caller's
//! concern, not the core's.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::info;

/// Errors from the external data source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("log file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("server returned {0} for {1}")]
    Status(reqwest::StatusCode, String),
}

/// Download `url` into `path`, streaming with a progress bar sized from
/// `Content-Length` when the server provides one.
pub fn fetch_log(url: &str, path: &Path) -> Result<(), SourceError> {
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(SourceError::Status(response.status(), url.to_string()));
    }

    let bar = match response.content_length() {
        Some(len) => ProgressBar::new(len).with_style(
            ProgressStyle::with_template("{bar:40} {bytes}/{total_bytes} ({percent}%)")
                .expect("download progress template"),
        ),
        None => ProgressBar::new_spinner(),
    };

    let file = File::create(path)?;
    let mut writer = bar.wrap_write(io::BufWriter::new(file));
    let mut response = response;
    io::copy(&mut response, &mut writer)?;
    writer.flush()?;
    bar.finish();

    info!(path = %path.display(), "download complete");
    Ok(())
}

/// Buffered iterator over the lines of the cached log file.
pub fn read_lines(path: &Path) -> Result<impl Iterator<Item = io::Result<String>>, SourceError> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines())
}
