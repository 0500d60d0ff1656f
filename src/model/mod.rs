//! Normalized log record model.

pub mod types;

pub use types::{LogEvent, MONTH_ABBREV, StatusClass, month_number};
