// File: crates/qae-utils/src/timestamp.rs
// Summary: Wall-clock stamps for run logs and output file names.

use chrono::{DateTime, Local, TimeZone};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp_now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}
