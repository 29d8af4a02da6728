//! Reference-time parsing, mtime comparison and listing timestamps
//!
//! Times are plain unix seconds (`i64`). Parsing and formatting both go
//! through the local time zone of the running process.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use clap::ValueEnum;
use log::warn;
use regex::Regex;

use crate::error::{Result, ScanError};

/// Strict `YY/MM/DD`.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})/(\d{2})/(\d{2})$").expect("DATE_PATTERN regex is invalid")
});

/// Strict `HH:MM:SS`.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})$").expect("TIME_PATTERN regex is invalid")
});

const LISTING_FORMAT: &str = "[%y/%m/%d %H:%M:%S]";

/// Which side of the reference time an entry must fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TimeMode {
    /// Modified at or before the reference time
    Before,
    /// Modified at or after the reference time
    After,
}

impl TimeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeMode::Before => "before",
            TimeMode::After => "after",
        }
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "before" => Ok(TimeMode::Before),
            "after" => Ok(TimeMode::After),
            other => Err(format!("mode must be 'before' or 'after', got '{}'", other)),
        }
    }
}

/// Check whether `file_time` satisfies `mode` relative to `reference`.
/// Both bounds are inclusive.
pub fn matches(file_time: i64, reference: i64, mode: TimeMode) -> bool {
    match mode {
        TimeMode::Before => file_time <= reference,
        TimeMode::After => file_time >= reference,
    }
}

/// String-mode variant of [`matches`]. Unknown modes never match.
pub fn matches_named(file_time: i64, reference: i64, mode: &str) -> bool {
    mode.parse::<TimeMode>()
        .is_ok_and(|mode| matches(file_time, reference, mode))
}

/// Parse a `YY/MM/DD` date and `HH:MM:SS` time, in local time, into unix seconds.
///
/// Two-digit years pivot like POSIX `%y`: 69-99 are 19xx, 00-68 are 20xx.
/// Out-of-range fields and wall-clock times skipped by a DST change are rejected.
pub fn parse_reference_time(date: &str, time: &str) -> Result<i64> {
    let invalid = || ScanError::InvalidTimeFormat {
        date: date.to_string(),
        time: time.to_string(),
    };

    let date_caps = DATE_PATTERN.captures(date).ok_or_else(invalid)?;
    let time_caps = TIME_PATTERN.captures(time).ok_or_else(invalid)?;

    let field = |caps: &regex::Captures<'_>, i: usize| -> u32 {
        // Both patterns only capture two ASCII digits
        caps[i].parse().unwrap_or(u32::MAX)
    };

    let yy = field(&date_caps, 1) as i32;
    let year = if yy >= 69 { 1900 + yy } else { 2000 + yy };

    let day = NaiveDate::from_ymd_opt(year, field(&date_caps, 2), field(&date_caps, 3))
        .ok_or_else(invalid)?;
    let clock = NaiveTime::from_hms_opt(
        field(&time_caps, 1),
        field(&time_caps, 2),
        field(&time_caps, 3),
    )
    .ok_or_else(invalid)?;

    Local
        .from_local_datetime(&day.and_time(clock))
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(invalid)
}

/// Render unix seconds as `[YY/MM/DD HH:MM:SS]` in local time.
///
/// Times outside chrono's range are clamped to the unix epoch.
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .unwrap_or_else(|| {
            warn!("timestamp {} is out of range, showing the unix epoch", secs);
            DateTime::UNIX_EPOCH
        })
        .with_timezone(&Local)
        .format(LISTING_FORMAT)
        .to_string()
}
