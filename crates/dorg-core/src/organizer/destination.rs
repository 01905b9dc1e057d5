//! Destination folder computation.
//!
//! Folders are always rooted at the source directory: `{YYYY}`, then
//! `{MM}` and `{DD}` below it depending on the granularity. Month and day
//! are zero-padded so folders sort chronologically by name.
use crate::config::Granularity;
use chrono::{DateTime, Datelike, TimeZone};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Folder path relative to the source root for a timestamp.
pub fn relative_dir<Tz: TimeZone>(timestamp: &DateTime<Tz>, granularity: Granularity) -> PathBuf {
    let mut dir = PathBuf::from(format!("{:04}", timestamp.year()));
    if matches!(granularity, Granularity::Month | Granularity::Day) {
        dir.push(format!("{:02}", timestamp.month()));
    }
    if granularity == Granularity::Day {
        dir.push(format!("{:02}", timestamp.day()));
    }
    dir
}

/// Absolute destination folder under `root`.
pub fn destination_dir<Tz: TimeZone>(
    root: &Path,
    timestamp: &DateTime<Tz>,
    granularity: Granularity,
) -> PathBuf {
    root.join(relative_dir(timestamp, granularity))
}

/// Whether a top-level folder name looks like one this tool creates.
///
/// Only the year level is checked: everything below a year folder belongs
/// to the organized hierarchy.
pub fn is_year_folder_name(name: &OsStr) -> bool {
    name.to_str()
        .is_some_and(|s| s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()))
}
