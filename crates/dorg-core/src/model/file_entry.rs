//! A regular file discovered during traversal, with the timestamp that
//! decides where it goes.
use crate::config::TimestampSource;
use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Current location of the file.
    pub path: PathBuf,

    /// Resolved timestamp in the local time zone.
    pub timestamp: DateTime<Local>,

    /// The timestamp that was actually read. Differs from the configured
    /// source when birth time is unavailable and modification time was used.
    pub resolved_from: TimestampSource,
}

impl FileEntry {
    pub fn new(path: PathBuf, timestamp: DateTime<Local>, resolved_from: TimestampSource) -> Self {
        Self {
            path,
            timestamp,
            resolved_from,
        }
    }

    /// `true` if the configured source was not available for this file.
    pub fn used_fallback(&self, requested: TimestampSource) -> bool {
        self.resolved_from != requested
    }
}
