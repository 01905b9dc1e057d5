//! Run report: what moved, what was left alone, and what failed.
//!
//! Per-file problems never abort a run; they end up here so the caller can
//! print them, serialise them, or decide on an exit code.
use crate::config::TimestampSource;
use crate::model::plural;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

/// A file that was moved (or, in a dry run, would be moved).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
    pub timestamp: DateTime<Local>,
    pub resolved_from: TimestampSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A file of the same name already exists at the destination.
    Collision,
    /// Symlinks, sockets, devices.
    NotRegularFile,
}

impl SkipReason {
    pub fn label(self) -> &'static str {
        match self {
            SkipReason::Collision => "name collision",
            SkipReason::NotRegularFile => "not a regular file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// A non-fatal error on one file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub moved: Vec<MovedFile>,
    pub skipped: Vec<SkippedFile>,
    pub failures: Vec<FileFailure>,
    pub elapsed_ms: u64,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn moved_count(&self) -> u64 {
        self.moved.len() as u64
    }

    pub fn skipped_count(&self) -> u64 {
        self.skipped.len() as u64
    }

    pub fn failure_count(&self) -> u64 {
        self.failures.len() as u64
    }

    pub fn skipped_for(&self, reason: SkipReason) -> impl Iterator<Item = &SkippedFile> {
        self.skipped.iter().filter(move |s| s.reason == reason)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// One-line human summary, e.g. `Moved 12 files, skipped 1 file, 0 errors`.
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "Would move" } else { "Moved" };
        format!(
            "{verb} {}, skipped {}, {}",
            plural(self.moved_count(), "file"),
            plural(self.skipped_count(), "file"),
            plural(self.failure_count(), "error"),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
