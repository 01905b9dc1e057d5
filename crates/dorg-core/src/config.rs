//! Run configuration: what to organize and how finely to split it.
//!
//! An `OrganizeConfig` is built once (by the CLI or a library caller) and
//! is never mutated while a run is in progress.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// How finely destination folders are split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// `{YYYY}`
    Year,
    /// `{YYYY}/{MM}`
    #[default]
    Month,
    /// `{YYYY}/{MM}/{DD}`
    Day,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
            Granularity::Day => "day",
        })
    }
}

/// Which filesystem timestamp drives bucketing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampSource {
    /// Birth time. Falls back to modification time where unsupported.
    #[default]
    Created,
    Modified,
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimestampSource::Created => "created",
            TimestampSource::Modified => "modified",
        })
    }
}

/// What to do when the destination already holds a file of the same name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Leave the source file where it is and report it.
    #[default]
    Skip,
    /// Move it as `stem (N).ext` using the first free `N`.
    Rename,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollisionPolicy::Skip => "skip",
            CollisionPolicy::Rename => "rename",
        })
    }
}

/// Immutable settings for a single organizer run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeConfig {
    pub source: PathBuf,
    pub recursive: bool,
    pub granularity: Granularity,
    pub timestamp: TimestampSource,
    pub on_collision: CollisionPolicy,
    /// Plan only: nothing is created or moved.
    pub dry_run: bool,
}

impl OrganizeConfig {
    /// Defaults: non-recursive, month folders, creation time, skip collisions.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            recursive: false,
            granularity: Granularity::default(),
            timestamp: TimestampSource::default(),
            on_collision: CollisionPolicy::default(),
            dry_run: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn timestamp(mut self, timestamp: TimestampSource) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn on_collision(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
