//! dorg core: traversal, date bucketing, and moves.
//!
//! This crate contains all organizer logic with no CLI dependencies, so the
//! binary stays a thin wrapper around [`organizer::run`].
//!
//! # Modules
//!
//! - [`config`] - Immutable run configuration.
//! - [`model`] - Files discovered during a run.
//! - [`organizer`] - Walk, bucket, and move.
//! - [`report`] - Per-file outcomes of a run.
//! - [`error`] - Fatal errors.
pub mod config;
pub mod error;
pub mod model;
pub mod organizer;
pub mod report;

pub use config::{CollisionPolicy, Granularity, OrganizeConfig, TimestampSource};
pub use error::OrganizeError;
pub use organizer::run;
pub use report::{FileFailure, MovedFile, RunReport, SkipReason, SkippedFile};
