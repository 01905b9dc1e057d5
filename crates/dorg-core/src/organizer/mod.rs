//! The organizer: walk the source, bucket each file by date, move it.
//!
//! A run is a single synchronous pass:
//! 1. Validate the source. Failures here are fatal and nothing is touched.
//! 2. Collect every candidate file ([`walk`]).
//! 3. For each file, resolve its timestamp ([`timestamp`]), compute the
//!    destination folder ([`destination`]), pick a free target name and
//!    move it ([`mover`]).
//!
//! Step 3 is best effort: a failing file is recorded in the report and the
//! run continues with the next one.
pub mod destination;
pub mod mover;
pub mod timestamp;
pub mod walk;

use crate::config::OrganizeConfig;
use crate::error::{OrganizeError, Result};
use crate::report::{FileFailure, MovedFile, RunReport, SkipReason, SkippedFile};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Organize `config.source` and return what happened.
///
/// Only problems with the source directory itself are returned as `Err`.
pub fn run(config: &OrganizeConfig) -> Result<RunReport> {
    let start = Instant::now();
    let root = config.source();
    validate_source(root)?;

    info!(
        "Organizing {} by {} time into {} folders, {} on collision{}{}",
        root.display(),
        config.timestamp,
        config.granularity,
        config.on_collision,
        if config.recursive { ", recursive" } else { "" },
        if config.dry_run { " (dry run)" } else { "" },
    );

    let walked = walk::collect_files(root, config.recursive);
    debug!(
        "Found {} files, {} special entries, {} unreadable directories",
        walked.files.len(),
        walked.special.len(),
        walked.failures.len()
    );

    let mut report = RunReport::new(config.dry_run);
    for failure in walked.failures {
        warn!("Cannot read {}: {}", failure.path.display(), failure.message);
        report.failures.push(failure);
    }
    for path in walked.special {
        debug!("Skipping {}: not a regular file", path.display());
        report.skipped.push(SkippedFile {
            path,
            reason: SkipReason::NotRegularFile,
        });
    }

    // Targets handed out and sources moved away so far. On a real run both
    // are also visible on disk; on a dry run this is the only record.
    let mut plan = Plan::default();
    for path in walked.files {
        organize_file(config, path, &mut plan, &mut report);
    }

    report.elapsed_ms = start.elapsed().as_millis() as u64;
    info!("{} in {} ms", report.summary(), report.elapsed_ms);
    Ok(report)
}

/// Fail before any mutation if the source is missing, not a directory, or
/// cannot be listed.
pub fn validate_source(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => OrganizeError::SourceNotFound(root.to_path_buf()),
        _ => OrganizeError::SourceUnreadable {
            path: root.to_path_buf(),
            source: err,
        },
    })?;
    if !metadata.is_dir() {
        return Err(OrganizeError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| OrganizeError::SourceUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[derive(Default)]
struct Plan {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

fn organize_file(config: &OrganizeConfig, path: PathBuf, plan: &mut Plan, report: &mut RunReport) {
    let metadata = match fs::symlink_metadata(&path) {
        Ok(m) => m,
        Err(err) => return fail(report, path, err),
    };
    let entry = match timestamp::resolve(path.clone(), &metadata, config.timestamp) {
        Ok(entry) => entry,
        Err(err) => return fail(report, path, err),
    };

    let dest_dir =
        destination::destination_dir(config.source(), &entry.timestamp, config.granularity);
    if let Some(blocker) = mover::blocking_ancestor(config.source(), &dest_dir, &plan.vacated) {
        let message = format!(
            "cannot create {}: {} is not a directory",
            dest_dir.display(),
            blocker.display()
        );
        return fail(report, entry.path, message);
    }

    let Some(file_name) = entry.path.file_name() else {
        return fail(report, entry.path.clone(), "path has no file name");
    };

    let resolved =
        mover::resolve_target(&dest_dir, file_name, config.on_collision, &plan.claimed);
    let target = match resolved {
        Ok(Some(target)) => target,
        Ok(None) => {
            warn!(
                "Skipping {}: {} already exists",
                entry.path.display(),
                dest_dir.join(file_name).display()
            );
            report.skipped.push(SkippedFile {
                path: entry.path,
                reason: SkipReason::Collision,
            });
            return;
        }
        Err(err) => return fail(report, entry.path, err),
    };

    if !config.dry_run {
        if let Err(err) = mover::ensure_dir(&dest_dir) {
            let message = format!("cannot create {}: {err}", dest_dir.display());
            return fail(report, entry.path, message);
        }
        if let Err(err) = mover::move_file(&entry.path, &target) {
            return fail(report, entry.path, err);
        }
    }

    debug!("{} -> {}", entry.path.display(), target.display());
    plan.claimed.insert(target.clone());
    plan.vacated.insert(entry.path.clone());
    report.moved.push(MovedFile {
        from: entry.path,
        to: target,
        timestamp: entry.timestamp,
        resolved_from: entry.resolved_from,
    });
}

fn fail(report: &mut RunReport, path: PathBuf, err: impl std::fmt::Display) {
    warn!("{}: {err}", path.display());
    report.failures.push(FileFailure::new(path, err));
}
