//! Source traversal using `jwalk` in serial mode.
//!
//! The whole file list is collected before anything moves, so folders
//! created during the run are never visited. Top-level year folders are
//! pruned from recursion: their contents are already organized.
use crate::organizer::destination::is_year_folder_name;
use crate::report::FileFailure;
use jwalk::{Parallelism, WalkDir};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything found below the source root.
#[derive(Debug, Default)]
pub struct WalkResult {
    /// Regular files, in sorted traversal order.
    pub files: Vec<PathBuf>,
    /// Symlinks and other special entries.
    pub special: Vec<PathBuf>,
    /// Directories that could not be read.
    pub failures: Vec<FileFailure>,
}

/// Collect candidate files under `root`.
///
/// Without `recursive` only the direct children of `root` are listed.
pub fn collect_files(root: &Path, recursive: bool) -> WalkResult {
    let mut walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .min_depth(1)
        .parallelism(Parallelism::Serial)
        .process_read_dir(|_depth, _path, _state, children| {
            for entry in children.iter_mut().flatten() {
                if entry.depth == 1
                    && entry.file_type().is_dir()
                    && is_year_folder_name(entry.file_name())
                {
                    entry.read_children_path = None;
                }
            }
        });
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut result = WalkResult::default();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                result.failures.push(FileFailure::new(path, &err));
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            if entry.depth == 1 && is_year_folder_name(entry.file_name()) {
                debug!("Not descending into {}", entry.path().display());
            }
            continue;
        }

        if file_type.is_file() {
            result.files.push(entry.path());
        } else {
            result.special.push(entry.path());
        }
    }
    result
}
