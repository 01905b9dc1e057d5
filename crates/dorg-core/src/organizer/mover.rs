//! Target selection and the move itself.
use crate::config::CollisionPolicy;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Highest `N` tried for `stem (N).ext` before giving up.
pub const MAX_RENAME_ATTEMPTS: u32 = 9_999;

/// A path is occupied if anything exists there (a dangling symlink
/// included) or an earlier file in this run has already claimed it.
fn is_occupied(path: &Path, claimed: &HashSet<PathBuf>) -> bool {
    claimed.contains(path) || fs::symlink_metadata(path).is_ok()
}

/// `photo.jpg`, 2 -> `photo (2).jpg`; `.bashrc`, 1 -> `.bashrc (1)`.
pub fn numbered_name(file_name: &OsStr, n: u32) -> OsString {
    let path = Path::new(file_name);
    let stem = path.file_stem().unwrap_or(file_name);
    let mut name = stem.to_os_string();
    name.push(format!(" ({n})"));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Pick the path `file_name` will be moved to inside `dir`.
///
/// Returns `Ok(None)` when the name is taken and the policy is to skip.
/// The check is not atomic with the later [`move_file`]: a file created at
/// the target in between is replaced on Unix.
pub fn resolve_target(
    dir: &Path,
    file_name: &OsStr,
    policy: CollisionPolicy,
    claimed: &HashSet<PathBuf>,
) -> io::Result<Option<PathBuf>> {
    let target = dir.join(file_name);
    if !is_occupied(&target, claimed) {
        return Ok(Some(target));
    }

    match policy {
        CollisionPolicy::Skip => Ok(None),
        CollisionPolicy::Rename => {
            for n in 1..=MAX_RENAME_ATTEMPTS {
                let candidate = dir.join(numbered_name(file_name, n));
                if !is_occupied(&candidate, claimed) {
                    return Ok(Some(candidate));
                }
            }
            Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!(
                    "no free name for {} after {MAX_RENAME_ATTEMPTS} attempts",
                    target.display()
                ),
            ))
        }
    }
}

/// First path between `root` (exclusive) and `dir` (inclusive) that exists
/// but cannot serve as a directory, so `create_dir_all(dir)` would fail.
///
/// Paths in `vacated` are treated as gone: on a dry run they are files that
/// an earlier planned move takes away.
pub fn blocking_ancestor(
    root: &Path,
    dir: &Path,
    vacated: &HashSet<PathBuf>,
) -> Option<PathBuf> {
    let relative = dir.strip_prefix(root).ok()?;
    let mut current = root.to_path_buf();
    for component in relative.components() {
        current.push(component);
        if vacated.contains(&current) {
            return None;
        }
        match fs::symlink_metadata(&current) {
            Err(_) => return None,
            // Symlinks count when they resolve to a directory.
            Ok(_) if fs::metadata(&current).is_ok_and(|m| m.is_dir()) => continue,
            Ok(_) => return Some(current),
        }
    }
    None
}

/// Create `dir` and its parents. Existing directories are fine.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Move `from` to `to` with a single rename.
///
/// When the two paths are on different filesystems the file is copied,
/// its modification time restored, and the source removed.
///
/// `to` is not checked here. On Unix a file that appeared at `to` after
/// [`resolve_target`] ran is overwritten.
pub fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            debug!(
                "{} and {} are on different filesystems, copying",
                from.display(),
                to.display()
            );
            copy_then_remove(from, to)
        }
        Err(err) => Err(err),
    }
}

fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    let modified = fs::metadata(from)?.modified()?;
    let result = fs::copy(from, to)
        .and_then(|_| File::options().write(true).open(to))
        .and_then(|f| f.set_modified(modified))
        .and_then(|()| fs::remove_file(from));
    if let Err(err) = result {
        // Never leave a partial or second copy behind.
        if let Err(cleanup) = fs::remove_file(to) {
            debug!("Could not remove {} after failed copy: {cleanup}", to.display());
        }
        return Err(err);
    }
    Ok(())
}
