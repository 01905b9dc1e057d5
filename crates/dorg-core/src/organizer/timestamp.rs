//! Timestamp resolution from filesystem metadata.
//!
//! Birth time is not exposed everywhere (older Linux kernels, some network
//! and FUSE filesystems). When it is missing the modification time is used
//! instead and the returned entry records the substitution.
use crate::config::TimestampSource;
use crate::model::FileEntry;
use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Build a [`FileEntry`] for `path` using the requested timestamp source.
///
/// Fails only when the modification time itself cannot be read.
pub fn resolve(path: PathBuf, metadata: &Metadata, source: TimestampSource) -> io::Result<FileEntry> {
    let (time, resolved_from) = match source {
        TimestampSource::Modified => (metadata.modified()?, TimestampSource::Modified),
        TimestampSource::Created => match metadata.created() {
            Ok(time) => (time, TimestampSource::Created),
            Err(err) => {
                debug!(
                    "Creation time unavailable for {} ({err}), using modification time",
                    path.display()
                );
                (metadata.modified()?, TimestampSource::Modified)
            }
        },
    };

    let timestamp: DateTime<Local> = DateTime::from(time);
    Ok(FileEntry::new(path, timestamp, resolved_from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use std::fs::{self, File};
    use std::time::SystemTime;
    use tempfile::TempDir;

    fn file_modified_at(dir: &TempDir, name: &str, when: SystemTime) -> PathBuf {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        file.set_modified(when).unwrap();
        path
    }

    #[test]
    fn modified_source_reads_mtime() {
        let tmp = TempDir::new().unwrap();
        let when = Local.with_ymd_and_hms(2021, 7, 14, 12, 0, 0).unwrap();
        let path = file_modified_at(&tmp, "a.jpg", when.into());

        let meta = fs::metadata(&path).unwrap();
        let entry = resolve(path.clone(), &meta, TimestampSource::Modified).unwrap();

        assert_eq!(entry.path, path);
        assert_eq!(entry.resolved_from, TimestampSource::Modified);
        assert_eq!(
            (entry.timestamp.year(), entry.timestamp.month(), entry.timestamp.day()),
            (2021, 7, 14)
        );
        assert!(!entry.used_fallback(TimestampSource::Modified));
    }

    /// Whether birth time is available depends on the filesystem running the
    /// test; either outcome must produce a usable entry.
    #[test]
    fn created_source_reads_birth_time_or_falls_back() {
        let tmp = TempDir::new().unwrap();
        let when = Local.with_ymd_and_hms(2019, 1, 2, 12, 0, 0).unwrap();
        let path = file_modified_at(&tmp, "b.txt", when.into());

        let meta = fs::metadata(&path).unwrap();
        let entry = resolve(path, &meta, TimestampSource::Created).unwrap();

        match meta.created() {
            Ok(birth) => {
                assert_eq!(entry.resolved_from, TimestampSource::Created);
                assert_eq!(entry.timestamp, DateTime::<Local>::from(birth));
            }
            Err(_) => {
                assert!(entry.used_fallback(TimestampSource::Created));
                assert_eq!(entry.timestamp.year(), 2019);
            }
        }
    }
}
