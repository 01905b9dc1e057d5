//! Fatal errors. Anything returned here aborts the run before the first
//! filesystem mutation; per-file problems are recorded in the
//! [`RunReport`](crate::report::RunReport) instead.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("source directory does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("source is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read source directory {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
