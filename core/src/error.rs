//! Defines the error types used throughout the srclink library.
//!
//! Most "failures" in this crate are not errors at all: a file outside any
//! repository, an unparseable remote address or an unsupported host all come
//! back as `None`. Only genuine filesystem trouble ends up here.
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while resolving source links.
#[derive(Debug, Error)]
pub enum GitError {
    /// Failed to access the current working directory, needed to absolutize a relative path.
    #[error("Unable to access current working directory")]
    WorkingDirectoryInaccessible,

    /// The provided string is not a usable repository URL.
    #[error("git URL is invalid: {0}")]
    InvalidUrl(String),

    /// Reading repository metadata failed for a reason other than the file being absent,
    /// e.g. permissions or an I/O error.
    #[error("File system error at {path:?}: {source}")]
    FileSystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A blocking lookup task panicked or was cancelled.
    #[cfg(feature = "async")]
    #[error("Blocking lookup task failed: {0}")]
    BlockingTaskFailed(String),
}

impl GitError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GitError::FileSystemError {
            path: path.into(),
            source,
        }
    }
}
