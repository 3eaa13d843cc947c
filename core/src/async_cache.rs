//! Provides asynchronous access to the repo cache using tokio.
//!
//! Lookups are plain blocking filesystem reads, so they run on tokio's blocking
//! pool rather than on the async workers.

use crate::cache::RepoCache;
use crate::error::GitError;
use crate::models::{FileDetail, RepoRecord};
use crate::types::Result;

use std::path::PathBuf;
use std::sync::Arc;

/// A shared [`RepoCache`] with async lookups.
#[derive(Clone)]
pub struct AsyncRepoCache {
    inner: Arc<RepoCache>,
}

impl AsyncRepoCache {
    pub fn new(inner: Arc<RepoCache>) -> Self {
        AsyncRepoCache { inner }
    }

    /// The underlying synchronous cache; both views share entries.
    pub fn blocking(&self) -> &RepoCache {
        &self.inner
    }

    /// Async version of [`RepoCache::file_detail`].
    ///
    /// # Errors
    /// Returns `GitError::BlockingTaskFailed` if the blocking task panics,
    /// in addition to the errors of the synchronous call.
    pub async fn file_detail<P: Into<PathBuf>>(&self, path: P) -> Result<Option<FileDetail>> {
        let cache = Arc::clone(&self.inner);
        let path = path.into();
        tokio::task::spawn_blocking(move || cache.file_detail(path))
            .await
            .map_err(|err| GitError::BlockingTaskFailed(err.to_string()))?
    }

    /// Async version of [`RepoCache::resolve`].
    pub async fn resolve<P: Into<PathBuf>>(&self, directory: P) -> Result<Option<Arc<RepoRecord>>> {
        let cache = Arc::clone(&self.inner);
        let directory = directory.into();
        tokio::task::spawn_blocking(move || cache.resolve(directory))
            .await
            .map_err(|err| GitError::BlockingTaskFailed(err.to_string()))?
    }
}
