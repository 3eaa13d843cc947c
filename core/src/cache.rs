//! Per-directory memoization of repository lookups.
//!
//! Every directory key owns a [`OnceCell`]. Concurrent first-time callers for the
//! same key block on that cell while exactly one of them computes the value, so
//! all readers observe the same `Arc<RepoRecord>` (or the same negative result).
//! The map lock is only held long enough to fetch or insert a cell, never while
//! touching the filesystem. A directory that is not a root is resolved through
//! its parent's cell, so siblings under a known root cost one lookup each.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::{Lazy, OnceCell};

use crate::config::SourceLinkConfig;
use crate::fs::{absolutize, to_slash, FileSystem, OsFileSystem};
use crate::locator::is_repo_root;
use crate::models::{FileDetail, RepoRecord};
use crate::repository::Repository;
use crate::types::Result;

type Slot = Arc<OnceCell<Option<Arc<RepoRecord>>>>;

static SHARED: Lazy<Arc<RepoCache>> =
    Lazy::new(|| Arc::new(RepoCache::new(Arc::new(SourceLinkConfig::global().clone()))));

/// Thread-safe get-or-compute cache from directory to owning repository.
pub struct RepoCache {
    config: Arc<SourceLinkConfig>,
    fs: Arc<dyn FileSystem>,
    entries: Mutex<HashMap<PathBuf, Slot>>,
}

impl RepoCache {
    /// Creates a cache over the real filesystem.
    pub fn new(config: Arc<SourceLinkConfig>) -> Self {
        Self::with_file_system(config, Arc::new(OsFileSystem))
    }

    /// The process-wide cache over the real filesystem, using [`SourceLinkConfig::global`].
    ///
    /// Every caller gets the same instance, so lookups made through one handle
    /// are hits for all others.
    pub fn shared() -> Arc<RepoCache> {
        Arc::clone(&SHARED)
    }

    pub fn with_file_system(config: Arc<SourceLinkConfig>, fs: Arc<dyn FileSystem>) -> Self {
        RepoCache {
            config,
            fs,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &SourceLinkConfig {
        &self.config
    }

    /// Returns the repository owning `directory`, or `None` if it is not under version control.
    ///
    /// When the configuration is disabled this returns `None` without any filesystem access.
    ///
    /// # Errors
    /// Returns `GitError::FileSystemError` on I/O failures other than "not found".
    /// Failed lookups are not cached.
    pub fn resolve<P: AsRef<Path>>(&self, directory: P) -> Result<Option<Arc<RepoRecord>>> {
        if self.config.disabled {
            return Ok(None);
        }

        let directory = absolutize(directory.as_ref())?;
        self.resolve_absolute(&directory)
    }

    /// Returns the source details for `path`, or `None` when there are none.
    ///
    /// When the configuration is disabled this returns `None` without any filesystem access.
    pub fn file_detail<P: AsRef<Path>>(&self, path: P) -> Result<Option<FileDetail>> {
        if self.config.disabled {
            return Ok(None);
        }

        let path = absolutize(path.as_ref())?;
        let Some(directory) = path.parent() else {
            return Ok(None);
        };
        let Some(record) = self.resolve_absolute(directory)? else {
            return Ok(None);
        };
        let Ok(relative) = path.strip_prefix(&record.root_path) else {
            return Ok(None);
        };
        let Some(relative_path) = to_slash(relative) else {
            tracing::debug!(path = %path.display(), "path is not valid UTF-8; no detail");
            return Ok(None);
        };

        Ok(Some(FileDetail {
            repo_url: record.repo_url(),
            branch: record.branch.clone(),
            relative_path,
        }))
    }

    /// Number of directories with a memoized result, positive or negative.
    pub fn len(&self) -> usize {
        self.lock_entries()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve_absolute(&self, directory: &Path) -> Result<Option<Arc<RepoRecord>>> {
        let slot = self.slot(directory);
        if let Some(cached) = slot.get() {
            tracing::trace!(directory = %directory.display(), "repo cache hit");
            return Ok(cached.clone());
        }
        slot.get_or_try_init(|| self.compute(directory)).cloned()
    }

    fn compute(&self, directory: &Path) -> Result<Option<Arc<RepoRecord>>> {
        tracing::trace!(directory = %directory.display(), "repo cache miss");
        let fs = self.fs.as_ref();

        if is_repo_root(fs, directory)? {
            let record = Repository::open_unchecked(fs, directory).record(&self.config)?;
            return Ok(record.map(Arc::new));
        }

        match directory.parent() {
            Some(parent) => self.resolve_absolute(parent),
            None => Ok(None),
        }
    }

    fn slot(&self, directory: &Path) -> Slot {
        let mut entries = self.lock_entries();
        Arc::clone(entries.entry(directory.to_path_buf()).or_default())
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Slot>> {
        // Cells are only ever inserted, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
