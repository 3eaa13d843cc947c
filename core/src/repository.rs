//! Provides the Repository reader: turns a repository root into a `RepoRecord`.

use crate::branch::resolve_branch;
use crate::config::SourceLinkConfig;
use crate::fs::{read_optional, FileSystem};
use crate::git_config::{parse_remotes, select_remote};
use crate::locator::{is_repo_root, METADATA_DIR};
use crate::models::{RemoteEntry, RepoRecord};
use crate::types::Result;

use std::path::{Path, PathBuf};

/// A local repository root, read directly from its `.git` directory.
///
/// Nothing here runs `git`; the metadata files are parsed in-process.
pub struct Repository<'a> {
    pub(crate) location: PathBuf,
    fs: &'a dyn FileSystem,
}

impl<'a> Repository<'a> {
    /// Opens the repository rooted at `root`.
    ///
    /// # Returns
    /// `None` when `root` has no `.git` directory.
    ///
    /// # Errors
    /// Returns `GitError::FileSystemError` if a metadata lookup fails.
    pub fn open<P: AsRef<Path>>(fs: &'a dyn FileSystem, root: P) -> Result<Option<Repository<'a>>> {
        let root = root.as_ref();
        if !is_repo_root(fs, root)? {
            return Ok(None);
        }
        Ok(Some(Repository {
            location: root.to_path_buf(),
            fs,
        }))
    }

    /// Opens `root` without checking for the metadata directory.
    pub(crate) fn open_unchecked(fs: &'a dyn FileSystem, root: &Path) -> Repository<'a> {
        Repository {
            location: root.to_path_buf(),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.location
    }

    /// Lists the configured remotes in file order.
    ///
    /// A missing `.git/config` yields an empty list.
    pub fn list_remotes(&self) -> Result<Vec<RemoteEntry>> {
        let config_path = self.location.join(METADATA_DIR).join("config");
        Ok(read_optional(self.fs, &config_path)?
            .map(|text| parse_remotes(&text))
            .unwrap_or_default())
    }

    /// The url of `origin`, or of the first remote if there is no `origin`.
    pub fn preferred_remote_url(&self) -> Result<Option<String>> {
        let remotes = self.list_remotes()?;
        Ok(select_remote(&remotes).map(|remote| remote.url.clone()))
    }

    /// The active branch, honoring the environment override in `config`.
    pub fn current_branch(&self, config: &SourceLinkConfig) -> Result<Option<String>> {
        resolve_branch(config, self.fs, &self.location)
    }

    /// Builds the record for this repository.
    ///
    /// # Returns
    /// `None` if there is no usable remote or no branch could be determined.
    pub fn record(&self, config: &SourceLinkConfig) -> Result<Option<RepoRecord>> {
        let Some(remote_url) = self.preferred_remote_url()? else {
            tracing::debug!(root = %self.location.display(), "repository has no remote url");
            return Ok(None);
        };
        let Some(branch) = self.current_branch(config)? else {
            tracing::debug!(root = %self.location.display(), "repository branch is unresolved");
            return Ok(None);
        };

        Ok(Some(RepoRecord {
            root_path: self.location.clone(),
            remote_url,
            branch,
        }))
    }
}
