//! Finds the repository root owning a directory.
//!
//! A directory is a root when it contains a `.git` *directory*. Linked worktrees
//! and submodules keep a `.git` *file* that redirects elsewhere; those are not
//! recognized as roots and the walk carries on upward past them.

use std::path::{Path, PathBuf};

use crate::error::GitError;
use crate::fs::{EntryKind, FileSystem};
use crate::types::Result;

/// Name of the metadata directory inside a repository root.
pub const METADATA_DIR: &str = ".git";

/// Returns true when `dir` holds a `.git` directory.
pub fn is_repo_root(fs: &dyn FileSystem, dir: &Path) -> Result<bool> {
    let metadata = dir.join(METADATA_DIR);
    match fs
        .entry_kind(&metadata)
        .map_err(|err| GitError::fs(&metadata, err))?
    {
        Some(EntryKind::Directory) => {
            tracing::debug!(root = %dir.display(), "found repository root");
            Ok(true)
        }
        Some(EntryKind::File) => {
            tracing::debug!(
                path = %metadata.display(),
                "ignoring .git redirect file; worktree metadata is unsupported"
            );
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Walks from `start` (inclusive) towards the filesystem root and returns the
/// first repository root found.
pub fn find_repo_root(fs: &dyn FileSystem, start: &Path) -> Result<Option<PathBuf>> {
    for dir in start.ancestors() {
        if is_repo_root(fs, dir)? {
            return Ok(Some(dir.to_path_buf()));
        }
    }
    Ok(None)
}
