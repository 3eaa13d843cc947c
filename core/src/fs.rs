//! Filesystem access used while locating and reading repositories.
//!
//! All probing goes through the [`FileSystem`] trait so that lookups can be
//! observed (or refused) in tests.

use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};

use crate::error::GitError;
use crate::types::Result;

/// What kind of entry lives at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

/// Read-only filesystem operations needed by the locator and repository reader.
pub trait FileSystem: Send + Sync {
    /// Returns `Ok(None)` when nothing exists at `path`.
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(meta) if meta.is_file() => Ok(Some(EntryKind::File)),
            Ok(_) => Ok(Some(EntryKind::Other)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Reads a text file, treating a missing file as `None`. Other errors propagate.
pub(crate) fn read_optional(fs: &dyn FileSystem, path: &Path) -> Result<Option<String>> {
    match fs.read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(GitError::fs(path, err)),
    }
}

/// Makes `path` absolute against the current directory and folds `.` and `..`
/// lexically. Symlinks are not resolved.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|_| GitError::WorkingDirectoryInaccessible)?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Joins the components of a relative path with `/`, whatever the platform separator.
///
/// Returns `None` if any component is not valid UTF-8.
pub fn to_slash(path: &Path) -> Option<String> {
    let components = path
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(components.join("/").replace('\\', "/"))
}
