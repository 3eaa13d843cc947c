//! Provides structured types representing resolved repositories and source locations.

use std::path::PathBuf;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::GitUrl;

/// The resolved identity of the repository owning a subtree.
///
/// Produced once per repository root and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepoRecord {
    /// The directory containing the `.git` metadata directory.
    pub root_path: PathBuf,
    /// The url of the preferred remote, exactly as configured.
    pub remote_url: String,
    /// The active branch, tag or detached commit id. Never empty.
    pub branch: String,
}

impl RepoRecord {
    /// The remote url normalized to https form, or the raw remote if it is not a URL.
    pub fn repo_url(&self) -> String {
        match GitUrl::from_str(&self.remote_url) {
            Ok(url) => url.to_string(),
            Err(_) => self.remote_url.clone(),
        }
    }
}

/// One `(name, url)` pair read from a repository's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RemoteEntry {
    pub name: String,
    pub url: String,
}

/// The source details for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileDetail {
    /// Normalized repository URL, e.g. `https://github.com/acme/docs`.
    pub repo_url: String,
    pub branch: String,
    /// Path from the repository root, always `/`-separated.
    pub relative_path: String,
}

/// A provider-agnostic point in source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceLocation {
    /// Repository URL or scp-like address.
    pub repo: String,
    /// Branch name or commit id.
    pub branch: String,
    /// Path relative to the repository root.
    pub path: String,
    /// 1-based line; `0` means no specific line.
    pub line: u32,
}

impl SourceLocation {
    pub fn new(
        repo: impl Into<String>,
        branch: impl Into<String>,
        path: impl Into<String>,
        line: u32,
    ) -> Self {
        SourceLocation {
            repo: repo.into(),
            branch: branch.into(),
            path: path.into(),
            line,
        }
    }

    /// Builds a location pointing into the file described by `detail`.
    pub fn from_detail(detail: &FileDetail, line: u32) -> Self {
        SourceLocation {
            repo: detail.repo_url.clone(),
            branch: detail.branch.clone(),
            path: detail.relative_path.clone(),
            line,
        }
    }
}
