//! Determines the branch (or detached commit) a repository is on.

use std::path::Path;

use crate::config::SourceLinkConfig;
use crate::fs::{read_optional, FileSystem};
use crate::locator::METADATA_DIR;
use crate::types::Result;

const SYMBOLIC_REF_PREFIX: &str = "ref: ";

// Removed in this order, each as a plain substring.
const REF_NAMESPACES: [&str; 3] = ["refs/heads/", "refs/remotes/", "refs/tags/"];

/// Shortens a full ref name such as `refs/heads/main` to `main`.
pub fn shorten_ref(reference: &str) -> String {
    REF_NAMESPACES
        .iter()
        .fold(reference.to_string(), |name, namespace| name.replace(namespace, ""))
}

/// Interprets the content of a `HEAD` file.
///
/// A symbolic ref is shortened; anything else is returned as-is (detached HEAD).
pub fn parse_head(content: &str) -> Option<String> {
    let head = content.trim();
    let branch = match head.strip_prefix(SYMBOLIC_REF_PREFIX) {
        Some(reference) => shorten_ref(reference.trim()),
        None => head.to_string(),
    };
    (!branch.is_empty()).then_some(branch)
}

/// Resolves the branch for the repository rooted at `root`.
///
/// The configured environment branch wins; otherwise `.git/HEAD` is read.
pub fn resolve_branch(
    config: &SourceLinkConfig,
    fs: &dyn FileSystem,
    root: &Path,
) -> Result<Option<String>> {
    if let Some(branch) = config.env_branch() {
        return Ok(Some(branch.to_string()));
    }

    let head_path = root.join(METADATA_DIR).join("HEAD");
    Ok(read_optional(fs, &head_path)?.and_then(|content| parse_head(&content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::OsFileSystem;
    use tempfile::TempDir;

    #[test]
    fn test_parse_symbolic_heads() {
        assert_eq!(parse_head("ref: refs/heads/main\n"), Some("main".to_string()));
        assert_eq!(
            parse_head("ref: refs/heads/feature/docs\n"),
            Some("feature/docs".to_string())
        );
        assert_eq!(parse_head("ref: refs/tags/v1.0\n"), Some("v1.0".to_string()));
        assert_eq!(
            parse_head("ref: refs/remotes/origin/main"),
            Some("origin/main".to_string())
        );
    }

    #[test]
    fn test_parse_detached_head() {
        let sha = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(parse_head(&format!("{}\n", sha)), Some(sha.to_string()));
    }

    #[test]
    fn test_parse_empty_head() {
        assert_eq!(parse_head(""), None);
        assert_eq!(parse_head("  \n"), None);
        assert_eq!(parse_head("ref: refs/heads/"), None);
    }

    #[test]
    fn test_shorten_ref_order_matters() {
        // Heads are removed before remotes, so the nested remotes marker is removed afterwards too.
        assert_eq!(shorten_ref("refs/heads/refs/remotes/x"), "x");
        // Every occurrence goes, not only a leading one.
        assert_eq!(shorten_ref("refs/heads/a/refs/heads/b"), "a/b");
        // "refs/tags/" is only formed once "refs/heads/" has been removed.
        assert_eq!(shorten_ref("refs/refs/heads/tags/v1"), "v1");
        assert_eq!(shorten_ref("main"), "main");
    }

    #[test]
    fn test_environment_branch_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();

        let config = SourceLinkConfig::default();
        let local = resolve_branch(&config, &OsFileSystem, dir.path()).unwrap();
        assert_eq!(local, Some("main".to_string()));

        let config = SourceLinkConfig::default().with_branch_override("release/2.0");
        let overridden = resolve_branch(&config, &OsFileSystem, dir.path()).unwrap();
        assert_eq!(overridden, Some("release/2.0".to_string()));
    }

    #[test]
    fn test_missing_head_is_unresolved() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();

        let config = SourceLinkConfig::default();
        let branch = resolve_branch(&config, &OsFileSystem, dir.path()).unwrap();
        assert_eq!(branch, None);
    }
}
