//! Defines core data types like repository URLs and commit ids.
use super::GitError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use std::{
    fmt,
    fmt::{Display, Formatter},
    result::Result as stdResult,
};
use url::Url;

/// A specialized `Result` type for source link operations.
pub type Result<A> = stdResult<A, GitError>;

// A `:port` segment left over once the `user@` part of an scp-like address is gone.
static SCP_PORT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\d+(/|$)").expect("Invalid static port regex"));

/// Rewrites a remote address into the https-style form the link builders understand.
///
/// scp-like addresses (`git@host:owner/repo.git`) become `https://host/owner/repo`.
/// Every address loses one trailing `/` and then one trailing `.git`. The result is
/// not validated; see [`GitUrl`] for that.
pub fn normalize_repo_address(address: &str) -> String {
    let mut repo = address.trim().to_string();

    if repo.starts_with("git") {
        if let Some(at) = repo.find('@') {
            let host_and_path = &repo[at + 1..];
            let without_port = SCP_PORT_REGEX.replace(host_and_path, "$1");
            repo = format!("https://{}", without_port.replacen(':', "/", 1));
        }
    }

    if let Some(stripped) = repo.strip_suffix('/') {
        repo.truncate(stripped.len());
    }
    if let Some(stripped) = repo.strip_suffix(".git") {
        repo.truncate(stripped.len());
    }
    repo
}

/// Represents a normalized, absolute repository URL with a host.
///
/// Can be created from a string using `FromStr`, which normalizes scp-like
/// addresses first and rejects anything that does not parse as an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitUrl {
    pub(crate) value: Url,
}

impl GitUrl {
    pub fn scheme(&self) -> &str {
        self.value.scheme()
    }

    /// The host name; always present for a parsed `GitUrl`.
    pub fn host(&self) -> &str {
        self.value.host_str().unwrap_or_default()
    }

    /// The URL path with any trailing slash removed, e.g. `/acme/docs`.
    pub fn repo_path(&self) -> &str {
        self.value.path().trim_end_matches('/')
    }

    /// The address without query or fragment, as `scheme://host[:port]/path`.
    pub fn base(&self) -> String {
        let mut base = format!("{}://{}", self.scheme(), self.host());
        if let Some(port) = self.value.port() {
            base.push_str(&format!(":{}", port));
        }
        base.push_str(self.repo_path());
        base
    }
}

impl FromStr for GitUrl {
    type Err = GitError;

    /// Parses a remote address into a `GitUrl`, returning `Err(GitError::InvalidUrl)` if
    /// the normalized form is not an absolute URL with a host.
    fn from_str(value: &str) -> Result<Self> {
        let normalized = normalize_repo_address(value);
        match Url::parse(&normalized) {
            Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(GitUrl { value: url }),
            _ => Err(GitError::InvalidUrl(value.to_string())),
        }
    }
}

impl Display for GitUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())
    }
}

/// Returns true when `value` looks like a full commit id: exactly 40 ASCII alphanumerics.
///
/// Anything else is treated as a branch or tag name by the link builders.
pub fn is_commit_id(value: &str) -> bool {
    value.len() == 40 && value.chars().all(|c| c.is_ascii_alphanumeric())
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scp_addresses() {
        let cases = vec![
            ("git@github.com:acme/docs.git", "https://github.com/acme/docs"),
            ("git@github.com:acme/docs", "https://github.com/acme/docs"),
            ("git@bitbucket.org:team/repo.git", "https://bitbucket.org/team/repo"),
            ("git@example.com:2222/acme/docs.git", "https://example.com/acme/docs"),
            ("git@example.com:2222", "https://example.com"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_repo_address(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_normalize_strips_slash_then_git_suffix() {
        assert_eq!(
            normalize_repo_address("https://github.com/acme/docs.git/"),
            "https://github.com/acme/docs"
        );
        assert_eq!(
            normalize_repo_address("https://github.com/acme/docs/"),
            "https://github.com/acme/docs"
        );
        // Only one of each is removed.
        assert_eq!(
            normalize_repo_address("https://github.com/acme/docs.git.git"),
            "https://github.com/acme/docs.git"
        );
    }

    #[test]
    fn test_normalize_leaves_non_scp_addresses() {
        assert_eq!(
            normalize_repo_address("https://user@github.com/acme/docs"),
            "https://user@github.com/acme/docs"
        );
        assert_eq!(
            normalize_repo_address("git://github.com/acme/docs.git"),
            "git://github.com/acme/docs"
        );
    }

    #[test]
    fn test_git_url_parts() {
        let url = GitUrl::from_str("git@github.com:acme/docs.git").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host(), "github.com");
        assert_eq!(url.repo_path(), "/acme/docs");
        assert_eq!(url.to_string(), "https://github.com/acme/docs");
    }

    #[test]
    fn test_git_url_keeps_explicit_port() {
        let url = GitUrl::from_str("https://git.example.com:8443/acme/docs.git").unwrap();
        assert_eq!(url.to_string(), "https://git.example.com:8443/acme/docs");
    }

    #[test]
    fn test_invalid_git_urls() {
        let invalid = vec!["", "acme/docs", "/path/to/repo.git", "not a url", "file:///tmp/repo"];

        for url in invalid {
            assert!(GitUrl::from_str(url).is_err(), "Expected invalid: {}", url);
        }
    }

    #[test]
    fn test_commit_id_detection() {
        assert!(is_commit_id("0123456789abcdef0123456789abcdef01234567"));
        assert!(is_commit_id("ZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ"));
        assert!(!is_commit_id("0123456789abcdef0123456789abcdef0123456"));
        assert!(!is_commit_id("0123456789abcdef0123456789abcdef012345678"));
        assert!(!is_commit_id("release/2.0"));
        assert!(!is_commit_id("0123456789abcdef0123456789abcdef0123456-"));
    }
}
