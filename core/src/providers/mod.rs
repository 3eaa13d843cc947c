//! Providers for different source control hosting platforms.
//!
//! Each provider knows which hosts it serves and how to spell a browsable-file
//! URL for them. [`build_url`] walks an ordered table of providers and uses the
//! first one whose host predicate matches; adding a host means adding a table
//! row, nothing else.

pub mod azure;
pub mod bitbucket;
pub mod github;

use std::str::FromStr;

use crate::models::SourceLocation;
use crate::types::GitUrl;

/// Enum representing different provider types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    GitHub,
    Bitbucket,
    AzureRepos,
}

/// Everything a provider needs to render one link.
#[derive(Debug, Clone, Copy)]
pub struct BlobTarget<'a> {
    pub repo: &'a GitUrl,
    pub branch: &'a str,
    /// Forward-slash path relative to the repository root.
    pub path: &'a str,
    /// `0` means no line.
    pub line: u32,
}

/// Trait for provider-specific link formatting.
pub trait LinkProvider: Sync {
    /// Gets the provider type.
    fn provider_type(&self) -> ProviderType;

    /// Checks if a host belongs to this provider.
    fn matches_host(&self, host: &str) -> bool;

    /// Formats the browsable-file URL.
    fn blob_url(&self, target: &BlobTarget<'_>) -> String;
}

/// Provider table, consulted in order.
static PROVIDERS: &[&dyn LinkProvider] = &[
    &github::GitHubProvider,
    &bitbucket::BitbucketProvider,
    &azure::AzureReposProvider,
];

/// Finds the provider serving `host`, if any.
pub fn provider_for_host(host: &str) -> Option<&'static dyn LinkProvider> {
    PROVIDERS.iter().copied().find(|p| p.matches_host(host))
}

/// Maps a source location to a provider-specific web URL.
///
/// # Returns
/// `None` when the repository address is not a URL or the host has no provider.
pub fn build_url(location: &SourceLocation) -> Option<String> {
    let repo = GitUrl::from_str(&location.repo).ok()?;
    let Some(provider) = provider_for_host(repo.host()) else {
        tracing::debug!(host = repo.host(), "no link provider for host");
        return None;
    };

    let path = location.path.replace('\\', "/");
    Some(provider.blob_url(&BlobTarget {
        repo: &repo,
        branch: &location.branch,
        path: &path,
        line: location.line,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_for_host() {
        assert_eq!(
            provider_for_host("github.com").map(|p| p.provider_type()),
            Some(ProviderType::GitHub)
        );
        assert_eq!(
            provider_for_host("bitbucket.org").map(|p| p.provider_type()),
            Some(ProviderType::Bitbucket)
        );
        assert_eq!(
            provider_for_host("dev.azure.com").map(|p| p.provider_type()),
            Some(ProviderType::AzureRepos)
        );
        assert_eq!(
            provider_for_host("contoso.visualstudio.com").map(|p| p.provider_type()),
            Some(ProviderType::AzureRepos)
        );
        assert!(provider_for_host("gitlab.com").is_none());
        assert!(provider_for_host("www.github.com").is_none());
    }

    #[test]
    fn test_build_github_url_with_and_without_line() {
        let mut location =
            SourceLocation::new("https://github.com/acme/docs", "main", "doc/a.md", 10);
        assert_eq!(
            build_url(&location).as_deref(),
            Some("https://github.com/acme/docs/blob/main/doc/a.md#L10")
        );

        location.line = 0;
        assert_eq!(
            build_url(&location).as_deref(),
            Some("https://github.com/acme/docs/blob/main/doc/a.md")
        );
    }

    #[test]
    fn test_build_url_from_scp_address() {
        let location = SourceLocation::new("git@github.com:acme/docs.git", "main", "doc/a.md", 0);
        assert_eq!(
            build_url(&location).as_deref(),
            Some("https://github.com/acme/docs/blob/main/doc/a.md")
        );
    }

    #[test]
    fn test_build_url_normalizes_backslashes() {
        let location = SourceLocation::new(
            "https://github.com/acme/docs",
            "main",
            "doc\\guide\\a.md",
            0,
        );
        assert_eq!(
            build_url(&location).as_deref(),
            Some("https://github.com/acme/docs/blob/main/doc/guide/a.md")
        );
    }

    #[test]
    fn test_build_url_absent_results() {
        let unsupported = SourceLocation::new("https://gitlab.com/acme/docs", "main", "a.md", 1);
        assert_eq!(build_url(&unsupported), None);

        let unparseable = SourceLocation::new("../relative/repo", "main", "a.md", 1);
        assert_eq!(build_url(&unparseable), None);
    }
}
