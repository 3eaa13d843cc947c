//! GitHub provider implementation.

use crate::providers::{BlobTarget, LinkProvider, ProviderType};

/// GitHub provider implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubProvider;

impl LinkProvider for GitHubProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::GitHub
    }

    fn matches_host(&self, host: &str) -> bool {
        host == "github.com"
    }

    fn blob_url(&self, target: &BlobTarget<'_>) -> String {
        let mut url = format!(
            "{}://github.com{}/blob/{}/{}",
            target.repo.scheme(),
            target.repo.repo_path(),
            target.branch,
            target.path
        );
        if target.line > 0 {
            url.push_str(&format!("#L{}", target.line));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GitUrl;
    use std::str::FromStr;

    #[test]
    fn test_blob_url_keeps_scheme() {
        let repo = GitUrl::from_str("http://github.com/acme/docs").unwrap();
        let target = BlobTarget {
            repo: &repo,
            branch: "v1.0",
            path: "README.md",
            line: 3,
        };
        assert_eq!(
            GitHubProvider.blob_url(&target),
            "http://github.com/acme/docs/blob/v1.0/README.md#L3"
        );
    }
}
