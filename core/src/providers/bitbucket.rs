//! Bitbucket provider implementation.

use crate::providers::{BlobTarget, LinkProvider, ProviderType};

/// Bitbucket Cloud provider implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitbucketProvider;

impl LinkProvider for BitbucketProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Bitbucket
    }

    fn matches_host(&self, host: &str) -> bool {
        host == "bitbucket.org"
    }

    fn blob_url(&self, target: &BlobTarget<'_>) -> String {
        let mut url = format!(
            "{}://bitbucket.org{}/src/{}/{}",
            target.repo.scheme(),
            target.repo.repo_path(),
            target.branch,
            target.path
        );
        if target.line > 0 {
            url.push_str(&format!("#lines-{}", target.line));
        }
        url
    }
}
