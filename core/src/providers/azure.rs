//! Azure Repos provider implementation (dev.azure.com and legacy visualstudio.com hosts).

use crate::providers::{BlobTarget, LinkProvider, ProviderType};
use crate::types::is_commit_id;

/// Azure Repos provider implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AzureReposProvider;

impl LinkProvider for AzureReposProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::AzureRepos
    }

    fn matches_host(&self, host: &str) -> bool {
        host == "dev.azure.com" || host.ends_with(".visualstudio.com")
    }

    fn blob_url(&self, target: &BlobTarget<'_>) -> String {
        // GC pins a commit, GB names a branch.
        let version = if is_commit_id(target.branch) { "GC" } else { "GB" };
        let mut url = format!(
            "{}?path={}&version={}{}",
            target.repo.base(),
            target.path,
            version,
            target.branch
        );
        if target.line > 0 {
            url.push_str(&format!("&line={}", target.line));
        }
        url
    }
}
