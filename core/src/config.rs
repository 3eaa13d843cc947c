//! Process-scoped configuration: the disable switch and the CI branch override.
//!
//! Both values come from the environment and are read exactly once. Everything
//! downstream receives a `SourceLinkConfig` by reference instead of consulting
//! the environment itself.

use once_cell::sync::Lazy;
use std::env;

/// Branch-name variables, highest priority first.
pub const BRANCH_ENV_VARS: [&str; 8] = [
    "SRCLINK_SOURCE_BRANCH_NAME", // generic override
    "GITHUB_REF_NAME",            // GitHub Actions
    "APPVEYOR_REPO_BRANCH",       // AppVeyor
    "Git_Branch",                 // TeamCity
    "CI_BUILD_REF_NAME",          // GitLab CI
    "GIT_LOCAL_BRANCH",           // Jenkins
    "GIT_BRANCH",                 // Jenkins
    "BUILD_SOURCEBRANCHNAME",     // Azure Pipelines
];

/// Set to `1`, `true` or `yes` to turn every lookup into "no detail".
pub const DISABLE_ENV_VAR: &str = "SRCLINK_DISABLE_GIT_FEATURES";

static GLOBAL_CONFIG: Lazy<SourceLinkConfig> = Lazy::new(SourceLinkConfig::from_env);

/// Immutable settings shared by the repo cache, branch resolver and raw-link rewriter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLinkConfig {
    /// When set, lookups return `None` without touching the filesystem.
    pub disabled: bool,
    /// Branch supplied by the environment; wins over whatever `HEAD` says.
    pub env_branch: Option<String>,
}

impl SourceLinkConfig {
    /// The process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static SourceLinkConfig {
        &GLOBAL_CONFIG
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_branch = BRANCH_ENV_VARS.iter().find_map(|name| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(|value| {
                    tracing::debug!(
                        variable = *name,
                        branch = %value,
                        "branch taken from environment"
                    );
                    value
                })
        });

        let disabled = lookup(DISABLE_ENV_VAR)
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )
            })
            .unwrap_or(false);

        SourceLinkConfig {
            disabled,
            env_branch,
        }
    }

    /// Forces `branch` for every repository, ahead of any environment variable.
    pub fn with_branch_override(mut self, branch: impl Into<String>) -> Self {
        let branch = branch.into();
        if !branch.is_empty() {
            self.env_branch = Some(branch);
        }
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn env_branch(&self) -> Option<&str> {
        self.env_branch.as_deref()
    }
}
