//! A Rust library that finds the git repository owning a file and turns source
//! locations into "view source" links on hosting providers.
//!
//! Repository metadata is read straight from the `.git` directory; the `git`
//! executable is not needed. Lookups are memoized per directory in a
//! thread-safe [`RepoCache`], so large documentation builds can share one
//! cache across worker threads.
//!

pub mod error;
pub mod types;
pub mod models;
pub mod config;
pub mod fs;
pub mod locator;
pub mod git_config;
pub mod branch;
pub mod repository;
pub mod cache;
pub mod raw_link;

// Link providers
pub mod providers;

// Feature-gated modules
#[cfg(feature = "async")]
pub mod async_cache;

// Re-export key types
pub use crate::cache::RepoCache;
pub use crate::config::SourceLinkConfig;
pub use crate::error::GitError;
pub use crate::models::{FileDetail, RepoRecord, SourceLocation};
pub use crate::providers::build_url;
pub use crate::raw_link::rewrite_raw_url;
pub use crate::types::{GitUrl, Result};

// Conditional re-exports based on features
#[cfg(feature = "async")]
pub use crate::async_cache::AsyncRepoCache;

pub mod prelude {
    //! Convenient import for common srclink types.
    pub use crate::cache::RepoCache;
    pub use crate::config::SourceLinkConfig;
    pub use crate::error::GitError;
    pub use crate::models::*;
    pub use crate::providers::{build_url, provider_for_host, LinkProvider, ProviderType};
    pub use crate::raw_link::rewrite_raw_url;
    pub use crate::types::{GitUrl, Result};

    #[cfg(feature = "async")]
    pub use crate::async_cache::AsyncRepoCache;
}
