//! Converts raw-content URLs into browsable-file URLs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SourceLinkConfig;

static GITHUB_RAW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://raw\.githubusercontent\.com/([^/]+)/([^/]+)/([^/]+)/(.+)$")
        .expect("Invalid static raw content regex")
});

/// Rewrites `https://raw.githubusercontent.com/{owner}/{repo}/{ref}/{path}` to the
/// matching `https://github.com/{owner}/{repo}/blob/{ref}/{path}` page.
///
/// When the configuration carries an environment branch it replaces `{ref}`.
/// Anything that does not match is returned unchanged.
pub fn rewrite_raw_url(config: &SourceLinkConfig, url: &str) -> String {
    let Some(captures) = GITHUB_RAW_REGEX.captures(url) else {
        return url.to_string();
    };

    let reference = config.env_branch().unwrap_or(&captures[3]);
    format!(
        "https://github.com/{}/{}/blob/{}/{}",
        &captures[1], &captures[2], reference, &captures[4]
    )
}
