//! Extracts remotes from `.git/config`.
//!
//! Only `[remote "NAME"]` sections and their `url` keys are understood. Anything
//! else, including malformed lines, is skipped without complaint.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RemoteEntry;

static REMOTE_SECTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\[remote\s+"([^"]*)"\]$"#).expect("Invalid static remote section regex")
});

static URL_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^url\s*=\s*(.*)$").expect("Invalid static url key regex"));

/// Returns every `(remote, url)` pair in file order.
pub fn parse_remotes(text: &str) -> Vec<RemoteEntry> {
    let mut remotes = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines().map(str::trim) {
        if let Some(captures) = REMOTE_SECTION_REGEX.captures(line) {
            current = Some(captures[1].to_string());
        } else if line.starts_with('[') && line.ends_with(']') {
            current = None;
        } else if let (Some(name), Some(captures)) = (&current, URL_KEY_REGEX.captures(line)) {
            remotes.push(RemoteEntry {
                name: name.clone(),
                url: captures[1].trim().to_string(),
            });
        }
    }

    remotes
}

/// Picks `origin` if configured, otherwise the first remote with a url.
pub fn select_remote(remotes: &[RemoteEntry]) -> Option<&RemoteEntry> {
    let usable = || remotes.iter().filter(|r| !r.url.is_empty());
    usable()
        .find(|r| r.name == "origin")
        .or_else(|| usable().next())
}
