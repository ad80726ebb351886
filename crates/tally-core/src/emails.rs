//! Email address extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Regex for email addresses, with the user and domain parts captured.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z0-9._%+-]+)@([A-Za-z0-9.-]+\.[A-Za-z]{2,})\b").expect("valid regex")
});

/// One extracted email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMatch {
    /// The full address as it appeared in the text.
    pub address: String,
    /// The part before the `@`.
    pub user: String,
    /// The part after the `@`, including the TLD.
    pub domain: String,
}

/// Extract every email address from the text, in order of appearance.
///
/// Duplicates are kept; de-duplication is the contact store's concern.
/// Returns an empty vec when nothing matches — the caller decides
/// whether that is an error for its context.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract(text: &str) -> Vec<EmailMatch> {
    EMAIL_PATTERN
        .captures_iter(text)
        .map(|caps| EmailMatch {
            address: caps[0].to_string(),
            user: caps[1].to_string(),
            domain: caps[2].to_string(),
        })
        .collect()
}
