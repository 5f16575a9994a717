//! Page title extraction.

use regex::Regex;
use sitedown_core::{Result, SitedownError};
use std::sync::LazyLock;

/// Regex for a level-1 heading line: `# Title`
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t](.*)$").unwrap());

/// Return the text of the first `# ` heading in the document.
///
/// Fails with [`SitedownError::NoTitleFound`] when there is none.
pub fn extract_title(markdown: &str) -> Result<String> {
    TITLE_RE
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or(SitedownError::NoTitleFound)
}
