//! Explicit `{#id}` marker extraction
//!
//! A heading may end with a marker such as `# Title {#custom-id}`. The id is
//! everything between `{#` and the closing brace, taken verbatim.

use regex::Regex;
use std::sync::OnceLock;

/// Trailing marker: optional whitespace, `{#`, one or more non-brace
/// characters, `}`, optional whitespace, end of text.
///
/// Braces are excluded from the id, so only the last marker in the text can
/// be anchored at the end.
const MARKER_PATTERN: &str = r"\s*\{#([^{}]+)\}\s*$";

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(MARKER_PATTERN).expect("marker pattern is a valid regex"))
}

/// An id found in a trailing marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitId {
    /// The id, exactly as written between `{#` and `}`
    pub id: String,

    /// The text with the marker removed and trailing whitespace trimmed
    pub remaining_text: String,
}

/// Look for a trailing `{#id}` marker in `text`
///
/// # Parameters
/// * `text` - Text of the last plain-text inline of a heading
///
/// # Returns
/// * `Some(ExplicitId)` - A marker with a non-empty id ends the text
/// * `None` - No marker, an empty marker (`{#}`), or a marker that is not at the end
pub fn extract_explicit_id(text: &str) -> Option<ExplicitId> {
    let captures = marker_regex().captures(text)?;
    let marker = captures.get(0)?;
    let id = captures.get(1)?;

    Some(ExplicitId {
        id: id.as_str().to_string(),
        remaining_text: text[..marker.start()].trim_end().to_string(),
    })
}
