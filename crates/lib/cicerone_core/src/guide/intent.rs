//! Save-directive detection in free-text chat input.
//!
//! Pure parsing, no I/O — the orchestrator calls this before touching
//! either the provider or the store.

use regex::Regex;

/// Extract the place name from a `save <place>` directive, if present.
///
/// Matching is case-insensitive and positional anywhere in the text, so
/// "Please save the Louvre" extracts "the Louvre". The captured name is
/// trimmed; an empty capture yields `None`.
pub fn parse_save_directive(text: &str) -> Option<String> {
    let pattern = Regex::new(r"(?i)save\s+(.+)").ok()?;
    let captures = pattern.captures(text)?;
    let place = captures.get(1)?.as_str().trim();

    if place.is_empty() {
        return None;
    }

    Some(place.to_string())
}
