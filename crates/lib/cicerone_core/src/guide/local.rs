//! Local deterministic text provider.
//!
//! Produces repeatable replies with no external dependencies — useful for
//! testing and offline development.

use super::ChatTurn;

/// Produce a deterministic reply for the given conversation.
///
/// Echoes the final turn (and the system framing, when present) so tests
/// can assert that prompt assembly reached the provider intact.
pub fn complete(system: Option<&str>, turns: &[ChatTurn]) -> String {
    let last = turns.last().map(|t| t.content.as_str()).unwrap_or("");

    match system {
        Some(s) => format!("[local guide] {s}\n\n{last}"),
        None => format!("[local guide] {last}"),
    }
}
