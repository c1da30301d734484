//! Focus digest: condensed recap of recent user input
//!
//! The digest frames a reply by echoing back what the user has been
//! talking about. It is built from at most the last three user turns.

use crate::turn::Turn;

/// Separator between digest segments
pub const SEPARATOR: &str = " • ";

/// How many trailing user turns the digest covers
pub const WINDOW: usize = 3;

/// Condense the last few user turns into a short digest
///
/// User turns are taken in chronological order; internal whitespace runs
/// are collapsed to single spaces. Returns `None` when the conversation
/// has no user turns or the digest would be empty.
pub fn digest(turns: &[Turn]) -> Option<String> {
    let condensed: Vec<String> = turns
        .iter()
        .filter(|t| t.is_user())
        .map(|t| t.content.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    let start = condensed.len().saturating_sub(WINDOW);
    let joined = condensed[start..].join(SEPARATOR);

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
