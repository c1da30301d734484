//! Reply assembly: the single entry point of the engine pipeline
//!
//! Control flow: find the latest user turn, let a keyword rule
//! short-circuit if one matches, otherwise combine the focus digest,
//! blocker advisories, and a random idea sample into a multi-paragraph
//! reply.

use rand::Rng;

use crate::turn::Turn;
use crate::{blockers, focus, ideas, keywords};

/// Fixed invitation used when the conversation has no user turn
pub const WELCOME: &str = "Hi there! Describe what you're working on and I'll help you figure out the next step.";

/// Fixed closing sentence appended to every assembled reply
pub const CLOSING: &str = "What feels like the right next move to you?";

/// Label prefixing the focus digest block
const FRAMING_LABEL: &str = "Framing:";

/// Label heading the blockers block
const BLOCKERS_LABEL: &str = "Possible blockers:";

/// Label heading the next-steps block
const NEXT_STEPS_LABEL: &str = "Next steps:";

/// Compute a reply for a normalized conversation
///
/// Never fails: a conversation without a user turn yields the fixed
/// [`WELCOME`] invitation. The random source is injected so callers and
/// tests control the idea sample.
pub fn generate<R: Rng + ?Sized>(turns: &[Turn], rng: &mut R) -> String {
    let Some(last_user) = turns.iter().rev().find(|t| t.is_user()) else {
        return WELCOME.to_string();
    };

    // Keyword rules take precedence over everything else
    if let Some(response) = keywords::match_keyword(&last_user.content) {
        tracing::debug!("keyword rule matched, short-circuiting reply assembly");
        return response.to_string();
    }

    let mut blocks = Vec::new();

    if let Some(digest) = focus::digest(turns) {
        blocks.push(format!("{} {}", FRAMING_LABEL, digest));
    }

    let advisories = blockers::detect(&last_user.content);
    blocks.push(bullet_block(BLOCKERS_LABEL, &advisories));

    let idea_sample = ideas::sample(rng);
    blocks.push(bullet_block(NEXT_STEPS_LABEL, &idea_sample));

    blocks.push(CLOSING.to_string());

    tracing::debug!(
        advisories = advisories.len(),
        ideas = idea_sample.len(),
        "assembled reply"
    );

    blocks.join("\n\n")
}

/// Compute a reply using the thread-local random source
pub fn respond(turns: &[Turn]) -> String {
    generate(turns, &mut rand::thread_rng())
}

/// Render a labeled block with one bullet per item
fn bullet_block(label: &str, items: &[&str]) -> String {
    let mut block = String::from(label);
    for item in items {
        block.push_str("\n- ");
        block.push_str(item);
    }
    block
}
