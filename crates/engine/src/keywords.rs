//! Keyword rules: trigger phrases mapped to canned responses
//!
//! Rules are checked in table order against the latest user turn and the
//! first match wins. Matching is plain case-insensitive substring
//! containment, deliberately not word-boundary-safe (unlike the blocker
//! detector, which is).

/// A static trigger-phrase-to-canned-response mapping
///
/// Triggers are lowercase phrases; the rule matches if any trigger appears
/// as a substring of the lowercased input.
pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

/// Canned reply for greetings
pub const GREETING_REPLY: &str = "Hey! Tell me a bit about what you're building or planning, and we'll figure out the next step together.";

/// Canned reply for thanks
pub const THANKS_REPLY: &str =
    "You're welcome! Come back whenever you want to talk something through.";

/// Canned reply for farewells
pub const FAREWELL_REPLY: &str = "Good luck out there. Go make something happen!";

/// Ordered rule table; earlier rules take precedence
pub static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["hello", "hi there", "good morning", "good afternoon", "howdy"],
        response: GREETING_REPLY,
    },
    KeywordRule {
        triggers: &["thank", "appreciate"],
        response: THANKS_REPLY,
    },
    KeywordRule {
        triggers: &["goodbye", "see you", "farewell"],
        response: FAREWELL_REPLY,
    },
];

/// Return the canned response of the first matching rule, if any
///
/// A match short-circuits the rest of the reply pipeline and becomes the
/// entire reply.
pub fn match_keyword(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|trigger| lowered.contains(trigger)))
        .map(|rule| rule.response)
}
