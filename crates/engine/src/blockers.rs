//! Blocker detection: topic markers mapped to advisory notes
//!
//! The latest user turn is scanned for three topic vocabularies (time,
//! money, confidence) with case-insensitive word-boundary patterns. Every
//! matching rule contributes its advisory, in rule order. When nothing
//! matches, a single default momentum advisory is returned, so the result
//! is never empty.

use regex::Regex;
use std::sync::LazyLock;

/// A static topic-pattern-to-advisory mapping; rules are not mutually exclusive
pub struct BlockerRule {
    pattern: Regex,
    advisory: &'static str,
}

/// Advisory for time and scheduling pressure
pub const TIME_ADVISORY: &str = "Time feels tight. Try blocking out two short 30-minute sessions this week rather than waiting for a free day.";

/// Advisory for money and budget concerns
pub const BUDGET_ADVISORY: &str = "Budget is a concern. Sketch the cheapest possible version first and put a number on it before spending anything.";

/// Advisory for confidence dips
pub const CONFIDENCE_ADVISORY: &str = "Confidence wobbles are normal. Share the idea with one person you trust and ask for a single piece of honest feedback.";

/// Default advisory when no topic marker matches
pub const MOMENTUM_ADVISORY: &str = "No obvious blockers came up. The main risk now is losing momentum, so pick one small step and do it today.";

/// Ordered rule table; all matching rules contribute (compiled once)
static BLOCKER_RULES: LazyLock<Vec<BlockerRule>> = LazyLock::new(|| {
    vec![
        BlockerRule {
            pattern: topic_pattern(r"time|schedule|schedules|busy|deadline|deadlines"),
            advisory: TIME_ADVISORY,
        },
        BlockerRule {
            pattern: topic_pattern(r"money|budget|cost|costs|expensive|afford"),
            advisory: BUDGET_ADVISORY,
        },
        BlockerRule {
            pattern: topic_pattern(
                r"confidence|confident|unsure|worry|worried|worrying|nervous|doubt",
            ),
            advisory: CONFIDENCE_ADVISORY,
        },
    ]
});

/// Compile a case-insensitive word-boundary pattern over a topic vocabulary
fn topic_pattern(vocabulary: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", vocabulary)).expect("blocker pattern is valid")
}

/// Scan the latest user text for topic markers and collect advisories
///
/// Always returns at least one entry: the default momentum advisory when
/// no topic pattern matches.
pub fn detect(text: &str) -> Vec<&'static str> {
    let advisories: Vec<&'static str> = BLOCKER_RULES
        .iter()
        .filter(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.advisory)
        .collect();

    if advisories.is_empty() {
        vec![MOMENTUM_ADVISORY]
    } else {
        advisories
    }
}
