//! Coachbot reply engine
//!
//! A single-pass, rule-based reply pipeline: raw conversation input is
//! normalized into typed turns, then a reply is assembled from keyword
//! rules, a focus digest of recent user turns, blocker advisories, and a
//! random sample of idea prompts. The engine is fully synchronous, holds no
//! state between invocations, and never fails: malformed input degrades to
//! an empty conversation rather than an error.

pub mod blockers;
pub mod focus;
pub mod ideas;
pub mod keywords;
pub mod reply;
pub mod turn;

// Re-export the main entry points at the crate root for convenience
pub use reply::{generate, respond, CLOSING, WELCOME};
pub use turn::{normalize, Role, Turn};
