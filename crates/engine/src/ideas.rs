//! Idea pool: candidate next-step suggestions sampled into each reply

use rand::seq::SliceRandom;
use rand::Rng;

/// Candidate next-step suggestions
pub const IDEA_POOL: &[&str] = &[
    "Sketch the simplest version that could work and show it to one person.",
    "Write down the single question you most need answered.",
    "Set a 25-minute timer and work on the hardest part first.",
    "List three people who have done something similar and study how one of them started.",
    "Describe the idea in two sentences, as if explaining it to a stranger.",
    "Name the first thing that would prove the idea won't work, then test it.",
];

/// How many ideas one reply draws
pub const SAMPLE_SIZE: usize = 2;

/// Draw a uniform random sample of distinct ideas, without replacement
///
/// Takes the random source as a parameter so tests can supply a
/// deterministic generator. Returns fewer than [`SAMPLE_SIZE`] entries only
/// if the pool itself is smaller.
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    IDEA_POOL.choose_multiple(rng, SAMPLE_SIZE).copied().collect()
}
