//! Candidate slot enumeration and scoring.
//!
//! [`SlotEnumerator`] expands a time window and venue list into every
//! (time, venue) combination; a [`SlotScorer`] rates each combination for a
//! specific home/away couple. Both are pure and keep no state between calls.

mod enumerator;
mod scoring;

pub use enumerator::SlotEnumerator;
pub use scoring::{
    preference_misses, score_slot, PreferenceScorer, SlotScorer, DEFAULT_TIME_BONUS,
    DEFAULT_VENUE_BONUS,
};
