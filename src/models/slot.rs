//! Candidate slot model.
//!
//! A candidate slot is a (time, venue) combination that can hold exactly one
//! fixture. Slots are generated, scored and consumed within a single
//! scheduling run and never persisted.
//!
//! # Time Model
//! `time_ms` is a Unix timestamp in milliseconds. `hour` is its hour-of-day
//! in the UTC offset the enumerator was configured with, cached so scoring
//! never has to redo calendar arithmetic.

use serde::{Deserialize, Serialize};

/// A (time, venue) slot with its score for one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    /// Kick-off time (Unix ms).
    pub time_ms: i64,
    /// Venue ID.
    pub venue_id: String,
    /// Hour-of-day of `time_ms` (0-23).
    pub hour: u32,
    /// Preference score for the fixture it was scored against.
    /// Zero until scored.
    pub score: i32,
}

/// Identity of a slot for conflict detection: one fixture per venue and time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    /// Venue ID.
    pub venue_id: String,
    /// Kick-off time (Unix ms).
    pub time_ms: i64,
}

impl CandidateSlot {
    /// Creates an unscored slot.
    pub fn new(time_ms: i64, venue_id: impl Into<String>, hour: u32) -> Self {
        Self {
            time_ms,
            venue_id: venue_id.into(),
            hour,
            score: 0,
        }
    }

    /// Sets the score.
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Conflict key of this slot.
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.venue_id.clone(), self.time_ms)
    }

    /// Whether the slot sits at the given venue and time.
    #[inline]
    pub fn matches_key(&self, key: &SlotKey) -> bool {
        self.time_ms == key.time_ms && self.venue_id == key.venue_id
    }
}

impl SlotKey {
    /// Creates a slot key.
    pub fn new(venue_id: impl Into<String>, time_ms: i64) -> Self {
        Self {
            venue_id: venue_id.into(),
            time_ms,
        }
    }
}
