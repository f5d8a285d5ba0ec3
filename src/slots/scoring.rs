//! Slot scoring against competitor preferences.
//!
//! # Score Convention
//! **Higher score = better slot.** Scores may be negative.
//!
//! Per side (home and away):
//! - venue: `+venue_bonus` if the side's preferred set contains the venue,
//!   `0` otherwise (an empty set is neutral, never a penalty)
//! - time: `+time_bonus` inside `[start, end]`, otherwise minus the distance
//!   in hours to the nearer bound
//!
//! The total is the sum of the four terms.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{CandidateSlot, Preference, ViolationKind};

/// Default bonus for a preferred venue, per side.
pub const DEFAULT_VENUE_BONUS: i32 = 2;
/// Default bonus for an hour inside the preferred window, per side.
pub const DEFAULT_TIME_BONUS: i32 = 2;

/// Scores a candidate slot for a home/away couple.
///
/// Implementations must be pure: the same inputs always give the same score.
pub trait SlotScorer: Send + Sync + Debug {
    /// Scorer name.
    fn name(&self) -> &'static str;

    /// Scores the slot. Higher = better.
    fn score(&self, slot: &CandidateSlot, home: &Preference, away: &Preference) -> i32;
}

/// Venue and time-window preference scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceScorer {
    /// Bonus per side whose preferred venues contain the slot's venue.
    pub venue_bonus: i32,
    /// Bonus per side whose window contains the slot's hour.
    pub time_bonus: i32,
}

impl Default for PreferenceScorer {
    fn default() -> Self {
        Self {
            venue_bonus: DEFAULT_VENUE_BONUS,
            time_bonus: DEFAULT_TIME_BONUS,
        }
    }
}

impl PreferenceScorer {
    /// Creates a scorer with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the venue bonus.
    pub fn with_venue_bonus(mut self, bonus: i32) -> Self {
        self.venue_bonus = bonus;
        self
    }

    /// Sets the time bonus.
    pub fn with_time_bonus(mut self, bonus: i32) -> Self {
        self.time_bonus = bonus;
        self
    }

    /// Venue term for one side.
    pub fn venue_term(&self, slot: &CandidateSlot, pref: &Preference) -> i32 {
        if pref.prefers_venue(&slot.venue_id) {
            self.venue_bonus
        } else {
            0
        }
    }

    /// Time term for one side.
    pub fn time_term(&self, slot: &CandidateSlot, pref: &Preference) -> i32 {
        if pref.accepts_hour(slot.hour) {
            self.time_bonus
        } else {
            -(pref.hour_distance(slot.hour) as i32)
        }
    }
}

impl SlotScorer for PreferenceScorer {
    fn name(&self) -> &'static str {
        "PREFERENCE"
    }

    fn score(&self, slot: &CandidateSlot, home: &Preference, away: &Preference) -> i32 {
        [home, away]
            .into_iter()
            .map(|pref| self.venue_term(slot, pref) + self.time_term(slot, pref))
            .sum()
    }
}

/// Scores a slot with the default weights.
pub fn score_slot(slot: &CandidateSlot, home: &Preference, away: &Preference) -> i32 {
    PreferenceScorer::default().score(slot, home, away)
}

/// Preferences of one side that the slot does not meet.
///
/// A venue miss needs a non-empty preferred set; a time miss means the hour
/// is outside the window.
pub fn preference_misses(slot: &CandidateSlot, pref: &Preference) -> Vec<ViolationKind> {
    let mut misses = Vec::new();
    if pref.has_venue_preference() && !pref.prefers_venue(&slot.venue_id) {
        misses.push(ViolationKind::Venue);
    }
    if !pref.accepts_hour(slot.hour) {
        misses.push(ViolationKind::Time);
    }
    misses
}
