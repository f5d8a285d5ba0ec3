//! Competitor and preference model.
//!
//! A competitor (team) is an opaque identifier owned by the roster
//! collaborator. The scheduler only reads its [`Preference`]: the venues
//! it likes to play at and the hour-of-day window it likes to play in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Latest valid hour-of-day.
pub const MAX_HOUR: u32 = 23;

/// A competitor together with its scheduling preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Unique competitor identifier.
    pub id: String,
    /// Venue and time-of-day preference.
    pub preference: Preference,
}

/// Venue and hour-of-day preference of one competitor.
///
/// The window is inclusive on both ends: `preferred_start_hour <= h <= preferred_end_hour`.
/// `start <= end` is assumed, not enforced. An inverted window never contains
/// any hour, and the distance penalty still degrades linearly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    /// Venues this competitor prefers. Empty = no venue preference.
    pub preferred_venues: BTreeSet<String>,
    /// First preferred hour (0-23, inclusive).
    pub preferred_start_hour: u32,
    /// Last preferred hour (0-23, inclusive).
    pub preferred_end_hour: u32,
}

impl Default for Preference {
    fn default() -> Self {
        Self {
            preferred_venues: BTreeSet::new(),
            preferred_start_hour: 0,
            preferred_end_hour: MAX_HOUR,
        }
    }
}

impl Competitor {
    /// Creates a competitor with no preferences (any venue, any hour).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            preference: Preference::default(),
        }
    }

    /// Sets the preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = preference;
        self
    }
}

impl Preference {
    /// Creates a preference for the given hour window and no venue preference.
    pub fn hours(start_hour: u32, end_hour: u32) -> Self {
        Self {
            preferred_venues: BTreeSet::new(),
            preferred_start_hour: start_hour,
            preferred_end_hour: end_hour,
        }
    }

    /// Adds a preferred venue.
    pub fn with_venue(mut self, venue_id: impl Into<String>) -> Self {
        self.preferred_venues.insert(venue_id.into());
        self
    }

    /// Adds several preferred venues.
    pub fn with_venues<I, S>(mut self, venue_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_venues
            .extend(venue_ids.into_iter().map(Into::into));
        self
    }

    /// Whether any venue preference is recorded.
    #[inline]
    pub fn has_venue_preference(&self) -> bool {
        !self.preferred_venues.is_empty()
    }

    /// Whether the venue is in the preferred set.
    #[inline]
    pub fn prefers_venue(&self, venue_id: &str) -> bool {
        self.preferred_venues.contains(venue_id)
    }

    /// Whether the hour falls inside the preferred window.
    #[inline]
    pub fn accepts_hour(&self, hour: u32) -> bool {
        hour >= self.preferred_start_hour && hour <= self.preferred_end_hour
    }

    /// Distance in hours from `hour` to the nearer window bound.
    ///
    /// Zero for hours inside the window.
    pub fn hour_distance(&self, hour: u32) -> u32 {
        if self.accepts_hour(hour) {
            return 0;
        }
        hour.abs_diff(self.preferred_start_hour)
            .min(hour.abs_diff(self.preferred_end_hour))
    }

    /// Whether the window bounds are ordered (`start <= end`).
    #[inline]
    pub fn is_window_ordered(&self) -> bool {
        self.preferred_start_hour <= self.preferred_end_hour
    }
}
