//! Candidate slot enumeration.
//!
//! Expands a time window, a step and a venue list into every
//! `(time, venue)` combination, time-major, venues in input order.
//! Kick-off times run `start, start + step, ...` while `<= end`.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};
use std::iter;

use crate::models::{CandidateSlot, Venue};

/// Enumerates unscored candidate slots.
///
/// Stateless: every call starts over, and the same inputs always yield the
/// same sequence.
///
/// # Example
///
/// ```
/// use u_fixture::models::Venue;
/// use u_fixture::slots::SlotEnumerator;
///
/// const HOUR: i64 = 3_600_000;
/// let venues = vec![Venue::new("V1"), Venue::new("V2")];
/// let slots = SlotEnumerator::new().enumerate(18 * HOUR, 19 * HOUR, HOUR, &venues);
/// assert_eq!(slots.len(), 4);
/// assert_eq!(slots[1].venue_id, "V2");
/// assert_eq!(slots[2].hour, 19);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlotEnumerator {
    offset: FixedOffset,
}

impl SlotEnumerator {
    /// Creates an enumerator reading hours in UTC.
    pub fn new() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Creates an enumerator reading hours in the given offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Offset used for hour-of-day.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Hour-of-day of a Unix millisecond timestamp.
    ///
    /// `None` if the timestamp is outside chrono's representable range.
    pub fn hour_of(&self, time_ms: i64) -> Option<u32> {
        DateTime::from_timestamp_millis(time_ms).map(|t| t.with_timezone(&self.offset).hour())
    }

    /// Lazily enumerates slots.
    ///
    /// Empty when `venues` is empty, `end_ms < start_ms` or `step_ms <= 0`.
    /// Timestamps chrono cannot represent are skipped.
    pub fn iter<'a>(
        &'a self,
        start_ms: i64,
        end_ms: i64,
        step_ms: i64,
        venues: &'a [Venue],
    ) -> impl Iterator<Item = CandidateSlot> + 'a {
        let first = (step_ms > 0 && !venues.is_empty() && start_ms <= end_ms).then_some(start_ms);

        iter::successors(first, move |t| t.checked_add(step_ms))
            .take_while(move |t| *t <= end_ms)
            .filter_map(move |t| self.hour_of(t).map(|hour| (t, hour)))
            .flat_map(move |(t, hour)| {
                venues
                    .iter()
                    .map(move |v| CandidateSlot::new(t, v.id.clone(), hour))
            })
    }

    /// Enumerates all slots into a vector.
    pub fn enumerate(
        &self,
        start_ms: i64,
        end_ms: i64,
        step_ms: i64,
        venues: &[Venue],
    ) -> Vec<CandidateSlot> {
        self.iter(start_ms, end_ms, step_ms, venues).collect()
    }

    /// Number of slots `enumerate` would produce.
    pub fn count(&self, start_ms: i64, end_ms: i64, step_ms: i64, venues: &[Venue]) -> usize {
        self.iter(start_ms, end_ms, step_ms, venues).count()
    }
}

impl Default for SlotEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
