//! Entry points for the league application.
//!
//! Two calls cover everything the surrounding application needs:
//! [`generate_fixtures`] once per competition, and [`schedule_matches`]
//! once per round. Persistence of the results is the caller's concern.

use crate::models::{Competitor, Fixture, Pairing, ScheduleResult, Venue};
use crate::round_robin::RoundRobinGenerator;
use crate::scheduler::GreedyMatchScheduler;
use crate::validation::ValidationErrors;

/// Single round-robin pairings for a roster, ordered by round.
///
/// Uses the default policy (fixed orientation, caller's roster order). Round
/// `k` holds the `k`-th block of `floor(n / 2)` pairings. Use
/// [`RoundRobinGenerator`] directly for round indices, double legs or
/// randomized orientation.
///
/// # Errors
/// Fewer than two competitors, or duplicate IDs.
pub fn generate_fixtures<S: AsRef<str>>(
    competitor_ids: &[S],
) -> Result<Vec<Pairing>, ValidationErrors> {
    let fixtures = RoundRobinGenerator::new().generate(competitor_ids)?;
    Ok(fixtures.into_iter().map(|f| f.pairing).collect())
}

/// Assigns a slot in `[window_start_ms, window_end_ms]` to every fixture.
///
/// Slots start every `slot_duration_ms`. Hours are read in UTC; use
/// [`GreedyMatchScheduler`] with a
/// [`SchedulerConfig`](crate::scheduler::SchedulerConfig) for other offsets.
///
/// # Errors
/// Precondition violations only. Infeasibility is `Ok` with
/// `success: false`.
pub fn schedule_matches(
    fixtures: &[Fixture],
    competitors: &[Competitor],
    venues: &[Venue],
    window_start_ms: i64,
    window_end_ms: i64,
    slot_duration_ms: i64,
) -> Result<ScheduleResult, ValidationErrors> {
    GreedyMatchScheduler::new().schedule(
        fixtures,
        competitors,
        venues,
        window_start_ms,
        window_end_ms,
        slot_duration_ms,
    )
}
