//! Hardest-first greedy slot scheduler.
//!
//! # Algorithm
//!
//! 1. Enumerate every (time, venue) candidate once and score it for each
//!    fixture's home/away couple.
//! 2. Order fixtures by ascending number of candidates scoring `> 0`, so
//!    fixtures with few good options claim them before easier fixtures
//!    exhaust the shared pool. Ties keep input order.
//! 3. For each fixture, take the best-scoring candidate not yet consumed
//!    and record every preference it misses.
//! 4. If some fixture finds no free candidate, the whole batch fails and
//!    nothing is assigned.
//!
//! The consumed-slot set is local to a single call; runs never share state.
//!
//! # Complexity
//! O(f · s · log s) where f = fixtures, s = times × venues.
//!
//! Greedy, not optimal: this is not a bipartite matching solver.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use super::{SchedulerConfig, SlotOrder, DEFAULT_SLOT_DURATION_MS};
use crate::models::{
    CandidateSlot, Competitor, Fixture, Preference, ScheduleResult, SlotKey, Venue, Violation,
};
use crate::slots::{preference_misses, PreferenceScorer, SlotEnumerator, SlotScorer};
use crate::validation::{
    validate_request, validate_utc_offset, ValidationErrorKind, ValidationErrors,
};

/// Input container for one scheduling run, typically one round.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Fixtures to place.
    pub fixtures: Vec<Fixture>,
    /// Preference records; must cover both sides of every fixture.
    pub competitors: Vec<Competitor>,
    /// Venues available in the window.
    pub venues: Vec<Venue>,
    /// First kick-off time (Unix ms, inclusive).
    pub window_start_ms: i64,
    /// Last kick-off time (Unix ms, inclusive).
    pub window_end_ms: i64,
    /// Step between kick-off times (ms).
    pub slot_duration_ms: i64,
    /// Slots already taken by existing matches.
    pub occupied: Vec<SlotKey>,
}

impl ScheduleRequest {
    /// Creates a request with an empty window and one-hour slots.
    pub fn new(fixtures: Vec<Fixture>, competitors: Vec<Competitor>, venues: Vec<Venue>) -> Self {
        Self {
            fixtures,
            competitors,
            venues,
            window_start_ms: 0,
            window_end_ms: 0,
            slot_duration_ms: DEFAULT_SLOT_DURATION_MS,
            occupied: Vec::new(),
        }
    }

    /// Sets the kick-off window (both ends inclusive).
    pub fn with_window(mut self, start_ms: i64, end_ms: i64) -> Self {
        self.window_start_ms = start_ms;
        self.window_end_ms = end_ms;
        self
    }

    /// Sets the step between kick-off times.
    pub fn with_slot_duration(mut self, duration_ms: i64) -> Self {
        self.slot_duration_ms = duration_ms;
        self
    }

    /// Marks slots as taken by existing matches.
    pub fn with_occupied(mut self, occupied: impl IntoIterator<Item = SlotKey>) -> Self {
        self.occupied.extend(occupied);
        self
    }
}

/// Greedy venue/time scheduler.
///
/// # Example
///
/// ```
/// use u_fixture::models::{Competitor, Fixture, Preference, Venue};
/// use u_fixture::scheduler::{GreedyMatchScheduler, ScheduleRequest};
///
/// const HOUR: i64 = 3_600_000;
/// let fixtures = vec![Fixture::new("f1", "A", "B", 1), Fixture::new("f2", "C", "D", 1)];
/// let competitors = ["A", "B", "C", "D"]
///     .iter()
///     .map(|id| Competitor::new(*id).with_preference(Preference::hours(18, 19)))
///     .collect();
/// let request = ScheduleRequest::new(fixtures, competitors, vec![Venue::new("V1")])
///     .with_window(18 * HOUR, 19 * HOUR)
///     .with_slot_duration(HOUR);
///
/// let result = GreedyMatchScheduler::new().schedule_request(&request).unwrap();
/// assert!(result.success);
/// assert_eq!(result.assignment_count(), 2);
/// assert!(result.violations.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyMatchScheduler {
    config: SchedulerConfig,
    scorer: Arc<dyn SlotScorer>,
}

impl GreedyMatchScheduler {
    /// Creates a scheduler with the default configuration and scorer.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            scorer: Arc::new(PreferenceScorer::default()),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the slot scorer.
    pub fn with_scorer<S: SlotScorer + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules fixtures into `[start_ms, end_ms]` at `step_ms` intervals.
    ///
    /// See [`schedule_request`](Self::schedule_request).
    pub fn schedule(
        &self,
        fixtures: &[Fixture],
        competitors: &[Competitor],
        venues: &[Venue],
        start_ms: i64,
        end_ms: i64,
        step_ms: i64,
    ) -> Result<ScheduleResult, ValidationErrors> {
        let request =
            ScheduleRequest::new(fixtures.to_vec(), competitors.to_vec(), venues.to_vec())
                .with_window(start_ms, end_ms)
                .with_slot_duration(step_ms);
        self.schedule_request(&request)
    }

    /// Schedules a request.
    ///
    /// Returns `Ok` with `success: false` and nothing assigned when some
    /// fixture has no free slot. Returns `Err` only for precondition
    /// violations (see [`validate_request`]).
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduleResult, ValidationErrors> {
        validate_request(
            &request.fixtures,
            &request.competitors,
            request.slot_duration_ms,
        )?;
        let offset = validate_utc_offset(self.config.utc_offset_minutes)?;

        let preferences: HashMap<&str, &Preference> = request
            .competitors
            .iter()
            .map(|c| (c.id.as_str(), &c.preference))
            .collect();

        let sides = request
            .fixtures
            .iter()
            .map(|f| resolve_sides(f, &preferences))
            .collect::<Result<Vec<_>, _>>()?;

        let base = SlotEnumerator::with_offset(offset).enumerate(
            request.window_start_ms,
            request.window_end_ms,
            request.slot_duration_ms,
            &request.venues,
        );

        let mut rng = StdRng::seed_from_u64(self.config.slot_order.seed().unwrap_or_default());
        let candidates: Vec<Vec<CandidateSlot>> = sides
            .iter()
            .map(|&(home, away)| {
                let mut scored: Vec<CandidateSlot> = base
                    .iter()
                    .map(|slot| {
                        let score = self.scorer.score(slot, home, away);
                        slot.clone().with_score(score)
                    })
                    .collect();
                if let SlotOrder::Shuffled { .. } = self.config.slot_order {
                    scored.shuffle(&mut rng);
                }
                scored
            })
            .collect();

        // Hardest first
        let mut order: Vec<usize> = (0..request.fixtures.len()).collect();
        order.sort_by_key(|&i| good_slot_count(&candidates[i]));

        debug!(
            "scheduling {} fixtures over {} candidate slots ({} pre-occupied)",
            request.fixtures.len(),
            base.len(),
            request.occupied.len()
        );

        let mut consumed: HashSet<SlotKey> = request.occupied.iter().cloned().collect();
        let mut assignment = BTreeMap::new();
        let mut violations = Vec::new();

        for (placed, &i) in order.iter().enumerate() {
            let fixture = &request.fixtures[i];
            let Some(slot) = best_free_slot(&candidates[i], &consumed) else {
                info!(
                    "no free slot for fixture '{}' after placing {placed} of {}; batch rejected",
                    fixture.id,
                    request.fixtures.len()
                );
                return Ok(ScheduleResult::infeasible());
            };

            consumed.insert(slot.key());

            let (home, away) = sides[i];
            for (competitor_id, pref) in [(fixture.home(), home), (fixture.away(), away)] {
                violations.extend(
                    preference_misses(slot, pref)
                        .into_iter()
                        .map(|kind| Violation::new(&fixture.id, competitor_id, kind)),
                );
            }

            assignment.insert(fixture.id.clone(), slot.clone());
        }

        debug!(
            "scheduled {} fixtures with {} preference violations",
            assignment.len(),
            violations.len()
        );

        Ok(ScheduleResult::scheduled(assignment, violations))
    }
}

impl Default for GreedyMatchScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_sides<'a>(
    fixture: &Fixture,
    preferences: &HashMap<&str, &'a Preference>,
) -> Result<(&'a Preference, &'a Preference), ValidationErrors> {
    let lookup = |id: &str| {
        preferences.get(id).copied().ok_or_else(|| {
            ValidationErrors::single(
                ValidationErrorKind::UnknownCompetitor,
                format!("Fixture '{}' references unknown competitor '{id}'", fixture.id),
            )
        })
    };
    Ok((lookup(fixture.home())?, lookup(fixture.away())?))
}

/// Number of candidates with a positive score.
fn good_slot_count(candidates: &[CandidateSlot]) -> usize {
    candidates.iter().filter(|s| s.score > 0).count()
}

/// Highest-scoring unconsumed candidate; earlier candidates win ties.
fn best_free_slot<'a>(
    candidates: &'a [CandidateSlot],
    consumed: &HashSet<SlotKey>,
) -> Option<&'a CandidateSlot> {
    let mut free: Vec<&CandidateSlot> = candidates
        .iter()
        .filter(|s| !consumed.contains(&s.key()))
        .collect();
    free.sort_by(|a, b| b.score.cmp(&a.score));
    free.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViolationKind;

    const HOUR: i64 = 3_600_000;

    fn competitor(id: &str, start: u32, end: u32) -> Competitor {
        Competitor::new(id).with_preference(Preference::hours(start, end))
    }

    fn four_teams(start: u32, end: u32) -> Vec<Competitor> {
        ["A", "B", "C", "D"]
            .iter()
            .map(|id| competitor(id, start, end))
            .collect()
    }

    fn two_fixtures() -> Vec<Fixture> {
        vec![Fixture::new("f1", "A", "B", 1), Fixture::new("f2", "C", "D", 1)]
    }

    #[test]
    fn test_two_fixtures_two_slots() {
        let result = GreedyMatchScheduler::new()
            .schedule(
                &two_fixtures(),
                &four_teams(18, 19),
                &[Venue::new("V1")],
                18 * HOUR,
                19 * HOUR,
                HOUR,
            )
            .unwrap();

        assert!(result.success);
        assert_eq!(result.assignment_count(), 2);
        assert!(result.is_conflict_free());
        assert!(result.violations.is_empty());

        let mut times: Vec<i64> = result.assignment.values().map(|s| s.time_ms).collect();
        times.sort();
        assert_eq!(times, vec![18 * HOUR, 19 * HOUR]);
        assert!(result.assignment.values().all(|s| s.venue_id == "V1"));
    }

    #[test]
    fn test_single_slot_is_infeasible() {
        let result = GreedyMatchScheduler::new()
            .schedule(
                &two_fixtures(),
                &four_teams(18, 19),
                &[Venue::new("V1")],
                18 * HOUR,
                18 * HOUR,
                HOUR,
            )
            .unwrap();
        assert!(!result.success);
        assert!(result.assignment.is_empty());
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_no_venues_is_infeasible() {
        let result = GreedyMatchScheduler::new()
            .schedule(&two_fixtures(), &four_teams(0, 23), &[], 0, 10 * HOUR, HOUR)
            .unwrap();
        assert!(!result.success);
    }

    #[test]
    fn test_empty_batch_succeeds() {
        let result = GreedyMatchScheduler::new()
            .schedule(&[], &four_teams(0, 23), &[Venue::new("V1")], 0, HOUR, HOUR)
            .unwrap();
        assert!(result.success);
        assert!(result.assignment.is_empty());
    }

    #[test]
    fn test_hardest_fixture_first() {
        // f1 is fine with either hour but prefers 19; f2 only fits 19.
        let competitors = vec![
            competitor("A", 18, 23),
            competitor("B", 19, 23),
            competitor("C", 19, 19),
            competitor("D", 19, 19),
        ];
        let result = GreedyMatchScheduler::new()
            .schedule(
                &two_fixtures(),
                &competitors,
                &[Venue::new("V1")],
                18 * HOUR,
                19 * HOUR,
                HOUR,
            )
            .unwrap();

        assert!(result.success);
        assert_eq!(result.slot_for("f2").map(|s| s.time_ms), Some(19 * HOUR));
        assert_eq!(result.slot_for("f1").map(|s| s.time_ms), Some(18 * HOUR));
        assert_eq!(result.violations, vec![Violation::time("f1", "B")]);
    }

    #[test]
    fn test_prefers_venue() {
        let competitors = vec![
            Competitor::new("A").with_preference(Preference::hours(0, 23).with_venue("V2")),
            Competitor::new("B"),
        ];
        let fixtures = vec![Fixture::new("f1", "A", "B", 1)];
        let venues = vec![Venue::new("V1"), Venue::new("V2")];
        let result = GreedyMatchScheduler::new()
            .schedule(&fixtures, &competitors, &venues, 0, 0, HOUR)
            .unwrap();
        assert_eq!(result.slot_for("f1").map(|s| s.venue_id.as_str()), Some("V2"));
        assert!(result.is_clean());
    }

    #[test]
    fn test_violations_recorded() {
        let competitors = vec![
            Competitor::new("A").with_preference(Preference::hours(9, 10).with_venue("V9")),
            Competitor::new("B").with_preference(Preference::hours(20, 21)),
        ];
        let fixtures = vec![Fixture::new("f1", "A", "B", 1)];
        let result = GreedyMatchScheduler::new()
            .schedule(&fixtures, &competitors, &[Venue::new("V1")], 15 * HOUR, 15 * HOUR, HOUR)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.violation_count(ViolationKind::Venue), 1);
        assert_eq!(result.violation_count(ViolationKind::Time), 2);
        // B has no venue preference, so no venue violation for B
        assert!(result
            .violations_for_competitor("B")
            .iter()
            .all(|v| v.kind == ViolationKind::Time));
    }

    #[test]
    fn test_occupied_slots_are_skipped() {
        let request = ScheduleRequest::new(
            vec![Fixture::new("f1", "A", "B", 1)],
            four_teams(18, 19),
            vec![Venue::new("V1")],
        )
        .with_window(18 * HOUR, 19 * HOUR)
        .with_occupied([SlotKey::new("V1", 18 * HOUR)]);

        let result = GreedyMatchScheduler::new().schedule_request(&request).unwrap();
        assert_eq!(result.slot_for("f1").map(|s| s.time_ms), Some(19 * HOUR));

        let full = request.with_occupied([SlotKey::new("V1", 19 * HOUR)]);
        let result = GreedyMatchScheduler::new().schedule_request(&full).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn test_utc_offset_shifts_hours() {
        let competitors = vec![competitor("A", 18, 18), competitor("B", 18, 18)];
        let fixtures = vec![Fixture::new("f1", "A", "B", 1)];
        let scheduler = GreedyMatchScheduler::new()
            .with_config(SchedulerConfig::default().with_utc_offset_minutes(60));
        // 17:00 UTC is 18:00 at +01:00
        let result = scheduler
            .schedule(&fixtures, &competitors, &[Venue::new("V1")], 16 * HOUR, 17 * HOUR, HOUR)
            .unwrap();
        let slot = result.slot_for("f1").unwrap();
        assert_eq!(slot.time_ms, 17 * HOUR);
        assert_eq!(slot.hour, 18);
        assert!(result.is_clean());
    }

    #[test]
    fn test_deterministic() {
        let venues = vec![Venue::new("V1"), Venue::new("V2")];
        let fixtures = two_fixtures();
        let competitors = four_teams(10, 12);

        for order in [SlotOrder::Chronological, SlotOrder::Shuffled { seed: 5 }] {
            let scheduler = GreedyMatchScheduler::new()
                .with_config(SchedulerConfig::default().with_slot_order(order));
            let a = scheduler
                .schedule(&fixtures, &competitors, &venues, 0, 23 * HOUR, HOUR)
                .unwrap();
            let b = scheduler
                .schedule(&fixtures, &competitors, &venues, 0, 23 * HOUR, HOUR)
                .unwrap();
            assert_eq!(a, b);
            assert!(a.is_conflict_free());
            assert!(a.is_clean());
        }
    }

    #[test]
    fn test_custom_scorer() {
        #[derive(Debug)]
        struct LatestFirst;
        impl SlotScorer for LatestFirst {
            fn name(&self) -> &'static str {
                "LATEST"
            }
            fn score(&self, slot: &CandidateSlot, _: &Preference, _: &Preference) -> i32 {
                slot.hour as i32
            }
        }

        let scheduler = GreedyMatchScheduler::new().with_scorer(LatestFirst);
        let fixtures = vec![Fixture::new("f1", "A", "B", 1)];
        let result = scheduler
            .schedule(&fixtures, &four_teams(0, 23), &[Venue::new("V1")], 0, 5 * HOUR, HOUR)
            .unwrap();
        assert_eq!(result.slot_for("f1").map(|s| s.hour), Some(5));
    }

    #[test]
    fn test_precondition_errors() {
        let scheduler = GreedyMatchScheduler::new();
        let err = scheduler
            .schedule(
                &[Fixture::new("f1", "A", "A", 1)],
                &four_teams(0, 23),
                &[Venue::new("V1")],
                0,
                HOUR,
                HOUR,
            )
            .unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::SelfPairing));

        let err = scheduler
            .schedule(&two_fixtures(), &four_teams(0, 23), &[Venue::new("V1")], 0, HOUR, 0)
            .unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::InvalidSlotDuration));

        let err = GreedyMatchScheduler::new()
            .with_config(SchedulerConfig::default().with_utc_offset_minutes(5000))
            .schedule(&two_fixtures(), &four_teams(0, 23), &[Venue::new("V1")], 0, HOUR, HOUR)
            .unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::InvalidUtcOffset));
    }
}
