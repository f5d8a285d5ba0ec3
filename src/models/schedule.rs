//! Scheduling result model.
//!
//! A [`ScheduleResult`] is either a complete assignment of every fixture in a
//! batch to a distinct slot, or an infeasible marker with nothing assigned.
//! Preference misses of a complete assignment are reported as
//! [`Violation`]s rather than errors.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::CandidateSlot;

/// Outcome of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Whether every fixture received a slot.
    pub success: bool,
    /// Assigned slot per fixture ID. Empty when `success` is false.
    pub assignment: BTreeMap<String, CandidateSlot>,
    /// Preferences that could not be met. Empty when `success` is false.
    pub violations: Vec<Violation>,
}

/// A preference of one competitor that an assignment does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Fixture whose slot misses the preference.
    pub fixture_id: String,
    /// Competitor whose preference is missed.
    pub competitor_id: String,
    /// Which preference is missed.
    pub kind: ViolationKind,
}

/// Classification of preference violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// Assigned venue is not in the competitor's non-empty preferred set.
    Venue,
    /// Assigned hour is outside the competitor's preferred window.
    Time,
}

impl ViolationKind {
    /// Lowercase label (`"venue"` / `"time"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Venue => "venue",
            ViolationKind::Time => "time",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        fixture_id: impl Into<String>,
        competitor_id: impl Into<String>,
        kind: ViolationKind,
    ) -> Self {
        Self {
            fixture_id: fixture_id.into(),
            competitor_id: competitor_id.into(),
            kind,
        }
    }

    /// Creates a venue violation.
    pub fn venue(fixture_id: impl Into<String>, competitor_id: impl Into<String>) -> Self {
        Self::new(fixture_id, competitor_id, ViolationKind::Venue)
    }

    /// Creates a time violation.
    pub fn time(fixture_id: impl Into<String>, competitor_id: impl Into<String>) -> Self {
        Self::new(fixture_id, competitor_id, ViolationKind::Time)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} preference not met (fixture {})",
            self.competitor_id, self.kind, self.fixture_id
        )
    }
}

impl ScheduleResult {
    /// The all-or-nothing failure outcome: nothing assigned, nothing reported.
    pub fn infeasible() -> Self {
        Self::default()
    }

    /// A successful outcome.
    pub fn scheduled(
        assignment: BTreeMap<String, CandidateSlot>,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            success: true,
            assignment,
            violations,
        }
    }

    /// Slot assigned to a fixture.
    pub fn slot_for(&self, fixture_id: &str) -> Option<&CandidateSlot> {
        self.assignment.get(fixture_id)
    }

    /// Whether every preference was met.
    pub fn is_clean(&self) -> bool {
        self.success && self.violations.is_empty()
    }

    /// Violations concerning one competitor.
    pub fn violations_for_competitor(&self, competitor_id: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.competitor_id == competitor_id)
            .collect()
    }

    /// Violations concerning one fixture.
    pub fn violations_for_fixture(&self, fixture_id: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.fixture_id == fixture_id)
            .collect()
    }

    /// Number of violations of a given kind.
    pub fn violation_count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    /// Whether no two assigned fixtures share a venue and time.
    pub fn is_conflict_free(&self) -> bool {
        let mut seen = HashSet::new();
        self.assignment.values().all(|slot| seen.insert(slot.key()))
    }

    /// Number of assigned fixtures.
    pub fn assignment_count(&self) -> usize {
        self.assignment.len()
    }
}
