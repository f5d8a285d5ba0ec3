//! Schedule quality metrics (KPIs).
//!
//! Summarizes how well a successful result honours competitor preferences.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled | Fixtures with an assigned slot |
//! | Venue / Time Violations | Count per kind |
//! | Satisfaction Rate | Met preference checks / total checks |
//! | Total / Avg Score | Sum and mean of assigned slot scores |
//!
//! Each fixture contributes two time checks, plus one venue check per side
//! with a non-empty preferred-venue set.

use std::collections::HashMap;

use crate::models::{Competitor, Fixture, ScheduleResult, ViolationKind};

/// Preference satisfaction indicators for one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Fixtures with an assigned slot.
    pub scheduled: usize,
    /// Venue preference violations.
    pub venue_violations: usize,
    /// Time preference violations.
    pub time_violations: usize,
    /// Violations per competitor.
    pub violations_by_competitor: HashMap<String, usize>,
    /// Fraction of preference checks met (0.0..1.0).
    pub satisfaction_rate: f64,
    /// Sum of assigned slot scores.
    pub total_score: i64,
    /// Mean assigned slot score.
    pub avg_score: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a result and its inputs.
    ///
    /// # Arguments
    /// * `result` - The scheduling outcome.
    /// * `fixtures` - The scheduled fixtures (for side lookups).
    /// * `competitors` - Preference records (to count venue checks).
    pub fn calculate(
        result: &ScheduleResult,
        fixtures: &[Fixture],
        competitors: &[Competitor],
    ) -> Self {
        let with_venue_pref: HashMap<&str, bool> = competitors
            .iter()
            .map(|c| (c.id.as_str(), c.preference.has_venue_preference()))
            .collect();

        let mut checks: usize = 0;
        for f in fixtures.iter().filter(|f| result.assignment.contains_key(&f.id)) {
            checks += 2;
            checks += [f.home(), f.away()]
                .iter()
                .filter(|id| with_venue_pref.get(*id).copied().unwrap_or(false))
                .count();
        }

        let mut violations_by_competitor: HashMap<String, usize> = HashMap::new();
        for v in &result.violations {
            *violations_by_competitor
                .entry(v.competitor_id.clone())
                .or_insert(0) += 1;
        }

        let scheduled = result.assignment_count();
        let total_score: i64 = result.assignment.values().map(|s| s.score as i64).sum();

        let satisfaction_rate = if checks == 0 {
            1.0
        } else {
            1.0 - result.violations.len() as f64 / checks as f64
        };

        let avg_score = if scheduled == 0 {
            0.0
        } else {
            total_score as f64 / scheduled as f64
        };

        Self {
            scheduled,
            venue_violations: result.violation_count(ViolationKind::Venue),
            time_violations: result.violation_count(ViolationKind::Time),
            violations_by_competitor,
            satisfaction_rate,
            total_score,
            avg_score,
        }
    }

    /// Whether the run meets a minimum satisfaction rate.
    pub fn meets_threshold(&self, min_satisfaction: f64) -> bool {
        self.satisfaction_rate >= min_satisfaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateSlot, Preference, Violation};
    use std::collections::BTreeMap;

    fn sample() -> (ScheduleResult, Vec<Fixture>, Vec<Competitor>) {
        let fixtures = vec![Fixture::new("f1", "A", "B", 1), Fixture::new("f2", "C", "D", 1)];
        let competitors = vec![
            Competitor::new("A").with_preference(Preference::hours(18, 20).with_venue("V1")),
            Competitor::new("B"),
            Competitor::new("C"),
            Competitor::new("D"),
        ];
        let mut assignment = BTreeMap::new();
        assignment.insert("f1".to_string(), CandidateSlot::new(0, "V2", 10).with_score(-2));
        assignment.insert("f2".to_string(), CandidateSlot::new(0, "V1", 10).with_score(4));
        let result = ScheduleResult::scheduled(
            assignment,
            vec![Violation::venue("f1", "A"), Violation::time("f1", "A")],
        );
        (result, fixtures, competitors)
    }

    #[test]
    fn test_kpi_basic() {
        let (result, fixtures, competitors) = sample();
        let kpi = ScheduleKpi::calculate(&result, &fixtures, &competitors);

        assert_eq!(kpi.scheduled, 2);
        assert_eq!(kpi.venue_violations, 1);
        assert_eq!(kpi.time_violations, 1);
        assert_eq!(kpi.violations_by_competitor["A"], 2);
        // 4 time checks + 1 venue check, 2 missed
        assert!((kpi.satisfaction_rate - 0.6).abs() < 1e-10);
        assert_eq!(kpi.total_score, 2);
        assert!((kpi.avg_score - 1.0).abs() < 1e-10);
        assert!(kpi.meets_threshold(0.5));
        assert!(!kpi.meets_threshold(0.9));
    }

    #[test]
    fn test_kpi_infeasible() {
        let (_, fixtures, competitors) = sample();
        let kpi = ScheduleKpi::calculate(&ScheduleResult::infeasible(), &fixtures, &competitors);
        assert_eq!(kpi.scheduled, 0);
        assert!((kpi.satisfaction_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_score - 0.0).abs() < 1e-10);
        assert!(kpi.violations_by_competitor.is_empty());
    }
}
