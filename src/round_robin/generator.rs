//! Circle-method round-robin generator.
//!
//! # Algorithm
//!
//! 1. Optionally shuffle the roster; pad odd rosters with a bye placeholder.
//! 2. For each of the `n - 1` rounds, pair position `i` with position
//!    `n - 1 - i`; pairings touching the bye are dropped.
//! 3. Rotate: position 0 stays fixed, the last competitor moves to position 1.
//! 4. For a double round-robin, append every pairing reversed as a second
//!    half of rounds.
//!
//! The rotation moves every non-anchored competitor through every position,
//! so each couple meets exactly once across the `n - 1` rounds and no
//! competitor appears twice in a round.
//!
//! # Complexity
//! O(n²) pairings, O(n) rotation per round.
//!
//! # Reference
//! Kirkman (1847); Berger tables for round-robin tournaments.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Legs, Orientation, RoundRobinConfig};
use crate::models::{Fixture, Pairing};
use crate::validation::{validate_roster, ValidationErrors};

/// Generates round-robin fixtures with the circle method.
///
/// # Example
///
/// ```
/// use u_fixture::round_robin::RoundRobinGenerator;
///
/// let fixtures = RoundRobinGenerator::new().generate(&["A", "B", "C", "D"]).unwrap();
/// assert_eq!(fixtures.len(), 6);
/// assert_eq!(fixtures.iter().map(|f| f.round).max(), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinGenerator {
    config: RoundRobinConfig,
}

impl RoundRobinGenerator {
    /// Creates a generator with the default policy
    /// (single leg, fixed orientation, caller's roster order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    pub fn with_config(config: RoundRobinConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RoundRobinConfig {
        &self.config
    }

    /// Generates the full fixture list, ordered by round.
    ///
    /// Round `r` holds exactly the non-bye pairings of circle round `r`,
    /// i.e. `floor(n / 2)` fixtures. Fixture IDs are `"{round}-{index}"`,
    /// `index` counting from 1 within the round.
    ///
    /// # Errors
    /// Fewer than two competitors, or duplicate competitor IDs.
    pub fn generate<S: AsRef<str>>(
        &self,
        competitors: &[S],
    ) -> Result<Vec<Fixture>, ValidationErrors> {
        validate_roster(competitors)?;

        let mut circle: Vec<Option<&str>> =
            competitors.iter().map(|c| Some(c.as_ref())).collect();
        if let Some(seed) = self.config.shuffle_seed {
            circle.shuffle(&mut StdRng::seed_from_u64(seed));
        }
        if circle.len() % 2 == 1 {
            circle.push(None); // bye
        }

        let n = circle.len();
        let total_rounds = n - 1;
        let mut rng = StdRng::seed_from_u64(self.config.orientation.seed().unwrap_or_default());
        let mut fixtures =
            Vec::with_capacity(expected_fixture_count(competitors.len(), self.config.legs));

        for r in 0..total_rounds {
            let round = (r + 1) as u32;
            let mut index = 0;

            for i in 0..n / 2 {
                let (Some(first), Some(second)) = (circle[i], circle[n - 1 - i]) else {
                    continue;
                };

                let swap = match self.config.orientation {
                    Orientation::Fixed => false,
                    Orientation::Alternating => r % 2 == 1,
                    Orientation::Random { .. } => rng.random_bool(0.5),
                };
                let pairing = if swap {
                    Pairing::new(second, first)
                } else {
                    Pairing::new(first, second)
                };

                index += 1;
                fixtures.push(Fixture {
                    id: fixture_id(round, index),
                    pairing,
                    round,
                });
            }

            if let Some(last) = circle.pop() {
                circle.insert(1, last);
            }
        }

        if self.config.legs == Legs::Double {
            let offset = total_rounds as u32;
            let return_leg: Vec<Fixture> = fixtures
                .iter()
                .enumerate()
                .map(|(k, f)| {
                    let round = f.round + offset;
                    let index = k - first_of_round(&fixtures, f.round) + 1;
                    Fixture {
                        id: fixture_id(round, index),
                        pairing: f.pairing.reversed(),
                        round,
                    }
                })
                .collect();
            fixtures.extend(return_leg);
        }

        debug!(
            "generated {} fixtures over {} rounds for {} competitors",
            fixtures.len(),
            fixtures.last().map_or(0, |f| f.round),
            competitors.len()
        );

        Ok(fixtures)
    }
}

/// Number of fixtures a complete round-robin of `competitors` produces.
pub fn expected_fixture_count(competitors: usize, legs: Legs) -> usize {
    let single = competitors * competitors.saturating_sub(1) / 2;
    match legs {
        Legs::Single => single,
        Legs::Double => single * 2,
    }
}

fn fixture_id(round: u32, index: usize) -> String {
    format!("{round}-{index}")
}

/// Position of the first fixture of `round` in a round-ordered list.
fn first_of_round(fixtures: &[Fixture], round: u32) -> usize {
    fixtures.partition_point(|f| f.round < round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rounds;
    use crate::validation::ValidationErrorKind;
    use std::collections::{HashMap, HashSet};

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("T{i}")).collect()
    }

    fn appearances(fixtures: &[Fixture]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for f in fixtures {
            *counts.entry(f.home()).or_insert(0) += 1;
            *counts.entry(f.away()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_four_competitors() {
        let fixtures = RoundRobinGenerator::new()
            .generate(&["A", "B", "C", "D"])
            .unwrap();
        assert_eq!(fixtures.len(), 6);

        let grouped = rounds(&fixtures);
        assert_eq!(grouped.len(), 3);
        assert!(grouped.values().all(|r| r.len() == 2));

        let counts = appearances(&fixtures);
        assert!(counts.values().all(|&c| c == 3));
        assert!(fixtures.iter().all(|f| !f.pairing.is_self_pairing()));
    }

    #[test]
    fn test_first_round_fixed_orientation() {
        let fixtures = RoundRobinGenerator::new()
            .generate(&["A", "B", "C", "D"])
            .unwrap();
        // round 1: A-D, B-C; rotation gives [A, D, B, C] → A-C, D-B
        assert_eq!(fixtures[0].pairing, Pairing::new("A", "D"));
        assert_eq!(fixtures[1].pairing, Pairing::new("B", "C"));
        assert_eq!(fixtures[2].pairing, Pairing::new("A", "C"));
        assert_eq!(fixtures[3].pairing, Pairing::new("D", "B"));
        assert_eq!(fixtures[0].id, "1-1");
        assert_eq!(fixtures[3].id, "2-2");
    }

    #[test]
    fn test_two_competitors() {
        let fixtures = RoundRobinGenerator::new().generate(&["A", "B"]).unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].round, 1);
    }

    #[test]
    fn test_completeness_and_balance() {
        for n in 2..=11 {
            let teams = roster(n);
            let fixtures = RoundRobinGenerator::new().generate(&teams).unwrap();
            assert_eq!(fixtures.len(), n * (n - 1) / 2, "n={n}");

            let couples: HashSet<_> = fixtures.iter().map(|f| f.pairing.unordered_key()).collect();
            assert_eq!(couples.len(), fixtures.len(), "n={n}");

            assert!(appearances(&fixtures).values().all(|&c| c == n - 1));

            for round in rounds(&fixtures).values() {
                let mut seen = HashSet::new();
                for f in round {
                    assert!(seen.insert(f.home()));
                    assert!(seen.insert(f.away()));
                }
            }
        }
    }

    #[test]
    fn test_odd_roster_byes() {
        let teams = roster(5);
        let fixtures = RoundRobinGenerator::new().generate(&teams).unwrap();
        let grouped = rounds(&fixtures);
        assert_eq!(grouped.len(), 5);
        assert!(grouped.values().all(|r| r.len() == 2));

        let mut sat_out: HashMap<&str, usize> = HashMap::new();
        for round in grouped.values() {
            for t in &teams {
                if !round.iter().any(|f| f.pairing.involves(t)) {
                    *sat_out.entry(t.as_str()).or_insert(0) += 1;
                }
            }
        }
        assert_eq!(sat_out.len(), 5);
        assert!(sat_out.values().all(|&c| c == 1));
    }

    #[test]
    fn test_double_round_robin() {
        let teams = roster(4);
        let generator =
            RoundRobinGenerator::with_config(RoundRobinConfig::default().with_legs(Legs::Double));
        let fixtures = generator.generate(&teams).unwrap();
        assert_eq!(fixtures.len(), expected_fixture_count(4, Legs::Double));
        assert_eq!(fixtures.iter().map(|f| f.round).max(), Some(6));

        let ordered: HashSet<_> = fixtures.iter().map(|f| f.pairing.clone()).collect();
        assert_eq!(ordered.len(), 12);
        for f in &fixtures {
            assert!(ordered.contains(&f.pairing.reversed()));
        }

        let ids: HashSet<_> = fixtures.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), fixtures.len());
        assert_eq!(fixtures[6].id, "4-1");
        assert_eq!(fixtures[6].pairing, fixtures[0].pairing.reversed());
    }

    #[test]
    fn test_alternating_orientation() {
        let generator = RoundRobinGenerator::with_config(
            RoundRobinConfig::default().with_orientation(Orientation::Alternating),
        );
        let fixtures = generator.generate(&roster(6)).unwrap();
        let anchor_home: Vec<bool> = fixtures
            .iter()
            .filter(|f| f.pairing.involves("T0"))
            .map(|f| f.home() == "T0")
            .collect();
        assert_eq!(anchor_home, vec![true, false, true, false, true]);
    }

    #[test]
    fn test_random_orientation_is_seeded() {
        let config = RoundRobinConfig::default()
            .with_orientation(Orientation::Random { seed: 42 })
            .with_shuffle_seed(9);
        let teams = roster(8);
        let a = RoundRobinGenerator::with_config(config.clone()).generate(&teams).unwrap();
        let b = RoundRobinGenerator::with_config(config).generate(&teams).unwrap();
        assert_eq!(a, b);

        let couples: HashSet<_> = a.iter().map(|f| f.pairing.unordered_key()).collect();
        assert_eq!(couples.len(), 28);
    }

    #[test]
    fn test_insufficient_competitors() {
        let err = RoundRobinGenerator::new().generate(&["A"]).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::InsufficientCompetitors));
    }

    #[test]
    fn test_duplicate_competitors() {
        let err = RoundRobinGenerator::new()
            .generate(&["A", "B", "A"])
            .unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::DuplicateId));
    }
}
