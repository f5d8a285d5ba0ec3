//! Pairing and fixture model.
//!
//! A [`Pairing`] is an ordered home/away couple. A [`Fixture`] is a pairing
//! placed in a round of a competition. Fixtures are produced in one batch by
//! the round-robin generator and become matches once the persistence layer
//! stores a slot and a result for them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered home/away couple of competitors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    /// Home competitor ID.
    pub home: String,
    /// Away competitor ID.
    pub away: String,
}

/// A pairing placed in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Unique fixture identifier.
    pub id: String,
    /// Home/away couple.
    pub pairing: Pairing,
    /// Round (week) index, 1-based.
    pub round: u32,
}

impl Pairing {
    /// Creates a new pairing.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// The same couple with roles swapped.
    pub fn reversed(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }

    /// Whether the competitor plays in this pairing.
    #[inline]
    pub fn involves(&self, competitor_id: &str) -> bool {
        self.home == competitor_id || self.away == competitor_id
    }

    /// Whether both sides are the same competitor.
    #[inline]
    pub fn is_self_pairing(&self) -> bool {
        self.home == self.away
    }

    /// Order-independent key of the couple (lexicographically smaller ID first).
    pub fn unordered_key(&self) -> (&str, &str) {
        if self.home <= self.away {
            (self.home.as_str(), self.away.as_str())
        } else {
            (self.away.as_str(), self.home.as_str())
        }
    }
}

impl Fixture {
    /// Creates a fixture.
    pub fn new(
        id: impl Into<String>,
        home: impl Into<String>,
        away: impl Into<String>,
        round: u32,
    ) -> Self {
        Self {
            id: id.into(),
            pairing: Pairing::new(home, away),
            round,
        }
    }

    /// Home competitor ID.
    #[inline]
    pub fn home(&self) -> &str {
        &self.pairing.home
    }

    /// Away competitor ID.
    #[inline]
    pub fn away(&self) -> &str {
        &self.pairing.away
    }
}

/// Groups fixtures by round, rounds in ascending order.
///
/// Fixtures keep their relative order inside each round.
pub fn rounds(fixtures: &[Fixture]) -> BTreeMap<u32, Vec<&Fixture>> {
    let mut by_round: BTreeMap<u32, Vec<&Fixture>> = BTreeMap::new();
    for f in fixtures {
        by_round.entry(f.round).or_default().push(f);
    }
    by_round
}

/// Returns the fixtures of one round, cloned for handing to the scheduler.
pub fn fixtures_in_round(fixtures: &[Fixture], round: u32) -> Vec<Fixture> {
    fixtures.iter().filter(|f| f.round == round).cloned().collect()
}
