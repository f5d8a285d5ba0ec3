//! Round-robin generation policies.

use serde::{Deserialize, Serialize};

/// How many times each couple meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Legs {
    /// Every couple meets once.
    #[default]
    Single,
    /// Every couple meets twice, home and away. The return leg is appended
    /// as a second half of rounds.
    Double,
}

/// Home/away orientation of each generated pairing.
///
/// Orientation never affects coverage: every policy meets every couple the
/// same number of times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The upper half of the circle is always at home.
    #[default]
    Fixed,
    /// Like `Fixed`, but every other round is flipped so the anchored
    /// competitor alternates home and away.
    Alternating,
    /// Seeded coin flip per pairing.
    Random {
        /// RNG seed.
        seed: u64,
    },
}

/// Round-robin generator configuration.
///
/// # Example
///
/// ```
/// use u_fixture::round_robin::{Legs, Orientation, RoundRobinConfig};
///
/// let config = RoundRobinConfig::default()
///     .with_legs(Legs::Double)
///     .with_orientation(Orientation::Alternating);
/// assert_eq!(config.legs, Legs::Double);
/// assert!(config.shuffle_seed.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundRobinConfig {
    /// Single or double round-robin.
    pub legs: Legs,
    /// Home/away orientation policy.
    pub orientation: Orientation,
    /// Shuffle the roster with this seed before building the circle.
    /// `None` keeps the caller's order.
    pub shuffle_seed: Option<u64>,
}

impl RoundRobinConfig {
    /// Sets the number of legs.
    pub fn with_legs(mut self, legs: Legs) -> Self {
        self.legs = legs;
        self
    }

    /// Sets the orientation policy.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shuffles the roster with the given seed before generation.
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}

impl Orientation {
    /// Seed of the random policy.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Orientation::Random { seed } => Some(*seed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json() {
        let config: RoundRobinConfig = serde_json::from_str(
            r#"{ "legs": "double", "orientation": { "random": { "seed": 7 } } }"#,
        )
        .unwrap();
        assert_eq!(config.legs, Legs::Double);
        assert_eq!(config.orientation, Orientation::Random { seed: 7 });
        assert_eq!(config.orientation.seed(), Some(7));
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: RoundRobinConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RoundRobinConfig::default());
        assert_eq!(config.orientation, Orientation::Fixed);
    }
}
