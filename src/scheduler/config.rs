//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Default slot duration: one hour.
pub const DEFAULT_SLOT_DURATION_MS: i64 = 3_600_000;

/// Order in which equally scored candidates are considered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotOrder {
    /// Enumeration order: earlier times first, venues in input order.
    #[default]
    Chronological,
    /// Candidate lists shuffled with a seeded RNG before selection.
    Shuffled {
        /// RNG seed.
        seed: u64,
    },
}

impl SlotOrder {
    /// Seed of the shuffled policy.
    pub fn seed(&self) -> Option<u64> {
        match self {
            SlotOrder::Shuffled { seed } => Some(*seed),
            SlotOrder::Chronological => None,
        }
    }
}

/// Greedy scheduler configuration.
///
/// # Example
///
/// ```
/// use u_fixture::scheduler::{SchedulerConfig, SlotOrder};
///
/// let config = SchedulerConfig::default()
///     .with_utc_offset_minutes(60)
///     .with_slot_order(SlotOrder::Shuffled { seed: 3 });
/// assert_eq!(config.utc_offset_minutes, 60);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Offset from UTC (minutes) used to read a slot's hour-of-day.
    pub utc_offset_minutes: i32,
    /// Tie-break order among equally scored candidates.
    pub slot_order: SlotOrder,
}

impl SchedulerConfig {
    /// Sets the UTC offset in minutes.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Sets the tie-break order.
    pub fn with_slot_order(mut self, slot_order: SlotOrder) -> Self {
        self.slot_order = slot_order;
        self
    }
}
