//! League scheduling domain models.
//!
//! Provides the data types exchanged with the surrounding league
//! application: rosters and preferences come in, fixtures and slot
//! assignments go out.
//!
//! # Domain Mappings
//!
//! | u-fixture | Football league | Tennis ladder | Esports |
//! |-----------|-----------------|---------------|---------|
//! | Competitor | Team | Player | Roster |
//! | Venue | Pitch | Court | Server/Stage |
//! | Fixture | Match | Match | Series |
//! | Round | Matchweek | Round | Week |

mod competitor;
mod fixture;
mod schedule;
mod slot;
mod venue;

pub use competitor::{Competitor, Preference, MAX_HOUR};
pub use fixture::{fixtures_in_round, rounds, Fixture, Pairing};
pub use schedule::{ScheduleResult, Violation, ViolationKind};
pub use slot::{CandidateSlot, SlotKey};
pub use venue::Venue;
