//! Round-robin fixture generation.
//!
//! Turns a roster into a complete set of fixtures grouped into rounds,
//! independent of any calendar concern. Runs once per competition; a
//! regeneration replaces the whole previous batch.
//!
//! # Policies
//!
//! - [`Legs`]: single (each couple once) or double (home and away).
//! - [`Orientation`]: fixed, alternating, or seeded random home/away sides.
//! - Optional seeded roster shuffle.
//!
//! All policies are deterministic for a given configuration.
//!
//! # Reference
//! Kirkman (1847), "On a Problem in Combinations"; the circle method.

mod config;
mod generator;

pub use config::{Legs, Orientation, RoundRobinConfig};
pub use generator::{expected_fixture_count, RoundRobinGenerator};
