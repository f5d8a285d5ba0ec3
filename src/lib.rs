//! League fixture generation and slot scheduling for the U-Engine ecosystem.
//!
//! Generates complete round-robin fixture lists and assigns concrete
//! (time, venue) slots to a round of fixtures, honouring each competitor's
//! venue and time-of-day preferences as far as a greedy pass can, with
//! explicit infeasibility detection and violation reporting.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Competitor`, `Preference`, `Fixture`,
//!   `Pairing`, `Venue`, `CandidateSlot`, `ScheduleResult`, `Violation`
//! - **`round_robin`**: Circle-method fixture generation (single/double legs)
//! - **`slots`**: Candidate slot enumeration and preference scoring
//! - **`scheduler`**: Hardest-first greedy slot assignment and KPIs
//! - **`validation`**: Precondition checks (roster size, IDs, self-pairings)
//! - **`api`**: The two entry points used by the league application
//!
//! # Architecture
//!
//! Purely computational: no I/O, no threads, no shared state between calls.
//! Persistence, UI and league CRUD are the caller's concern.
//!
//! # References
//!
//! - Kirkman (1847), "On a Problem in Combinations"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod api;
pub mod models;
pub mod round_robin;
pub mod scheduler;
pub mod slots;
pub mod validation;

pub use api::{generate_fixtures, schedule_matches};
