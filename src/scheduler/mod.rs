//! Greedy slot scheduler and KPI evaluation.
//!
//! Assigns concrete (time, venue) slots to a batch of fixtures, usually one
//! round, honouring competitor preferences as well as a greedy pass can.
//!
//! # Algorithm
//!
//! `GreedyMatchScheduler` places the hardest-to-satisfy fixtures first and
//! gives each the best remaining slot. It is all-or-nothing: either every
//! fixture gets a slot or the run reports failure with nothing assigned.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes preference satisfaction of a result.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod config;
mod greedy;
mod kpi;

pub use config::{SchedulerConfig, SlotOrder, DEFAULT_SLOT_DURATION_MS};
pub use greedy::{GreedyMatchScheduler, ScheduleRequest};
pub use kpi::ScheduleKpi;
