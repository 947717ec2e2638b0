//! Constructive assignment of jobs to vehicles.
//!
//! - [`iteration_bound`] — Capacity/demand aggregation, O(m + n)
//! - [`greedy_assignment`] — Greedy nearest-vehicle assignment, O(N·m·n)

mod bound;
mod greedy;

pub use bound::{iteration_bound, IterationBound};
pub use greedy::greedy_assignment;
