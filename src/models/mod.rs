//! Domain model types for job dispatching.
//!
//! Provides the core abstractions: vehicles with a capacity and a start
//! location, jobs with a delivery demand, routes as ordered sequences of
//! visits, and the solution that collects them.

mod job;
mod problem;
mod route;
mod solution;
mod vehicle;

pub use job::Job;
pub use problem::Problem;
pub use route::{Route, Visit};
pub use solution::{Commit, Solution};
pub use vehicle::{Vehicle, VehicleId};
