//! JSON input and output.
//!
//! The problem format carries `vehicles` (`id`, `capacity`, `start_index`),
//! `jobs` (`delivery`) and a square `matrix`. The solution format reports
//! `total_delivery_duration`, one entry per vehicle under `routes`, and the
//! `unassigned` job positions.

mod problem;
mod solution;

pub use problem::{
    deserialize_problem, read_problem, IdInput, JobInput, ProblemInput, QuantityInput,
    VehicleInput,
};
pub use solution::{
    write_solution, ErrorDetail, ErrorOutput, RouteMap, RouteOutput, SolutionOutput,
};
