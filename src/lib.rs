//! # u-dispatch
//!
//! Greedy, capacity-aware assignment of delivery jobs to vehicles over a
//! precomputed travel-time matrix.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Vehicle, Job, Problem, Route, Solution)
//! - [`distance`] — Travel time matrix
//! - [`constructive`] — Iteration bound and greedy assignment
//! - [`evaluation`] — Input validation and solution checking
//! - [`config`] — Run configuration and logging hook
//! - [`error`] — Error type
//! - [`format`] — JSON problem and solution format
//! - `server` — HTTP endpoint (feature `server`)

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod format;
pub mod models;

#[cfg(feature = "server")]
pub mod server;
