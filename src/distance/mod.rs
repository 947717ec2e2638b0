//! Travel time matrices.
//!
//! Provides a dense, precomputed travel-time matrix for dispatching problems.

mod matrix;

pub use matrix::DistanceMatrix;
