//! Error type shared by validation, assignment and the JSON adapters.

use std::fmt;

/// A failure reported by the dispatcher.
///
/// None of these are retried internally: the assignment is deterministic, so
/// running it again on the same input yields the same error.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// Vehicle, job or matrix shapes are inconsistent.
    MalformedInput {
        /// Human readable description of the inconsistency.
        reason: String,
    },
    /// No vehicle can carry the demand of the job at `iteration`.
    InfeasibleAssignment {
        /// Zero-based iteration at which the engine got stuck.
        iteration: usize,
        /// Position of the job whose demand could not be charged.
        job: usize,
        /// Demand of that job.
        demand: i32,
    },
    /// The matrix holds a non-finite travel time.
    DegenerateMatrix {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
    },
    /// The run hit its time limit before all iterations completed.
    Interrupted {
        /// Iterations committed before the limit was hit.
        completed: usize,
        /// Iteration bound of the run.
        iterations: usize,
    },
}

/// A type alias for result type with [`RoutingError`].
pub type RoutingResult<T> = Result<T, RoutingError>;

impl RoutingError {
    /// Creates a [`RoutingError::MalformedInput`] with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "MalformedInput",
            Self::InfeasibleAssignment { .. } => "InfeasibleAssignment",
            Self::DegenerateMatrix { .. } => "DegenerateMatrix",
            Self::Interrupted { .. } => "Interrupted",
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { reason } => write!(f, "malformed input: {reason}"),
            Self::InfeasibleAssignment {
                iteration,
                job,
                demand,
            } => write!(
                f,
                "no vehicle has capacity for job {job} (demand {demand}) at iteration {iteration}"
            ),
            Self::DegenerateMatrix { row, column } => {
                write!(f, "matrix entry [{row}][{column}] is not a finite travel time")
            }
            Self::Interrupted {
                completed,
                iterations,
            } => write!(
                f,
                "time limit reached after {completed} of {iterations} iterations"
            ),
        }
    }
}

impl std::error::Error for RoutingError {}

impl From<serde_json::Error> for RoutingError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("invalid json: {err}"))
    }
}
