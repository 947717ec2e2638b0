//! Problem definition in json format.

use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

use crate::distance::DistanceMatrix;
use crate::error::{RoutingError, RoutingResult};
use crate::models::{Job, Problem, Vehicle, VehicleId};

/// A quantity as found in input files: either a plain number or a list of
/// dimensions of which only the first is used.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuantityInput {
    /// Plain number.
    Scalar(i64),
    /// Multi-dimensional quantity, e.g. `[4]`.
    Dimensions(Vec<i64>),
}

impl QuantityInput {
    fn to_quantity(&self, what: &str) -> RoutingResult<i32> {
        let value = match self {
            Self::Scalar(value) => *value,
            Self::Dimensions(dims) => *dims
                .first()
                .ok_or_else(|| RoutingError::malformed(format!("{what} has no dimensions")))?,
        };
        i32::try_from(value)
            .map_err(|_| RoutingError::malformed(format!("{what} {value} is out of range")))
    }
}

/// A vehicle identifier as found in input files.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IdInput {
    /// Numeric id.
    Number(i64),
    /// Textual id.
    Text(String),
}

impl From<IdInput> for VehicleId {
    fn from(id: IdInput) -> Self {
        match id {
            IdInput::Number(id) => VehicleId::Number(id),
            IdInput::Text(id) => VehicleId::Text(id),
        }
    }
}

/// A vehicle entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VehicleInput {
    /// Vehicle id.
    pub id: IdInput,
    /// Vehicle capacity.
    pub capacity: QuantityInput,
    /// Matrix row the vehicle starts from.
    pub start_index: usize,
}

/// A job entry; its location is implied by its position.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobInput {
    /// Units to deliver.
    pub delivery: QuantityInput,
}

/// A problem definition in json format.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProblemInput {
    /// Fleet in input order.
    pub vehicles: Vec<VehicleInput>,
    /// Jobs in input order.
    pub jobs: Vec<JobInput>,
    /// Travel times between all locations.
    pub matrix: Vec<Vec<f64>>,
}

impl ProblemInput {
    /// Converts the json definition into a [`Problem`].
    ///
    /// Only structural conversion happens here; shape and value checks are
    /// left to [`validate_problem`](crate::evaluation::validate_problem).
    pub fn into_problem(self) -> RoutingResult<Problem> {
        let vehicles = self
            .vehicles
            .into_iter()
            .enumerate()
            .map(|(idx, vehicle)| {
                let capacity = vehicle
                    .capacity
                    .to_quantity(&format!("capacity of vehicle {idx}"))?;
                Ok(Vehicle::new(VehicleId::from(vehicle.id), capacity)
                    .with_start_index(vehicle.start_index))
            })
            .collect::<RoutingResult<Vec<_>>>()?;

        let jobs = self
            .jobs
            .iter()
            .enumerate()
            .map(|(idx, job)| {
                job.delivery
                    .to_quantity(&format!("delivery of job {idx}"))
                    .map(Job::new)
            })
            .collect::<RoutingResult<Vec<_>>>()?;

        let matrix = DistanceMatrix::from_rows(self.matrix)?;

        Ok(Problem::new(vehicles, jobs, matrix))
    }
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> RoutingResult<ProblemInput> {
    serde_json::from_reader(reader).map_err(RoutingError::from)
}

/// Reads a problem in json format.
///
/// # Examples
///
/// ```
/// use std::io::BufReader;
/// use u_dispatch::format::read_problem;
///
/// let json = r#"{
///     "vehicles": [{ "id": 1, "capacity": [4], "start_index": 0 }],
///     "jobs": [{ "delivery": [2] }],
///     "matrix": [[0, 3], [3, 0]]
/// }"#;
/// let problem = read_problem(BufReader::new(json.as_bytes())).unwrap();
/// assert_eq!(problem.vehicles()[0].capacity(), 4);
/// assert_eq!(problem.matrix().get(0, 1), 3.0);
/// ```
pub fn read_problem<R: Read>(reader: BufReader<R>) -> RoutingResult<Problem> {
    deserialize_problem(reader)?.into_problem()
}
