//! Problem instance: fleet, jobs and travel-time matrix.

use super::{Job, Vehicle};
use crate::distance::DistanceMatrix;

/// A dispatching problem instance.
///
/// Locations `0..vehicle_count` of the matrix are vehicle start locations,
/// locations `vehicle_count..vehicle_count + job_count` are job locations.
/// The instance is not validated on construction; see
/// [`validate_problem`](crate::evaluation::validate_problem).
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::models::{Job, Problem, Vehicle};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 5.0],
///     vec![5.0, 0.0, 1.0],
///     vec![5.0, 1.0, 0.0],
/// ]).unwrap();
/// let problem = Problem::new(vec![Vehicle::new(1, 10)], vec![Job::new(3), Job::new(4)], matrix);
/// assert_eq!(problem.job_location(1), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    vehicles: Vec<Vehicle>,
    jobs: Vec<Job>,
    matrix: DistanceMatrix,
}

impl Problem {
    /// Creates a problem instance.
    pub fn new(vehicles: Vec<Vehicle>, jobs: Vec<Job>, matrix: DistanceMatrix) -> Self {
        Self {
            vehicles,
            jobs,
            matrix,
        }
    }

    /// Vehicles in input order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Jobs in input order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Travel-time matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Matrix location of the job at `position`.
    pub fn job_location(&self, position: usize) -> usize {
        self.vehicles.len() + position
    }
}
