//! Input validation run before any assignment.

use std::collections::HashSet;

use crate::config::RouteKey;
use crate::error::{RoutingError, RoutingResult};
use crate::models::Problem;

/// Checks that a problem instance is consistent enough to be assigned.
///
/// Fails with [`RoutingError::MalformedInput`] when:
///
/// - the matrix side differs from `vehicle_count + job_count`,
/// - a capacity or demand is negative,
/// - a vehicle start index is outside the matrix,
/// - a travel time is negative,
/// - two vehicle ids render to the same text while routes are keyed by
///   [`RouteKey::Id`], e.g. `1` and `"1"`.
///
/// Fails with [`RoutingError::DegenerateMatrix`] when a travel time is NaN or
/// infinite, since an unreachable value cannot be told apart from a consumed
/// location.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::RouteKey;
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::evaluation::validate_problem;
/// use u_dispatch::models::{Job, Problem, Vehicle};
///
/// let problem = Problem::new(vec![Vehicle::new(1, 10)], vec![Job::new(3)], DistanceMatrix::new(3));
/// let err = validate_problem(&problem, RouteKey::Id).unwrap_err();
/// assert_eq!(err.kind(), "MalformedInput");
/// ```
pub fn validate_problem(problem: &Problem, route_key: RouteKey) -> RoutingResult<()> {
    let expected = problem.vehicle_count() + problem.job_count();
    let size = problem.matrix().size();
    if size != expected {
        return Err(RoutingError::malformed(format!(
            "matrix side is {size}, expected {expected} ({} vehicles + {} jobs)",
            problem.vehicle_count(),
            problem.job_count()
        )));
    }

    for (idx, vehicle) in problem.vehicles().iter().enumerate() {
        if vehicle.capacity() < 0 {
            return Err(RoutingError::malformed(format!(
                "vehicle {idx} has negative capacity {}",
                vehicle.capacity()
            )));
        }
        if vehicle.start_index() >= size {
            return Err(RoutingError::malformed(format!(
                "vehicle {idx} starts at index {}, outside of matrix of side {size}",
                vehicle.start_index()
            )));
        }
    }

    if let Some((idx, job)) = problem
        .jobs()
        .iter()
        .enumerate()
        .find(|(_, job)| job.demand() < 0)
    {
        return Err(RoutingError::malformed(format!(
            "job {idx} has negative demand {}",
            job.demand()
        )));
    }

    if let Some((row, column)) = problem.matrix().find_non_finite() {
        return Err(RoutingError::DegenerateMatrix { row, column });
    }
    if let Some((row, column)) = problem.matrix().find_negative() {
        return Err(RoutingError::malformed(format!(
            "matrix entry [{row}][{column}] is negative"
        )));
    }

    if route_key == RouteKey::Id {
        let mut seen = HashSet::with_capacity(problem.vehicle_count());
        for vehicle in problem.vehicles() {
            if !seen.insert(vehicle.id().to_string()) {
                return Err(RoutingError::malformed(format!(
                    "vehicle id '{}' is not unique",
                    vehicle.id()
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Job, Vehicle};

    fn square(size: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    dm.set(i, j, 1.0);
                }
            }
        }
        dm
    }

    fn problem(vehicles: Vec<Vehicle>, jobs: Vec<Job>) -> Problem {
        let size = vehicles.len() + jobs.len();
        Problem::new(vehicles, jobs, square(size))
    }

    #[test]
    fn test_valid_problem() {
        let p = problem(
            vec![Vehicle::new(1, 5), Vehicle::new(2, 5).with_start_index(1)],
            vec![Job::new(2), Job::new(0)],
        );
        assert_eq!(validate_problem(&p, RouteKey::Id), Ok(()));
    }

    #[test]
    fn test_matrix_size_mismatch() {
        let p = Problem::new(vec![Vehicle::new(1, 5)], vec![Job::new(1)], square(3));
        let err = validate_problem(&p, RouteKey::Id).expect_err("mismatch");
        assert_eq!(err.kind(), "MalformedInput");
    }

    #[test]
    fn test_negative_capacity() {
        let p = problem(vec![Vehicle::new(1, -1)], vec![Job::new(1)]);
        assert!(matches!(
            validate_problem(&p, RouteKey::Id),
            Err(RoutingError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_negative_demand() {
        let p = problem(vec![Vehicle::new(1, 3)], vec![Job::new(1), Job::new(-2)]);
        let err = validate_problem(&p, RouteKey::Id).expect_err("negative demand");
        assert!(err.to_string().contains("job 1"));
    }

    #[test]
    fn test_start_index_out_of_range() {
        let p = problem(vec![Vehicle::new(1, 3).with_start_index(2)], vec![Job::new(1)]);
        assert!(validate_problem(&p, RouteKey::Id).is_err());
    }

    #[test]
    fn test_non_finite_entry() {
        let mut dm = square(2);
        dm.set(1, 0, f64::INFINITY);
        let p = Problem::new(vec![Vehicle::new(1, 3)], vec![Job::new(1)], dm);
        assert_eq!(
            validate_problem(&p, RouteKey::Id),
            Err(RoutingError::DegenerateMatrix { row: 1, column: 0 })
        );
    }

    #[test]
    fn test_negative_entry() {
        let mut dm = square(2);
        dm.set(0, 1, -4.0);
        let p = Problem::new(vec![Vehicle::new(1, 3)], vec![Job::new(1)], dm);
        assert_eq!(
            validate_problem(&p, RouteKey::Id).map_err(|e| e.kind()),
            Err("MalformedInput")
        );
    }

    #[test]
    fn test_duplicate_ids_depend_on_key() {
        let p = problem(
            vec![Vehicle::new(1, 3), Vehicle::new(1, 3)],
            vec![Job::new(1)],
        );
        assert!(validate_problem(&p, RouteKey::Id).is_err());
        assert!(validate_problem(&p, RouteKey::Position).is_ok());
    }

    #[test]
    fn test_number_and_text_ids_collide() {
        let p = problem(
            vec![Vehicle::new(1, 3), Vehicle::new("1", 3).with_start_index(1)],
            vec![Job::new(1)],
        );
        let err = validate_problem(&p, RouteKey::Id).expect_err("same route key");
        assert_eq!(err.kind(), "MalformedInput");
        assert!(err.to_string().contains("'1'"));
        assert!(validate_problem(&p, RouteKey::Position).is_ok());
    }
}
