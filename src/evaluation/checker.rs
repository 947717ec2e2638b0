//! Solution checker that replays routes against the problem.

use crate::models::{Problem, Solution};

const TOLERANCE: f64 = 1e-6;

/// A type of inconsistency found in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Demand charged to a vehicle exceeds its capacity.
    CapacityExceeded {
        /// Vehicle position.
        vehicle: usize,
        /// Total demand charged.
        load: i32,
        /// Initial capacity.
        capacity: i32,
    },
    /// A location was visited more than once.
    LocationRepeated {
        /// Repeated matrix location.
        location: usize,
    },
    /// A visited location is not a job location.
    NotAJobLocation {
        /// Offending matrix location.
        location: usize,
    },
    /// A job's demand was charged more than once.
    JobChargedTwice {
        /// Job position.
        job: usize,
    },
    /// A visit's travel time differs from the matrix entry it should come from.
    TravelTimeMismatch {
        /// Vehicle position.
        vehicle: usize,
        /// Visited location.
        location: usize,
        /// Travel time from the matrix.
        expected: f64,
        /// Travel time recorded in the route.
        actual: f64,
    },
    /// The total duration is not the sum of route durations.
    TotalDurationMismatch {
        /// Sum of route durations.
        expected: f64,
        /// Reported total.
        actual: f64,
    },
    /// The number of visits differs from the iteration bound.
    VisitCountMismatch {
        /// Iteration bound.
        expected: usize,
        /// Visits across all routes.
        actual: usize,
    },
    /// Visited and unassigned job locations do not partition the job set.
    UnassignedMismatch {
        /// Job position that is either missing or reported twice.
        job: usize,
    },
}

/// An inconsistency in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Replays a solution against its problem and reports every inconsistency.
///
/// An empty list means the solution satisfies the assignment invariants:
/// totals add up, every job location is visited at most once, no vehicle is
/// charged beyond its capacity, travel times match the matrix, and the visit
/// count equals the iteration bound.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::AssignmentConfig;
/// use u_dispatch::constructive::greedy_assignment;
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::evaluation::check_solution;
/// use u_dispatch::models::{Job, Problem, Vehicle};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 5.0],
///     vec![5.0, 0.0, 1.0],
///     vec![5.0, 1.0, 0.0],
/// ]).unwrap();
/// let problem = Problem::new(vec![Vehicle::new(1, 10)], vec![Job::new(3), Job::new(4)], matrix);
/// let solution = greedy_assignment(&problem, &AssignmentConfig::new()).unwrap();
/// assert!(check_solution(&problem, &solution).is_empty());
/// ```
pub fn check_solution(problem: &Problem, solution: &Solution) -> Vec<Violation> {
    let mut violations = Vec::new();
    let vehicle_count = problem.vehicle_count();
    let job_count = problem.job_count();
    let matrix = problem.matrix();

    let mut visited = vec![false; job_count];
    let mut charged = vec![false; job_count];
    let mut duration_sum = 0.0;

    for route in solution.routes() {
        let vehicle = &problem.vehicles()[route.vehicle()];
        let mut current = vehicle.start_index();
        let mut load = 0;

        for visit in route.visits() {
            let Some(job) = visit.location.checked_sub(vehicle_count).filter(|&j| j < job_count)
            else {
                violations.push(Violation::new(ViolationType::NotAJobLocation {
                    location: visit.location,
                }));
                continue;
            };
            if std::mem::replace(&mut visited[job], true) {
                violations.push(Violation::new(ViolationType::LocationRepeated {
                    location: visit.location,
                }));
            }
            if let Some(charged_job) = charged.get_mut(visit.job) {
                if std::mem::replace(charged_job, true) {
                    violations.push(Violation::new(ViolationType::JobChargedTwice {
                        job: visit.job,
                    }));
                }
                load += problem.jobs()[visit.job].demand();
            }

            let expected = matrix.get(current, visit.location);
            if (expected - visit.travel_time).abs() > TOLERANCE {
                violations.push(Violation::new(ViolationType::TravelTimeMismatch {
                    vehicle: route.vehicle(),
                    location: visit.location,
                    expected,
                    actual: visit.travel_time,
                }));
            }
            current = visit.location;
        }

        if load > vehicle.capacity() {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                vehicle: route.vehicle(),
                load,
                capacity: vehicle.capacity(),
            }));
        }
        duration_sum += route.duration();
    }

    if (duration_sum - solution.total_duration()).abs() > TOLERANCE {
        violations.push(Violation::new(ViolationType::TotalDurationMismatch {
            expected: duration_sum,
            actual: solution.total_duration(),
        }));
    }

    if solution.num_served() != solution.iterations() {
        violations.push(Violation::new(ViolationType::VisitCountMismatch {
            expected: solution.iterations(),
            actual: solution.num_served(),
        }));
    }

    for &job in solution.unassigned() {
        match visited.get_mut(job) {
            Some(seen) if !*seen => *seen = true,
            _ => violations.push(Violation::new(ViolationType::UnassignedMismatch { job })),
        }
    }
    violations.extend(
        visited
            .iter()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .map(|(job, _)| Violation::new(ViolationType::UnassignedMismatch { job })),
    );

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Commit, Job, Vehicle};

    fn setup() -> Problem {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 2.0, 5.0, 6.0],
            vec![2.0, 0.0, 4.0, 1.0],
            vec![5.0, 4.0, 0.0, 3.0],
            vec![6.0, 1.0, 3.0, 0.0],
        ])
        .expect("square");
        Problem::new(
            vec![Vehicle::new(1, 5), Vehicle::new(2, 5).with_start_index(1)],
            vec![Job::new(3), Job::new(2)],
            matrix,
        )
    }

    fn commit(vehicle: usize, job: usize, demand: i32, location: usize, duration: f64) -> Commit {
        Commit {
            vehicle,
            job,
            demand,
            location,
            duration,
        }
    }

    #[test]
    fn test_consistent_solution() {
        let problem = setup();
        let mut sol = Solution::new(problem.vehicles(), 2);
        sol.commit(commit(0, 0, 3, 2, 5.0));
        sol.commit(commit(1, 1, 2, 3, 1.0));
        assert!(check_solution(&problem, &sol).is_empty());
    }

    #[test]
    fn test_repeated_location() {
        let problem = setup();
        let mut sol = Solution::new(problem.vehicles(), 2);
        sol.commit(commit(0, 0, 3, 2, 5.0));
        sol.commit(commit(1, 1, 2, 2, 4.0));
        let violations = check_solution(&problem, &sol);
        assert!(violations.contains(&Violation::new(ViolationType::LocationRepeated {
            location: 2
        })));
        assert!(violations.contains(&Violation::new(ViolationType::UnassignedMismatch {
            job: 1
        })));
    }

    #[test]
    fn test_capacity_exceeded() {
        let problem = Problem::new(
            vec![Vehicle::new(1, 4)],
            vec![Job::new(3), Job::new(2)],
            DistanceMatrix::new(3),
        );
        let mut sol = Solution::new(problem.vehicles(), 2);
        sol.commit(commit(0, 0, 3, 1, 0.0));
        sol.commit(commit(0, 1, 2, 2, 0.0));
        let violations = check_solution(&problem, &sol);
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::CapacityExceeded {
                vehicle: 0,
                load: 5,
                capacity: 4,
            })]
        );
    }

    #[test]
    fn test_travel_time_mismatch() {
        let problem = setup();
        let mut sol = Solution::new(problem.vehicles(), 1);
        sol.commit(commit(0, 0, 3, 2, 1.0));
        sol.add_unassigned(1);
        let violations = check_solution(&problem, &sol);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::TravelTimeMismatch {
                vehicle: 0,
                location: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_visit_count_mismatch() {
        let problem = setup();
        let mut sol = Solution::new(problem.vehicles(), 2);
        sol.commit(commit(0, 0, 3, 2, 5.0));
        sol.add_unassigned(1);
        let violations = check_solution(&problem, &sol);
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::VisitCountMismatch {
                expected: 2,
                actual: 1,
            })]
        );
    }

    #[test]
    fn test_vehicle_location_is_not_a_job() {
        let problem = setup();
        let mut sol = Solution::new(problem.vehicles(), 1);
        sol.commit(commit(0, 0, 3, 1, 2.0));
        let violations = check_solution(&problem, &sol);
        assert!(violations.contains(&Violation::new(ViolationType::NotAJobLocation {
            location: 1
        })));
    }
}
