//! Greedy capacity-aware assignment of jobs to vehicles.
//!
//! Every iteration charges the next job's demand to the vehicle that can
//! carry it and is closest to its candidate location, then moves that
//! vehicle there. Vehicles are never sent back to their start.
//!
//! # Complexity
//!
//! O(N·m) with [`AssignmentStrategy::JobOrder`] and O(N·m·n) with
//! [`AssignmentStrategy::NearestLocation`], where N = iteration bound,
//! m = number of vehicles, n = number of jobs.

use std::time::Instant;

use crate::config::{AssignmentConfig, AssignmentStrategy};
use crate::distance::DistanceMatrix;
use crate::error::{RoutingError, RoutingResult};
use crate::evaluation::validate_problem;
use crate::models::{Commit, Problem, Solution};

use super::bound::iteration_bound;

/// Mutable per-run state: remaining capacity and position of each vehicle
/// plus the consumed job locations.
struct FleetState {
    remaining: Vec<i32>,
    current: Vec<usize>,
    consumed: Vec<bool>,
    vehicle_count: usize,
}

impl FleetState {
    fn new(problem: &Problem) -> Self {
        Self {
            remaining: problem.vehicles().iter().map(|v| v.capacity()).collect(),
            current: problem.vehicles().iter().map(|v| v.start_index()).collect(),
            consumed: vec![false; problem.job_count()],
            vehicle_count: problem.vehicle_count(),
        }
    }

    /// Job locations not consumed yet, in column order.
    fn open_locations(&self) -> impl Iterator<Item = usize> + '_ {
        self.consumed
            .iter()
            .enumerate()
            .filter(|(_, consumed)| !**consumed)
            .map(move |(job, _)| self.vehicle_count + job)
    }

    /// Candidate location and travel time for vehicle `v`.
    fn candidate(
        &self,
        matrix: &DistanceMatrix,
        strategy: AssignmentStrategy,
        v: usize,
        job_location: usize,
    ) -> Option<(usize, f64)> {
        let from = self.current[v];
        match strategy {
            AssignmentStrategy::JobOrder => Some((job_location, matrix.get(from, job_location))),
            AssignmentStrategy::NearestLocation => {
                matrix.nearest_neighbor(from, self.open_locations())
            }
        }
    }

    fn apply(&mut self, commit: &Commit) {
        self.remaining[commit.vehicle] -= commit.demand;
        self.current[commit.vehicle] = commit.location;
        self.consumed[commit.location - self.vehicle_count] = true;
    }
}

/// Picks the feasible vehicle with the shortest trip for the job at `job`.
///
/// Ties go to the vehicle that comes first in input order.
fn select(
    problem: &Problem,
    state: &FleetState,
    strategy: AssignmentStrategy,
    job: usize,
) -> Option<Commit> {
    let demand = problem.jobs()[job].demand();
    let job_location = problem.job_location(job);
    let mut best: Option<Commit> = None;

    for v in 0..problem.vehicle_count() {
        if state.remaining[v] < demand {
            continue;
        }
        let Some((location, duration)) =
            state.candidate(problem.matrix(), strategy, v, job_location)
        else {
            continue;
        };
        if best.as_ref().map_or(true, |b| duration < b.duration) {
            best = Some(Commit {
                vehicle: v,
                job,
                demand,
                location,
                duration,
            });
        }
    }

    best
}

/// Assigns jobs to vehicles with the greedy nearest-vehicle heuristic.
///
/// Validates the problem, computes the [iteration bound](super::iteration_bound),
/// then runs that many iterations. Iteration `k` charges job `k`'s demand to
/// the feasible vehicle with the smallest travel time to its candidate
/// location (see [`AssignmentStrategy`]), moves the vehicle there and marks
/// the location consumed.
///
/// Jobs whose locations were never visited are reported as unassigned.
///
/// # Errors
///
/// - [`RoutingError::MalformedInput`] / [`RoutingError::DegenerateMatrix`] if
///   validation fails; no iteration runs.
/// - [`RoutingError::InfeasibleAssignment`] if no vehicle can carry the job of
///   some iteration. A zero bound with pending jobs probes the first job, so a
///   fleet without any capacity is reported rather than silently skipped.
/// - [`RoutingError::Interrupted`] if the configured time limit passes between
///   iterations.
///
/// No partial solution is returned on error.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::AssignmentConfig;
/// use u_dispatch::constructive::greedy_assignment;
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::models::{Job, Problem, Vehicle};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 9.0, 2.0, 7.0],
///     vec![9.0, 0.0, 4.0, 3.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![7.0, 3.0, 6.0, 0.0],
/// ]).unwrap();
/// let vehicles = vec![Vehicle::new(1, 5), Vehicle::new(2, 5).with_start_index(1)];
/// let problem = Problem::new(vehicles, vec![Job::new(2), Job::new(3)], matrix);
///
/// let solution = greedy_assignment(&problem, &AssignmentConfig::new()).unwrap();
/// assert_eq!(solution.routes()[0].locations(), vec![2]);
/// assert_eq!(solution.routes()[1].locations(), vec![3]);
/// assert_eq!(solution.total_duration(), 5.0);
/// ```
pub fn greedy_assignment(problem: &Problem, config: &AssignmentConfig) -> RoutingResult<Solution> {
    validate_problem(problem, config.route_key())?;

    let bound = iteration_bound(problem.vehicles(), problem.jobs());
    config.log(&format!(
        "{} vehicles, {} jobs: total capacity {}, total demand {}, {} iterations ({})",
        problem.vehicle_count(),
        problem.job_count(),
        bound.total_capacity,
        bound.total_demand,
        bound.iterations,
        config.strategy().as_str()
    ));

    if bound.iterations == 0 {
        if let Some(job) = problem.jobs().first() {
            if !problem.vehicles().iter().any(|v| v.capacity() >= job.demand()) {
                return Err(RoutingError::InfeasibleAssignment {
                    iteration: 0,
                    job: 0,
                    demand: job.demand(),
                });
            }
        }
    }

    let started = Instant::now();
    let mut state = FleetState::new(problem);
    let mut solution = Solution::new(problem.vehicles(), bound.iterations);

    for iteration in 0..bound.iterations {
        if config
            .max_time()
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            return Err(RoutingError::Interrupted {
                completed: iteration,
                iterations: bound.iterations,
            });
        }

        let commit = select(problem, &state, config.strategy(), iteration).ok_or_else(|| {
            RoutingError::InfeasibleAssignment {
                iteration,
                job: iteration,
                demand: problem.jobs()[iteration].demand(),
            }
        })?;

        state.apply(&commit);
        solution.commit(commit);
    }

    state
        .consumed
        .iter()
        .enumerate()
        .filter(|(_, consumed)| !**consumed)
        .for_each(|(job, _)| solution.add_unassigned(job));

    config.log(&format!(
        "assigned {} of {} jobs, total duration {}",
        solution.num_served(),
        problem.job_count(),
        solution.total_duration()
    ));

    Ok(solution)
}
