//! Assignment result types.

use super::{Route, Vehicle, Visit};

/// One atomic engine decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Input position of the selected vehicle.
    pub vehicle: usize,
    /// Position of the job whose demand was charged.
    pub job: usize,
    /// Demand charged to the vehicle.
    pub demand: i32,
    /// Matrix location the vehicle moved to.
    pub location: usize,
    /// Travel time to that location.
    pub duration: f64,
}

/// The complete result of an assignment run.
///
/// Holds one route per vehicle (in input order, empty routes included), the
/// total duration, the commit log and the jobs left without a vehicle.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Commit, Solution, Vehicle};
///
/// let vehicles = vec![Vehicle::new(1, 10), Vehicle::new(2, 10)];
/// let mut sol = Solution::new(&vehicles, 1);
/// sol.commit(Commit { vehicle: 1, job: 0, demand: 3, location: 2, duration: 4.0 });
/// assert_eq!(sol.num_served(), 1);
/// assert_eq!(sol.total_duration(), 4.0);
/// assert_eq!(sol.routes()[1].locations(), vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    routes: Vec<Route>,
    commits: Vec<Commit>,
    unassigned: Vec<usize>,
    total_duration: f64,
    iterations: usize,
}

impl Solution {
    /// Creates an empty solution with one route per vehicle.
    pub fn new(vehicles: &[Vehicle], iterations: usize) -> Self {
        Self {
            routes: vehicles
                .iter()
                .enumerate()
                .map(|(idx, v)| Route::new(idx, v.id().clone()))
                .collect(),
            commits: Vec::with_capacity(iterations),
            unassigned: Vec::new(),
            total_duration: 0.0,
            iterations,
        }
    }

    /// Folds a commit into the route of its vehicle and the total duration.
    ///
    /// # Panics
    ///
    /// Panics if `commit.vehicle` is not a vehicle of this solution.
    pub fn commit(&mut self, commit: Commit) {
        let route = &mut self.routes[commit.vehicle];
        let load_after = route.total_load() + commit.demand;
        route.push_visit(Visit {
            location: commit.location,
            job: commit.job,
            travel_time: commit.duration,
            load_after,
        });
        self.total_duration += commit.duration;
        self.commits.push(commit);
    }

    /// Marks a job as not served by any vehicle.
    pub fn add_unassigned(&mut self, job: usize) {
        self.unassigned.push(job);
    }

    /// Returns the routes, one per vehicle in input order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the commits in the order they were made.
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Returns the positions of jobs that were not served.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Returns the number of unserved jobs.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Total travel time across all routes.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Iteration bound the run was planned with.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total number of visits across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}
