//! Capacity/demand aggregation deciding how many jobs a run assigns.

use crate::models::{Job, Vehicle};

/// Aggregate fleet capacity, aggregate demand and the resulting iteration
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBound {
    /// Sum of vehicle capacities.
    pub total_capacity: i64,
    /// Sum of job demands.
    pub total_demand: i64,
    /// Number of assignment iterations to run.
    pub iterations: usize,
}

/// Computes the iteration bound of a run.
///
/// When the fleet can carry all demand every job gets an iteration.
/// Otherwise the run is limited to `total_capacity` iterations, and never to
/// more iterations than there are jobs. Capacity is a quantity and the bound
/// a count, so a small bound is a heuristic cut, not a guarantee that the
/// remaining jobs fit.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::iteration_bound;
/// use u_dispatch::models::{Job, Vehicle};
///
/// let vehicles = vec![Vehicle::new(1, 2)];
/// let jobs = vec![Job::new(1), Job::new(1), Job::new(1)];
/// let bound = iteration_bound(&vehicles, &jobs);
/// assert_eq!(bound.total_capacity, 2);
/// assert_eq!(bound.total_demand, 3);
/// assert_eq!(bound.iterations, 2);
/// ```
pub fn iteration_bound(vehicles: &[Vehicle], jobs: &[Job]) -> IterationBound {
    let total_capacity: i64 = vehicles.iter().map(|v| i64::from(v.capacity())).sum();
    let total_demand: i64 = jobs.iter().map(|j| i64::from(j.demand())).sum();

    let iterations = if total_demand < total_capacity {
        jobs.len()
    } else {
        usize::try_from(total_capacity)
            .unwrap_or(0)
            .min(jobs.len())
    };

    IterationBound {
        total_capacity,
        total_demand,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_below_capacity() {
        let vehicles = vec![Vehicle::new(1, 10), Vehicle::new(2, 5)];
        let jobs = vec![Job::new(3), Job::new(4), Job::new(7)];
        let bound = iteration_bound(&vehicles, &jobs);
        assert_eq!(bound.total_capacity, 15);
        assert_eq!(bound.total_demand, 14);
        assert_eq!(bound.iterations, 3);
    }

    #[test]
    fn test_demand_equal_to_capacity() {
        let vehicles = vec![Vehicle::new(1, 2)];
        let jobs = vec![Job::new(1), Job::new(1)];
        assert_eq!(iteration_bound(&vehicles, &jobs).iterations, 2);
    }

    #[test]
    fn test_capacity_is_clamped_to_job_count() {
        let vehicles = vec![Vehicle::new(1, 10)];
        let jobs = vec![Job::new(6), Job::new(6)];
        let bound = iteration_bound(&vehicles, &jobs);
        assert_eq!(bound.total_demand, 12);
        assert_eq!(bound.iterations, 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(iteration_bound(&[], &[]).iterations, 0);
        assert_eq!(iteration_bound(&[], &[Job::new(1)]).iterations, 0);
        assert_eq!(iteration_bound(&[Vehicle::new(1, 4)], &[]).iterations, 0);
    }

    #[test]
    fn test_no_overflow() {
        let vehicles = vec![Vehicle::new(1, i32::MAX), Vehicle::new(2, i32::MAX)];
        let jobs = vec![Job::new(i32::MAX)];
        let bound = iteration_bound(&vehicles, &jobs);
        assert_eq!(bound.total_capacity, 2 * i64::from(i32::MAX));
        assert_eq!(bound.iterations, 1);
    }
}
