//! Delivery job type.

/// A delivery demand at a fixed matrix location.
///
/// Jobs have no explicit identifier: a job is known by its position in the
/// input list, and its location is `vehicle_count + position`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Job;
///
/// let job = Job::new(4);
/// assert_eq!(job.demand(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    demand: i32,
}

impl Job {
    /// Creates a job with the given delivery demand.
    pub fn new(demand: i32) -> Self {
        Self { demand }
    }

    /// Units to deliver.
    pub fn demand(&self) -> i32 {
        self.demand
    }
}
