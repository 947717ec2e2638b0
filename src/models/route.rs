//! Route and visit types.

use super::VehicleId;

/// A single visit within a route.
///
/// `location` is where the vehicle went; `job` is the job whose demand was
/// charged for the visit. With [`AssignmentStrategy::JobOrder`] both refer to
/// the same job.
///
/// [`AssignmentStrategy::JobOrder`]: crate::config::AssignmentStrategy::JobOrder
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    /// Matrix location visited.
    pub location: usize,
    /// Position of the job whose demand was charged.
    pub job: usize,
    /// Travel time from the previous location.
    pub travel_time: f64,
    /// Cumulative demand charged after this visit.
    pub load_after: i32,
}

/// An ordered sequence of visits assigned to a single vehicle.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Route, Visit};
///
/// let mut route = Route::new(0, 1.into());
/// route.push_visit(Visit {
///     location: 3,
///     job: 1,
///     travel_time: 12.0,
///     load_after: 4,
/// });
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.duration(), 12.0);
/// assert_eq!(route.locations(), vec![3]);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    vehicle: usize,
    vehicle_id: VehicleId,
    visits: Vec<Visit>,
    duration: f64,
    total_load: i32,
}

impl Route {
    /// Creates an empty route for the vehicle at input position `vehicle`.
    pub fn new(vehicle: usize, vehicle_id: VehicleId) -> Self {
        Self {
            vehicle,
            vehicle_id,
            visits: Vec::new(),
            duration: 0.0,
            total_load: 0,
        }
    }

    /// Appends a visit and folds its travel time into the route duration.
    pub fn push_visit(&mut self, visit: Visit) {
        self.duration += visit.travel_time;
        self.total_load = visit.load_after;
        self.visits.push(visit);
    }

    /// Input position of the vehicle serving this route.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Declared identifier of the vehicle serving this route.
    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    /// Returns the ordered sequence of visits.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Returns the number of visits.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if no job was assigned to this route.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Returns the visited matrix locations in order.
    pub fn locations(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.location).collect()
    }

    /// Cumulative travel time of this route.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Total demand charged to this route.
    pub fn total_load(&self) -> i32 {
        self.total_load
    }
}
