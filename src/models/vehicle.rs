//! Vehicle type with capacity and start location.

use std::fmt;

/// Externally assigned vehicle identifier.
///
/// Input files use either numbers or strings; both render to the same text
/// form when used as an output key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VehicleId {
    /// Numeric identifier.
    Number(i64),
    /// Textual identifier.
    Text(String),
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for VehicleId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for VehicleId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<String> for VehicleId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// A vehicle that receives jobs during the assignment.
///
/// The vehicle itself is immutable; the engine tracks remaining capacity and
/// current location in its own per-run state.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Vehicle, VehicleId};
///
/// let v = Vehicle::new(7, 200).with_start_index(1);
/// assert_eq!(v.id(), &VehicleId::Number(7));
/// assert_eq!(v.capacity(), 200);
/// assert_eq!(v.start_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    capacity: i32,
    start_index: usize,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity, starting at matrix
    /// location 0.
    pub fn new(id: impl Into<VehicleId>, capacity: i32) -> Self {
        Self {
            id: id.into(),
            capacity,
            start_index: 0,
        }
    }

    /// Sets the matrix location the vehicle starts from.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    /// Initial load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Start location (row of the distance matrix).
    pub fn start_index(&self) -> usize {
        self.start_index
    }
}
