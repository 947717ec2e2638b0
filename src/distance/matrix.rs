//! Dense travel-time matrix.

use std::cmp::Ordering;

use crate::error::{RoutingError, RoutingResult};

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Entry `(from, to)` is the travel time from location `from` to location
/// `to`. The matrix may be asymmetric.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 2.0],
///     vec![8.0, 2.0, 0.0],
/// ]).unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.nearest_neighbor(0, [1, 2]), Some((1, 5.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Fails with [`RoutingError::MalformedInput`] if any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> RoutingResult<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RoutingError::malformed(format!(
                    "matrix row {idx} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the travel time from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Returns the travel times from location `from` to every location.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the first entry, in row-major order, that is not a finite
    /// number.
    pub fn find_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|d| !d.is_finite())
            .map(|idx| (idx / self.size, idx % self.size))
    }

    /// Returns the first entry, in row-major order, that is negative.
    pub fn find_negative(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|&d| d < 0.0)
            .map(|idx| (idx / self.size, idx % self.size))
    }

    /// Returns the nearest of `candidates` as seen from `from`, together with
    /// its travel time.
    ///
    /// Ties go to the candidate yielded first. Returns `None` if there are no
    /// candidates.
    pub fn nearest_neighbor(
        &self,
        from: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<(usize, f64)> {
        let row = self.row(from);
        candidates
            .into_iter()
            .map(|to| (to, row[to]))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    }
}
