//! Tour type.

use serde::{Deserialize, Serialize};

use super::Location;
use crate::error::TspResult;
use crate::evaluation::{same_cycle, tour_length, validate_tour};

/// A closed tour: an ordering of location indices plus its length.
///
/// The order visits every index in `0..n` exactly once and returns from the
/// last index to the first. The length is always derived from the order and
/// the distances it was built from; there is no way to change one without
/// the other.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Location, Tour};
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 10.0),
///     Location::new(10.0, 10.0),
///     Location::new(10.0, 0.0),
/// ];
/// let tour = Tour::from_locations(vec![0, 1, 2, 3], &locations).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert!((tour.length() - 40.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Builds a tour over `locations`, validating the order and computing
    /// its length.
    pub fn from_locations(order: Vec<usize>, locations: &[Location]) -> TspResult<Self> {
        validate_tour(&order, locations.len())?;
        let length = tour_length(&order, locations)?;
        Ok(Self { order, length })
    }

    /// Pairs an order with a length already computed by a solver.
    pub(crate) fn from_parts(order: Vec<usize>, length: f64) -> Self {
        Self { order, length }
    }

    /// Location indices in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning the visit order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Total length of the closed tour.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of locations visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no locations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if this tour is strictly shorter than `other`.
    pub fn is_shorter_than(&self, other: &Tour) -> bool {
        self.length < other.length
    }

    /// Returns `true` if both tours traverse the same cycle, regardless of
    /// starting point or direction.
    pub fn same_cycle_as(&self, other: &Tour) -> bool {
        same_cycle(&self.order, &other.order)
    }
}
