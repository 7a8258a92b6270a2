//! Location type.

use serde::{Deserialize, Serialize};

/// A point in the plane that a tour must visit.
///
/// Locations carry no identity beyond their coordinates; a location set may
/// hold coincident points. Within a solver, a location is identified by its
/// index in the input slice.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
///
/// let a = Location::new(0.0, 0.0);
/// let b = Location::from((3.0, 4.0));
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(b.x(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
