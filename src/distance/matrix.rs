//! Dense distance matrix.

use crate::models::Location;

/// Euclidean distance between two locations.
///
/// Symmetric, non-negative, and zero exactly when the coordinates coincide.
pub fn distance(a: &Location, b: &Location) -> f64 {
    a.distance_to(b)
}

/// A dense n×n distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
///     Location::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from location coordinates.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(&locations[i], &locations[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the position in `candidates` of the location nearest to `from`.
    ///
    /// Candidates are scanned in the given order and only a strictly smaller
    /// distance replaces the current best, so ties go to the earliest
    /// candidate. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let (&first, rest) = candidates.split_first()?;
        let mut best_pos = 0;
        let mut best_dist = self.get(from, first);
        for (offset, &c) in rest.iter().enumerate() {
            let d = self.get(from, c);
            if d < best_dist {
                best_dist = d;
                best_pos = offset + 1;
            }
        }
        Some(best_pos)
    }
}
