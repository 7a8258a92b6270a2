//! Nearest-neighbor tour construction from a fixed start.
//!
//! Builds a tour greedily: starting from a given location, always move to
//! the nearest location not yet visited.
//!
//! # Complexity
//!
//! O(n²) distance lookups.

use crate::distance::DistanceMatrix;

/// Builds a nearest-neighbor tour starting at `start`.
///
/// Unvisited locations are kept in ascending index order and removed without
/// reordering, so when two candidates are equally near the one with the
/// lower index is taken. The result is fully deterministic.
///
/// # Panics
///
/// Panics if `start` is out of bounds for the matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor_tour;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(10.0, 0.0),
///     Location::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    assert!(start < n, "start {start} out of bounds for {n} locations");

    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut tour = Vec::with_capacity(n);
    tour.push(start);

    let mut current = start;
    while let Some(pos) = distances.nearest_neighbor(current, &remaining) {
        current = remaining.remove(pos);
        tour.push(current);
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn line_locations() -> DistanceMatrix {
        let locations = vec![
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(2.0, 0.0),
            Location::new(3.0, 0.0),
        ];
        DistanceMatrix::from_locations(&locations)
    }

    #[test]
    fn test_nn_line_from_end() {
        let dm = line_locations();
        assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_line_from_middle() {
        let dm = line_locations();
        // From 2: 1 and 3 tie at distance 1, lower index wins
        assert_eq!(nearest_neighbor_tour(&dm, 2), vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_nn_single_location() {
        let dm = DistanceMatrix::from_locations(&[Location::new(5.0, 5.0)]);
        assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let locations = vec![
            Location::new(0.0, 0.0),
            Location::new(10.0, 0.0), // far
            Location::new(1.0, 0.0),  // near
        ];
        let dm = DistanceMatrix::from_locations(&locations);
        assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_coincident_points() {
        let locations = vec![
            Location::new(0.0, 0.0),
            Location::new(5.0, 0.0),
            Location::new(0.0, 0.0),
        ];
        let dm = DistanceMatrix::from_locations(&locations);
        assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 2, 1]);
    }
}
