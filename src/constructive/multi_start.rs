//! Multi-start nearest-neighbor ("greedy") solver.
//!
//! Runs [`nearest_neighbor_tour`] from every location and keeps the shortest
//! result.
//!
//! # Complexity
//!
//! O(n³): n starts, O(n²) each. With the `parallel` feature the starts run
//! on the rayon thread pool; the reduction stays sequential so the result is
//! identical either way.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::nearest_neighbor::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length_with;
use crate::models::Tour;

/// Returns the shortest nearest-neighbor tour over all start locations.
///
/// Ties between starts go to the lowest start index. Returns `None` for an
/// empty matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::greedy_multi_start;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 10.0),
///     Location::new(10.0, 10.0),
///     Location::new(10.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// let tour = greedy_multi_start(&dm).unwrap();
/// assert!((tour.length() - 40.0).abs() < 1e-10);
/// ```
pub fn greedy_multi_start(distances: &DistanceMatrix) -> Option<Tour> {
    let n = distances.size();

    let candidates: Vec<(Vec<usize>, f64)> = start_indices(n)
        .map(|start| {
            let order = nearest_neighbor_tour(distances, start);
            let length = tour_length_with(&order, distances);
            (order, length)
        })
        .collect();

    let mut best: Option<(usize, Vec<usize>, f64)> = None;
    for (start, (order, length)) in candidates.into_iter().enumerate() {
        if best.as_ref().is_none_or(|(_, _, best_len)| length < *best_len) {
            best = Some((start, order, length));
        }
    }

    best.map(|(start, order, length)| {
        debug!("greedy: best of {n} starts is start {start}, length {length:.4}");
        Tour::from_parts(order, length)
    })
}

#[cfg(not(feature = "parallel"))]
fn start_indices(n: usize) -> std::ops::Range<usize> {
    0..n
}

#[cfg(feature = "parallel")]
fn start_indices(n: usize) -> rayon::range::Iter<usize> {
    (0..n).into_par_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn square() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0),
            Location::new(0.0, 10.0),
            Location::new(10.0, 10.0),
            Location::new(10.0, 0.0),
        ]
    }

    #[test]
    fn test_square_perimeter_from_any_start() {
        let dm = DistanceMatrix::from_locations(&square());
        for start in 0..4 {
            let order = nearest_neighbor_tour(&dm, start);
            assert!((tour_length_with(&order, &dm) - 40.0).abs() < 1e-10);
        }
        let tour = greedy_multi_start(&dm).expect("non-empty");
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        assert!((tour.length() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_not_worse_than_any_start() {
        let locations: Vec<Location> = [
            (0.0, 0.0),
            (7.0, 1.0),
            (2.0, 9.0),
            (5.0, 5.0),
            (9.0, 8.0),
            (1.0, 4.0),
            (6.0, 2.0),
        ]
        .into_iter()
        .map(Location::from)
        .collect();
        let dm = DistanceMatrix::from_locations(&locations);
        let best = greedy_multi_start(&dm).expect("non-empty");
        for start in 0..locations.len() {
            let order = nearest_neighbor_tour(&dm, start);
            assert!(best.length() <= tour_length_with(&order, &dm) + 1e-10);
        }
    }

    #[test]
    fn test_first_minimum_wins() {
        // Collinear points: every start gives length 2 * span
        let locations: Vec<Location> = (0..4).map(|i| Location::new(i as f64, 0.0)).collect();
        let dm = DistanceMatrix::from_locations(&locations);
        let tour = greedy_multi_start(&dm).expect("non-empty");
        assert_eq!(tour.order()[0], 0);
        assert!((tour.length() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_points() {
        let locations = vec![Location::new(0.0, 0.0), Location::new(3.0, 4.0)];
        let dm = DistanceMatrix::from_locations(&locations);
        let tour = greedy_multi_start(&dm).expect("non-empty");
        assert_eq!(tour.order(), &[0, 1]);
        assert!((tour.length() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_locations(&[]);
        assert!(greedy_multi_start(&dm).is_none());
    }

    #[test]
    fn test_deterministic() {
        let locations: Vec<Location> = (0..12)
            .map(|i| Location::new(((i * 37) % 11) as f64, ((i * 53) % 13) as f64))
            .collect();
        let dm = DistanceMatrix::from_locations(&locations);
        let a = greedy_multi_start(&dm).expect("non-empty");
        let b = greedy_multi_start(&dm).expect("non-empty");
        assert_eq!(a, b);
    }
}
