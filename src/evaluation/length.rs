//! Closed-tour length evaluation.

use crate::distance::{distance, DistanceMatrix};
use crate::error::{TspError, TspResult};
use crate::models::Location;

/// Computes the length of a closed tour over `locations`.
///
/// Sums the distances between consecutive entries and adds the closing edge
/// from the last entry back to the first. A single-location tour has length
/// zero.
///
/// # Errors
///
/// [`TspError::InvalidInput`] for an empty tour, [`TspError::InvalidTour`]
/// if an entry is not a valid index into `locations`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::evaluation::tour_length;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 0.0),
///     Location::new(3.0, 4.0),
/// ];
/// let len = tour_length(&[0, 1, 2], &locations).unwrap();
/// assert!((len - 12.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], locations: &[Location]) -> TspResult<f64> {
    if tour.is_empty() {
        return Err(TspError::InvalidInput(
            "cannot measure an empty tour".into(),
        ));
    }
    if let Some(index) = tour.iter().position(|&i| i >= locations.len()) {
        return Err(TspError::InvalidTour {
            index,
            reason: "location index out of range",
        });
    }

    let mut total = 0.0;
    for pair in tour.windows(2) {
        total += distance(&locations[pair[0]], &locations[pair[1]]);
    }
    if tour.len() > 1 {
        total += distance(&locations[tour[tour.len() - 1]], &locations[tour[0]]);
    }
    Ok(total)
}

/// Computes the length of a closed tour from a precomputed distance matrix.
///
/// Returns 0 for tours with fewer than two entries.
///
/// # Panics
///
/// Panics if an entry is out of bounds for the matrix.
pub fn tour_length_with(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let closing = distances.get(tour[tour.len() - 1], tour[0]);
    tour.windows(2)
        .map(|pair| distances.get(pair[0], pair[1]))
        .sum::<f64>()
        + closing
}
