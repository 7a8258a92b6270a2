//! Tour validation and comparison.

use crate::error::{TspError, TspResult};

/// Checks that `tour` is a permutation of `0..n`.
///
/// # Errors
///
/// [`TspError::InvalidTour`] at the first position that is out of range or
/// repeats an earlier entry, or at position `min(len, n)` when the tour has
/// the wrong number of entries.
pub fn validate_tour(tour: &[usize], n: usize) -> TspResult<()> {
    let mut seen = vec![false; n];
    for (index, &loc) in tour.iter().enumerate() {
        if loc >= n {
            return Err(TspError::InvalidTour {
                index,
                reason: "location index out of range",
            });
        }
        if seen[loc] {
            return Err(TspError::InvalidTour {
                index,
                reason: "duplicate location",
            });
        }
        seen[loc] = true;
    }
    if tour.len() != n {
        return Err(TspError::InvalidTour {
            index: tour.len().min(n),
            reason: "tour does not visit every location",
        });
    }
    Ok(())
}

/// Exact sequence equality: same indices in the same order.
///
/// This is the comparison the ACO stagnation rule uses; a rotated or
/// reversed tour counts as different.
pub fn same_sequence(a: &[usize], b: &[usize]) -> bool {
    a == b
}

/// Returns `true` if `b` is a rotation of `a` or of `a` reversed.
///
/// Such tours traverse the same set of cyclic edges and have equal length.
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::same_cycle;
///
/// assert!(same_cycle(&[0, 1, 2, 3], &[2, 3, 0, 1]));
/// assert!(same_cycle(&[0, 1, 2, 3], &[3, 2, 1, 0]));
/// assert!(!same_cycle(&[0, 1, 2, 3], &[0, 2, 1, 3]));
/// ```
pub fn same_cycle(a: &[usize], b: &[usize]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    let Some(offset) = b.iter().position(|&x| x == a[0]) else {
        return false;
    };

    let forward = (0..n).all(|k| b[(offset + k) % n] == a[k]);
    forward || (0..n).all(|k| b[(offset + n - k) % n] == a[k])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(validate_tour(&[2, 0, 1], 3).is_ok());
        assert!(validate_tour(&[0], 1).is_ok());
    }

    #[test]
    fn test_validate_duplicate() {
        assert_eq!(
            validate_tour(&[0, 2, 2], 3),
            Err(TspError::InvalidTour {
                index: 2,
                reason: "duplicate location",
            })
        );
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(matches!(
            validate_tour(&[0, 3, 1], 3),
            Err(TspError::InvalidTour { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_missing() {
        assert!(matches!(
            validate_tour(&[0, 1], 3),
            Err(TspError::InvalidTour { index: 2, .. })
        ));
        assert!(validate_tour(&[], 2).is_err());
    }

    #[test]
    fn test_same_sequence() {
        assert!(same_sequence(&[0, 1, 2], &[0, 1, 2]));
        assert!(!same_sequence(&[0, 1, 2], &[1, 2, 0]));
        assert!(!same_sequence(&[0, 1], &[0, 1, 2]));
    }

    #[test]
    fn test_same_cycle_rotation_and_reversal() {
        let a = [0, 1, 2, 3, 4];
        assert!(same_cycle(&a, &[3, 4, 0, 1, 2]));
        assert!(same_cycle(&a, &[4, 3, 2, 1, 0]));
        assert!(same_cycle(&a, &[1, 0, 4, 3, 2]));
        assert!(!same_cycle(&a, &[0, 1, 3, 2, 4]));
    }

    #[test]
    fn test_same_cycle_edge_cases() {
        assert!(same_cycle(&[], &[]));
        assert!(same_cycle(&[0], &[0]));
        assert!(same_cycle(&[0, 1], &[1, 0]));
        assert!(!same_cycle(&[0, 1], &[0, 1, 2]));
        assert!(!same_cycle(&[0, 1, 2], &[3, 4, 5]));
    }
}
