//! Solution and termination types.

use serde::{Deserialize, Serialize};

use super::Tour;

/// Why a solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// A deterministic solver ran to completion.
    Completed,
    /// Consecutive iterations kept producing the same tour.
    Stagnated,
    /// The iteration cap was reached before stagnation.
    IterationCap,
    /// An external cancellation flag was raised.
    Cancelled,
}

impl Termination {
    /// Returns `true` if the solver stopped on its own convergence rule.
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Completed | Self::Stagnated)
    }
}

/// A tour returned by a solver, together with how it was obtained.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Location, Termination};
/// use u_tsp::solver::solve_greedy;
///
/// let locations = vec![Location::new(0.0, 0.0), Location::new(3.0, 4.0)];
/// let solution = solve_greedy(&locations).unwrap();
/// assert_eq!(solution.termination(), Termination::Completed);
/// assert!((solution.length() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    tour: Tour,
    termination: Termination,
    iterations: usize,
    length_history: Vec<f64>,
}

impl Solution {
    /// Creates a solution.
    pub fn new(
        tour: Tour,
        termination: Termination,
        iterations: usize,
        length_history: Vec<f64>,
    ) -> Self {
        Self {
            tour,
            termination,
            iterations,
            length_history,
        }
    }

    /// The returned tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Consumes the solution, returning the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }

    /// Length of the returned tour.
    pub fn length(&self) -> f64 {
        self.tour.length()
    }

    /// Why the solver stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Number of iterations (tour constructions) the solver performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Best length observed after each iteration.
    pub fn length_history(&self) -> &[f64] {
        &self.length_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_accessors() {
        let tour = Tour::from_parts(vec![0, 1, 2], 12.0);
        let sol = Solution::new(tour.clone(), Termination::Stagnated, 14, vec![13.0, 12.0]);
        assert_eq!(sol.tour(), &tour);
        assert_eq!(sol.termination(), Termination::Stagnated);
        assert_eq!(sol.iterations(), 14);
        assert!((sol.length() - 12.0).abs() < 1e-10);
        assert_eq!(sol.length_history(), &[13.0, 12.0]);
        assert_eq!(sol.into_tour(), tour);
    }

    #[test]
    fn test_termination_converged() {
        assert!(Termination::Completed.is_converged());
        assert!(Termination::Stagnated.is_converged());
        assert!(!Termination::IterationCap.is_converged());
        assert!(!Termination::Cancelled.is_converged());
    }

    #[test]
    fn test_termination_serde() {
        let json = serde_json::to_string(&Termination::IterationCap).expect("serialize");
        assert_eq!(json, "\"IterationCap\"");
        let back: Termination = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Termination::IterationCap);
    }
}
