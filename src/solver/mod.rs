//! Uniform entry point over the tour-construction algorithms.
//!
//! Validates the location set, builds the distance structure each algorithm
//! needs, runs it, and wraps the tour in a [`Solution`].

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::info;

use crate::aco::{AcoConfig, AcoRunner, MIN_LOCATIONS};
use crate::constructive::greedy_multi_start;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::models::{Location, Solution, Termination};
use crate::pheromone::EdgeMatrix;

/// A tour-construction algorithm with its settings.
#[derive(Debug, Clone, PartialEq)]
pub enum Algorithm {
    /// Multi-start nearest neighbor.
    Greedy,
    /// Ant colony optimization.
    Aco(AcoConfig),
}

impl Algorithm {
    /// Short name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Aco(_) => "aco",
        }
    }

    /// Smallest location set the algorithm accepts.
    pub fn min_locations(&self) -> usize {
        match self {
            Self::Greedy => 1,
            Self::Aco(_) => MIN_LOCATIONS,
        }
    }
}

/// Solves `locations` with the given algorithm.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::aco::AcoConfig;
/// use u_tsp::solver::{solve, Algorithm};
///
/// let locations: Vec<Location> = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
///     .into_iter()
///     .map(Location::from)
///     .collect();
///
/// for algorithm in [Algorithm::Greedy, Algorithm::Aco(AcoConfig::default().with_seed(1))] {
///     let solution = solve(&locations, &algorithm).unwrap();
///     assert_eq!(solution.tour().len(), 4);
/// }
/// ```
pub fn solve(locations: &[Location], algorithm: &Algorithm) -> TspResult<Solution> {
    match algorithm {
        Algorithm::Greedy => solve_greedy(locations),
        Algorithm::Aco(config) => solve_aco(locations, Some(config)),
    }
}

/// Multi-start nearest-neighbor solution.
///
/// Deterministic: the same input always yields the same tour.
///
/// # Errors
///
/// [`TspError::InvalidInput`] if `locations` is empty or has non-finite
/// coordinates.
pub fn solve_greedy(locations: &[Location]) -> TspResult<Solution> {
    validate_locations(locations, Algorithm::Greedy.min_locations())?;

    let distances = DistanceMatrix::from_locations(locations);
    let tour = greedy_multi_start(&distances)
        .ok_or_else(|| TspError::InvalidInput("location set is empty".into()))?;

    info!(
        "greedy finished: {} locations, length {:.4}",
        locations.len(),
        tour.length()
    );
    let history = vec![tour.length()];
    Ok(Solution::new(
        tour,
        Termination::Completed,
        locations.len(),
        history,
    ))
}

/// Ant colony solution. `None` uses [`AcoConfig::default`].
///
/// # Errors
///
/// [`TspError::InvalidInput`] for fewer than two locations or non-finite
/// coordinates, [`TspError::InvalidConfig`] for a rejected configuration,
/// [`TspError::SamplingFailure`] if edge weights break down mid-run.
pub fn solve_aco(locations: &[Location], config: Option<&AcoConfig>) -> TspResult<Solution> {
    solve_aco_with_cancel(locations, config, None)
}

/// Ant colony solution with an external cancellation flag, checked once
/// per iteration.
pub fn solve_aco_with_cancel(
    locations: &[Location],
    config: Option<&AcoConfig>,
    cancel: Option<Arc<AtomicBool>>,
) -> TspResult<Solution> {
    let default_config = AcoConfig::default();
    let config = config.unwrap_or(&default_config);
    validate_locations(locations, MIN_LOCATIONS)?;

    let mut edges = EdgeMatrix::new(locations, config.initial_pheromone);
    let result = AcoRunner::run_with_cancel(&mut edges, config, cancel)?;
    Ok(Solution::new(
        result.tour,
        result.termination,
        result.iterations,
        result.length_history,
    ))
}

fn validate_locations(locations: &[Location], min: usize) -> TspResult<()> {
    if locations.is_empty() {
        return Err(TspError::InvalidInput("location set is empty".into()));
    }
    if locations.len() < min {
        return Err(TspError::InvalidInput(format!(
            "need at least {min} locations to form a cycle, got {}",
            locations.len()
        )));
    }
    if let Some(i) = locations.iter().position(|l| !l.is_finite()) {
        return Err(TspError::InvalidInput(format!(
            "location {i} has non-finite coordinates"
        )));
    }
    Ok(())
}
