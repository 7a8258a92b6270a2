//! ACO execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AcoConfig;
use super::sampling::CumulativeDistribution;
use crate::error::{TspError, TspResult};
use crate::evaluation::same_sequence;
use crate::models::{Termination, Tour};
use crate::pheromone::EdgeMatrix;

/// Fewest locations an ant colony run accepts.
pub const MIN_LOCATIONS: usize = 2;

/// Result of an ant colony run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The tour returned to the caller: the most recent tour when the run
    /// stagnated, otherwise the shortest tour observed.
    pub tour: Tour,

    /// Shortest tour observed during the run.
    pub best: Tour,

    /// Number of ants (complete tour constructions).
    pub iterations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best length after each iteration.
    pub length_history: Vec<f64>,
}

/// Executes the ant colony optimizer.
///
/// One ant at a time builds a full tour from location 0. Every step
/// evaporates pheromone on all edges and deposits on the edge just taken,
/// so later ants favour edges earlier ants chose. The run stops once the
/// tour has repeated more than `stagnation_threshold` times in a row, or
/// after `max_iterations` ants.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO on `edges`, mutating its pheromone levels in place.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidInput`] for fewer than two locations,
    /// [`TspError::InvalidConfig`] if the configuration does not validate,
    /// [`TspError::SamplingFailure`] if edge weights stop forming a
    /// distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::models::Location;
    /// use u_tsp::pheromone::EdgeMatrix;
    /// use u_tsp::aco::{AcoConfig, AcoRunner};
    ///
    /// let locations = vec![
    ///     Location::new(0.0, 0.0),
    ///     Location::new(0.0, 10.0),
    ///     Location::new(10.0, 10.0),
    ///     Location::new(10.0, 0.0),
    /// ];
    /// let config = AcoConfig::default().with_seed(42).with_max_iterations(200);
    /// let mut edges = EdgeMatrix::new(&locations, config.initial_pheromone);
    /// let result = AcoRunner::run(&mut edges, &config).unwrap();
    /// assert_eq!(result.tour.len(), 4);
    /// assert!(result.iterations <= 200);
    /// ```
    pub fn run(edges: &mut EdgeMatrix, config: &AcoConfig) -> TspResult<AcoResult> {
        Self::run_with_cancel(edges, config, None)
    }

    /// Runs ACO with an optional cancellation token.
    ///
    /// The flag is checked once before every ant after the first. A
    /// cancelled run returns the shortest tour built so far.
    pub fn run_with_cancel(
        edges: &mut EdgeMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<AcoResult> {
        config.validate().map_err(TspError::InvalidConfig)?;
        let n = edges.size();
        if n < MIN_LOCATIONS {
            return Err(TspError::InvalidInput(format!(
                "ant colony needs at least {MIN_LOCATIONS} locations, got {n}"
            )));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        debug!(
            "aco: {n} locations, alpha {}, beta {}, evaporation {}, stagnation threshold {}, cap {}",
            config.pheromone_weight,
            config.length_weight,
            config.evaporation_rate,
            config.stagnation_threshold,
            config.max_iterations
        );

        // The first ant has no predecessor to repeat.
        let first = Self::construct_tour(edges, config, &mut rng)?;
        let first_length = cycle_length(&first, edges);
        let mut latest = Tour::from_parts(first, first_length);
        let mut best = latest.clone();
        let mut iterations = 1usize;
        let mut repeat_count = 0usize;
        let mut length_history = vec![first_length];

        let termination = loop {
            if repeat_count > config.stagnation_threshold {
                break Termination::Stagnated;
            }
            if iterations >= config.max_iterations {
                break Termination::IterationCap;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }

            let order = Self::construct_tour(edges, config, &mut rng)?;
            iterations += 1;

            if same_sequence(&order, latest.order()) {
                repeat_count += 1;
            } else {
                repeat_count = 0;
            }

            let length = cycle_length(&order, edges);
            latest = Tour::from_parts(order, length);
            if latest.is_shorter_than(&best) {
                best = latest.clone();
            }
            length_history.push(best.length());

            trace!(
                "aco iteration {iterations}: length {length:.4}, best {:.4}, repeats {repeat_count}",
                best.length()
            );
        };

        let tour = match termination {
            Termination::Stagnated => latest,
            Termination::IterationCap => {
                warn!(
                    "aco: no stagnation within {} iterations, returning best length {:.4}",
                    config.max_iterations,
                    best.length()
                );
                best.clone()
            }
            Termination::Cancelled => {
                warn!("aco: cancelled after {iterations} iterations");
                best.clone()
            }
            Termination::Completed => best.clone(),
        };

        info!(
            "aco finished: {termination:?} after {iterations} iterations, length {:.4}",
            tour.length()
        );

        Ok(AcoResult {
            tour,
            best,
            iterations,
            termination,
            length_history,
        })
    }

    /// Builds one ant's tour from location 0, updating pheromone after every
    /// step.
    ///
    /// Each step draws the next location from the remaining ones with
    /// probability proportional to edge weight, then evaporates every edge
    /// once and deposits on the edge just traversed.
    pub fn construct_tour<R: Rng>(
        edges: &mut EdgeMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> TspResult<Vec<usize>> {
        let n = edges.size();
        if n == 0 {
            return Err(TspError::InvalidInput("edge matrix is empty".into()));
        }

        let mut tour = Vec::with_capacity(n);
        tour.push(0);
        let mut remaining: Vec<usize> = (1..n).collect();
        let mut current = 0;

        while !remaining.is_empty() {
            let dist = step_distribution(edges, current, &remaining, config)?;
            let chosen = remaining.remove(dist.sample(rng));

            edges.evaporate(config.evaporation_rate, config.min_pheromone);
            edges.deposit(current, chosen, config.deposit_amount);

            tour.push(chosen);
            current = chosen;
        }

        Ok(tour)
    }
}

/// Probability of moving from `current` to each entry of `remaining`.
///
/// The returned probabilities are in the order of `remaining` and sum to 1.
/// Locations not in `remaining` count as placed.
///
/// # Errors
///
/// [`TspError::SamplingFailure`] if the weights are not a valid distribution.
/// Its `step` is the number of placed locations, `size - remaining.len()`.
pub fn transition_probabilities(
    edges: &EdgeMatrix,
    current: usize,
    remaining: &[usize],
    config: &AcoConfig,
) -> TspResult<Vec<f64>> {
    step_distribution(edges, current, remaining, config).map(|d| d.probabilities())
}

fn step_distribution(
    edges: &EdgeMatrix,
    current: usize,
    remaining: &[usize],
    config: &AcoConfig,
) -> TspResult<CumulativeDistribution> {
    let step = edges.size().saturating_sub(remaining.len());
    let weights: Vec<f64> = remaining
        .iter()
        .map(|&j| edges.weight(current, j, config.pheromone_weight, config.length_weight))
        .collect();
    CumulativeDistribution::from_weights(&weights).ok_or_else(|| TspError::SamplingFailure {
        step,
        total: weights.iter().sum(),
    })
}

/// Closed-tour length read from the edge matrix. Requires at least 2 entries.
fn cycle_length(order: &[usize], edges: &EdgeMatrix) -> f64 {
    let closing = edges.edge(order[order.len() - 1], order[0]).length();
    order
        .windows(2)
        .map(|pair| edges.edge(pair[0], pair[1]).length())
        .sum::<f64>()
        + closing
}
