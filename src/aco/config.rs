//! ACO configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the ant colony solver.
///
/// All thresholds and weights live here rather than in module-level
/// constants, so concurrent runs with different settings never interfere.
///
/// The default `min_pheromone` of 1e-12 departs from plain
/// `pheromone *= 1 - evaporation_rate` once an edge decays to that level,
/// which on larger instances happens within a few ants. Set it to 0 for the
/// unbounded rule.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_pheromone_weight(1.0)
///     .with_length_weight(2.0)
///     .with_evaporation_rate(0.2)
///     .with_stagnation_threshold(25)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Exponent applied to an edge's pheromone level (α).
    pub pheromone_weight: f64,

    /// Exponent applied to an edge's inverse length (β).
    pub length_weight: f64,

    /// Fraction of pheromone removed from every edge after each step, in (0, 1).
    pub evaporation_rate: f64,

    /// Pheromone added to the edge just traversed.
    pub deposit_amount: f64,

    /// Pheromone level of every edge before the first ant runs.
    pub initial_pheromone: f64,

    /// Lower bound evaporation cannot push pheromone below, in
    /// `[0, initial_pheromone]`. Keeps long runs from underflowing every
    /// candidate weight to zero; 0 restores plain multiplicative decay.
    pub min_pheromone: f64,

    /// Number of consecutive identical tours tolerated. The run stops once
    /// the repeat count exceeds this value.
    pub stagnation_threshold: usize,

    /// Hard cap on the number of ants (iterations). Must be positive.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            pheromone_weight: 1.0,
            length_weight: 1.0,
            evaporation_rate: 0.1,
            deposit_amount: 1.0,
            initial_pheromone: 1.0,
            min_pheromone: 1e-12,
            stagnation_threshold: 10,
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_pheromone_weight(mut self, alpha: f64) -> Self {
        self.pheromone_weight = alpha;
        self
    }

    pub fn with_length_weight(mut self, beta: f64) -> Self {
        self.length_weight = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_deposit_amount(mut self, amount: f64) -> Self {
        self.deposit_amount = amount;
        self
    }

    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    pub fn with_min_pheromone(mut self, level: f64) -> Self {
        self.min_pheromone = level;
        self
    }

    pub fn with_stagnation_threshold(mut self, n: usize) -> Self {
        self.stagnation_threshold = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.pheromone_weight.is_finite() || self.pheromone_weight < 0.0 {
            return Err(format!(
                "pheromone_weight must be finite and non-negative, got {}",
                self.pheromone_weight
            ));
        }
        if !self.length_weight.is_finite() || self.length_weight < 0.0 {
            return Err(format!(
                "length_weight must be finite and non-negative, got {}",
                self.length_weight
            ));
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(format!(
                "evaporation_rate must be in (0, 1), got {}",
                self.evaporation_rate
            ));
        }
        if !self.deposit_amount.is_finite() || self.deposit_amount < 0.0 {
            return Err(format!(
                "deposit_amount must be finite and non-negative, got {}",
                self.deposit_amount
            ));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            ));
        }
        if !self.min_pheromone.is_finite()
            || self.min_pheromone < 0.0
            || self.min_pheromone > self.initial_pheromone
        {
            return Err(format!(
                "min_pheromone must be in [0, initial_pheromone], got {}",
                self.min_pheromone
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        Ok(())
    }
}
