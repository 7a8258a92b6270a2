//! # u-tsp
//!
//! Heuristic tours for the symmetric Euclidean traveling salesman problem.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Location, Tour, Solution, Termination)
//! - [`distance`]: Euclidean distance and dense distance matrix
//! - [`evaluation`]: Tour length, permutation checks, tour comparison
//! - [`pheromone`]: Symmetric edge matrix with pheromone levels
//! - [`constructive`]: Nearest neighbor and multi-start greedy
//! - [`aco`]: Ant colony optimization with stagnation stopping
//! - [`solver`]: Uniform entry point over both algorithms
//! - [`error`]: Error type and result alias

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod pheromone;
pub mod solver;

pub use error::{TspError, TspResult};
