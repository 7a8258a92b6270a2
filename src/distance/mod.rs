//! Euclidean distances.
//!
//! Provides the pairwise distance function and a dense distance matrix for
//! the deterministic solvers.

mod matrix;

pub use matrix::{distance, DistanceMatrix};
