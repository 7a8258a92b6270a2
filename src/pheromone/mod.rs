//! Pheromone-carrying edge matrix for ant colony construction.

mod edge_matrix;

pub use edge_matrix::{Edge, EdgeMatrix, DEGENERATE_ATTRACTIVENESS};
