//! Deterministic constructive heuristics.
//!
//! - [`nearest_neighbor_tour`]: Nearest-neighbor tour from a fixed start, O(n²)
//! - [`greedy_multi_start`]: Best nearest-neighbor tour over all starts, O(n³)

mod multi_start;
mod nearest_neighbor;

pub use multi_start::greedy_multi_start;
pub use nearest_neighbor::nearest_neighbor_tour;
