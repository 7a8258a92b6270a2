//! Ant Colony Optimization (ACO).
//!
//! A basic ant system for the symmetric TSP: ants run one after another,
//! each building a full tour by weighted random edge choice, with pheromone
//! evaporated globally and reinforced on the traversed edge after every
//! step. The run stops when the tour stops changing between consecutive
//! ants, or at a hard iteration cap.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod runner;
mod sampling;

pub use config::AcoConfig;
pub use runner::{transition_probabilities, AcoResult, AcoRunner, MIN_LOCATIONS};
