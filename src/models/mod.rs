//! Domain model types for tour construction.
//!
//! Provides the core abstractions: locations in the plane, closed tours over
//! a location set, and solutions recording how a tour was obtained.

mod location;
mod solution;
mod tour;

pub use location::Location;
pub use solution::{Solution, Termination};
pub use tour::Tour;
