//! Tour evaluation: closed-tour length, permutation checks, and tour
//! comparison.

mod compare;
mod length;

pub use compare::{same_cycle, same_sequence, validate_tour};
pub use length::{tour_length, tour_length_with};
