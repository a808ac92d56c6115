//! Combinatorial core of the tournament pairing engine.
//!
//! Everything in this crate is pure: functions take slices of teams (or
//! slots, where `None` stands for a bye) and return new pairings. Host data
//! and match persistence live in the `tournament` crate.

pub mod combinatorics;
pub mod double_bracket;
pub mod error;
pub mod group_pairing;
pub mod matching;
pub mod page_playoff;
pub mod round_robin;
pub mod single_bracket;
pub mod swiss;
pub mod types;

pub use combinatorics::*;
pub use error::*;
pub use matching::{maximum_weight_perfect_matching, minimum_weight_perfect_matching};
pub use types::*;
