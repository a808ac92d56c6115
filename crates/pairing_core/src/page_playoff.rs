//! Page playoff: four teams, double chance for the top two.
//!
//! Round 0 plays 1v2 and 3v4. The loser of 1v2 meets the winner of 3v4 in
//! the preliminary final, whose winner meets the winner of 1v2 in the grand
//! final.

use crate::error::{PairingError, Result};

pub const TEAM_COUNT: usize = 4;
pub const TOTAL_ROUNDS: usize = 3;

/// Result of a decided match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub winner: T,
    pub loser: T,
}

pub fn guess_round(matches: usize) -> Result<usize> {
    match matches {
        0 => Ok(0),
        2 => Ok(1),
        3 => Ok(2),
        _ => Err(PairingError::InvalidMatchCount {
            teams: TEAM_COUNT,
            matches,
        }),
    }
}

/// First versus second and third versus fourth of the ranking
pub fn semi_finals<T: Clone>(ranked: &[T]) -> Result<[(T, T); 2]> {
    match ranked {
        [first, second, third, fourth] => Ok([
            (first.clone(), second.clone()),
            (third.clone(), fourth.clone()),
        ]),
        _ => Err(PairingError::invalid_size(
            ranked.len(),
            "page playoff needs exactly four teams",
        )),
    }
}

pub fn preliminary_final<T: Clone>(top: &Outcome<T>, bottom: &Outcome<T>) -> (T, T) {
    (top.loser.clone(), bottom.winner.clone())
}

pub fn grand_final<T: Clone>(top: &Outcome<T>, preliminary: &Outcome<T>) -> (T, T) {
    (top.winner.clone(), preliminary.winner.clone())
}

/// Third place match between the two teams knocked out before the final
pub fn bronze_match<T: Clone>(preliminary: &Outcome<T>, bottom: &Outcome<T>) -> (T, T) {
    (preliminary.loser.clone(), bottom.loser.clone())
}

#[cfg(test)]
#[path = "page_playoff_tests.rs"]
mod page_playoff_tests;
