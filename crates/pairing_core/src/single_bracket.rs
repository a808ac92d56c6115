//! Single elimination bracket arithmetic and standard seeding

use crate::combinatorics::log2_ceil;
use crate::error::{PairingError, Result};

/// Rounds needed to reduce `teams` to a single winner
pub fn total_rounds(teams: usize) -> usize {
    log2_ceil(teams)
}

/// Largest field a bracket of `rounds` rounds can hold
pub fn max_teams(rounds: usize) -> usize {
    1 << rounds
}

/// Infer the round to generate from the number of matches already created
/// (byes included).
///
/// Round `r` of a padded bracket of size `T` is preceded by `T - T/2^r`
/// matches, so `T - matches` must itself be a power of two.
pub fn guess_round(teams: usize, matches: usize) -> Result<usize> {
    let rounds = total_rounds(teams);
    let capacity = max_teams(rounds);
    let invalid = PairingError::InvalidMatchCount { teams, matches };

    if matches > capacity {
        return Err(invalid);
    }
    let remaining = capacity - matches;
    if !remaining.is_power_of_two() {
        return Err(invalid);
    }
    let rounds_left = remaining.trailing_zeros() as usize;
    rounds.checked_sub(rounds_left).ok_or(invalid)
}

/// Arrange a power-of-two field so that adjacent pairs form a standard
/// bracket: the top seed meets the bottom seed, and the top two seeds can
/// only meet in the final.
///
/// `[1..8]` becomes `[1, 8, 4, 5, 2, 7, 3, 6]`.
pub fn seed<E: Clone>(items: &[E]) -> Result<Vec<E>> {
    if !items.len().is_power_of_two() {
        return Err(PairingError::invalid_size(
            items.len(),
            "bracket seeding needs a power-of-two field",
        ));
    }
    Ok(seed_recursive(items))
}

fn seed_recursive<E: Clone>(items: &[E]) -> Vec<E> {
    if items.len() <= 2 {
        return items.to_vec();
    }
    let half = items.len() / 2;
    let (top, bottom) = items.split_at(half);

    // Top-half elements keep their original index, which is also their
    // position in `top`.
    let mut order: Vec<usize> = (0..half).collect();
    order = seed_recursive(&order);

    let mut seeded = Vec::with_capacity(items.len());
    for index in order {
        seeded.push(top[index].clone());
        seeded.push(bottom[half - index - 1].clone());
    }
    seeded
}

#[cfg(test)]
#[path = "single_bracket_tests.rs"]
mod single_bracket_tests;
