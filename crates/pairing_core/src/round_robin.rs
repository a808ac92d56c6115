//! Circle-method round robin scheduling

use crate::combinatorics::{pad_to_even, padded_even_count};
use crate::error::{PairingError, Result};
use crate::group_pairing;
use crate::types::{Pair, Slot};

/// Rounds in one full lap: every team meets every other team once.
pub fn total_rounds(teams: usize) -> usize {
    padded_even_count(teams).saturating_sub(1)
}

/// Matches played in every round of a lap
pub fn matches_per_round(teams: usize) -> usize {
    padded_even_count(teams) / 2
}

/// Infer the round from the number of matches played so far. Rounds past
/// the first lap keep counting (`total_rounds` is not an upper bound).
pub fn guess_round(teams: usize, matches: usize) -> Result<usize> {
    let per_round = matches_per_round(teams);
    if per_round == 0 {
        return Err(PairingError::invalid_size(teams, "round robin needs at least one team"));
    }
    if matches % per_round != 0 {
        return Err(PairingError::InvalidMatchCount { teams, matches });
    }
    Ok(matches / per_round)
}

/// Keep the first element fixed and rotate the rest right by `round`.
///
/// `rotate(&[1, 2, 3, 4], 1)` is `[1, 4, 2, 3]`.
pub fn rotate<E: Clone>(items: &[E], round: usize) -> Vec<E> {
    let Some((first, rest)) = items.split_first() else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(items.len());
    rotated.push(first.clone());
    let mut rest = rest.to_vec();
    if !rest.is_empty() {
        let shift = round % rest.len();
        rest.rotate_right(shift);
    }
    rotated.extend(rest);
    rotated
}

/// Every rotation of a lap, in round order
pub fn rotations<E: Clone>(items: &[E]) -> Vec<Vec<E>> {
    (0..total_rounds(items.len()))
        .map(|round| rotate(items, round))
        .collect()
}

/// Pairs for `round`: the rotated slot list folded onto itself.
pub fn pairing<T: Clone>(slots: &[Slot<T>], round: usize) -> Vec<Pair<T>> {
    group_pairing::fold(&rotate(slots, round))
}

/// Pairs for `round` of `teams`, padding with a bye when the count is odd.
pub fn round_pairs<T: Clone>(teams: &[T], round: usize) -> Vec<Pair<T>> {
    pairing(&pad_to_even(teams), round)
}

#[cfg(test)]
#[path = "round_robin_tests.rs"]
mod round_robin_tests;
