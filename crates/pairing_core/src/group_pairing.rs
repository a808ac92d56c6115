//! Ways of turning an ordered group of slots into pairs.
//!
//! All functions treat an odd-length group as if a bye were appended.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Pair, Slot};

fn padded<T: Clone>(slots: &[Slot<T>]) -> Vec<Slot<T>> {
    let mut padded = slots.to_vec();
    if padded.len() % 2 == 1 {
        padded.push(None);
    }
    padded
}

/// Consecutive neighbours: `[1,2,3,4]` -> `[1,2],[3,4]`
pub fn adjacent<T: Clone>(slots: &[Slot<T>]) -> Vec<Pair<T>> {
    padded(slots)
        .chunks(2)
        .map(|chunk| (chunk[0].clone(), chunk[1].clone()))
        .collect()
}

/// Top half against the reversed bottom half: `[1,2,3,4]` -> `[1,4],[2,3]`
pub fn fold<T: Clone>(slots: &[Slot<T>]) -> Vec<Pair<T>> {
    let slots = padded(slots);
    let (top, bottom) = slots.split_at(slots.len() / 2);
    top.iter()
        .cloned()
        .zip(bottom.iter().rev().cloned())
        .collect()
}

/// Top half against the bottom half in order: `[1,2,3,4]` -> `[1,3],[2,4]`
pub fn slide<T: Clone>(slots: &[Slot<T>]) -> Vec<Pair<T>> {
    let slots = padded(slots);
    let (top, bottom) = slots.split_at(slots.len() / 2);
    top.iter().cloned().zip(bottom.iter().cloned()).collect()
}

/// Shuffle with the given source, then pair neighbours.
pub fn random<T: Clone, R: Rng + ?Sized>(slots: &[Slot<T>], rng: &mut R) -> Vec<Pair<T>> {
    let mut shuffled = slots.to_vec();
    shuffled.shuffle(rng);
    adjacent(&shuffled)
}

#[cfg(test)]
#[path = "group_pairing_tests.rs"]
mod group_pairing_tests;
