//! Padding, minimum selection and lazy enumeration helpers

use std::cmp::Ordering;

use crate::error::{PairingError, Result};
use crate::types::Slot;

/// `ceil(log2(n))`, with `log2_ceil(0) == log2_ceil(1) == 0`
pub fn log2_ceil(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Length of `n` teams after padding to an even count
pub fn padded_even_count(n: usize) -> usize {
    n.div_ceil(2) * 2
}

/// Length of `n` teams after padding to a power of two
pub fn padded_power_of_two_count(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << log2_ceil(n)
    }
}

/// Wrap teams into slots, appending a single bye if the count is odd.
pub fn pad_to_even<T: Clone>(teams: &[T]) -> Vec<Slot<T>> {
    let mut slots: Vec<Slot<T>> = teams.iter().cloned().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    slots
}

/// Wrap teams into slots, appending byes up to the next power of two.
pub fn pad_to_power_of_two<T: Clone>(teams: &[T]) -> Result<Vec<Slot<T>>> {
    if teams.is_empty() {
        return Err(PairingError::invalid_size(0, "cannot pad an empty team list"));
    }
    let target = padded_power_of_two_count(teams.len());
    let mut slots: Vec<Slot<T>> = teams.iter().cloned().map(Some).collect();
    slots.resize(target, None);
    Ok(slots)
}

/// Every item whose key equals the minimum key, in input order.
pub fn all_min_by<I, K, F>(items: I, mut key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut best: Option<K> = None;
    let mut result = Vec::new();
    for item in items {
        let k = key(&item);
        match best.as_ref().map(|b| k.cmp(b)) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal) => result.push(item),
            _ => {
                best = Some(k);
                result.clear();
                result.push(item);
            }
        }
    }
    result
}

// =============================================================================
// Perfect pairings
// =============================================================================

/// Lazy enumeration of every way to split a sequence into pairs.
///
/// The first remaining element is always paired with each later element in
/// turn, so `[1, 2, 3, 4]` yields `[(1,2),(3,4)]`, `[(1,3),(2,4)]`,
/// `[(1,4),(2,3)]`. There are `(n-1)!!` pairings; callers bound `n`.
pub struct PerfectPairings<E> {
    items: Vec<E>,
    /// Offset of the chosen partner within the remaining elements, per level
    choices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

/// Enumerate all perfect pairings of `items`. Fails for odd lengths.
pub fn perfect_pairings<E: Clone>(items: &[E]) -> Result<PerfectPairings<E>> {
    if items.len() % 2 != 0 {
        return Err(PairingError::invalid_size(
            items.len(),
            "perfect pairings need an even number of elements",
        ));
    }
    Ok(PerfectPairings {
        items: items.to_vec(),
        choices: vec![1; items.len() / 2],
        started: false,
        exhausted: false,
    })
}

impl<E: Clone> PerfectPairings<E> {
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        for level in (0..self.choices.len()).rev() {
            let remaining = n - 2 * level;
            if self.choices[level] + 1 < remaining {
                self.choices[level] += 1;
                for deeper in self.choices[level + 1..].iter_mut() {
                    *deeper = 1;
                }
                return true;
            }
        }
        false
    }

    fn current(&self) -> Vec<(E, E)> {
        let mut remaining: Vec<usize> = (0..self.items.len()).collect();
        let mut pairs = Vec::with_capacity(self.choices.len());
        for &choice in &self.choices {
            let partner = remaining.remove(choice);
            let first = remaining.remove(0);
            pairs.push((self.items[first].clone(), self.items[partner].clone()));
        }
        pairs
    }
}

impl<E: Clone> Iterator for PerfectPairings<E> {
    type Item = Vec<(E, E)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started && !self.advance() {
            self.exhausted = true;
            return None;
        }
        self.started = true;
        Some(self.current())
    }
}

// =============================================================================
// Permutations
// =============================================================================

/// Lazy permutations in lexicographic order of element positions.
pub struct Permutations<E> {
    items: Vec<E>,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

pub fn permutations<E: Clone>(items: &[E]) -> Permutations<E> {
    Permutations {
        items: items.to_vec(),
        indices: (0..items.len()).collect(),
        started: false,
        exhausted: false,
    }
}

fn next_permutation(indices: &mut [usize]) -> bool {
    if indices.len() < 2 {
        return false;
    }
    let mut i = indices.len() - 1;
    while i > 0 && indices[i - 1] >= indices[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = indices.len() - 1;
    while indices[j] <= indices[i - 1] {
        j -= 1;
    }
    indices.swap(i - 1, j);
    indices[i..].reverse();
    true
}

impl<E: Clone> Iterator for Permutations<E> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started && !next_permutation(&mut self.indices) {
            self.exhausted = true;
            return None;
        }
        self.started = true;
        Some(self.indices.iter().map(|&i| self.items[i].clone()).collect())
    }
}

#[cfg(test)]
#[path = "combinatorics_tests.rs"]
mod combinatorics_tests;
