//! Swiss system building blocks: score groups, rollover and bounded
//! duplicate-avoiding search.

use crate::combinatorics::{all_min_by, log2_ceil, perfect_pairings, permutations};
use crate::error::{PairingError, Result};
use crate::group_pairing;
use crate::types::{Pair, PairCounts, Score, Slot, TeamId};

/// Largest pool `best_min_duplicates` will enumerate (10395 pairings).
pub const MAX_ENUMERATED_SLOTS: usize = 12;

/// Rounds needed before a single undefeated team is guaranteed
pub fn minimum_rounds(teams: usize) -> usize {
    log2_ceil(teams)
}

/// Slots partitioned into score tiers, highest score first.
///
/// Groups are addressed by index and members only move between groups
/// through `pop_last`/`push_front`, `merge_small` and `rollover`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGroups<T> {
    groups: Vec<Vec<Slot<T>>>,
}

impl<T: Clone> ScoreGroups<T> {
    /// Group slots with equal score. Members keep their relative input order.
    pub fn by_score<F>(slots: &[Slot<T>], score: F) -> Self
    where
        F: Fn(&Slot<T>) -> Score,
    {
        let mut scored: Vec<(Score, Slot<T>)> = slots
            .iter()
            .map(|slot| (score(slot), slot.clone()))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let mut groups: Vec<Vec<Slot<T>>> = Vec::new();
        let mut current: Option<Score> = None;
        for (value, slot) in scored {
            match groups.last_mut() {
                Some(group) if current == Some(value) => group.push(slot),
                _ => {
                    groups.push(vec![slot]);
                    current = Some(value);
                }
            }
        }
        Self { groups }
    }

    pub fn from_groups(groups: Vec<Vec<Slot<T>>>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Vec<Slot<T>>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<Vec<Slot<T>>> {
        self.groups
    }

    /// Remove the last member of group `index`
    pub fn pop_last(&mut self, index: usize) -> Option<Slot<T>> {
        self.groups.get_mut(index)?.pop()
    }

    /// Insert a member at the front of group `index`
    pub fn push_front(&mut self, index: usize, slot: Slot<T>) {
        if let Some(group) = self.groups.get_mut(index) {
            group.insert(0, slot);
        }
    }

    /// Merge every group smaller than `min_size` into the group after it.
    /// A trailing group that is still too small merges into the one before.
    pub fn merge_small(&mut self, min_size: usize) {
        let mut index = 0;
        while index + 1 < self.groups.len() {
            while self.groups[index].len() < min_size && index + 1 < self.groups.len() {
                let next = self.groups.remove(index + 1);
                self.groups[index].extend(next);
            }
            index += 1;
        }

        if self.groups.len() > 1 && self.groups.last().is_some_and(|g| g.len() < min_size) {
            if let Some(last) = self.groups.pop() {
                if let Some(previous) = self.groups.last_mut() {
                    previous.extend(last);
                }
            }
        }
    }

    /// Make every group even-sized by moving the last member of an odd group
    /// to the front of the next one. Empty groups are dropped.
    pub fn rollover(&mut self) {
        for index in 0..self.groups.len() {
            if self.groups[index].len() % 2 == 1 && index + 1 < self.groups.len() {
                if let Some(moved) = self.pop_last(index) {
                    self.push_front(index + 1, moved);
                }
            }
        }
        self.groups.retain(|group| !group.is_empty());
    }
}

/// Try slide pairings over permutations of `group` in lexicographic order.
///
/// Stops at the first permutation without repeats, otherwise returns the
/// first one with the fewest repeats. Returns `None` without searching when
/// the group has more than `limit` members.
pub fn permutation_search<T: TeamId>(
    group: &[Slot<T>],
    counts: &PairCounts<T>,
    limit: usize,
) -> Option<Vec<Pair<T>>> {
    if group.len() > limit {
        return None;
    }
    let mut best: Option<(usize, Vec<Pair<T>>)> = None;
    for candidate in permutations(group) {
        let pairs = group_pairing::slide(&candidate);
        let repeats = counts.repeats(&pairs);
        if repeats == 0 {
            return Some(pairs);
        }
        if best.as_ref().map_or(true, |(fewest, _)| repeats < *fewest) {
            best = Some((repeats, pairs));
        }
    }
    best.map(|(_, pairs)| pairs)
}

/// Exhaustively pick the pairing with the fewest repeats, then the smallest
/// total score difference. Of the remaining ties the last enumerated wins.
pub fn best_min_duplicates<T, F>(
    slots: &[Slot<T>],
    score: F,
    counts: &PairCounts<T>,
) -> Result<Vec<Pair<T>>>
where
    T: TeamId,
    F: Fn(&Slot<T>) -> Score,
{
    if slots.len() > MAX_ENUMERATED_SLOTS {
        return Err(PairingError::invalid_size(
            slots.len(),
            "too many teams to enumerate every pairing",
        ));
    }
    let mut padded = slots.to_vec();
    if padded.len() % 2 == 1 {
        padded.push(None);
    }

    let fewest_repeats = all_min_by(perfect_pairings(&padded)?, |pairs| counts.repeats(pairs));
    let closest = all_min_by(fewest_repeats, |pairs| {
        pairs
            .iter()
            .map(|(a, b)| (score(a) - score(b)).abs())
            .sum::<Score>()
    });
    Ok(closest.into_iter().last().unwrap_or_default())
}

#[cfg(test)]
#[path = "swiss_tests.rs"]
mod swiss_tests;
