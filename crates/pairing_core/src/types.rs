//! Core value types: teams, slots, pairs and play counts

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Points a team has earned. Hosts with fractional points scale them
/// (for example win 2, draw 1, loss 0).
pub type Score = i64;

/// Identity of a competitor. Any host type that can be cloned, compared and
/// hashed qualifies. Ordering is only used to break ties deterministically.
pub trait TeamId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> TeamId for T {}

/// A position in a pairing: a team or a bye (`None`).
pub type Slot<T> = Option<T>;

/// Two slots that should meet. The first is the home side.
pub type Pair<T> = (Slot<T>, Slot<T>);

/// Order-independent identity of a pair, used for "have these two met" checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey<T>(Slot<T>, Slot<T>);

impl<T: TeamId> PairKey<T> {
    pub fn new(a: Slot<T>, b: Slot<T>) -> Self {
        if a <= b {
            PairKey(a, b)
        } else {
            PairKey(b, a)
        }
    }

    pub fn of(pair: &Pair<T>) -> Self {
        Self::new(pair.0.clone(), pair.1.clone())
    }

    pub fn first(&self) -> &Slot<T> {
        &self.0
    }

    pub fn second(&self) -> &Slot<T> {
        &self.1
    }

    pub fn into_pair(self) -> Pair<T> {
        (self.0, self.1)
    }
}

/// How many times each unordered pair has already met.
#[derive(Debug, Clone)]
pub struct PairCounts<T: TeamId> {
    counts: HashMap<PairKey<T>, usize>,
}

impl<T: TeamId> Default for PairCounts<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<T: TeamId> PairCounts<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence of already played pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair<T>>) -> Self {
        let mut counts = Self::new();
        for (a, b) in pairs {
            counts.record(a, b);
        }
        counts
    }

    pub fn record(&mut self, a: Slot<T>, b: Slot<T>) {
        *self.counts.entry(PairKey::new(a, b)).or_insert(0) += 1;
    }

    pub fn count(&self, a: &Slot<T>, b: &Slot<T>) -> usize {
        self.counts
            .get(&PairKey::new(a.clone(), b.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, a: &Slot<T>, b: &Slot<T>) -> bool {
        self.count(a, b) > 0
    }

    /// Total number of repeats a candidate pairing would introduce
    pub fn repeats(&self, pairs: &[Pair<T>]) -> usize {
        pairs.iter().map(|(a, b)| self.count(a, b)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey<T>, usize)> + '_ {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
