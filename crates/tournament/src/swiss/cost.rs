use std::collections::HashMap;

use pairing_core::{Pair, PairCounts, Score, Slot, TeamId};

use crate::driver::{Driver, DriverExt};
use crate::options::{ByePlacement, PairOptions};

/// Cost of putting two slots against each other.
///
/// `|score difference|`, plus `score_range + 1` for every earlier meeting
/// (so a rematch always costs more than any score gap), plus `score_range`
/// when a bye goes to a team `push_byes_to` wants to spare. A bye scores 0.
#[derive(Debug, Clone)]
pub struct CostModel<T: TeamId> {
    scores: HashMap<T, Score>,
    positions: HashMap<T, usize>,
    counts: PairCounts<T>,
    team_count: usize,
    min_score: Score,
    score_range: Score,
    allow_duplicates: bool,
    push_byes_to: ByePlacement,
}

impl<T: TeamId> CostModel<T> {
    /// Snapshot scores and history for `ranked` teams (standing order)
    pub fn new<D>(driver: &D, ranked: &[T], options: &PairOptions) -> Self
    where
        D: Driver<Team = T> + ?Sized,
    {
        let scores = driver.score_table(ranked);
        let max_score = scores.values().copied().max().unwrap_or(0);
        let min_score = scores.values().copied().min().unwrap_or(0);
        Self {
            positions: ranked
                .iter()
                .enumerate()
                .map(|(index, team)| (team.clone(), index))
                .collect(),
            counts: driver.pair_counts(),
            team_count: ranked.len(),
            min_score,
            score_range: max_score - min_score,
            scores,
            allow_duplicates: options.allow_duplicates,
            push_byes_to: options.push_byes_to,
        }
    }

    pub fn score(&self, slot: &Slot<T>) -> Score {
        slot.as_ref()
            .and_then(|team| self.scores.get(team))
            .copied()
            .unwrap_or(0)
    }

    pub fn counts(&self) -> &PairCounts<T> {
        &self.counts
    }

    pub fn score_range(&self) -> Score {
        self.score_range
    }

    pub fn cost(&self, a: &Slot<T>, b: &Slot<T>) -> i64 {
        let mut cost = (self.score(a) - self.score(b)).abs();
        if !self.allow_duplicates {
            cost += (self.score_range + 1) * self.counts.count(a, b) as i64;
        }
        let bye_receiver = match (a, b) {
            (Some(team), None) | (None, Some(team)) => Some(team),
            _ => None,
        };
        if let Some(team) = bye_receiver {
            if self.bye_misplaced(team) {
                cost += self.score_range;
            }
        }
        cost
    }

    /// Total cost of a round
    pub fn round_cost(&self, pairs: &[Pair<T>]) -> i64 {
        pairs.iter().map(|(a, b)| self.cost(a, b)).sum()
    }

    fn bye_misplaced(&self, team: &T) -> bool {
        let half = self.team_count / 2;
        let index = self.positions.get(team).copied().unwrap_or(0);
        match self.push_byes_to {
            ByePlacement::None => false,
            ByePlacement::BottomHalf => index < half,
            ByePlacement::TopHalf => index > half,
            ByePlacement::LowestScore => self.score(&Some(team.clone())) > self.min_score,
        }
    }
}
