//! In-memory host used by the simulator and tests

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pairing_core::{Score, TeamId};

use crate::driver::{Driver, MatchBuilder};

/// A match stored by [`MemoryDriver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryMatch<T> {
    pub id: usize,
    pub home: T,
    pub away: Option<T>,
    pub winner: Option<T>,
}

/// Keeps teams, matches and scores in vectors and maps.
///
/// Ranking is by score (highest first) with seed order breaking ties, unless
/// an explicit ranking is set.
#[derive(Debug, Clone)]
pub struct MemoryDriver<T: TeamId> {
    teams: Vec<T>,
    matches: Vec<MemoryMatch<T>>,
    scores: HashMap<T, Score>,
    ranking: Option<Vec<T>>,
}

impl<T: TeamId> MemoryDriver<T> {
    /// A fresh tournament with `teams` in seed order
    pub fn new(teams: Vec<T>) -> Self {
        Self {
            teams,
            matches: Vec::new(),
            scores: HashMap::new(),
            ranking: None,
        }
    }

    pub fn teams(&self) -> &[T] {
        &self.teams
    }

    pub fn stored_matches(&self) -> &[MemoryMatch<T>] {
        &self.matches
    }

    /// Append an already decided match, e.g. to replay history
    pub fn record_match(&mut self, home: T, away: Option<T>, winner: Option<T>) -> MemoryMatch<T> {
        let m = MemoryMatch {
            id: self.matches.len(),
            home,
            away,
            winner,
        };
        self.matches.push(m.clone());
        m
    }

    /// Set the winner of match `id`. Returns false if there is no such match.
    pub fn set_winner(&mut self, id: usize, winner: T) -> bool {
        match self.matches.get_mut(id) {
            Some(m) => {
                m.winner = Some(winner);
                true
            }
            None => false,
        }
    }

    pub fn set_score(&mut self, team: T, score: Score) {
        self.scores.insert(team, score);
    }

    pub fn add_score(&mut self, team: &T, points: Score) {
        *self.scores.entry(team.clone()).or_insert(0) += points;
    }

    /// Fix the ranking instead of deriving it from scores
    pub fn set_ranking(&mut self, ranking: Vec<T>) {
        self.ranking = Some(ranking);
    }
}

impl<T: TeamId> Driver for MemoryDriver<T> {
    type Team = T;
    type Match = MemoryMatch<T>;

    fn matches(&self) -> Vec<Self::Match> {
        self.matches.clone()
    }

    fn seeded_teams(&self) -> Vec<T> {
        self.teams.clone()
    }

    fn ranked_teams(&self) -> Vec<T> {
        if let Some(ranking) = &self.ranking {
            return ranking.clone();
        }
        let mut ranked = self.teams.clone();
        ranked.sort_by_key(|team| std::cmp::Reverse(self.team_score(team)));
        ranked
    }

    fn match_teams(&self, m: &Self::Match) -> (T, Option<T>) {
        (m.home.clone(), m.away.clone())
    }

    fn match_winner(&self, m: &Self::Match) -> Option<T> {
        // Matches handed out earlier may be stale copies; the stored one wins.
        self.matches
            .get(m.id)
            .map_or_else(|| m.winner.clone(), |stored| stored.winner.clone())
    }

    fn team_score(&self, team: &T) -> Score {
        self.scores.get(team).copied().unwrap_or(0)
    }
}

impl<T: TeamId> MatchBuilder for MemoryDriver<T> {
    fn build_match(&mut self, home: T, away: Option<T>) -> Self::Match {
        self.record_match(home, away, None)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
