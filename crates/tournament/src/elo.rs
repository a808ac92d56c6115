//! Elo ratings used to decide simulated matches

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default starting Elo for the weakest seed
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Default rating gap between consecutive seeds
pub const DEFAULT_SEED_SPREAD: f64 = 50.0;

/// Ratings and game counts for the teams of a simulated tournament
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub ratings: HashMap<u32, f64>,
    pub games_played: HashMap<u32, u32>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rate teams by seed: the last seed gets `DEFAULT_ELO`, every seed
    /// above it `spread` more than the next one.
    pub fn seeded(teams: &[u32], spread: f64) -> Self {
        let mut tracker = Self::new();
        let count = teams.len();
        for (index, &team) in teams.iter().enumerate() {
            let steps = (count - index - 1) as f64;
            tracker.ratings.insert(team, DEFAULT_ELO + spread * steps);
        }
        tracker
    }

    pub fn get_rating(&self, team: u32) -> f64 {
        self.ratings.get(&team).copied().unwrap_or(DEFAULT_ELO)
    }

    /// Expected score for `team` against `opponent`
    pub fn expected_score(&self, team: u32, opponent: u32) -> f64 {
        let r1 = self.get_rating(team);
        let r2 = self.get_rating(opponent);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Draw a winner between `home` and `away` from the expected score
    pub fn play<R: Rng + ?Sized>(&self, home: u32, away: u32, rng: &mut R) -> u32 {
        if rng.gen::<f64>() < self.expected_score(home, away) {
            home
        } else {
            away
        }
    }

    /// Update ratings after a decided game
    pub fn update_ratings(&mut self, winner: u32, loser: u32) {
        let expected = self.expected_score(winner, loser);
        let change = K_FACTOR * (1.0 - expected);

        let r1 = self.get_rating(winner);
        let r2 = self.get_rating(loser);
        self.ratings.insert(winner, r1 + change);
        self.ratings.insert(loser, r2 - change);

        *self.games_played.entry(winner).or_insert(0) += 1;
        *self.games_played.entry(loser).or_insert(0) += 1;
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
