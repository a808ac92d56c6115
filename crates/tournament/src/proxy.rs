//! Read-only driver decorator that adds bonus points to chosen teams

use std::collections::HashMap;

use pairing_core::Score;

use crate::driver::Driver;

/// Presents an inner driver unchanged except that `team_score` includes a
/// per-team bonus. Used for accelerated pairings.
pub struct ScoreBonus<'a, D: Driver + ?Sized> {
    inner: &'a D,
    bonus: HashMap<D::Team, Score>,
}

impl<'a, D: Driver + ?Sized> ScoreBonus<'a, D> {
    /// Give `points` extra to every team in `teams`
    pub fn new(inner: &'a D, teams: impl IntoIterator<Item = D::Team>, points: Score) -> Self {
        Self {
            inner,
            bonus: teams.into_iter().map(|team| (team, points)).collect(),
        }
    }

    pub fn bonus(&self, team: &D::Team) -> Score {
        self.bonus.get(team).copied().unwrap_or(0)
    }
}

impl<D: Driver + ?Sized> Driver for ScoreBonus<'_, D> {
    type Team = D::Team;
    type Match = D::Match;

    fn matches(&self) -> Vec<Self::Match> {
        self.inner.matches()
    }

    fn seeded_teams(&self) -> Vec<Self::Team> {
        self.inner.seeded_teams()
    }

    fn ranked_teams(&self) -> Vec<Self::Team> {
        self.inner.ranked_teams()
    }

    fn match_teams(&self, m: &Self::Match) -> (Self::Team, Option<Self::Team>) {
        self.inner.match_teams(m)
    }

    fn match_winner(&self, m: &Self::Match) -> Option<Self::Team> {
        self.inner.match_winner(m)
    }

    fn match_loser(&self, m: &Self::Match) -> Option<Self::Team> {
        self.inner.match_loser(m)
    }

    fn team_score(&self, team: &Self::Team) -> Score {
        self.inner.team_score(team) + self.bonus(team)
    }

    fn team_matches(&self, team: &Self::Team) -> Vec<Self::Match> {
        self.inner.team_matches(team)
    }

    fn is_bye(&self, m: &Self::Match) -> bool {
        self.inner.is_bye(m)
    }
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod proxy_tests;
