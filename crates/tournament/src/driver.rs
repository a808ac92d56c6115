//! Host boundary: read-only tournament queries and match creation.
//!
//! The host owns teams, matches and scores. Formats only read through
//! [`Driver`] and write through [`MatchBuilder`], so a read-only decorator
//! (see [`crate::ScoreBonus`]) can wrap a shared reference to a host.

use std::collections::HashMap;

use pairing_core::{Pair, PairCounts, PairingError, Result, Score, Slot, TeamId};
use tracing::trace;

/// Read access to a tournament's state
pub trait Driver {
    type Team: TeamId;
    type Match: Clone;

    /// Every match created so far, oldest first
    fn matches(&self) -> Vec<Self::Match>;

    /// Teams in seed order (strongest first)
    fn seeded_teams(&self) -> Vec<Self::Team>;

    /// Teams in current standing order (leader first)
    fn ranked_teams(&self) -> Vec<Self::Team>;

    /// Home and away side of a match. A bye has no away team.
    fn match_teams(&self, m: &Self::Match) -> (Self::Team, Option<Self::Team>);

    /// Winner of a match, `None` while undecided
    fn match_winner(&self, m: &Self::Match) -> Option<Self::Team>;

    /// Loser of a decided match. Byes have no loser.
    fn match_loser(&self, m: &Self::Match) -> Option<Self::Team> {
        let winner = self.match_winner(m)?;
        let (home, away) = self.match_teams(m);
        if home == winner {
            away
        } else {
            Some(home)
        }
    }

    fn team_score(&self, team: &Self::Team) -> Score;

    /// Matches a team took part in, oldest first
    fn team_matches(&self, team: &Self::Team) -> Vec<Self::Match> {
        self.matches()
            .into_iter()
            .filter(|m| {
                let (home, away) = self.match_teams(m);
                home == *team || away.as_ref() == Some(team)
            })
            .collect()
    }

    fn is_bye(&self, m: &Self::Match) -> bool {
        self.match_teams(m).1.is_none()
    }
}

/// Write access: persist a new match and hand back its host value
pub trait MatchBuilder: Driver {
    fn build_match(&mut self, home: Self::Team, away: Option<Self::Team>) -> Self::Match;
}

impl<D: Driver + ?Sized> Driver for &D {
    type Team = D::Team;
    type Match = D::Match;

    fn matches(&self) -> Vec<Self::Match> {
        (**self).matches()
    }

    fn seeded_teams(&self) -> Vec<Self::Team> {
        (**self).seeded_teams()
    }

    fn ranked_teams(&self) -> Vec<Self::Team> {
        (**self).ranked_teams()
    }

    fn match_teams(&self, m: &Self::Match) -> (Self::Team, Option<Self::Team>) {
        (**self).match_teams(m)
    }

    fn match_winner(&self, m: &Self::Match) -> Option<Self::Team> {
        (**self).match_winner(m)
    }

    fn match_loser(&self, m: &Self::Match) -> Option<Self::Team> {
        (**self).match_loser(m)
    }

    fn team_score(&self, team: &Self::Team) -> Score {
        (**self).team_score(team)
    }

    fn team_matches(&self, team: &Self::Team) -> Vec<Self::Match> {
        (**self).team_matches(team)
    }

    fn is_bye(&self, m: &Self::Match) -> bool {
        (**self).is_bye(m)
    }
}

// =============================================================================
// Derived views, computed fresh on every call
// =============================================================================

pub trait DriverExt: Driver {
    fn non_bye_matches(&self) -> Vec<Self::Match> {
        self.matches()
            .into_iter()
            .filter(|m| !self.is_bye(m))
            .collect()
    }

    /// How often each pair (byes included) has met
    fn pair_counts(&self) -> PairCounts<Self::Team> {
        PairCounts::from_pairs(self.matches().iter().map(|m| {
            let (home, away) = self.match_teams(m);
            (Some(home), away)
        }))
    }

    fn score_table(&self, teams: &[Self::Team]) -> HashMap<Self::Team, Score> {
        teams
            .iter()
            .map(|team| (team.clone(), self.team_score(team)))
            .collect()
    }

    /// Number of recorded losses per team. Teams without losses are absent.
    fn loss_counts(&self) -> HashMap<Self::Team, usize> {
        let mut losses = HashMap::new();
        for m in self.matches() {
            if let Some(loser) = self.match_loser(&m) {
                *losses.entry(loser).or_insert(0) += 1;
            }
        }
        losses
    }

    /// Team that moves on from a match: the recorded winner, or the home
    /// team of an undecided bye.
    fn advancing_team(&self, m: &Self::Match) -> Option<Self::Team> {
        self.match_winner(m).or_else(|| {
            let (home, away) = self.match_teams(m);
            away.is_none().then_some(home)
        })
    }
}

impl<D: Driver + ?Sized> DriverExt for D {}

// =============================================================================
// Match creation
// =============================================================================

/// Normalise a pair so the home side is always a team.
pub fn orient<T>(pair: Pair<T>) -> Result<(T, Option<T>)> {
    match pair {
        (Some(home), away) => Ok((home, away)),
        (None, Some(home)) => Ok((home, None)),
        (None, None) => Err(PairingError::IncompleteMatch),
    }
}

/// Create a single match, swapping sides if the home slot is a bye.
pub fn create_match<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    home: Slot<D::Team>,
    away: Slot<D::Team>,
) -> Result<D::Match> {
    let (home, away) = orient((home, away))?;
    Ok(driver.build_match(home, away))
}

/// Create matches for every pair, in order. All pairs are checked before the
/// first match is built, so on error nothing has been created.
pub fn create_matches<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    pairs: Vec<Pair<D::Team>>,
) -> Result<Vec<D::Match>> {
    let oriented = pairs
        .into_iter()
        .map(orient)
        .collect::<Result<Vec<_>>>()?;

    Ok(oriented
        .into_iter()
        .map(|(home, away)| {
            trace!(?home, ?away, "creating match");
            driver.build_match(home, away)
        })
        .collect())
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
