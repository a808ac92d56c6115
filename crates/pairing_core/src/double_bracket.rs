//! Double elimination bracket arithmetic.
//!
//! After the opening round the bracket alternates between minor rounds
//! (winners bracket and losers bracket both play) and major rounds (only the
//! losers bracket plays, absorbing the teams that just dropped down).

use crate::combinatorics::{log2_ceil, padded_power_of_two_count};
use crate::error::{PairingError, Result};

pub use crate::single_bracket::seed;

/// What kind of round a zero-based round number is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    First,
    Minor,
    Major,
}

impl RoundKind {
    pub fn of(round: usize) -> Self {
        if round == 0 {
            RoundKind::First
        } else if round % 2 == 1 {
            RoundKind::Minor
        } else {
            RoundKind::Major
        }
    }
}

pub fn total_rounds(teams: usize) -> usize {
    2 * log2_ceil(teams)
}

pub fn max_teams(rounds: usize) -> usize {
    1 << (rounds / 2)
}

pub fn is_minor_round(round: usize) -> bool {
    RoundKind::of(round) == RoundKind::Minor
}

pub fn is_major_round(round: usize) -> bool {
    RoundKind::of(round) == RoundKind::Major
}

/// Infer the round from the number of non-bye matches played so far.
///
/// Replays the bracket one round at a time, tracking how many teams remain
/// in the winners and losers brackets, and stops before the first round that
/// would not fit in the remaining match count.
pub fn guess_round(teams: usize, matches: usize) -> Result<usize> {
    let mut winners = teams;
    let mut losers = 0;
    let mut remaining = matches;
    let mut round = 0;

    loop {
        let size = match RoundKind::of(round) {
            RoundKind::First => {
                let played = winners - padded_power_of_two_count(winners) / 2;
                winners -= played;
                losers += played;
                played
            }
            RoundKind::Minor => {
                let winners_played = winners / 2;
                let losers_played = losers / 2;
                winners -= winners_played;
                losers = losers + winners_played - losers_played;
                winners_played + losers_played
            }
            RoundKind::Major => {
                let played = losers / 2;
                losers -= played;
                played
            }
        };

        if size == 0 || size > remaining {
            break;
        }
        remaining -= size;
        round += 1;
    }

    if remaining != 0 {
        return Err(PairingError::InvalidMatchCount { teams, matches });
    }
    Ok(round)
}

#[cfg(test)]
#[path = "double_bracket_tests.rs"]
mod double_bracket_tests;
