//! Double elimination: a team is out after its second loss.
//!
//! Teams with no losses form the winners bracket and teams with one loss the
//! losers bracket. Both are listed in seed order, so the same bracket
//! positions meet again round after round.

use pairing_core::double_bracket::{self, RoundKind};
use pairing_core::{group_pairing, pad_to_power_of_two, Pair, PairingError, Result, Slot};
use tracing::debug;

use crate::driver::{create_matches, Driver, DriverExt, MatchBuilder};
use crate::options::EliminationOptions;

pub fn total_rounds<D: Driver + ?Sized>(driver: &D) -> usize {
    double_bracket::total_rounds(driver.seeded_teams().len())
}

/// Infer the round from the matches played so far, byes excluded
pub fn guess_round<D: Driver + ?Sized>(driver: &D) -> Result<usize> {
    double_bracket::guess_round(driver.seeded_teams().len(), driver.non_bye_matches().len())
}

pub fn generate<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    options: &EliminationOptions,
) -> Result<Vec<D::Match>> {
    let pairs = pairs(driver, options)?;
    create_matches(driver, pairs)
}

pub fn pairs<D: Driver + ?Sized>(
    driver: &D,
    options: &EliminationOptions,
) -> Result<Vec<Pair<D::Team>>> {
    let teams = driver.seeded_teams();
    let total = double_bracket::total_rounds(teams.len());
    let round = match options.round {
        Some(round) => round,
        None => guess_round(driver)?,
    };
    if round >= total {
        return Err(PairingError::InvalidRound { round, total });
    }
    debug!(round, kind = ?RoundKind::of(round), "generating double elimination round");

    let seeded = options.seeder.seed(pad_to_power_of_two(&teams)?)?;
    if driver.matches().is_empty() {
        return Ok(group_pairing::adjacent(&seeded));
    }
    // Undecided byes are fine; a real match without a winner leaves the
    // brackets unknown.
    let non_byes = driver.non_bye_matches();
    if non_byes.iter().any(|m| driver.match_winner(m).is_none()) {
        return Err(PairingError::MissingResult {
            round: round.saturating_sub(1),
        });
    }

    let losses = driver.loss_counts();
    let with_losses = |count: usize| -> Vec<Slot<D::Team>> {
        seeded
            .iter()
            .flatten()
            .filter(|team| losses.get(*team).copied().unwrap_or(0) == count)
            .cloned()
            .map(Some)
            .collect()
    };

    let mut slots = match RoundKind::of(round) {
        RoundKind::First => with_losses(0),
        RoundKind::Minor => {
            let mut slots = with_losses(0);
            slots.extend(with_losses(1));
            slots
        }
        RoundKind::Major => with_losses(1),
    };
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    Ok(group_pairing::adjacent(&slots))
}

#[cfg(test)]
#[path = "double_elimination_tests.rs"]
mod double_elimination_tests;
