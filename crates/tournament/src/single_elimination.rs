//! Single elimination: lose once and you are out

use pairing_core::{group_pairing, pad_to_power_of_two, single_bracket, Pair, PairingError, Result};
use tracing::debug;

use crate::driver::{create_matches, Driver, DriverExt, MatchBuilder};
use crate::options::EliminationOptions;

pub fn total_rounds<D: Driver + ?Sized>(driver: &D) -> usize {
    single_bracket::total_rounds(driver.seeded_teams().len())
}

/// Infer the round from every match created so far, byes included
pub fn guess_round<D: Driver + ?Sized>(driver: &D) -> Result<usize> {
    single_bracket::guess_round(driver.seeded_teams().len(), driver.matches().len())
}

pub fn generate<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    options: &EliminationOptions,
) -> Result<Vec<D::Match>> {
    let pairs = pairs(driver, options)?;
    create_matches(driver, pairs)
}

/// Pairs for the next round without creating any matches.
///
/// Round 0 lays out the padded, seeded field. Later rounds pair the teams
/// advancing from the previous round's matches, which are the last
/// `2^(total - round)` matches created.
pub fn pairs<D: Driver + ?Sized>(
    driver: &D,
    options: &EliminationOptions,
) -> Result<Vec<Pair<D::Team>>> {
    let teams = driver.seeded_teams();
    let total = single_bracket::total_rounds(teams.len());
    let round = match options.round {
        Some(round) => round,
        None => guess_round(driver)?,
    };
    if round >= total {
        return Err(PairingError::InvalidRound { round, total });
    }
    debug!(round, teams = teams.len(), "generating single elimination round");

    if round == 0 {
        let seeded = options.seeder.seed(pad_to_power_of_two(&teams)?)?;
        return Ok(group_pairing::adjacent(&seeded));
    }

    let matches = driver.matches();
    let previous = 1usize << (total - round);
    if matches.len() < previous {
        return Err(PairingError::MissingResult { round: round - 1 });
    }
    let advancing = matches[matches.len() - previous..]
        .iter()
        .map(|m| {
            driver
                .advancing_team(m)
                .map(Some)
                .ok_or(PairingError::MissingResult { round: round - 1 })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(group_pairing::adjacent(&advancing))
}

#[cfg(test)]
#[path = "single_elimination_tests.rs"]
mod single_elimination_tests;
