//! Round robin: every team meets every other team once per lap

use pairing_core::{pad_to_even, round_robin, Pair, Result};
use tracing::debug;

use crate::driver::{create_matches, Driver, MatchBuilder};
use crate::options::RoundRobinOptions;

pub fn total_rounds<D: Driver + ?Sized>(driver: &D) -> usize {
    round_robin::total_rounds(driver.seeded_teams().len())
}

pub fn guess_round<D: Driver + ?Sized>(driver: &D) -> Result<usize> {
    round_robin::guess_round(driver.seeded_teams().len(), driver.matches().len())
}

pub fn generate<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    options: &RoundRobinOptions,
) -> Result<Vec<D::Match>> {
    let pairs = pairs(driver, options)?;
    create_matches(driver, pairs)
}

/// Pairs for a round. Home and away are swapped on odd rounds so that teams
/// alternate sides; rounds past the first lap repeat the schedule.
pub fn pairs<D: Driver + ?Sized>(
    driver: &D,
    options: &RoundRobinOptions,
) -> Result<Vec<Pair<D::Team>>> {
    let round = match options.round {
        Some(round) => round,
        None => guess_round(driver)?,
    };
    let slots = options.seeder.seed(pad_to_even(&driver.seeded_teams()))?;
    debug!(round, teams = slots.len(), "generating round robin round");

    Ok(round_robin::pairing(&slots, round)
        .into_iter()
        .map(|(home, away)| {
            if round % 2 == 1 && home.is_some() {
                (away, home)
            } else {
                (home, away)
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "round_robin_tests.rs"]
mod round_robin_tests;
