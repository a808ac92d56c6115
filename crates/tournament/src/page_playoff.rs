//! Page playoff for the top four of a ranking

use pairing_core::page_playoff::{self, Outcome, TOTAL_ROUNDS};
use pairing_core::{Pair, PairingError, Result};
use tracing::debug;

use crate::driver::{create_matches, Driver, MatchBuilder};
use crate::options::PagePlayoffOptions;

pub fn total_rounds<D: Driver + ?Sized>(_driver: &D) -> usize {
    TOTAL_ROUNDS
}

pub fn guess_round<D: Driver + ?Sized>(driver: &D) -> Result<usize> {
    page_playoff::guess_round(driver.matches().len())
}

pub fn generate<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    options: &PagePlayoffOptions,
) -> Result<Vec<D::Match>> {
    let pairs = pairs(driver, options)?;
    create_matches(driver, pairs)
}

pub fn pairs<D: Driver + ?Sized>(
    driver: &D,
    options: &PagePlayoffOptions,
) -> Result<Vec<Pair<D::Team>>> {
    let semi_finals = page_playoff::semi_finals(&driver.ranked_teams())?;
    let round = match options.round {
        Some(round) => round,
        None => guess_round(driver)?,
    };
    if round >= TOTAL_ROUNDS {
        return Err(PairingError::InvalidRound {
            round,
            total: TOTAL_ROUNDS,
        });
    }
    debug!(round, "generating page playoff round");

    let matches = driver.matches();
    let outcome = |index: usize| -> Result<Outcome<D::Team>> {
        let missing = PairingError::MissingResult { round: round - 1 };
        let m = matches.get(index).ok_or(missing.clone())?;
        Ok(Outcome {
            winner: driver.match_winner(m).ok_or(missing.clone())?,
            loser: driver.match_loser(m).ok_or(missing)?,
        })
    };

    let pairs = match round {
        0 => semi_finals.to_vec(),
        1 => vec![page_playoff::preliminary_final(&outcome(0)?, &outcome(1)?)],
        _ => {
            let top = outcome(0)?;
            let preliminary = outcome(2)?;
            let mut pairs = vec![page_playoff::grand_final(&top, &preliminary)];
            if options.bronze_match {
                pairs.push(page_playoff::bronze_match(&preliminary, &outcome(1)?));
            }
            pairs
        }
    };
    Ok(pairs
        .into_iter()
        .map(|(home, away)| (Some(home), Some(away)))
        .collect())
}

#[cfg(test)]
#[path = "page_playoff_tests.rs"]
mod page_playoff_tests;
