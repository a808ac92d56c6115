//! Swiss system: teams with similar scores meet, rematches are avoided.
//!
//! The pairing strategy is chosen with [`Pairer`]; all strategies share the
//! [`CostModel`] for deciding between imperfect pairings.

mod accelerated;
mod cost;
mod dutch;
mod grouped;
mod min_cost;

pub use cost::CostModel;
pub use dutch::with_middle_bye;
pub use grouped::PERMUTATION_LIMIT;

use pairing_core::{swiss, Pair, Result};
use tracing::debug;

use crate::driver::{create_matches, Driver, MatchBuilder};
use crate::options::{Pairer, SwissOptions};

/// Rounds needed to separate a single leader
pub fn minimum_rounds<D: Driver + ?Sized>(driver: &D) -> usize {
    swiss::minimum_rounds(driver.seeded_teams().len())
}

pub fn total_rounds<D: Driver + ?Sized>(driver: &D) -> usize {
    minimum_rounds(driver)
}

/// The most matches any team has played so far
pub fn guess_round<D: Driver + ?Sized>(driver: &D) -> usize {
    driver
        .seeded_teams()
        .iter()
        .map(|team| driver.team_matches(team).len())
        .max()
        .unwrap_or(0)
}

pub fn generate<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    options: &SwissOptions,
) -> Result<Vec<D::Match>> {
    let pairs = pairs(driver, options)?;
    create_matches(driver, pairs)
}

pub fn pairs<D: Driver + ?Sized>(driver: &D, options: &SwissOptions) -> Result<Vec<Pair<D::Team>>> {
    debug!(pairer = ?options.pairer, "generating swiss round");
    let pair_options = &options.pair_options;
    match options.pairer {
        Pairer::Dutch => dutch::pair(driver, pair_options),
        Pairer::AcceleratedDutch => accelerated::pair(driver, options),
        Pairer::Grouped => grouped::pair(driver, pair_options),
        Pairer::MinimumCost => min_cost::pair(driver, pair_options),
        Pairer::MinDuplicates => min_cost::pair_min_duplicates(driver, pair_options),
    }
}
