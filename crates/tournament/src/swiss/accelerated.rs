use pairing_core::{Pair, Result};
use tracing::debug;

use super::dutch;
use crate::driver::Driver;
use crate::options::SwissOptions;
use crate::proxy::ScoreBonus;

/// Dutch pairing where, for the opening rounds, the upper half of the seeds
/// carry bonus points so the strongest teams do not meet the weakest.
pub fn pair<D: Driver + ?Sized>(driver: &D, options: &SwissOptions) -> Result<Vec<Pair<D::Team>>> {
    let pair_options = &options.pair_options;
    let round = options.round.unwrap_or_else(|| super::guess_round(driver));
    if round >= pair_options.acceleration_rounds {
        return dutch::pair(driver, pair_options);
    }

    let seeded = driver.seeded_teams();
    let upper_half = seeded.len().div_ceil(2);
    debug!(round, upper_half, "accelerating swiss round");
    let accelerated = ScoreBonus::new(
        driver,
        seeded.into_iter().take(upper_half),
        pair_options.acceleration_points,
    );
    dutch::pair(&accelerated, pair_options)
}
