//! Round-robin-constrained Swiss ("Voetlab").
//!
//! Every round is taken from a round robin schedule of the field, so after a
//! full lap each team has met every other team exactly once. Within that
//! constraint the round with the lowest Swiss pairing cost is chosen.

use std::collections::BTreeSet;

use pairing_core::{pad_to_even, round_robin, Pair, PairKey, PairingError, Result, TeamId};
use tracing::debug;

use crate::driver::{create_matches, Driver, DriverExt, MatchBuilder};
use crate::options::SwissOptions;
use crate::swiss::{self, CostModel};

type Round<T> = BTreeSet<PairKey<T>>;
type Lap<T> = BTreeSet<Round<T>>;

pub fn minimum_rounds<D: Driver + ?Sized>(_driver: &D) -> usize {
    1
}

/// Rounds in one full lap
pub fn total_rounds<D: Driver + ?Sized>(driver: &D) -> usize {
    round_robin::total_rounds(driver.seeded_teams().len())
}

pub fn guess_round<D: Driver + ?Sized>(driver: &D) -> usize {
    swiss::guess_round(driver)
}

pub fn generate<D: MatchBuilder + ?Sized>(
    driver: &mut D,
    options: &SwissOptions,
) -> Result<Vec<D::Match>> {
    let pairs = pairs(driver, options)?;
    create_matches(driver, pairs)
}

/// Cheapest round that is consistent with the current lap. Ties are broken
/// by the canonical printed form of the round.
pub fn pairs<D: Driver + ?Sized>(driver: &D, options: &SwissOptions) -> Result<Vec<Pair<D::Team>>> {
    let seeded = driver.seeded_teams();
    let ranked = driver.ranked_teams();
    let model = CostModel::new(driver, &ranked, &options.pair_options);

    let past = current_lap_pairings(driver, seeded.len());
    let candidates = available_rounds(&seeded, &past);
    debug!(
        played = past.len(),
        candidates = candidates.len(),
        "choosing voetlab round"
    );

    let best = candidates
        .into_iter()
        .map(|round| {
            let pairs: Vec<Pair<D::Team>> = round.iter().cloned().map(PairKey::into_pair).collect();
            (model.round_cost(&pairs), format!("{round:?}"), pairs)
        })
        .min_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)))
        .map(|(_, _, pairs)| pairs);

    best.ok_or(PairingError::InvalidMatchCount {
        teams: seeded.len(),
        matches: driver.matches().len(),
    })
}

/// Pairs already played in the lap in progress: those seen once more than
/// the number of completed laps.
fn current_lap_pairings<D: Driver + ?Sized>(driver: &D, teams: usize) -> Round<D::Team> {
    let per_lap = round_robin::total_rounds(teams) * round_robin::matches_per_round(teams);
    let completed_laps = if per_lap == 0 {
        0
    } else {
        driver.matches().len() / per_lap
    };
    driver
        .pair_counts()
        .iter()
        .filter(|&(_, count)| count == completed_laps + 1)
        .map(|(key, _)| key.clone())
        .collect()
}

/// Round robin schedules of every rotation of the seed order
fn candidate_laps<T: TeamId>(seeded: &[T]) -> BTreeSet<Lap<T>> {
    let total = round_robin::total_rounds(seeded.len());
    (0..seeded.len())
        .map(|shift| {
            let mut rotated = seeded.to_vec();
            rotated.rotate_left(shift);
            let slots = pad_to_even(&rotated);
            (0..total)
                .map(|round| {
                    round_robin::pairing(&slots, round)
                        .iter()
                        .map(PairKey::of)
                        .collect::<Round<T>>()
                })
                .collect::<Lap<T>>()
        })
        .collect()
}

/// Rounds not yet touched by `past` from every lap whose touched rounds
/// account for exactly the pairs in `past`
fn available_rounds<T: TeamId>(seeded: &[T], past: &Round<T>) -> BTreeSet<Round<T>> {
    candidate_laps(seeded)
        .into_iter()
        .filter(|lap| {
            let touched: Round<T> = lap
                .iter()
                .filter(|round| !round.is_disjoint(past))
                .flatten()
                .cloned()
                .collect();
            touched == *past
        })
        .flatten()
        .filter(|round| round.is_disjoint(past))
        .collect()
}

#[cfg(test)]
#[path = "voetlab_tests.rs"]
mod voetlab_tests;
