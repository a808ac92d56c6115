use pairing_core::{
    group_pairing, minimum_weight_perfect_matching, swiss::ScoreGroups, Pair, Result, Slot,
};
use tracing::debug;

use super::CostModel;
use crate::driver::Driver;
use crate::options::PairOptions;

/// Ranked teams as slots, with the bye (if any) in the middle so that it
/// joins the lowest score group.
pub fn with_middle_bye<T: Clone>(teams: &[T]) -> Vec<Slot<T>> {
    let mut slots: Vec<Slot<T>> = teams.iter().cloned().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.insert(slots.len() / 2, None);
    }
    slots
}

/// Slide inside each rolled-over score group. If that repeats any earlier
/// pairing, pair the whole field by minimum cost instead.
pub fn pair<D: Driver + ?Sized>(driver: &D, options: &PairOptions) -> Result<Vec<Pair<D::Team>>> {
    let ranked = driver.ranked_teams();
    let slots = with_middle_bye(&ranked);
    let model = CostModel::new(driver, &ranked, options);

    let mut groups = ScoreGroups::by_score(&slots, |slot| model.score(slot));
    groups.rollover();
    let pairs: Vec<Pair<D::Team>> = groups
        .groups()
        .iter()
        .flat_map(|group| group_pairing::slide(group))
        .collect();

    let repeats = model.counts().repeats(&pairs);
    if repeats == 0 {
        return Ok(pairs);
    }
    debug!(repeats, "score group pairing repeats earlier matches, solving globally");
    minimum_weight_perfect_matching(&slots, |a, b| model.cost(a, b))
}
