use pairing_core::swiss::{permutation_search, ScoreGroups};
use pairing_core::{group_pairing, minimum_weight_perfect_matching, Pair, Result, Slot, TeamId};
use tracing::warn;

use super::{with_middle_bye, CostModel};
use crate::driver::Driver;
use crate::options::PairOptions;

/// Largest score group searched permutation by permutation (8! orders)
pub const PERMUTATION_LIMIT: usize = 8;

/// Classic Dutch pairing: merge small score groups, roll odd members down and
/// pair each group on its own.
pub fn pair<D: Driver + ?Sized>(driver: &D, options: &PairOptions) -> Result<Vec<Pair<D::Team>>> {
    let ranked = driver.ranked_teams();
    let slots = with_middle_bye(&ranked);
    if driver.matches().is_empty() {
        return Ok(group_pairing::slide(&slots));
    }

    let model = CostModel::new(driver, &ranked, options);
    let mut groups = ScoreGroups::by_score(&slots, |slot| model.score(slot));
    groups.merge_small(options.min_pair_size);
    groups.rollover();

    let mut pairs = Vec::with_capacity(slots.len() / 2);
    for group in groups.groups() {
        pairs.extend(pair_group(group, &model)?);
    }
    Ok(pairs)
}

fn pair_group<T: TeamId>(group: &[Slot<T>], model: &CostModel<T>) -> Result<Vec<Pair<T>>> {
    let slid = group_pairing::slide(group);
    if model.counts().repeats(&slid) == 0 {
        return Ok(slid);
    }
    if let Some(pairs) = permutation_search(group, model.counts(), PERMUTATION_LIMIT) {
        return Ok(pairs);
    }
    warn!(
        size = group.len(),
        limit = PERMUTATION_LIMIT,
        "score group too large for permutation search, solving by minimum cost"
    );
    minimum_weight_perfect_matching(group, |a, b| model.cost(a, b))
}
