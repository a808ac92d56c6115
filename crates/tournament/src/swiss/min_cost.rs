use pairing_core::swiss::best_min_duplicates;
use pairing_core::{minimum_weight_perfect_matching, Pair, Result};

use super::{with_middle_bye, CostModel};
use crate::driver::Driver;
use crate::options::PairOptions;

/// Minimum total cost over the whole field, every round
pub fn pair<D: Driver + ?Sized>(driver: &D, options: &PairOptions) -> Result<Vec<Pair<D::Team>>> {
    let ranked = driver.ranked_teams();
    let slots = with_middle_bye(&ranked);
    let model = CostModel::new(driver, &ranked, options);
    minimum_weight_perfect_matching(&slots, |a, b| model.cost(a, b))
}

/// Enumerate every pairing of the field and keep the one with the fewest
/// rematches, then the smallest score gaps
pub fn pair_min_duplicates<D: Driver + ?Sized>(
    driver: &D,
    options: &PairOptions,
) -> Result<Vec<Pair<D::Team>>> {
    let ranked = driver.ranked_teams();
    let slots = with_middle_bye(&ranked);
    let model = CostModel::new(driver, &ranked, options);
    best_min_duplicates(&slots, |slot| model.score(slot), model.counts())
}
