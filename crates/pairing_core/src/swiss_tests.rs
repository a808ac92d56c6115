use super::*;

fn slots(teams: &[u32]) -> Vec<Slot<u32>> {
    teams.iter().copied().map(Some).collect()
}

fn groups(layout: &[&[u32]]) -> ScoreGroups<u32> {
    ScoreGroups::from_groups(layout.iter().map(|g| slots(g)).collect())
}

#[test]
fn test_minimum_rounds() {
    assert_eq!(minimum_rounds(2), 1);
    assert_eq!(minimum_rounds(3), 2);
    assert_eq!(minimum_rounds(4), 2);
    assert_eq!(minimum_rounds(9), 4);
}

#[test]
fn test_group_by_score() {
    let teams = slots(&[1, 2, 3, 4, 5, 6]);
    let score = |slot: &Slot<u32>| match slot {
        Some(1) | Some(4) => 2,
        Some(2) | Some(6) => 1,
        _ => 0,
    };
    let grouped = ScoreGroups::by_score(&teams, score);
    assert_eq!(grouped, groups(&[&[1, 4], &[2, 6], &[3, 5]]));
}

#[test]
fn test_group_by_score_bye_counts_as_zero() {
    let teams = vec![Some(1), None, Some(2)];
    let grouped = ScoreGroups::by_score(&teams, |slot| if *slot == Some(1) { 1 } else { 0 });
    assert_eq!(grouped.into_groups(), vec![vec![Some(1)], vec![None, Some(2)]]);
}

#[test]
fn test_merge_small_groups() {
    let mut grouped = groups(&[&[1, 2], &[3, 4, 5], &[6, 7, 8, 9], &[10]]);
    grouped.merge_small(4);
    assert_eq!(grouped, groups(&[&[1, 2, 3, 4, 5], &[6, 7, 8, 9, 10]]));

    let mut single = groups(&[&[1, 2]]);
    single.merge_small(4);
    assert_eq!(single, groups(&[&[1, 2]]));

    let mut all_small = groups(&[&[1], &[2], &[3]]);
    all_small.merge_small(4);
    assert_eq!(all_small, groups(&[&[1, 2, 3]]));
}

#[test]
fn test_rollover() {
    let mut grouped = groups(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9], &[10, 11, 12]]);
    grouped.rollover();
    assert_eq!(
        grouped,
        groups(&[&[1, 2], &[3, 4, 5, 6], &[7, 8], &[9, 10, 11, 12]])
    );

    let mut singles = groups(&[&[1], &[2], &[3], &[4]]);
    singles.rollover();
    assert_eq!(singles, groups(&[&[1, 2], &[3, 4]]));
}

#[test]
fn test_permutation_search_finds_fresh_pairing() {
    let group = slots(&[1, 2, 3, 4]);
    let counts = PairCounts::from_pairs(vec![(Some(1), Some(3)), (Some(2), Some(4))]);
    let pairs = permutation_search(&group, &counts, 8).unwrap();
    assert_eq!(counts.repeats(&pairs), 0);
    // [1,2,4,3] is the first permutation whose slide avoids both repeats
    assert_eq!(pairs, vec![(Some(1), Some(4)), (Some(2), Some(3))]);
}

#[test]
fn test_permutation_search_keeps_fewest_repeats() {
    let group = slots(&[1, 2]);
    let counts = PairCounts::from_pairs(vec![(Some(1), Some(2))]);
    assert_eq!(
        permutation_search(&group, &counts, 8),
        Some(vec![(Some(1), Some(2))])
    );
}

#[test]
fn test_permutation_search_respects_limit() {
    let group = slots(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert!(permutation_search(&group, &PairCounts::new(), 8).is_none());
}

#[test]
fn test_best_min_duplicates() {
    let teams = slots(&[1, 2, 3, 4]);
    let counts = PairCounts::from_pairs(vec![(Some(1), Some(2))]);
    let score = |slot: &Slot<u32>| slot.map_or(0, |t| t as Score);
    let pairs = best_min_duplicates(&teams, score, &counts).unwrap();
    // {1,3},{2,4} and {1,4},{2,3} both avoid repeats with difference 4;
    // the later one is kept.
    assert_eq!(pairs, vec![(Some(1), Some(4)), (Some(2), Some(3))]);
}

#[test]
fn test_best_min_duplicates_pads_and_bounds() {
    let teams = slots(&[1, 2, 3]);
    let pairs = best_min_duplicates(&teams, |_| 0, &PairCounts::new()).unwrap();
    assert_eq!(pairs.len(), 2);

    let big = slots(&(1..=13).collect::<Vec<_>>());
    assert!(best_min_duplicates(&big, |_| 0, &PairCounts::new()).is_err());
}
