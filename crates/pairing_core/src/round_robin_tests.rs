use super::*;
use crate::types::PairKey;
use std::collections::HashSet;

#[test]
fn test_total_rounds() {
    assert_eq!(total_rounds(2), 1);
    assert_eq!(total_rounds(3), 3);
    assert_eq!(total_rounds(4), 3);
    assert_eq!(total_rounds(5), 5);
    assert_eq!(total_rounds(10), 9);
}

#[test]
fn test_guess_round() {
    assert_eq!(guess_round(4, 0), Ok(0));
    assert_eq!(guess_round(4, 2), Ok(1));
    assert_eq!(guess_round(4, 6), Ok(3));
    assert_eq!(guess_round(5, 9), Ok(3));
    // second lap
    assert_eq!(guess_round(4, 8), Ok(4));
}

#[test]
fn test_guess_round_rejects_partial_rounds() {
    assert_eq!(
        guess_round(4, 3),
        Err(PairingError::InvalidMatchCount { teams: 4, matches: 3 })
    );
    assert!(matches!(guess_round(0, 0), Err(PairingError::InvalidSize { .. })));
}

#[test]
fn test_rotate() {
    let teams = [1, 2, 3, 4];
    assert_eq!(rotate(&teams, 0), vec![1, 2, 3, 4]);
    assert_eq!(rotate(&teams, 1), vec![1, 4, 2, 3]);
    assert_eq!(rotate(&teams, 2), vec![1, 3, 4, 2]);
    assert_eq!(rotate(&teams, 3), vec![1, 2, 3, 4]);
    assert!(rotate::<u8>(&[], 2).is_empty());
    assert_eq!(rotate(&[7], 5), vec![7]);
}

#[test]
fn test_rotations() {
    assert_eq!(
        rotations(&[1, 2, 3, 4]),
        vec![vec![1, 2, 3, 4], vec![1, 4, 2, 3], vec![1, 3, 4, 2]]
    );
}

#[test]
fn test_pairing_four_teams() {
    assert_eq!(
        round_pairs(&[1, 2, 3, 4], 0),
        vec![(Some(1), Some(4)), (Some(2), Some(3))]
    );
    assert_eq!(
        round_pairs(&[1, 2, 3, 4], 1),
        vec![(Some(1), Some(3)), (Some(4), Some(2))]
    );
    assert_eq!(
        round_pairs(&[1, 2, 3, 4], 2),
        vec![(Some(1), Some(2)), (Some(3), Some(4))]
    );
}

#[test]
fn test_pairing_odd_field_includes_bye() {
    assert_eq!(
        round_pairs(&[1, 2, 3, 4, 5], 0),
        vec![(Some(1), None), (Some(2), Some(5)), (Some(3), Some(4))]
    );
}

#[test]
fn test_lap_covers_every_pair_once() {
    for n in 2..=11u32 {
        let teams: Vec<u32> = (1..=n).collect();
        let mut seen = HashSet::new();
        for round in 0..total_rounds(teams.len()) {
            for (a, b) in round_pairs(&teams, round) {
                assert!(seen.insert(PairKey::new(a, b)), "repeat in {n} team lap");
            }
        }
        let slots = crate::combinatorics::padded_even_count(teams.len());
        assert_eq!(seen.len(), slots * (slots - 1) / 2);
    }
}
