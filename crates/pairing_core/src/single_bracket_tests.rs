use super::*;

fn range(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

#[test]
fn test_total_rounds() {
    assert_eq!(total_rounds(1), 0);
    assert_eq!(total_rounds(2), 1);
    assert_eq!(total_rounds(3), 2);
    assert_eq!(total_rounds(4), 2);
    assert_eq!(total_rounds(5), 3);
    assert_eq!(total_rounds(8), 3);
    assert_eq!(total_rounds(9), 4);
}

#[test]
fn test_max_teams() {
    assert_eq!(max_teams(0), 1);
    assert_eq!(max_teams(3), 8);
    assert_eq!(max_teams(total_rounds(6)), 8);
}

#[test]
fn test_guess_round() {
    assert_eq!(guess_round(2, 0), Ok(0));
    assert_eq!(guess_round(4, 0), Ok(0));
    assert_eq!(guess_round(4, 2), Ok(1));
    assert_eq!(guess_round(4, 3), Ok(2));
    assert_eq!(guess_round(8, 4), Ok(1));
    assert_eq!(guess_round(8, 6), Ok(2));
    assert_eq!(guess_round(8, 7), Ok(3));
    assert_eq!(guess_round(5, 4), Ok(1));
    assert_eq!(guess_round(5, 6), Ok(2));
}

#[test]
fn test_guess_round_rejects_impossible_counts() {
    assert_eq!(
        guess_round(4, 1),
        Err(PairingError::InvalidMatchCount { teams: 4, matches: 1 })
    );
    assert!(guess_round(8, 3).is_err());
    assert!(guess_round(8, 5).is_err());
    assert!(guess_round(8, 8).is_err());
    assert!(guess_round(8, 9).is_err());
}

#[test]
fn test_seed_small_fields() {
    assert_eq!(seed(&range(1)).unwrap(), vec![1]);
    assert_eq!(seed(&range(2)).unwrap(), vec![1, 2]);
    assert_eq!(seed(&range(4)).unwrap(), vec![1, 4, 2, 3]);
    assert_eq!(seed(&range(8)).unwrap(), vec![1, 8, 4, 5, 2, 7, 3, 6]);
}

#[test]
fn test_seed_sixteen_and_thirty_two() {
    assert_eq!(
        seed(&range(16)).unwrap(),
        vec![1, 16, 8, 9, 4, 13, 5, 12, 2, 15, 7, 10, 3, 14, 6, 11]
    );
    assert_eq!(
        seed(&range(32)).unwrap(),
        vec![
            1, 32, 16, 17, 8, 25, 9, 24, 4, 29, 13, 20, 5, 28, 12, 21, 2, 31, 15, 18, 7, 26, 10,
            23, 3, 30, 14, 19, 6, 27, 11, 22
        ]
    );
}

#[test]
fn test_seed_works_on_slots() {
    let slots = vec![Some(1), Some(2), Some(3), None];
    assert_eq!(seed(&slots).unwrap(), vec![Some(1), None, Some(2), Some(3)]);
}

#[test]
fn test_seed_rejects_non_power_of_two() {
    assert!(matches!(
        seed(&range(6)),
        Err(PairingError::InvalidSize { size: 6, .. })
    ));
    assert!(seed::<u32>(&[]).is_err());
}
