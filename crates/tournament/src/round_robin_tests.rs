use super::*;
use crate::memory::MemoryDriver;
use crate::seeder::Seeder;
use pairing_core::PairingError;

fn teams(n: u32) -> MemoryDriver<u32> {
    MemoryDriver::new((1..=n).collect())
}

fn round(driver: &MemoryDriver<u32>, round: usize) -> Vec<Pair<u32>> {
    let options = RoundRobinOptions {
        round: Some(round),
        ..Default::default()
    };
    pairs(driver, &options).unwrap()
}

#[test]
fn test_total_rounds() {
    assert_eq!(total_rounds(&teams(4)), 3);
    assert_eq!(total_rounds(&teams(5)), 5);
    assert_eq!(total_rounds(&teams(1)), 1);
}

#[test]
fn test_four_team_lap_alternates_sides() {
    let driver = teams(4);
    assert_eq!(round(&driver, 0), vec![(Some(1), Some(4)), (Some(2), Some(3))]);
    assert_eq!(round(&driver, 1), vec![(Some(3), Some(1)), (Some(2), Some(4))]);
    assert_eq!(round(&driver, 2), vec![(Some(1), Some(2)), (Some(3), Some(4))]);
}

#[test]
fn test_schedule_repeats_after_a_lap() {
    let driver = teams(4);
    assert_eq!(round(&driver, 3), vec![(Some(4), Some(1)), (Some(3), Some(2))]);
}

#[test]
fn test_odd_field_gets_a_bye_per_round() {
    let driver = teams(5);
    assert_eq!(
        round(&driver, 0),
        vec![(Some(1), None), (Some(2), Some(5)), (Some(3), Some(4))]
    );
    for r in 0..total_rounds(&driver) {
        let byes = round(&driver, r).iter().filter(|(a, b)| a.is_none() || b.is_none()).count();
        assert_eq!(byes, 1);
    }
}

#[test]
fn test_generate_follows_match_count() {
    let mut driver = teams(4);
    let options = RoundRobinOptions::default();
    generate(&mut driver, &options).unwrap();
    assert_eq!(guess_round(&driver), Ok(1));

    let second = generate(&mut driver, &options).unwrap();
    assert_eq!((second[0].home, second[0].away), (3, Some(1)));

    driver.record_match(1, Some(2), None);
    assert_eq!(
        pairs(&driver, &options),
        Err(PairingError::InvalidMatchCount { teams: 4, matches: 5 })
    );
}

#[test]
fn test_empty_field() {
    assert!(matches!(
        guess_round(&teams(0)),
        Err(PairingError::InvalidSize { size: 0, .. })
    ));
}

#[test]
fn test_bracket_seeder_reorders_before_rotation() {
    let driver = teams(4);
    let options = RoundRobinOptions {
        round: Some(0),
        seeder: Seeder::Bracket,
    };
    // [1, 2, 3, 4] seeds as [1, 4, 2, 3]
    assert_eq!(
        pairs(&driver, &options).unwrap(),
        vec![(Some(1), Some(3)), (Some(4), Some(2))]
    );
}
