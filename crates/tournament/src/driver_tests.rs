use super::*;
use crate::memory::MemoryDriver;

fn driver() -> MemoryDriver<u32> {
    let mut driver = MemoryDriver::new(vec![1, 2, 3, 4]);
    driver.record_match(1, Some(2), Some(1));
    driver.record_match(3, None, None);
    driver.record_match(4, Some(3), Some(3));
    driver.record_match(2, Some(1), None);
    driver
}

#[test]
fn test_orient() {
    assert_eq!(orient((Some(1), Some(2))).unwrap(), (1, Some(2)));
    assert_eq!(orient((Some(1), None)).unwrap(), (1, None));
    assert_eq!(orient((None, Some(2))).unwrap(), (2, None));
    assert_eq!(orient::<u32>((None, None)), Err(PairingError::IncompleteMatch));
}

#[test]
fn test_create_match_moves_bye_away() {
    let mut driver = MemoryDriver::new(vec![1, 2]);
    let m = create_match(&mut driver, None, Some(2)).unwrap();
    assert_eq!((m.home, m.away), (2, None));
    assert_eq!(driver.stored_matches().len(), 1);
}

#[test]
fn test_create_matches_is_all_or_nothing() {
    let mut driver = MemoryDriver::new(vec![1, 2, 3]);
    let result = create_matches(&mut driver, vec![(Some(1), Some(2)), (None, None)]);
    assert_eq!(result, Err(PairingError::IncompleteMatch));
    assert!(driver.stored_matches().is_empty());

    let created = create_matches(&mut driver, vec![(Some(1), Some(2)), (None, Some(3))]).unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[1].home, 3);
}

#[test]
fn test_match_loser() {
    let driver = driver();
    let matches = driver.matches();
    assert_eq!(driver.match_loser(&matches[0]), Some(2));
    assert_eq!(driver.match_loser(&matches[1]), None);
    assert_eq!(driver.match_loser(&matches[2]), Some(4));
    assert_eq!(driver.match_loser(&matches[3]), None);
}

#[test]
fn test_team_matches_and_byes() {
    let driver = driver();
    let ids: Vec<usize> = driver.team_matches(&3).iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(driver.non_bye_matches().len(), 3);
    assert!(driver.is_bye(&driver.matches()[1]));
}

#[test]
fn test_derived_views() {
    let driver = driver();

    let losses = driver.loss_counts();
    assert_eq!(losses.get(&2), Some(&1));
    assert_eq!(losses.get(&4), Some(&1));
    assert_eq!(losses.get(&1), None);

    let counts = driver.pair_counts();
    assert_eq!(counts.count(&Some(1), &Some(2)), 2);
    assert_eq!(counts.count(&None, &Some(3)), 1);
    assert_eq!(counts.count(&Some(1), &Some(3)), 0);

    let matches = driver.matches();
    assert_eq!(driver.advancing_team(&matches[0]), Some(1));
    assert_eq!(driver.advancing_team(&matches[1]), Some(3));
    assert_eq!(driver.advancing_team(&matches[3]), None);
}

#[test]
fn test_reference_forwards() {
    let driver = driver();
    let by_ref = &driver;
    assert_eq!(by_ref.matches().len(), 4);
    assert_eq!(by_ref.team_matches(&1).len(), 2);
    assert_eq!(by_ref.loss_counts(), driver.loss_counts());
}
