use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn slots(teams: &[u32]) -> Vec<Slot<u32>> {
    teams.iter().copied().map(Some).collect()
}

#[test]
fn test_adjacent() {
    assert_eq!(
        adjacent(&slots(&[1, 2, 3, 4])),
        vec![(Some(1), Some(2)), (Some(3), Some(4))]
    );
    assert_eq!(
        adjacent(&slots(&[1, 2, 3])),
        vec![(Some(1), Some(2)), (Some(3), None)]
    );
}

#[test]
fn test_fold() {
    assert_eq!(
        fold(&slots(&[1, 2, 3, 4])),
        vec![(Some(1), Some(4)), (Some(2), Some(3))]
    );
    assert_eq!(
        fold(&slots(&[1, 2, 3, 4, 5, 6])),
        vec![(Some(1), Some(6)), (Some(2), Some(5)), (Some(3), Some(4))]
    );
}

#[test]
fn test_slide() {
    assert_eq!(
        slide(&slots(&[1, 2, 3, 4])),
        vec![(Some(1), Some(3)), (Some(2), Some(4))]
    );
    assert_eq!(
        slide(&[Some(1), Some(2), None, Some(3), Some(4), Some(5)]),
        vec![(Some(1), Some(3)), (Some(2), Some(4)), (None, Some(5))]
    );
}

#[test]
fn test_empty_groups() {
    assert!(adjacent::<u32>(&[]).is_empty());
    assert!(fold::<u32>(&[]).is_empty());
    assert!(slide::<u32>(&[]).is_empty());
}

#[test]
fn test_random_is_reproducible_with_seed() {
    let teams = slots(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let first = random(&teams, &mut StdRng::seed_from_u64(42));
    let second = random(&teams, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);

    let mut seen: Vec<u32> = first
        .iter()
        .flat_map(|(a, b)| [a.unwrap(), b.unwrap()])
        .collect();
    seen.sort();
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}
