use super::*;
use crate::memory::MemoryDriver;
use crate::seeder::Seeder;

fn teams(n: u32) -> MemoryDriver<u32> {
    MemoryDriver::new((1..=n).collect())
}

#[test]
fn test_total_rounds() {
    assert_eq!(total_rounds(&teams(2)), 1);
    assert_eq!(total_rounds(&teams(5)), 3);
    assert_eq!(total_rounds(&teams(16)), 4);
}

#[test]
fn test_first_round_is_bracket_seeded() {
    let options = EliminationOptions::default();
    assert_eq!(
        pairs(&teams(4), &options).unwrap(),
        vec![(Some(1), Some(4)), (Some(2), Some(3))]
    );
    assert_eq!(
        pairs(&teams(3), &options).unwrap(),
        vec![(Some(1), None), (Some(2), Some(3))]
    );
    assert_eq!(
        pairs(&teams(5), &options).unwrap(),
        vec![(Some(1), None), (Some(4), Some(5)), (Some(2), None), (Some(3), None)]
    );
}

#[test]
fn test_byes_advance_without_a_result() {
    let mut driver = teams(5);
    let options = EliminationOptions::default();
    let first = generate(&mut driver, &options).unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(guess_round(&driver), Ok(1));

    assert_eq!(
        pairs(&driver, &options),
        Err(PairingError::MissingResult { round: 0 })
    );

    driver.set_winner(first[1].id, 5);
    assert_eq!(
        pairs(&driver, &options).unwrap(),
        vec![(Some(1), Some(5)), (Some(2), Some(3))]
    );
}

#[test]
fn test_plays_down_to_a_final() {
    let mut driver = teams(8);
    let options = EliminationOptions::default();
    for round in 0..3 {
        assert_eq!(guess_round(&driver), Ok(round));
        for m in generate(&mut driver, &options).unwrap() {
            driver.set_winner(m.id, m.home);
        }
    }
    let last = driver.stored_matches().last().unwrap().clone();
    assert_eq!((last.home, last.away), (1, Some(2)));
    assert_eq!(
        guess_round(&driver).and_then(|round| {
            pairs(
                &driver,
                &EliminationOptions {
                    round: Some(round),
                    ..options.clone()
                },
            )
        }),
        Err(PairingError::InvalidRound { round: 3, total: 3 })
    );
}

#[test]
fn test_guess_round_rejects_odd_match_counts() {
    let mut driver = teams(5);
    for _ in 0..3 {
        driver.record_match(1, Some(2), Some(1));
    }
    assert_eq!(
        guess_round(&driver),
        Err(PairingError::InvalidMatchCount { teams: 5, matches: 3 })
    );
}

#[test]
fn test_identity_seeder_pairs_neighbours() {
    let options = EliminationOptions {
        round: None,
        seeder: Seeder::Identity,
    };
    assert_eq!(
        pairs(&teams(4), &options).unwrap(),
        vec![(Some(1), Some(2)), (Some(3), Some(4))]
    );
}

#[test]
fn test_random_seeder_keeps_every_team() {
    let options = EliminationOptions {
        round: None,
        seeder: Seeder::Random { seed: 9 },
    };
    let mut seen: Vec<u32> = pairs(&teams(8), &options)
        .unwrap()
        .into_iter()
        .flat_map(|(a, b)| [a, b])
        .flatten()
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (1..=8).collect::<Vec<_>>());
}
