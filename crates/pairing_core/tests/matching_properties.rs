use proptest::prelude::*;

use pairing_core::{
    maximum_weight_perfect_matching, minimum_weight_perfect_matching, perfect_pairings,
};

fn weight_matrix(max_size: usize) -> impl Strategy<Value = (usize, Vec<Vec<i64>>)> {
    (0..=max_size / 2).prop_flat_map(|half| {
        let n = half * 2;
        (Just(n), prop::collection::vec(prop::collection::vec(-50i64..50, n), n))
    })
}

fn pair_weight(matrix: &[Vec<i64>], a: usize, b: usize) -> i64 {
    matrix[a.min(b)][a.max(b)]
}

fn total(matrix: &[Vec<i64>], pairs: &[(usize, usize)]) -> i64 {
    pairs.iter().map(|&(a, b)| pair_weight(matrix, a, b)).sum()
}

proptest! {
    #[test]
    fn maximum_matches_brute_force((n, matrix) in weight_matrix(10)) {
        let items: Vec<usize> = (0..n).collect();
        let pairs =
            maximum_weight_perfect_matching(&items, |&a, &b| pair_weight(&matrix, a, b)).unwrap();

        let mut covered: Vec<usize> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        covered.sort_unstable();
        prop_assert_eq!(covered, items.clone());

        let best = perfect_pairings(&items)
            .unwrap()
            .map(|candidate| total(&matrix, &candidate))
            .max()
            .unwrap_or(0);
        prop_assert_eq!(total(&matrix, &pairs), best);
    }

    #[test]
    fn minimum_matches_brute_force((n, matrix) in weight_matrix(8)) {
        let items: Vec<usize> = (0..n).collect();
        let pairs =
            minimum_weight_perfect_matching(&items, |&a, &b| pair_weight(&matrix, a, b)).unwrap();
        let best = perfect_pairings(&items)
            .unwrap()
            .map(|candidate| total(&matrix, &candidate))
            .min()
            .unwrap_or(0);
        prop_assert_eq!(total(&matrix, &pairs), best);
    }

    #[test]
    fn pairs_are_ordered_by_earlier_member((n, matrix) in weight_matrix(8)) {
        let items: Vec<usize> = (0..n).collect();
        let pairs =
            maximum_weight_perfect_matching(&items, |&a, &b| pair_weight(&matrix, a, b)).unwrap();
        for window in pairs.windows(2) {
            prop_assert!(window[0].1 < window[1].1);
        }
        for &(later, earlier) in &pairs {
            prop_assert!(later > earlier);
        }
    }
}
