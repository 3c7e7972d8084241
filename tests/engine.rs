use std::cmp::Ordering;

use indir_sort_rs::{
    indir_sort, Algorithm, EngineConfig, IndexSortEngine, OrderViolation, Permutation, SortError,
    SortOutcome,
};
use sort_test_tools::patterns;

const SIZES: [usize; 16] = [0, 1, 2, 3, 4, 5, 8, 15, 20, 21, 33, 64, 100, 257, 1_000, 2_048];

fn engine(algorithm: Algorithm) -> IndexSortEngine {
    IndexSortEngine::with_config(EngineConfig {
        algorithm,
        verify_order: true,
    })
}

fn sort_with(algorithm: Algorithm, data: &[i32]) -> SortOutcome {
    match engine(algorithm).sort(data) {
        Ok(outcome) => outcome,
        Err(err) => panic!("{algorithm} failed on {data:?}: {err}"),
    }
}

fn pattern_inputs(len: usize) -> Vec<(&'static str, Vec<i32>)> {
    vec![
        ("random", patterns::random(len)),
        ("random_d4", patterns::random_uniform(len, 0..4)),
        ("random_zipf", patterns::random_zipf(len, 1.0)),
        ("random_s95", patterns::random_sorted(len, 95.0)),
        ("ascending", patterns::ascending(len)),
        ("descending", patterns::descending(len)),
        ("all_equal", patterns::all_equal(len)),
        ("pipe_organ", patterns::pipe_organ(len)),
        ("saw_mixed", patterns::saw_mixed(len, 4)),
    ]
}

#[test]
fn empty_container() {
    for algorithm in Algorithm::ALL {
        let outcome = sort_with(algorithm, &[]);

        assert!(outcome.permutation.is_empty());
        assert_eq!(outcome.comparisons, 0);
    }
}

#[test]
fn single_element() {
    for algorithm in Algorithm::ALL {
        let outcome = sort_with(algorithm, &[7]);

        assert_eq!(outcome.permutation.as_slice(), &[0]);
        assert_eq!(outcome.comparisons, 0);
    }
}

#[test]
fn pinned_merge_sort_fixture() {
    let outcome = sort_with(Algorithm::MergeSort, &[9, 2, 5, 2]);

    assert_eq!(outcome.permutation.as_slice(), &[1, 3, 2, 0]);
    assert_eq!(outcome.comparisons, 5);
}

#[test]
fn pinned_fixtures_other_algorithms() {
    // ⌈log₂(4!)⌉ = 5 is the information theoretic minimum for four elements.
    for (algorithm, expected_comparisons) in [
        (Algorithm::InsertionSort, 6),
        (Algorithm::Quicksort, 6),
        (Algorithm::Heapsort, 6),
    ] {
        let outcome = sort_with(algorithm, &[9, 2, 5, 2]);

        assert_eq!(outcome.permutation.as_slice(), &[1, 3, 2, 0], "{algorithm}");
        assert_eq!(outcome.comparisons, expected_comparisons, "{algorithm}");
    }
}

#[test]
fn default_engine_is_stable_merge_sort() {
    let outcome = indir_sort(&[9, 2, 5, 2]).unwrap();

    assert_eq!(IndexSortEngine::new().config().algorithm, Algorithm::MergeSort);
    assert_eq!(outcome.permutation.as_slice(), &[1, 3, 2, 0]);
    assert_eq!(outcome.comparisons, 5);
}

#[test]
fn permutation_is_bijection_and_sorts() {
    for algorithm in Algorithm::ALL {
        for len in SIZES {
            for (name, data) in pattern_inputs(len) {
                let outcome = sort_with(algorithm, &data);

                let indices = outcome.permutation.clone().into_vec();
                assert!(
                    Permutation::try_from_vec(indices).is_ok(),
                    "{algorithm} {name} len {len}: not a permutation"
                );
                assert!(
                    outcome.permutation.is_sorted_by(&data, |a, b| a < b),
                    "{algorithm} {name} len {len}: not sorted"
                );
            }
        }
    }
}

#[test]
fn stable_algorithms_keep_index_order_of_ties() {
    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_stable()) {
        for len in SIZES {
            let data = patterns::random_uniform(len, 0..5);
            let outcome = sort_with(algorithm, &data);

            let mut expected: Vec<usize> = (0..len).collect();
            expected.sort_by_key(|&idx| data[idx]);

            assert_eq!(outcome.permutation.as_slice(), expected.as_slice(), "{algorithm}");
        }
    }
}

#[test]
fn resort_of_sorted_view_only_moves_ties() {
    for algorithm in Algorithm::ALL {
        for len in SIZES {
            let data = patterns::random_uniform(len, 0..10);
            let outcome = sort_with(algorithm, &data);
            let view = outcome.permutation.apply(&data).unwrap();

            let resorted = match engine(algorithm).sort(&view) {
                Ok(outcome) => outcome.permutation,
                Err(err) => panic!("{algorithm}: {err}"),
            };

            if algorithm.is_stable() {
                assert!(resorted.is_identity(), "{algorithm} len {len}");
                assert_eq!(resorted.compose(&outcome.permutation).unwrap(), outcome.permutation);
            } else {
                for (pos, &idx) in resorted.iter().enumerate() {
                    assert_eq!(view[idx], view[pos], "{algorithm} len {len}");
                }
            }
        }
    }
}

#[test]
fn comparison_counts_stay_within_documented_bounds() {
    for algorithm in Algorithm::ALL {
        for len in SIZES {
            let bound = match algorithm.comparison_bound(len) {
                Some(bound) => bound,
                None => continue,
            };

            for (name, data) in pattern_inputs(len) {
                let outcome = sort_with(algorithm, &data);

                assert!(
                    outcome.comparisons <= bound,
                    "{algorithm} {name} len {len}: {} comparisons, bound {bound}",
                    outcome.comparisons
                );

                if len <= 1 {
                    assert_eq!(outcome.comparisons, 0);
                }
            }
        }
    }
}

#[test]
fn merge_sort_worst_case_bound_is_tight() {
    assert_eq!(Algorithm::MergeSort.comparison_bound(0), Some(0));
    assert_eq!(Algorithm::MergeSort.comparison_bound(1), Some(0));
    assert_eq!(Algorithm::MergeSort.comparison_bound(2), Some(1));
    assert_eq!(Algorithm::MergeSort.comparison_bound(4), Some(5));
    assert_eq!(Algorithm::MergeSort.comparison_bound(1_000), Some(8_977));

    // Every merge runs to the last element when the halves interleave perfectly.
    let outcome = sort_with(Algorithm::MergeSort, &[1, 3, 2, 4]);
    assert_eq!(outcome.comparisons, 5);
}

#[test]
fn insertion_sort_hits_quadratic_worst_case() {
    let data = patterns::descending(100);
    let outcome = sort_with(Algorithm::InsertionSort, &data);

    assert_eq!(outcome.comparisons, 100 * 99 / 2);
    assert_eq!(Algorithm::InsertionSort.comparison_bound(100), Some(4_950));
}

#[test]
fn comparison_growth_separates_n_log_n_from_n_squared() {
    let small = patterns::random(512);
    let large = patterns::random(1_024);

    let ratio = |algorithm: Algorithm| {
        let small_count = sort_with(algorithm, &small).comparisons as f64;
        let large_count = sort_with(algorithm, &large).comparisons as f64;
        large_count / small_count
    };

    let insertion_ratio = ratio(Algorithm::InsertionSort);
    assert!(insertion_ratio > 3.0, "insertion ratio {insertion_ratio}");

    for algorithm in [Algorithm::MergeSort, Algorithm::Quicksort, Algorithm::Heapsort] {
        let n_log_n_ratio = ratio(algorithm);
        assert!(n_log_n_ratio < 2.5, "{algorithm} ratio {n_log_n_ratio}");
    }
}

#[test]
fn repeated_sorts_are_deterministic() {
    for algorithm in Algorithm::ALL {
        for (name, data) in pattern_inputs(1_000) {
            let first = sort_with(algorithm, &data);
            let second = sort_with(algorithm, &data);

            assert_eq!(first, second, "{algorithm} {name}");
        }
    }
}

#[test]
fn concurrent_sorts_share_container() {
    let data = patterns::random_uniform(2_048, 0..100);
    let expected = sort_with(Algorithm::Quicksort, &data);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| sort_with(Algorithm::Quicksort, &data)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn sort_by_and_sort_by_key() {
    let data = [9, 2, 5, 2];

    let reversed = IndexSortEngine::stable()
        .sort_by(&data, |a, b| b.cmp(a))
        .unwrap();
    assert_eq!(reversed.permutation.as_slice(), &[0, 2, 1, 3]);

    let words = ["pear", "Fig", "apple", "banana"];
    let by_len = IndexSortEngine::stable()
        .sort_by_key(&words, |w| w.len())
        .unwrap();
    assert_eq!(by_len.permutation.as_slice(), &[1, 0, 2, 3]);

    let case_insensitive = IndexSortEngine::stable()
        .sort_by_key(&words, |w| w.to_lowercase())
        .unwrap();
    assert_eq!(case_insensitive.permutation.as_slice(), &[2, 3, 1, 0]);
}

#[test]
fn floats_sort_through_partial_order() {
    let data = [2.5f64, -1.0, 0.0, 10.25, -1.0];
    let outcome = IndexSortEngine::unstable()
        .sort_by(&data, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unwrap();

    assert!(outcome.permutation.is_sorted_by(&data, |a, b| a < b));
    assert_eq!(data[outcome.permutation[4]], 10.25);
}

#[test]
fn less_than_itself_is_reported() {
    for algorithm in Algorithm::ALL {
        let result = engine(algorithm).sort_by_less(&[3, 1, 2], |_, _| true);

        assert_eq!(
            result,
            Err(SortError::ViolatedOrderInvariant(
                OrderViolation::LessThanItself { index: 0 }
            )),
            "{algorithm}"
        );
    }
}

#[test]
fn cyclic_order_is_reported() {
    // Rock, paper, scissors: 0 < 1, 1 < 2 and 2 < 0.
    let beats = |a: &u8, b: &u8| *b == (*a + 1) % 3;

    let result = engine(Algorithm::MergeSort).sort_by_less(&[0u8, 1, 2], beats);

    assert_eq!(
        result,
        Err(SortError::ViolatedOrderInvariant(
            OrderViolation::NotTransitive { first: 0, last: 2 }
        ))
    );
}

#[test]
fn cycle_hidden_from_neighbours_is_reported() {
    // Classes modulo 3 beat each other in a circle. [0, 1, 2, 0] is already sorted as far as
    // neighbours and the two ends are concerned, only 2 < 0 two positions apart gives it away.
    let beats = |a: &i32, b: &i32| (b - a).rem_euclid(3) == 1;

    let result = engine(Algorithm::InsertionSort).sort_by_less(&[0, 1, 2, 0], beats);

    assert_eq!(
        result,
        Err(SortError::ViolatedOrderInvariant(
            OrderViolation::NotTransitive { first: 0, last: 2 }
        ))
    );
}

#[test]
fn cyclic_order_is_reported_on_large_inputs() {
    let beats = |a: &i32, b: &i32| (b - a).rem_euclid(3) == 1;
    let data: Vec<i32> = (0..2_000).map(|i| (i * 37 + 11) % 50).collect();

    for algorithm in [
        Algorithm::MergeSort,
        Algorithm::InsertionSort,
        Algorithm::Heapsort,
    ] {
        let result = engine(algorithm).sort_by_less(&data, beats);

        assert!(
            matches!(result, Err(SortError::ViolatedOrderInvariant(_))),
            "{algorithm}: {result:?}"
        );
    }
}

#[test]
fn out_of_order_result_is_reported() {
    // Answers flip from call to call, the sort sees 3 < 2 and the check later sees 2 < 3.
    let mut calls = 0u32;
    let result = engine(Algorithm::InsertionSort).sort_by_less(&[1, 2, 3], move |a, b| {
        calls += 1;
        a != b && calls % 2 == 0
    });

    assert_eq!(
        result,
        Err(SortError::ViolatedOrderInvariant(
            OrderViolation::OutOfOrder { position: 1 }
        ))
    );
}

#[test]
fn verification_can_be_disabled() {
    let engine = IndexSortEngine::with_config(EngineConfig {
        algorithm: Algorithm::MergeSort,
        verify_order: false,
    });

    let outcome = engine.sort_by_less(&[3, 1, 2], |_, _| true).unwrap();

    assert_eq!(outcome.permutation.len(), 3);
    assert!(Permutation::try_from_vec(outcome.permutation.into_vec()).is_ok());
}

#[test]
fn algorithm_names_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        assert_eq!(algorithm.to_string(), algorithm.name());
    }

    assert!(matches!(
        "bogosort".parse::<Algorithm>(),
        Err(SortError::InvalidInput(_))
    ));
}
