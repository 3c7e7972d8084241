//! Indirect sorting with comparison instrumentation.
//!
//! The engine sorts an array of indices instead of the elements themselves and counts every
//! comparison the chosen algorithm performs. See [`IndexSortEngine`].

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod comparator;
pub mod engine;
pub mod error;
pub mod harness;
pub mod permutation;
pub mod stable;
pub mod unstable;

pub use comparator::{ComparisonCounter, IndexComparator, Relation};
pub use engine::{indir_sort, Algorithm, EngineConfig, IndexSortEngine, SortOutcome};
pub use error::{OrderViolation, Result, SortError};
pub use permutation::Permutation;

/// `⌈log₂(n)⌉`, with `ceil_log2(0) == ceil_log2(1) == 0`.
#[inline]
pub fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// `⌊log₂(n)⌋`, with `floor_log2(0) == 0`.
#[inline]
pub fn floor_log2(n: usize) -> u32 {
    (n | 1).ilog2()
}
