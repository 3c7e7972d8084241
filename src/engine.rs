//! The indirect sort engine.
//!
//! [`IndexSortEngine`] builds the identity permutation of the container, lets the configured
//! [`Algorithm`] reorder it through an [`IndexComparator`] and hands back the permutation together
//! with the number of comparisons. The container is never written to, so it may be shared
//! read-only between concurrent sort calls. The counter and the permutation are created per call
//! and are never shared.
//!
//! ```text
//! data ──► identity [0..n) ──► algorithm ──is_less(i, j)──► comparator ──► data[i] < data[j]
//!                                  │                             │
//!                                  ▼                             ▼
//!                             permutation                 comparisons += 1
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::comparator::{ComparisonCounter, IndexComparator};
use crate::error::{OrderViolation, Result, SortError};
use crate::permutation::Permutation;
use crate::{stable, unstable};

/// The sort routine the engine uses to order the permutation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Top-down merge sort. Stable.
    #[default]
    MergeSort,
    /// Insertion sort. Stable, quadratic.
    InsertionSort,
    /// Introsort. Unstable.
    Quicksort,
    /// Heapsort. Unstable.
    Heapsort,
    /// `slice::sort_by`. Stable.
    StdStable,
    /// `slice::sort_unstable_by`. Unstable.
    StdUnstable,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::MergeSort,
        Algorithm::InsertionSort,
        Algorithm::Quicksort,
        Algorithm::Heapsort,
        Algorithm::StdStable,
        Algorithm::StdUnstable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "merge",
            Algorithm::InsertionSort => "insertion",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Heapsort => "heapsort",
            Algorithm::StdStable => "std-stable",
            Algorithm::StdUnstable => "std-unstable",
        }
    }

    /// Stable algorithms keep equal elements in ascending index order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::MergeSort | Algorithm::InsertionSort | Algorithm::StdStable
        )
    }

    /// Documented upper bound of comparisons for `len` elements, `None` if the algorithm does not
    /// document one.
    pub fn comparison_bound(self, len: usize) -> Option<u64> {
        match self {
            Algorithm::MergeSort => Some(stable::merge_sort::worst_case_comparisons(len)),
            Algorithm::InsertionSort => Some(stable::insertion_sort::worst_case_comparisons(len)),
            Algorithm::Quicksort => Some(unstable::quicksort::comparison_bound(len)),
            Algorithm::Heapsort => Some(unstable::heapsort::comparison_bound(len)),
            Algorithm::StdStable | Algorithm::StdUnstable => None,
        }
    }

    fn sort_indices<F>(self, indices: &mut [usize], is_less: &mut F)
    where
        F: FnMut(&usize, &usize) -> bool,
    {
        match self {
            Algorithm::MergeSort => stable::merge_sort::merge_sort(indices, is_less),
            Algorithm::InsertionSort => {
                stable::insertion_sort::insertion_sort_shift_left(indices, 1, is_less)
            }
            Algorithm::Quicksort => unstable::quicksort::unstable_sort(indices, is_less),
            Algorithm::Heapsort => unstable::heapsort::heapsort(indices, is_less),
            Algorithm::StdStable => stable::rust_std::sort_by_less(indices, is_less),
            Algorithm::StdUnstable => unstable::rust_std::sort_by_less(indices, is_less),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| {
                let known = Algorithm::ALL.map(Algorithm::name).join(", ");
                SortError::invalid_input(format!("unknown algorithm '{s}', expected one of {known}"))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    /// Check the result for signs of an inconsistent order relation. The checks call the
    /// predicate directly and are not counted.
    pub verify_order: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            verify_order: cfg!(debug_assertions),
        }
    }
}

/// Result of one indirect sort call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub permutation: Permutation,
    pub comparisons: u64,
}

impl SortOutcome {
    pub fn into_parts(self) -> (Permutation, u64) {
        (self.permutation, self.comparisons)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndexSortEngine {
    config: EngineConfig,
}

impl IndexSortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine using `algorithm` with the default verification setting.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self::with_config(EngineConfig {
            algorithm,
            ..EngineConfig::default()
        })
    }

    /// Stable engine: equal elements keep ascending index order.
    pub fn stable() -> Self {
        Self::with_algorithm(Algorithm::MergeSort)
    }

    /// Unstable engine: the order of equal elements is unspecified, but deterministic for a
    /// given input.
    pub fn unstable() -> Self {
        Self::with_algorithm(Algorithm::Quicksort)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sort<T: Ord>(&self, data: &[T]) -> Result<SortOutcome> {
        self.sort_by_less(data, |a: &T, b: &T| a.lt(b))
    }

    pub fn sort_by<T, F>(&self, data: &[T], mut compare: F) -> Result<SortOutcome>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by_less(data, |a, b| compare(a, b) == Ordering::Less)
    }

    pub fn sort_by_key<T, K, F>(&self, data: &[T], mut key: F) -> Result<SortOutcome>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by_less(data, |a, b| key(a).lt(&key(b)))
    }

    /// Sorts `data` indirectly with a strict weak order predicate.
    pub fn sort_by_less<T, F>(&self, data: &[T], is_less: F) -> Result<SortOutcome>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let algorithm = self.config.algorithm;
        let len = data.len();
        trace!(%algorithm, len, "indirect sort started");

        let mut permutation = Permutation::identity(len);
        let mut counter = ComparisonCounter::new();

        let mut comparator = IndexComparator::new(data, &mut counter, is_less);
        algorithm.sort_indices(permutation.as_mut_slice(), &mut |&i: &usize, &j: &usize| {
            comparator.is_less(i, j)
        });
        let is_less = comparator.into_predicate();

        let comparisons = counter.get();

        if self.config.verify_order {
            if let Err(violation) = verify_order(data, &permutation, is_less) {
                warn!(%algorithm, len, %violation, "comparison function is not a strict weak order");
                return Err(SortError::ViolatedOrderInvariant(violation));
            }
        }

        debug!(%algorithm, len, comparisons, "indirect sort finished");

        Ok(SortOutcome {
            permutation,
            comparisons,
        })
    }
}

/// Sorts `data` with the default engine.
pub fn indir_sort<T: Ord>(data: &[T]) -> Result<SortOutcome> {
    IndexSortEngine::new().sort(data)
}

/// Looks for evidence that `is_less` is not a strict weak order: an element less than itself,
/// neighbours in the wrong order, or an element less than one sorted before it.
///
/// Best effort. Besides neighbours only pairs at power of two distances and the two ends of the
/// result are compared, which costs *O*(*n* \* log(*n*)) calls instead of the *O*(*n*²) a proof
/// would take. An `Ok` does not mean the relation is a strict weak order.
fn verify_order<T, F>(
    data: &[T],
    permutation: &Permutation,
    mut is_less: F,
) -> std::result::Result<(), OrderViolation>
where
    F: FnMut(&T, &T) -> bool,
{
    if let Some(index) = (0..data.len()).find(|&i| is_less(&data[i], &data[i])) {
        return Err(OrderViolation::LessThanItself { index });
    }

    let indices = permutation.as_slice();
    if let Some(position) = indices
        .windows(2)
        .position(|w| is_less(&data[w[1]], &data[w[0]]))
    {
        return Err(OrderViolation::OutOfOrder { position });
    }

    let len = indices.len();
    let mut distance = 2;
    while distance < len {
        for (&first, &last) in indices.iter().zip(&indices[distance..]) {
            if is_less(&data[last], &data[first]) {
                return Err(OrderViolation::NotTransitive { first, last });
            }
        }

        distance *= 2;
    }

    if let (Some(&first), Some(&last)) = (indices.first(), indices.last()) {
        if is_less(&data[last], &data[first]) {
            return Err(OrderViolation::NotTransitive { first, last });
        }
    }

    Ok(())
}
