use std::cmp::Ordering;

use crate::permutation::permute_in_place;
use crate::stable::insertion_sort::insertion_sort_shift_left;
use crate::unstable::heapsort::heapsort;

sort_impl!("quicksort_intro_unstable");

// Slices of up to this length get sorted using insertion sort.
const SMALL_SORT_THRESHOLD: usize = 20;

// Recursively select a pseudomedian if above this threshold.
const PSEUDO_MEDIAN_REC_THRESHOLD: usize = 64;

/// Sorts the slice.
///
/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    sort_by(arr, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..arr.len()).collect();
    unstable_sort(&mut indices, &mut |&a: &usize, &b: &usize| {
        compare(&arr[a], &arr[b]) == Ordering::Less
    });
    permute_in_place(arr, &indices);
}

/// Upper bound of comparisons [`unstable_sort`] performs for `len` elements:
/// `7 * len * ⌈log₂(len)⌉ + 11 * len`.
///
/// Every element takes part in at most `2 * ⌊log₂(len)⌋` partitions, each costing at most 1.7
/// comparisons per element including pivot selection. Heapsort fallbacks cost at most
/// `3 * m * log₂(m)` on their sub-slices, insertion sorts at most 9.5 comparisons per element
/// and the initial run scan one per element.
pub fn comparison_bound(len: usize) -> u64 {
    let len = len as u64;
    7 * len * (crate::ceil_log2(len as usize) as u64) + 11 * len
}

/// Sorts `v` using introsort, which is *O*(*n* \* log(*n*)) worst-case.
pub(crate) fn unstable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if len <= SMALL_SORT_THRESHOLD {
        insertion_sort_shift_left(v, 1, is_less);
        return;
    }

    let (run_len, was_reversed) = find_existing_run(v, is_less);

    if run_len == len {
        if was_reversed {
            v.reverse();
        }

        return;
    }

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    let limit = 2 * (len | 1).ilog2();
    quicksort(v, None, limit, is_less);
}

/// Finds a run of sorted elements starting at the beginning of the slice.
///
/// Returns the length of the run, and a bool that is false when the run
/// is ascending, and true if the run strictly descending.
fn find_existing_run<T, F>(v: &[T], is_less: &mut F) -> (usize, bool)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return (len, false);
    }

    let mut run_len = 2;
    let strictly_descending = is_less(&v[1], &v[0]);
    if strictly_descending {
        while run_len < len && is_less(&v[run_len], &v[run_len - 1]) {
            run_len += 1;
        }
    } else {
        while run_len < len && !is_less(&v[run_len], &v[run_len - 1]) {
            run_len += 1;
        }
    }

    (run_len, strictly_descending)
}

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, it is specified as `ancestor_pivot`.
///
/// `limit` is the number of allowed imbalanced partitions before switching to `heapsort`. If zero,
/// this function will immediately switch to heapsort.
fn quicksort<T, F>(mut v: &mut [T], mut ancestor_pivot: Option<T>, mut limit: u32, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= SMALL_SORT_THRESHOLD {
            insertion_sort_shift_left(v, 1, is_less);
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(N x log(N))` worst-case.
        if limit == 0 {
            heapsort(v, is_less);
            return;
        }

        limit -= 1;

        let pivot_pos = choose_pivot(v, is_less);

        // If the chosen pivot is equal to the predecessor, then it's the smallest element in the
        // slice. Partition the slice into elements equal to and elements greater than the pivot.
        // This case is usually hit when the slice contains many duplicate elements.
        if let Some(p) = ancestor_pivot {
            if !is_less(&p, &v[pivot_pos]) {
                let num_le = partition(v, pivot_pos, &mut |a: &T, b: &T| !is_less(b, a));

                // Continue sorting elements greater than the pivot. We know that `num_le` contains
                // the pivot. So we can continue after `num_le`.
                v = &mut v[(num_le + 1)..];
                ancestor_pivot = None;
                continue;
            }
        }

        let num_lt = partition(v, pivot_pos, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(num_lt);
        let (pivot, right) = right.split_at_mut(1);
        let pivot = pivot[0];

        // Recurse into the left side.
        quicksort(left, ancestor_pivot, limit, is_less);

        // Continue with the right side.
        v = right;
        ancestor_pivot = Some(pivot);
    }
}

/// Selects a pivot from `v`. Uses median of 3 for short slices and a compact pseudomedian of 9
/// otherwise.
fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 8);

    let a = 0; // start
    let b = len / 2; // mid
    let c = len - 1; // end

    if len < PSEUDO_MEDIAN_REC_THRESHOLD {
        median3(v, a, b, c, is_less)
    } else {
        let n8 = len / 8;

        let m1 = median3(v, a, a + n8, a + n8 * 2, is_less);
        let m2 = median3(v, b - n8, b, b + n8, is_less);
        let m3 = median3(v, c - 2 * n8, c - n8, c, is_less);

        median3(v, m1, m2, m3, is_less)
    }
}

/// Calculates the position of the median of `v[a]`, `v[b]` and `v[c]`.
#[inline]
fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let x = is_less(&v[b], &v[a]);
    let y = is_less(&v[c], &v[a]);
    let z = is_less(&v[c], &v[b]);

    let index = (x == y) as usize + (y != z) as usize;
    [a, b, c][index]
}

/// Takes the input slice `v` and re-arranges elements such that when the call returns normally
/// all elements that compare true for `is_less(elem, pivot)` where `pivot == v[pivot_pos]` are
/// on the left side of `v` followed by the pivot and then the other elements, notionally
/// considered greater or equal to `pivot`.
///
/// Returns the number of elements that are compared true for `is_less(elem, pivot)`.
fn partition<T, F>(v: &mut [T], pivot: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    // Place the pivot at the beginning of slice.
    v.swap(0, pivot);
    let (pivot, v_without_pivot) = v.split_at_mut(1);
    let num_lt = partition_hoare_basic(v_without_pivot, &pivot[0], is_less);

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);

    num_lt
}

fn partition_hoare_basic<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let mut left = 0;
    let mut right = len;

    loop {
        // Find the first element greater than or equal to the pivot.
        while left < right && is_less(&v[left], pivot) {
            left += 1;
        }

        // Find the last element less than the pivot.
        loop {
            right -= 1;
            if left >= right || is_less(&v[right], pivot) {
                break;
            }
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
        left += 1;
    }

    left
}
