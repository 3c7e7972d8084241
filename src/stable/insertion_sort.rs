use std::cmp::Ordering;

use crate::permutation::permute_in_place;

sort_impl!("insertion_stable");

/// Sorts the slice.
///
/// This sort is stable and *O*(*n*^2) worst-case. It exists as a baseline, the comparison count
/// grows quadratically for random inputs.
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
    insertion_sort_shift_left(&mut indices, 1, &mut |&a: &usize, &b: &usize| {
        compare(&arr[a], &arr[b]) == Ordering::Less
    });
    permute_in_place(arr, &indices);
}

/// Worst-case comparison count of insertion sort for `len` elements, reached by strictly
/// descending inputs.
pub fn worst_case_comparisons(len: usize) -> u64 {
    let len = len as u64;
    len * len.saturating_sub(1) / 2
}

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// Inputs shorter than two elements, and an `offset` of 0, are handled like `offset == 1`.
pub(crate) fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let offset = offset.max(1);
    debug_assert!(offset <= len.max(1));

    for tail in offset..len {
        insert_tail(&mut v[..=tail], is_less);
    }
}

/// Sorts `v` assuming `v[..v.len() - 1]` is already sorted.
#[inline]
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;
    let tmp = v[tail];

    // Shift every greater element one slot to the right, equal elements stay in front of `tmp`.
    let mut hole = tail;
    while hole > 0 && is_less(&tmp, &v[hole - 1]) {
        v[hole] = v[hole - 1];
        hole -= 1;
    }

    v[hole] = tmp;
}
