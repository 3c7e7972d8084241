use std::cmp::Ordering;

use crate::permutation::permute_in_place;

sort_impl!("merge_textbook_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// The elements are never moved while comparing. An index array is sorted first and `arr` is
/// permuted once at the end.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    sort_by(arr, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..arr.len()).collect();
    merge_sort(&mut indices, &mut |&a: &usize, &b: &usize| {
        compare(&arr[a], &arr[b]) == Ordering::Less
    });
    permute_in_place(arr, &indices);
}

/// Textbook top-down merge sort.
///
/// Splits `v` in half, sorts both halves recursively and merges them with the help of a scratch
/// buffer of the same length. A merge of two runs of total length `m` performs at most `m - 1`
/// comparisons, which gives the worst case `n * ⌈log₂(n)⌉ - 2^⌈log₂(n)⌉ + 1`. See
/// [`worst_case_comparisons`].
pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let mut buf = v.to_vec();
    split_merge(v, &mut buf, is_less);
}

/// Exact worst-case comparison count of [`merge_sort`] for `len` elements.
pub fn worst_case_comparisons(len: usize) -> u64 {
    if len < 2 {
        return 0;
    }

    let log = crate::ceil_log2(len);
    (len as u64) * (log as u64) - (1u64 << log) + 1
}

fn split_merge<T, F>(v: &mut [T], buf: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        let (buf_left, buf_right) = buf.split_at_mut(mid);
        split_merge(left, buf_left, is_less);
        split_merge(right, buf_right, is_less);
    }

    merge(v, mid, buf, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);
    debug_assert!(buf.len() >= len);

    let buf = &mut buf[..len];
    buf.copy_from_slice(v);
    let (left, right) = buf.split_at(mid);

    let mut l = 0;
    let mut r = 0;
    let mut out = 0;

    while l < left.len() && r < right.len() {
        // If equal, prefer the left run to maintain stability.
        if is_less(&right[r], &left[l]) {
            v[out] = right[r];
            r += 1;
        } else {
            v[out] = left[l];
            l += 1;
        }
        out += 1;
    }

    // At most one of the runs is unconsumed.
    let rest_left = &left[l..];
    v[out..out + rest_left.len()].copy_from_slice(rest_left);
    out += rest_left.len();

    let rest_right = &right[r..];
    v[out..].copy_from_slice(rest_right);
}
