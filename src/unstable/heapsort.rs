use std::cmp::{self, Ordering};

use crate::permutation::permute_in_place;

sort_impl!("heapsort_unstable");

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
    heapsort(&mut indices, &mut |&a: &usize, &b: &usize| {
        compare(&arr[a], &arr[b]) == Ordering::Less
    });
    permute_in_place(arr, &indices);
}

/// Upper bound of comparisons [`heapsort`] performs for `len` elements.
///
/// There are `len + len / 2` sift-downs and each one descends at most `⌊log₂(len)⌋` levels at
/// two comparisons per level.
pub fn comparison_bound(len: usize) -> u64 {
    2 * (crate::floor_log2(len) as u64) * ((len + len / 2) as u64)
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub(crate) fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in (0..len + len / 2).rev() {
        let sift_idx = if i >= len {
            i - len
        } else {
            v.swap(0, i);
            0
        };

        sift_down(&mut v[..cmp::min(i, len)], sift_idx, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len {
            child += is_less(&v[child], &v[child + 1]) as usize;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
