use std::cmp::Ordering;

use crate::stable::rust_std::less_to_ordering;

sort_impl!("rust_std_unstable");

pub fn sort<T: Ord>(data: &mut [T]) {
    data.sort_unstable();
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    data.sort_unstable_by(compare);
}

/// Runs `slice::sort_unstable_by` over `v`, asking only `is_less`.
pub(crate) fn sort_by_less<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    v.sort_unstable_by(|a, b| less_to_ordering(is_less(a, b)));
}
