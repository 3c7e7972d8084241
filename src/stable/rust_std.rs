use std::cmp::Ordering;

sort_impl!("rust_std_stable");

pub fn sort<T: Ord>(data: &mut [T]) {
    data.sort();
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    data.sort_by(compare);
}

/// Runs `slice::sort_by` over `v`, asking only `is_less`.
///
/// The standard library sorts derive their order exclusively from `compare(a, b) == Less`, so
/// answering `Greater` for "not less" keeps the order consistent and costs one call per
/// comparison.
pub(crate) fn sort_by_less<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    v.sort_by(|a, b| less_to_ordering(is_less(a, b)));
}

#[inline]
pub(crate) fn less_to_ordering(is_less: bool) -> Ordering {
    if is_less {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
