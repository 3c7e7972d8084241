//! Index comparator with a comparison counter.
//!
//! An [`IndexComparator`] is created for exactly one sort call. It borrows the container
//! read-only, borrows the counter exclusively and answers "is element `i` less than element
//! `j`" questions. Every answer costs exactly one count, no matter the outcome, which makes the
//! counter usable to measure the comparison complexity of a sort algorithm empirically.

use std::fmt;

/// Number of comparisons performed during one sort call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComparisonCounter(u64);

impl ComparisonCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    #[inline]
    fn bump(&mut self) {
        self.0 += 1;
    }
}

impl fmt::Display for ComparisonCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a single strict weak order query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Less,
    NotLess,
}

impl Relation {
    #[inline]
    pub fn is_less(self) -> bool {
        self == Relation::Less
    }
}

impl From<bool> for Relation {
    #[inline]
    fn from(is_less: bool) -> Self {
        if is_less {
            Relation::Less
        } else {
            Relation::NotLess
        }
    }
}

/// Compares elements of `data` by their indices and counts every comparison.
///
/// `is_less` must be referentially transparent with respect to ordering: the same two elements
/// must always produce the same answer. Only the counter is mutated.
pub struct IndexComparator<'a, T, F> {
    data: &'a [T],
    counter: &'a mut ComparisonCounter,
    is_less: F,
}

impl<'a, T, F> IndexComparator<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(data: &'a [T], counter: &'a mut ComparisonCounter, is_less: F) -> Self {
        Self {
            data,
            counter,
            is_less,
        }
    }

    /// Returns true if `data[i]` is strictly less than `data[j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn is_less(&mut self, i: usize, j: usize) -> bool {
        self.counter.bump();
        (self.is_less)(&self.data[i], &self.data[j])
    }

    #[inline]
    pub fn compare(&mut self, i: usize, j: usize) -> Relation {
        self.is_less(i, j).into()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn comparisons(&self) -> u64 {
        self.counter.get()
    }

    /// Gives the predicate back, so the caller can run uncounted checks after the sort.
    pub(crate) fn into_predicate(self) -> F {
        self.is_less
    }
}
