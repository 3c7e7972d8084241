//! Permutations describing how to read a container in sorted order.
//!
//! A [`Permutation`] of length `n` holds every index in `0..n` exactly once. For a sort result
//! `p`, `data[p[0]], data[p[1]], ...` visits `data` in non-decreasing order.

use std::ops::Index;
use std::slice;

use crate::error::{Result, SortError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// `[0, 1, ..., n - 1]`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Checks that `indices` is a bijection on `0..indices.len()`.
    pub fn try_from_vec(indices: Vec<usize>) -> Result<Self> {
        let len = indices.len();
        let mut seen = vec![false; len];

        for (pos, &idx) in indices.iter().enumerate() {
            if idx >= len {
                return Err(SortError::invalid_input(format!(
                    "index {idx} at position {pos} is out of range for length {len}"
                )));
            }

            if seen[idx] {
                return Err(SortError::invalid_input(format!(
                    "index {idx} appears more than once"
                )));
            }

            seen[idx] = true;
        }

        Ok(Self(indices))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Only the sort algorithms may reorder the indices, they preserve the bijection.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, usize> {
        self.0.iter()
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(pos, &idx)| pos == idx)
    }

    /// Reads `data` in permutation order, without moving any element.
    pub fn apply<'a, T>(&self, data: &'a [T]) -> Result<Vec<&'a T>> {
        self.check_len(data.len())?;

        Ok(self.0.iter().map(|&idx| &data[idx]).collect())
    }

    /// Moves the elements of `data` into permutation order, so that afterwards
    /// `data[k] == old_data[self[k]]`.
    pub fn apply_in_place<T>(&self, data: &mut [T]) -> Result<()> {
        self.check_len(data.len())?;
        permute_in_place(data, &self.0);

        Ok(())
    }

    /// The rank of every original position: `inverse[self[k]] == k`.
    pub fn inverse(&self) -> Permutation {
        let mut ranks = vec![0; self.0.len()];
        for (pos, &idx) in self.0.iter().enumerate() {
            ranks[idx] = pos;
        }

        Permutation(ranks)
    }

    /// Reads through `self` first and `inner` second: `result[k] == inner[self[k]]`.
    ///
    /// If `self` sorts a view produced by `inner.apply(data)`, the composition sorts `data`
    /// directly.
    pub fn compose(&self, inner: &Permutation) -> Result<Permutation> {
        inner.check_len(self.0.len())?;

        Ok(Permutation(self.0.iter().map(|&idx| inner.0[idx]).collect()))
    }

    /// Checks that `data` read in permutation order is non-decreasing under `is_less`.
    pub fn is_sorted_by<T, F>(&self, data: &[T], mut is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.0.len() == data.len()
            && self
                .0
                .windows(2)
                .all(|w| !is_less(&data[w[1]], &data[w[0]]))
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if self.0.len() != len {
            return Err(SortError::invalid_input(format!(
                "permutation of length {} applied to container of length {len}",
                self.0.len()
            )));
        }

        Ok(())
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    #[inline]
    fn index(&self, pos: usize) -> &usize {
        &self.0[pos]
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(perm: Permutation) -> Self {
        perm.0
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = SortError;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Permutation::try_from_vec(indices)
    }
}

/// Reorders `data` so that `data[k]` holds the element previously at `perm[k]`.
///
/// Follows each cycle of `perm` once, so every element is moved with at most one swap per cycle
/// member. `perm` must be a bijection on `0..data.len()`.
pub(crate) fn permute_in_place<T>(data: &mut [T], perm: &[usize]) {
    debug_assert_eq!(data.len(), perm.len());

    let mut placed = vec![false; perm.len()];

    for start in 0..perm.len() {
        if placed[start] {
            continue;
        }

        placed[start] = true;
        let mut cur = start;
        loop {
            let next = perm[cur];
            if next == start {
                break;
            }

            data.swap(cur, next);
            placed[next] = true;
            cur = next;
        }
    }
}
