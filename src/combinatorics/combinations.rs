use std::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::{Progress, checked_binomial, index_state};
use crate::{Pool, Result, assert_iterator};

/// An iterator over every `r`-length subsequence of a pool, without repeated positions.
///
/// This `struct` is created by [`combinations()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Pool<T>,
    indices: Vec<usize>,
    progress: Progress,
}

/// Returns every `r`-length subsequence of `iterable`, in lexicographic order of positions.
///
/// Elements are treated as distinct by position, not by value: equal elements at different
/// positions still produce separate rows. There are exactly `C(n, r)` rows, so `r > n`
/// produces nothing and `r == 0` produces a single empty row.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if `iterable` reports itself as
/// unbounded. See [`Pool::materialize()`].
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `r <= n` but a row of
/// `r` positions cannot be allocated.
///
/// # Examples
///
/// ```
/// use better_itertools::{Input, combinations};
///
/// let rows: Vec<String> = combinations(Input::text("ABCD"), 2)?
///     .map(String::from_iter)
///     .collect();
///
/// assert_eq!(rows, ["AB", "AC", "AD", "BC", "BD", "CD"]);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub fn combinations<I>(iterable: I, r: usize) -> Result<Combinations<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Ok(assert_iterator(Combinations::new(
        Pool::materialize(iterable)?,
        r,
    )?))
}

impl<T> Combinations<T> {
    pub(crate) fn new(pool: Pool<T>, r: usize) -> Result<Self> {
        // `r > n` yields nothing, so no positions are kept.
        let indices = if r <= pool.len() {
            index_state(r, "r", |i| i)?
        } else {
            Vec::new()
        };

        Ok(Self {
            progress: Progress::new(checked_binomial(pool.len(), r)),
            indices,
            pool,
        })
    }

    /// Returns the pool the rows are drawn from.
    #[inline]
    pub fn pool(&self) -> &Pool<T> {
        &self.pool
    }

    /// Moves `indices` to the next combination. Returns `false` past the last one.
    fn step(indices: &mut [usize], n: usize) -> bool {
        let r = indices.len();

        // The rightmost position that has not reached its maximum, `i + n - r`.
        let Some(pivot) = (0..r).rev().find(|&i| indices[i] != i + n - r) else {
            return false;
        };

        indices[pivot] += 1;
        for j in pivot + 1..r {
            indices[j] = indices[j - 1] + 1;
        }

        true
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.pool.len();
        let indices = &mut self.indices;

        self.progress
            .next_row(|| Self::step(indices, n))
            .then(|| self.pool.select(&self.indices))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.progress.size_hint()
    }
}

impl<T: Clone> FusedIterator for Combinations<T> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::test_utils::drain_checked;

    #[test]
    fn small() {
        drain_checked(
            combinations([1, 2, 3], 2).unwrap(),
            &[vec![1, 2], vec![1, 3], vec![2, 3]],
        )
        .unwrap();
    }

    #[test]
    fn edges() {
        drain_checked(combinations([1, 2, 3], 0).unwrap(), &[vec![]]).unwrap();
        drain_checked(combinations(Vec::<i32>::new(), 0).unwrap(), &[vec![]]).unwrap();
        drain_checked(combinations([1, 2, 3], 3).unwrap(), &[vec![1, 2, 3]]).unwrap();
        drain_checked(combinations([1, 2, 3], 4).unwrap(), &[]).unwrap();
        drain_checked(combinations(Vec::<i32>::new(), 1).unwrap(), &[]).unwrap();
    }

    #[test]
    fn positions_not_values() {
        drain_checked(
            combinations(['x', 'x', 'y'], 2).unwrap(),
            &[vec!['x', 'x'], vec!['x', 'y'], vec!['x', 'y']],
        )
        .unwrap();
    }

    #[test]
    fn huge_r_yields_nothing() {
        drain_checked(combinations([1, 2, 3], usize::MAX).unwrap(), &[]).unwrap();
        drain_checked(combinations(Vec::<i32>::new(), usize::MAX).unwrap(), &[]).unwrap();
    }

    #[test]
    fn restarts_identically() {
        let rows = combinations(0..6, 3).unwrap();
        assert!(rows.clone().eq(rows));
    }
}
