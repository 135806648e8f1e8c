use std::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::{Progress, checked_falling_factorial};
use crate::{Pool, Result, assert_iterator};

/// An iterator over every ordered selection of `r` distinct positions of a pool.
///
/// This `struct` is created by [`permutations()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Pool<T>,
    r: usize,
    // A permutation of `0..n`; its first `r` entries address the current row.
    indices: Vec<usize>,
    // `cycles[i]` counts the swaps left at position `i` before it rotates back.
    cycles: Vec<usize>,
    progress: Progress,
}

/// Returns every ordered selection of `r` elements of `iterable`, or of all of them if `r` is
/// [`None`].
///
/// Rows come in lexicographic order of positions, so a sorted input produces sorted rows.
/// There are exactly `n! / (n - r)!` rows: `r > n` produces nothing and `r == 0` produces a
/// single empty row.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if `iterable` reports itself as
/// unbounded. See [`Pool::materialize()`].
///
/// # Examples
///
/// ```
/// use better_itertools::permutations;
///
/// let rows: Vec<_> = permutations([1, 2, 3], Some(2))?.collect();
/// assert_eq!(rows, [[1, 2], [1, 3], [2, 1], [2, 3], [3, 1], [3, 2]]);
///
/// let rows: Vec<_> = permutations(0..3, None)?.collect();
/// assert_eq!(rows, [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]]);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub fn permutations<I>(iterable: I, r: Option<usize>) -> Result<Permutations<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Ok(assert_iterator(Permutations::new(
        Pool::materialize(iterable)?,
        r,
    )))
}

impl<T> Permutations<T> {
    pub(crate) fn new(pool: Pool<T>, r: Option<usize>) -> Self {
        let n = pool.len();
        let r = r.unwrap_or(n);

        let cycles = if r <= n {
            (n - r + 1..=n).rev().collect()
        } else {
            Vec::new()
        };

        Self {
            progress: Progress::new(checked_falling_factorial(n, r)),
            indices: (0..n).collect(),
            cycles,
            r,
            pool,
        }
    }

    /// Returns the pool the rows are drawn from.
    #[inline]
    pub fn pool(&self) -> &Pool<T> {
        &self.pool
    }

    fn step(indices: &mut [usize], cycles: &mut [usize]) -> bool {
        let n = indices.len();

        for i in (0..cycles.len()).rev() {
            cycles[i] -= 1;

            if cycles[i] == 0 {
                // Position `i` has seen every candidate. Put it back in order and
                // carry into the position to its left.
                indices[i..].rotate_left(1);
                cycles[i] = n - i;
            } else {
                indices.swap(i, n - cycles[i]);
                return true;
            }
        }

        false
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (indices, cycles) = (&mut self.indices, &mut self.cycles);

        self.progress
            .next_row(|| Self::step(indices, cycles))
            .then(|| self.pool.select(&self.indices[..self.r]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.progress.size_hint()
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::{Input, test_utils::drain_checked};

    #[test]
    fn edges() {
        drain_checked(permutations([1, 2], Some(0)).unwrap(), &[vec![]]).unwrap();
        drain_checked(permutations(Vec::<i32>::new(), None).unwrap(), &[vec![]]).unwrap();
        drain_checked(permutations([1, 2], Some(3)).unwrap(), &[]).unwrap();
        drain_checked(permutations([1], None).unwrap(), &[vec![1]]).unwrap();
    }

    #[test]
    fn text() {
        let rows: Vec<String> = permutations(Input::text("abc"), Some(2))
            .unwrap()
            .map(String::from_iter)
            .collect();
        assert_eq!(rows, ["ab", "ac", "ba", "bc", "ca", "cb"]);
    }

    #[test]
    fn full_count() {
        let rows = permutations(0..6, None).unwrap();
        assert_eq!(rows.size_hint(), (720, Some(720)));
        assert_eq!(rows.count(), 720);
    }

    #[test]
    fn huge_r_yields_nothing() {
        drain_checked(permutations([1, 2], Some(usize::MAX)).unwrap(), &[]).unwrap();
    }

    #[test]
    fn restarts_identically() {
        let mut rows = permutations(0..5, Some(3)).unwrap();
        rows.next();
        assert!(rows.clone().eq(rows));
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::collections::HashSet;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use super::*;
    use crate::test_utils::drain_checked;

    proptest! {
        #[test]
        fn matches_itertools(
            nums in propvec(any::<i8>(), ..=5),
            r in 0..=6_usize,
        ) {
            matches_itertools_impl(nums, r)?;
        }
    }

    fn matches_itertools_impl(nums: Vec<i8>, r: usize) -> TestCaseResult {
        // An empty pool is covered by the unit tests.
        if !nums.is_empty() {
            let expected: Vec<_> = itertools::Itertools::permutations(nums.iter().copied(), r).collect();
            drain_checked(permutations(nums.iter().copied(), Some(r))?, &expected)?;
        }

        // Pairwise distinct selections of positions.
        let rows: Vec<_> = permutations(0..nums.len(), Some(r))?.collect();
        let distinct: HashSet<_> = rows.iter().collect();
        prop_assert_eq!(distinct.len(), rows.len());

        Ok(())
    }
}
