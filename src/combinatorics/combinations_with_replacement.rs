use std::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::{Progress, checked_multichoose, index_state};
use crate::{Pool, Result, assert_iterator};

/// An iterator over every `r`-length subsequence of a pool, allowing an element to repeat.
///
/// This `struct` is created by [`combinations_with_replacement()`].
/// See its documentation for more.
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement<T> {
    pool: Pool<T>,
    indices: Vec<usize>,
    progress: Progress,
}

/// Returns every `r`-length subsequence of `iterable` in which a position may be picked more
/// than once, in lexicographic order of positions.
///
/// There are exactly `C(n + r - 1, r)` rows. An empty input produces nothing unless
/// `r == 0`, which always produces a single empty row.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if `iterable` reports itself as
/// unbounded. See [`Pool::materialize()`].
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the input is not
/// empty and a row of `r` positions cannot be allocated.
///
/// # Examples
///
/// ```
/// use better_itertools::combinations_with_replacement;
///
/// let rows: Vec<_> = combinations_with_replacement([1, 2], 2)?.collect();
/// assert_eq!(rows, [[1, 1], [1, 2], [2, 2]]);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub fn combinations_with_replacement<I>(
    iterable: I,
    r: usize,
) -> Result<CombinationsWithReplacement<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Ok(assert_iterator(CombinationsWithReplacement::new(
        Pool::materialize(iterable)?,
        r,
    )?))
}

impl<T> CombinationsWithReplacement<T> {
    pub(crate) fn new(pool: Pool<T>, r: usize) -> Result<Self> {
        // No element of the pool is read until a row is produced, and no row is produced
        // from an empty pool unless `r == 0`.
        let total = checked_multichoose(pool.len(), r);
        let indices = if total == Some(0) {
            Vec::new()
        } else {
            index_state(r, "r", |_| 0)?
        };

        Ok(Self {
            progress: Progress::new(total),
            indices,
            pool,
        })
    }

    /// Returns the pool the rows are drawn from.
    #[inline]
    pub fn pool(&self) -> &Pool<T> {
        &self.pool
    }

    fn step(indices: &mut [usize], n: usize) -> bool {
        // The rightmost position that has not reached the last element.
        let Some(pivot) = indices.iter().rposition(|&index| index + 1 != n) else {
            return false;
        };

        // Unlike `Combinations`, everything from the pivot on takes the same value.
        let next = indices[pivot] + 1;
        indices[pivot..].fill(next);

        true
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
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

impl<T: Clone> FusedIterator for CombinationsWithReplacement<T> {}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use super::*;
    use crate::test_utils::drain_checked;

    proptest! {
        #[test]
        fn matches_itertools(
            nums in propvec(any::<i8>(), ..=5),
            r in 0..=5_usize,
        ) {
            matches_itertools_impl(nums, r)?;
        }
    }

    fn matches_itertools_impl(nums: Vec<i8>, r: usize) -> TestCaseResult {
        // An empty pool is covered by the unit tests.
        if !nums.is_empty() {
            let expected: Vec<_> =
                itertools::Itertools::combinations_with_replacement(nums.iter().copied(), r).collect();
            drain_checked(combinations_with_replacement(nums.iter().copied(), r)?, &expected)?;
        }

        // Non-decreasing positions.
        for row in combinations_with_replacement(0..nums.len(), r)? {
            prop_assert!(row.is_sorted(), "{row:?}");
        }

        Ok(())
    }
}
