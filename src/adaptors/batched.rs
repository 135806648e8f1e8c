use std::iter::{Fuse, FusedIterator};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Error, Result, assert_iterator};

/// An iterator over consecutive chunks of a fixed length.
///
/// This `struct` is created by [`batched()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Batched<I> {
    iter: Fuse<I>,
    n: usize,
}

/// Splits `iterable` into chunks of `n` elements. The last chunk is shorter if the
/// elements do not divide evenly, and no chunk is ever empty.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is zero.
///
/// # Examples
///
/// ```
/// use better_itertools::batched;
///
/// let chunks: Vec<_> = batched(1..=7, 3)?.collect();
/// assert_eq!(chunks, [vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub fn batched<I: IntoIterator>(iterable: I, n: usize) -> Result<Batched<I::IntoIter>> {
    if n == 0 {
        return Err(Error::invalid_argument("n", "must be at least one"));
    }

    Ok(assert_iterator(Batched {
        iter: iterable.into_iter().fuse(),
        n,
    }))
}

impl<I: Iterator> Iterator for Batched<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<_> = self.iter.by_ref().take(self.n).collect();
        (!batch.is_empty()).then_some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.n),
            upper.map(|upper| upper.div_ceil(self.n)),
        )
    }
}

impl<I: Iterator> FusedIterator for Batched<I> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::{Input, test_utils::drain_checked};

    #[test]
    fn zero() {
        assert!(matches!(
            batched([1], 0),
            Err(Error::InvalidArgument { name: "n", .. })
        ));
    }

    #[test]
    fn text() {
        drain_checked(
            batched(Input::text("ABCDEFG"), 3).unwrap(),
            &[vec!['A', 'B', 'C'], vec!['D', 'E', 'F'], vec!['G']],
        )
        .unwrap();
    }

    #[test]
    fn even_and_empty() {
        drain_checked(batched(0..4, 2).unwrap(), &[vec![0, 1], vec![2, 3]]).unwrap();
        drain_checked(batched(0..0, 2).unwrap(), &[]).unwrap();
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use super::*;
    use crate::test_utils::drain_checked;

    proptest! {
        #[test]
        fn matches_chunks(
            nums in propvec(any::<i32>(), ..=20),
            n in 1..=6_usize,
        ) {
            matches_chunks_impl(nums, n)?;
        }
    }

    fn matches_chunks_impl(nums: Vec<i32>, n: usize) -> TestCaseResult {
        let expected: Vec<_> = nums.chunks(n).map(<[_]>::to_vec).collect();
        drain_checked(batched(nums, n)?, &expected)
    }
}
