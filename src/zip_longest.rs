//! Walking several sources in lockstep until the longest one runs out.

use std::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::assert_iterator;

/// An iterator over rows of one element per source, padded with a fill value.
///
/// This `struct` is created by [`zip_longest()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct ZipLongest<I: Iterator> {
    sources: Vec<I>,
    // A source is never pulled again once it returned `None`.
    exhausted: Vec<bool>,
    live: usize,
    fill: I::Item,
}

/// Zips `sources` together, padding the shorter ones with `fill`.
///
/// Row `k` holds the `k`-th element of each source, in the order the sources are given, or
/// `fill` where a source has already run out. Iteration stops at the first row in which
/// every source has run out, so the number of rows is the length of the longest source and
/// a row made only of `fill` is never produced. Zero sources produce nothing.
///
/// Each source is pulled until it returns [`None`] once, and never again after that.
///
/// # Examples
///
/// ```
/// use better_itertools::{Input, zip_longest};
///
/// let rows: Vec<String> = zip_longest([Input::text("ABCD"), Input::text("xy")], '-')
///     .map(String::from_iter)
///     .collect();
/// assert_eq!(rows, ["Ax", "By", "C-", "D-"]);
/// ```
pub fn zip_longest<S>(
    sources: S,
    fill: <S::Item as IntoIterator>::Item,
) -> ZipLongest<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Clone,
{
    let sources: Vec<_> = sources.into_iter().map(IntoIterator::into_iter).collect();

    assert_iterator(ZipLongest {
        exhausted: sources.iter().map(|_| false).collect(),
        live: sources.len(),
        sources,
        fill,
    })
}

impl<I: Iterator> ZipLongest<I> {
    /// Returns how many sources have not run out yet.
    #[inline]
    pub fn live_sources(&self) -> usize {
        self.live
    }
}

impl<I> Iterator for ZipLongest<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.live == 0 {
            return None;
        }

        let mut row = Vec::with_capacity(self.sources.len());

        for (index, (source, exhausted)) in self
            .sources
            .iter_mut()
            .zip(&mut self.exhausted)
            .enumerate()
        {
            let item = if *exhausted { None } else { source.next() };

            match item {
                Some(item) => row.push(item),
                None => {
                    if !*exhausted {
                        *exhausted = true;
                        self.live -= 1;
                        tracing::trace!(source = index, live = self.live, "source ran out");
                    }
                    row.push(self.fill.clone());
                }
            }
        }

        // A source still live after this row contributed to it. Otherwise the row is all fill.
        (self.live > 0).then_some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources
            .iter()
            .zip(&self.exhausted)
            .filter(|&(_, &exhausted)| !exhausted)
            .map(|(source, _)| source.size_hint())
            .fold((0, Some(0)), |(lower, upper), (source_lower, source_upper)| {
                (
                    lower.max(source_lower),
                    upper.zip(source_upper).map(|(a, b)| a.max(b)),
                )
            })
    }
}

impl<I> FusedIterator for ZipLongest<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_utils::drain_checked;

    #[test]
    fn pads_the_shorter_source() {
        drain_checked(
            zip_longest([vec![1, 2], vec![3]], 9),
            &[vec![1, 3], vec![2, 9]],
        )
        .unwrap();
    }

    #[test]
    fn edges() {
        drain_checked(zip_longest(Vec::<Vec<i32>>::new(), 0), &[]).unwrap();
        drain_checked(zip_longest([Vec::<i32>::new(), vec![]], 0), &[]).unwrap();
        drain_checked(zip_longest([vec![1], vec![]], 0), &[vec![1, 0]]).unwrap();
    }

    #[test]
    fn exhausted_source_is_not_pulled_again() {
        let pulls = Cell::new(0);
        let short = std::iter::from_fn(|| {
            pulls.set(pulls.get() + 1);
            (pulls.get() == 1).then_some(1)
        });
        let long = [1, 2, 3, 4].into_iter();

        let rows = zip_longest(
            [
                Box::new(short) as Box<dyn Iterator<Item = i32> + '_>,
                Box::new(long),
            ],
            0,
        );
        assert_eq!(rows.count(), 4);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn live_sources() {
        let mut rows = zip_longest([0..1, 0..3, 0..2], -1);
        assert_eq!(rows.live_sources(), 3);

        assert_eq!(rows.next(), Some(vec![0, 0, 0]));
        assert_eq!(rows.next(), Some(vec![-1, 1, 1]));
        assert_eq!(rows.live_sources(), 2);
        assert_eq!(rows.next(), Some(vec![-1, 2, -1]));
        assert_eq!(rows.live_sources(), 1);
        assert_eq!(rows.next(), None);
        assert_eq!(rows.live_sources(), 0);
    }

    #[test]
    fn restarts_identically() {
        let mut rows = zip_longest([0..3, 0..1], 9);
        rows.next();
        assert!(rows.clone().eq(rows));
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
        fn matches_itertools(
            left in propvec(any::<i32>(), ..=8),
            right in propvec(any::<i32>(), ..=8),
            fill: i32,
        ) {
            matches_itertools_impl(left, right, fill)?;
        }

        #[test]
        fn as_long_as_the_longest(
            sources in propvec(propvec(any::<u8>(), ..=6), ..=5),
        ) {
            as_long_as_the_longest_impl(sources)?;
        }
    }

    fn matches_itertools_impl(left: Vec<i32>, right: Vec<i32>, fill: i32) -> TestCaseResult {
        let expected: Vec<_> = itertools::Itertools::zip_longest(left.iter(), right.iter())
            .map(|pair| {
                let (a, b) = pair.or(&fill, &fill);
                vec![*a, *b]
            })
            .collect();

        drain_checked(zip_longest([left, right], fill), &expected)
    }

    fn as_long_as_the_longest_impl(sources: Vec<Vec<u8>>) -> TestCaseResult {
        let longest = sources.iter().map(Vec::len).max().unwrap_or(0);
        let rows: Vec<_> = zip_longest(sources.iter().cloned(), u8::MAX).collect();

        prop_assert_eq!(rows.len(), longest);
        for (k, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.len(), sources.len());
            for (cell, source) in row.iter().zip(&sources) {
                prop_assert_eq!(*cell, source.get(k).copied().unwrap_or(u8::MAX));
            }
        }

        Ok(())
    }
}
