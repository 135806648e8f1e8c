use std::iter::{Fuse, FusedIterator};

use crate::assert_iterator;

/// An iterator over overlapping pairs of consecutive elements.
///
/// This `struct` is created by [`pairwise()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator> {
    iter: Fuse<I>,
    last: Option<I::Item>,
}

/// Yields every pair of consecutive elements of `iterable`, overlapping.
///
/// An input of `n` elements yields `n - 1` pairs, and nothing if `n < 2`.
///
/// # Examples
///
/// ```
/// use better_itertools::{Input, pairwise};
///
/// let pairs: Vec<_> = pairwise(Input::text("ABCD")).collect();
/// assert_eq!(pairs, [('A', 'B'), ('B', 'C'), ('C', 'D')]);
/// ```
pub fn pairwise<I>(iterable: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    assert_iterator(Pairwise {
        iter: iterable.into_iter().fuse(),
        last: None,
    })
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let prev = match self.last.take() {
            Some(prev) => prev,
            None => self.iter.next()?,
        };
        let next = self.iter.next()?;

        self.last = Some(next.clone());
        Some((prev, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let last = usize::from(self.last.is_some());
        (
            lower.saturating_add(last).saturating_sub(1),
            upper
                .and_then(|upper| upper.checked_add(last))
                .map(|upper| upper.saturating_sub(1)),
        )
    }
}

impl<I> FusedIterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
