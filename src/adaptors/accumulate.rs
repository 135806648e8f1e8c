use std::iter::{Fuse, FusedIterator};

use crate::assert_iterator;

/// An iterator over the running totals of a fold.
///
/// This `struct` is created by [`accumulate()`] and [`accumulate_from()`].
/// See their documentation for more.
#[derive(Debug, Clone)]
pub struct Accumulate<I: Iterator, F> {
    iter: Fuse<I>,
    total: Option<I::Item>,
    // The seed is handed out before anything is folded into it.
    seed_pending: bool,
    f: F,
}

/// Yields the running totals of folding `iterable` with `f`, starting from its first element.
///
/// The first element is yielded as-is; each later element is folded into the previous
/// total. An empty input yields nothing.
///
/// # Examples
///
/// ```
/// use better_itertools::accumulate;
///
/// let sums: Vec<_> = accumulate([1, 2, 3, 4, 5], |a, b| a + b).collect();
/// assert_eq!(sums, [1, 3, 6, 10, 15]);
///
/// let maxima: Vec<_> = accumulate([3, 1, 4, 1, 5], i32::max).collect();
/// assert_eq!(maxima, [3, 3, 4, 4, 5]);
/// ```
pub fn accumulate<I, F>(iterable: I, f: F) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    assert_iterator(Accumulate {
        iter: iterable.into_iter().fuse(),
        total: None,
        seed_pending: false,
        f,
    })
}

/// Yields `initial`, then the running totals of folding `iterable` into it with `f`.
///
/// There is always one more output than input.
///
/// # Examples
///
/// ```
/// use better_itertools::accumulate_from;
///
/// let sums: Vec<_> = accumulate_from([1, 2, 3], 100, |a, b| a + b).collect();
/// assert_eq!(sums, [100, 101, 103, 106]);
///
/// assert_eq!(accumulate_from(Vec::<i32>::new(), 7, |a, b| a * b).collect::<Vec<_>>(), [7]);
/// ```
pub fn accumulate_from<I, F>(iterable: I, initial: I::Item, f: F) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    assert_iterator(Accumulate {
        iter: iterable.into_iter().fuse(),
        total: Some(initial),
        seed_pending: true,
        f,
    })
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seed_pending {
            self.seed_pending = false;
            return self.total.clone();
        }

        let item = self.iter.next()?;
        let total = match self.total.take() {
            Some(total) => (self.f)(total, item),
            None => item,
        };

        self.total = Some(total.clone());
        Some(total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let seed = usize::from(self.seed_pending);
        (
            lower.saturating_add(seed),
            upper.and_then(|upper| upper.checked_add(seed)),
        )
    }
}

impl<I, F> FusedIterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::test_utils::drain_checked;

    #[test]
    fn running_sums() {
        drain_checked(accumulate(1..=5, |a, b| a + b), &[1, 3, 6, 10, 15]).unwrap();
        drain_checked(accumulate(0..0, |a, b| a + b), &[]).unwrap();
    }

    #[test]
    fn seeded() {
        drain_checked(accumulate_from(1..=3, 10, |a, b| a * b), &[10, 10, 20, 60]).unwrap();
        drain_checked(accumulate_from(0..0, 10, |a, b| a * b), &[10]).unwrap();
    }

    #[test]
    fn concatenation() {
        let prefixes: Vec<_> = accumulate(["a", "b", "c"].map(String::from), |a, b| a + &b).collect();
        assert_eq!(prefixes, ["a", "ab", "abc"]);
    }
}
