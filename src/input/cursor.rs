use std::iter::{Fuse, FusedIterator};

/// A single-pass, pull-based cursor over a sequence.
///
/// The cursor always stands on one element (the *current* one) until the sequence runs out.
/// It reads lazily: nothing is pulled from the source until the cursor is first inspected
/// or advanced.
///
/// This `struct` is created by [`cursor()`]. It is also an [`Iterator`] whose
/// [`next()`](Iterator::next) is [`advance()`](Cursor::advance).
///
/// # Examples
///
/// ```
/// use better_itertools::{Input, cursor};
///
/// let mut cursor = cursor(Input::text("ab"));
///
/// assert!(cursor.has_current());
/// assert_eq!(cursor.current(), Some(&'a'));
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.current(), Some(&'b'));
/// assert_eq!(cursor.advance(), Some('b'));
/// assert!(!cursor.has_current());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<I: Iterator> {
    iter: Fuse<I>,
    // `None` until the element at the cursor has been read from `iter`.
    current: Option<Option<I::Item>>,
}

/// Creates a [`Cursor`] over any iterable.
pub fn cursor<I: IntoIterator>(iterable: I) -> Cursor<I::IntoIter> {
    Cursor {
        iter: iterable.into_iter().fuse(),
        current: None,
    }
}

impl<I: Iterator> Cursor<I> {
    /// Returns whether the cursor stands on an element.
    #[inline]
    pub fn has_current(&mut self) -> bool {
        self.current().is_some()
    }

    /// Returns the element the cursor stands on, without moving.
    #[inline]
    pub fn current(&mut self) -> Option<&I::Item> {
        self.current.get_or_insert_with(|| self.iter.next()).as_ref()
    }

    /// Moves past the current element, handing it out.
    ///
    /// Returns [`None`] once the sequence is exhausted.
    #[inline]
    pub fn advance(&mut self) -> Option<I::Item> {
        match self.current.take() {
            Some(item) => item,
            None => self.iter.next(),
        }
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();

        match self.current {
            Some(Some(_)) => (lower.saturating_add(1), upper.and_then(|upper| upper.checked_add(1))),
            Some(None) => (0, Some(0)),
            None => (lower, upper),
        }
    }
}

impl<I: Iterator> FusedIterator for Cursor<I> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn reads_lazily() {
        let pulled = Cell::new(0);
        let mut cursor = cursor((1..=2).inspect(|_| pulled.set(pulled.get() + 1)));

        assert_eq!(pulled.get(), 0);
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(pulled.get(), 1);

        assert_eq!(cursor.size_hint(), (2, Some(2)));
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.advance(), Some(2));
        assert_eq!(pulled.get(), 2);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[test]
    fn empty() {
        let mut cursor = cursor(Vec::<i32>::new());
        assert!(!cursor.has_current());
        assert_eq!(cursor.next(), None);
    }
}
