use std::ops::Deref;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use crate::{Error, Result};

/// A materialized, immutable snapshot of an input sequence.
///
/// The combinatoric generators revisit elements in arbitrary order, so they read their
/// input into a `Pool` once and index into it from then on.
///
/// # Examples
///
/// ```
/// use better_itertools::{Error, Pool};
///
/// let pool = Pool::materialize("abc".chars())?;
/// assert_eq!(pool.len(), 3);
/// assert_eq!(pool[1], 'b');
///
/// assert!(matches!(Pool::materialize(0..), Err(Error::InvalidInput { .. })));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pool<T> {
    items: Box<[T]>,
}

impl<T> Pool<T> {
    /// Reads every element of `iterable` into a new pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] without reading anything if the source reports itself
    /// as unbounded (a lower [`size_hint`](Iterator::size_hint) of [`usize::MAX`], as `0..`,
    /// [`repeat()`](std::iter::repeat) and [`cycle()`](Iterator::cycle) do).
    /// Other infinite sources cannot be detected and will never finish materializing.
    pub fn materialize(iterable: impl IntoIterator<Item = T>) -> Result<Self> {
        let iter = iterable.into_iter();

        if iter.size_hint().0 == usize::MAX {
            return Err(Error::invalid_input("source reports an unbounded length"));
        }

        let items: Box<[T]> = iter.collect();
        tracing::trace!(len = items.len(), "materialized pool");

        Ok(Self { items })
    }

    /// Clones the elements at `indices`, in that order.
    #[inline]
    pub(crate) fn select(&self, indices: &[usize]) -> Vec<T>
    where
        T: Clone,
    {
        indices.iter().map(|&index| self.items[index].clone()).collect()
    }
}

impl<T> From<Vec<T>> for Pool<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }
}

impl<T> Deref for Pool<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}
