use crate::{
    Accumulate, Batched, Cursor, Result,
    combinatorics::{Combinations, CombinationsWithReplacement, Permutations, Product},
    group_by::{GroupBy, Identity},
    tee::Tee,
};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Extends [`Iterator`] with the operators of this crate, in method form.
///
/// Every method forwards to the free function of the same name, with `self` as the
/// iterable. This trait is automatically implemented for all [`Iterator`] types.
///
/// # Examples
///
/// ```
/// use better_itertools::prelude::*;
///
/// let pairs: Vec<_> = "abc".chars().combinations(2)?.collect();
/// assert_eq!(pairs, [['a', 'b'], ['a', 'c'], ['b', 'c']]);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub trait SeqTools: Iterator {
    /// Returns every `r`-length subsequence of this iterator.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`combinations()`](crate::combinations) for more.
    #[inline]
    fn combinations(self, r: usize) -> Result<Combinations<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::combinations(self, r)
    }

    /// Returns every `r`-length subsequence of this iterator, allowing an element to repeat.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`combinations_with_replacement()`](crate::combinations_with_replacement) for more.
    #[inline]
    fn combinations_with_replacement(
        self,
        r: usize,
    ) -> Result<CombinationsWithReplacement<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::combinations_with_replacement(self, r)
    }

    /// Returns every ordered selection of `r` elements of this iterator, or of all of them if
    /// `r` is [`None`].
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`permutations()`](crate::permutations) for more.
    #[inline]
    fn permutations(self, r: Option<usize>) -> Result<Permutations<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::permutations(self, r)
    }

    /// Returns the cartesian product of this iterator with itself, `repeat` times over.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`product()`](crate::product) for more.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_itertools::prelude::*;
    ///
    /// let rows: Vec<_> = [0, 1].into_iter().product_repeat(2)?.collect();
    /// assert_eq!(rows, [[0, 0], [0, 1], [1, 0], [1, 1]]);
    /// # Ok::<(), better_itertools::Error>(())
    /// ```
    #[inline]
    fn product_repeat(self, repeat: usize) -> Result<Product<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::product([self], repeat)
    }

    /// Groups consecutive equal elements of this iterator.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`group_by()`](crate::group_by()) for more.
    #[inline]
    fn group_by(self) -> GroupBy<Self, Self::Item, Identity<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone + PartialEq,
    {
        crate::group_by(self)
    }

    /// Groups consecutive elements of this iterator whose keys are equal.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`group_by_key()`](crate::group_by_key) for more.
    #[inline]
    fn group_by_key<K, F>(self, key_fn: F) -> GroupBy<Self, K, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        crate::group_by_key(self, key_fn)
    }

    /// Splits this iterator into `n` independent views.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`tee()`](crate::tee()) for more.
    #[inline]
    fn tee(self, n: usize) -> Result<Vec<Tee<Self>>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::tee(self, n)
    }

    /// Splits this iterator into chunks of `n` elements.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`batched()`](crate::batched) for more.
    #[inline]
    fn batched(self, n: usize) -> Result<Batched<Self>>
    where
        Self: Sized,
    {
        crate::batched(self, n)
    }

    /// Yields the running totals of folding this iterator with `f`.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`accumulate()`](crate::accumulate) for more.
    #[inline]
    fn accumulate<F>(self, f: F) -> Accumulate<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        crate::accumulate(self, f)
    }

    /// Yields `initial`, then the running totals of folding this iterator into it with `f`.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`accumulate_from()`](crate::accumulate_from) for more.
    #[inline]
    fn accumulate_from<F>(self, initial: Self::Item, f: F) -> Accumulate<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        crate::accumulate_from(self, initial, f)
    }

    /// Yields every pair of consecutive elements of this iterator.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    /// See [`pairwise()`](crate::pairwise) for more.
    #[inline]
    fn pairwise(self) -> crate::Pairwise<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::pairwise(self)
    }

    /// Wraps this iterator in a [`Cursor`] that can look at its current element.
    ///
    /// To use this method, import the [`SeqTools`] trait.
    #[inline]
    fn cursor(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        crate::cursor(self)
    }
}

impl<I: Iterator> SeqTools for I {}
