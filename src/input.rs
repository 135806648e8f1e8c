//! Normalizes the supported input shapes into one pull-based sequence.
//!
//! Every operator in this crate takes `impl IntoIterator`, so any iterator or collection
//! can be handed in directly. [`Input`] additionally names the shapes a caller commonly has
//! at hand (an owned sequence, a borrowed slice, text, or an existing lazy sequence) as one
//! explicit variant each, and [`Cursor`] exposes the "has current / read current / advance"
//! view over any of them.

mod cursor;

pub use cursor::*;

use std::{slice, str::Chars};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

#[cfg(feature = "std")]
use std::vec;

#[cfg(not(feature = "std"))]
use alloc::vec;

/// One input sequence, tagged by its shape.
///
/// # Examples
///
/// ```
/// use better_itertools::Input;
///
/// let from_text: Vec<char> = Input::text("abc").into_iter().collect();
/// assert_eq!(from_text, ['a', 'b', 'c']);
///
/// let from_slice: Vec<i32> = Input::from(&[1, 2][..]).into_iter().collect();
/// assert_eq!(from_slice, [1, 2]);
///
/// let from_lazy: Vec<u32> = Input::lazy((1..=3).map(|n| n * n)).into_iter().collect();
/// assert_eq!(from_lazy, [1, 4, 9]);
/// ```
pub enum Input<'a, T> {
    /// An owned, ordered sequence.
    Owned(Vec<T>),
    /// A borrowed, ordered sequence. Elements are cloned as they are read.
    Borrowed(&'a [T]),
    /// Text, read as a sequence of its characters.
    ///
    /// Each character is passed through `map`. [`Input::text()`] builds this variant
    /// with the identity mapping.
    Text {
        /// The text to read.
        text: &'a str,
        /// Turns one character into one element.
        map: fn(char) -> T,
    },
    /// An existing lazy sequence.
    Lazy(Box<dyn Iterator<Item = T> + 'a>),
}

impl<'a> Input<'a, char> {
    /// Reads `text` as a sequence of its characters.
    pub fn text(text: &'a str) -> Self {
        Self::Text {
            text,
            map: std::convert::identity,
        }
    }
}

impl<'a, T> Input<'a, T> {
    /// Wraps an existing lazy sequence.
    pub fn lazy<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::Lazy(Box::new(iter.into_iter()))
    }
}

impl<T> From<Vec<T>> for Input<'_, T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Owned(items)
    }
}

impl<'a, T> From<&'a [T]> for Input<'a, T> {
    #[inline]
    fn from(items: &'a [T]) -> Self {
        Self::Borrowed(items)
    }
}

impl<'a> From<&'a str> for Input<'a, char> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::text(text)
    }
}

impl<'a> From<&'a String> for Input<'a, char> {
    #[inline]
    fn from(text: &'a String) -> Self {
        Self::text(text)
    }
}

impl<'a, T: Clone> IntoIterator for Input<'a, T> {
    type Item = T;
    type IntoIter = InputIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let source = match self {
            Input::Owned(items) => Source::Owned(items.into_iter()),
            Input::Borrowed(items) => Source::Borrowed(items.iter()),
            Input::Text { text, map } => Source::Text(text.chars(), map),
            Input::Lazy(iter) => Source::Lazy(iter),
        };

        InputIter { source }
    }
}

/// The sequence produced from an [`Input`].
///
/// This `struct` is created by [`Input::into_iter()`].
pub struct InputIter<'a, T> {
    source: Source<'a, T>,
}

enum Source<'a, T> {
    Owned(vec::IntoIter<T>),
    Borrowed(slice::Iter<'a, T>),
    Text(Chars<'a>, fn(char) -> T),
    Lazy(Box<dyn Iterator<Item = T> + 'a>),
}

impl<T: Clone> Iterator for InputIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            Source::Owned(items) => items.next(),
            Source::Borrowed(items) => items.next().cloned(),
            Source::Text(chars, map) => chars.next().map(*map),
            Source::Lazy(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Source::Owned(items) => items.size_hint(),
            Source::Borrowed(items) => items.size_hint(),
            Source::Text(chars, _) => chars.size_hint(),
            Source::Lazy(iter) => iter.size_hint(),
        }
    }
}
