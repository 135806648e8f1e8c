//! Splitting a sequence into runs of consecutive elements that share a key.
//!
//! [`GroupBy`] walks one [`Cursor`] and lends out one [`Group`] at a time. A group reads
//! straight from the shared cursor instead of from a copy, so it is only usable until the
//! next group is requested. The borrow checker enforces this: a [`Group`] mutably borrows
//! its [`GroupBy`].
//!
//! ```compile_fail
//! use better_itertools::group_by;
//!
//! let mut groups = group_by([1, 1, 2]);
//! let (_, first) = groups.next_group().unwrap();
//! let (_, second) = groups.next_group().unwrap();
//!
//! // `first` cannot outlive the request for `second`.
//! first.count();
//! ```
//!
//! Use [`GroupBy::into_groups()`] when every group should be collected anyway.

use std::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Cursor, assert_iterator, cursor};

/// The key function used by [`group_by()`]: each element is its own key.
pub type Identity<T> = fn(&T) -> T;

/// Lends out runs of consecutive elements that share a key.
///
/// This `struct` is created by [`group_by()`] and [`group_by_key()`].
/// See their documentation for more.
///
/// # Unread members
///
/// If a [`Group`] is dropped before it is exhausted, its remaining members are **skipped**
/// when the next group is requested: they are read from the source and discarded,
/// never buffered. The next group always starts at the next change of key.
pub struct GroupBy<I: Iterator, K, F> {
    head: Head<I, K, F>,
    state: State<K>,
}

/// Where the driver stands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State<K> {
    /// No group has been handed out yet.
    Fresh,
    /// The last group handed out has this key.
    InGroup(K),
    Exhausted,
}

/// The shared cursor, together with the key of the element it stands on.
struct Head<I: Iterator, K, F> {
    cursor: Cursor<I>,
    key_fn: F,
    key: Option<K>,
}

impl<I, K, F> Head<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
{
    /// Returns the key of the current element, computing it at most once per element.
    fn key(&mut self) -> Option<&K> {
        if self.key.is_none() {
            let item = self.cursor.current()?;
            self.key = Some((self.key_fn)(item));
        }

        self.key.as_ref()
    }

    fn advance(&mut self) -> Option<I::Item> {
        self.key = None;
        self.cursor.advance()
    }
}

/// Groups consecutive equal elements of `iterable`.
///
/// Equal elements that are not adjacent end up in separate groups; nothing is sorted.
///
/// # Examples
///
/// ```
/// use better_itertools::{Input, group_by};
///
/// let runs: Vec<(char, String)> = group_by(Input::text("AAAABBBCCDAA"))
///     .into_groups()
///     .map(|(key, group)| (key, String::from_iter(group)))
///     .collect();
///
/// assert_eq!(
///     runs,
///     [
///         ('A', "AAAA".into()),
///         ('B', "BBB".into()),
///         ('C', "CC".into()),
///         ('D', "D".into()),
///         ('A', "AA".into()),
///     ],
/// );
/// ```
pub fn group_by<I>(iterable: I) -> GroupBy<I::IntoIter, I::Item, Identity<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone + PartialEq,
{
    group_by_key(iterable, Clone::clone as Identity<I::Item>)
}

/// Groups consecutive elements of `iterable` whose keys, computed by `key_fn`, are equal.
///
/// `key_fn` is called once per element.
///
/// # Examples
///
/// ```
/// use better_itertools::group_by_key;
///
/// let mut groups = group_by_key([1, 3, 4, 6, 8, 9], |num| num % 2 == 0);
/// let mut lengths = vec![];
///
/// while let Some((is_even, group)) = groups.next_group() {
///     lengths.push((is_even, group.count()));
/// }
///
/// assert_eq!(lengths, [(false, 2), (true, 3), (false, 1)]);
/// ```
pub fn group_by_key<I, K, F>(iterable: I, key_fn: F) -> GroupBy<I::IntoIter, K, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    GroupBy {
        head: Head {
            cursor: cursor(iterable),
            key_fn,
            key: None,
        },
        state: State::Fresh,
    }
}

impl<I, K, F> GroupBy<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Clone + PartialEq,
{
    /// Lends out the next group along with its key, or returns [`None`] once the source is
    /// exhausted.
    ///
    /// Members of the previous group that were not read are skipped.
    pub fn next_group(&mut self) -> Option<(K, Group<'_, I, K, F>)> {
        match &self.state {
            State::Exhausted => return None,
            State::InGroup(target) => {
                while self.head.key().is_some_and(|key| key == target) {
                    self.head.advance();
                }
            }
            State::Fresh => {}
        }

        let Some(key) = self.head.key().cloned() else {
            self.state = State::Exhausted;
            return None;
        };

        self.state = State::InGroup(key.clone());
        Some((key, assert_iterator(Group { parent: self })))
    }

    /// Turns this into an [`Iterator`] that collects each group into a [`Vec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use better_itertools::group_by;
    ///
    /// let groups: Vec<_> = group_by([1, 1, 2, 1]).into_groups().collect();
    /// assert_eq!(groups, [(1, vec![1, 1]), (2, vec![2]), (1, vec![1])]);
    /// ```
    pub fn into_groups(self) -> Groups<I, K, F> {
        assert_iterator(Groups { inner: self })
    }
}

/// One run of elements sharing a key, read directly from the [`GroupBy`] that lent it.
///
/// It ends permanently at the first element whose key differs, or when the source runs out.
///
/// This `struct` is created by [`GroupBy::next_group()`].
pub struct Group<'a, I: Iterator, K, F> {
    parent: &'a mut GroupBy<I, K, F>,
}

impl<I, K, F> Iterator for Group<'_, I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let GroupBy { head, state } = &mut *self.parent;

        let State::InGroup(target) = &*state else {
            return None;
        };

        if head.key()? != target {
            return None;
        }

        head.advance()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.parent.head.cursor.size_hint().1)
    }
}

impl<I, K, F> FusedIterator for Group<'_, I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
}

/// An iterator over `(key, members)` pairs, one per run of elements sharing a key.
///
/// This `struct` is created by [`GroupBy::into_groups()`].
pub struct Groups<I: Iterator, K, F> {
    inner: GroupBy<I, K, F>,
}

impl<I, K, F> Iterator for Groups<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Clone + PartialEq,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, group) = self.inner.next_group()?;
        Some((key, group.collect()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.head.cursor.size_hint();
        (lower.min(1), upper)
    }
}

impl<I, K, F> FusedIterator for Groups<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Clone + PartialEq,
{
}
