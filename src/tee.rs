//! Replaying one source through several independent views.
//!
//! All views created by one [`tee()`] call share a single buffer, laid out like an arena
//! indexed by the position of an element in the source. Each view only owns its read
//! position. Whichever view is furthest ahead pulls the next element from the source and
//! appends it; the others read it from the buffer later.
//!
//! The buffer is bounded: an element is dropped as soon as every live view has read past it,
//! so memory use follows the distance between the slowest and the fastest view rather than
//! the length of the source. Dropping a view releases its hold on the buffer.

use std::{
    cell::RefCell,
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};

#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, rc::Rc, vec::Vec};

#[cfg(feature = "std")]
use std::{collections::VecDeque, rc::Rc};

use crate::{Error, Result, assert_iterator};

/// One of several independent views over the same source.
///
/// This `struct` is created by [`tee()`]. See its documentation for more.
///
/// Cloning a view creates another view standing at the same position.
pub struct Tee<I: Iterator> {
    shared: Rc<RefCell<Shared<I>>>,
    id: usize,
}

#[derive(Debug)]
struct Shared<I: Iterator> {
    source: I,
    source_done: bool,
    buffer: VecDeque<I::Item>,
    // Source position of `buffer[0]`.
    base: usize,
    // Source position each view reads next, or `None` once the view is dropped.
    positions: Vec<Option<usize>>,
}

/// Splits `iterable` into `n` independent views.
///
/// Every view yields exactly the elements of the source, in order, no matter how the views
/// are interleaved. The source is pulled at most once per element. `n == 1` gives a single
/// view that passes elements through without buffering.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n` is zero.
///
/// # Examples
///
/// ```
/// use better_itertools::tee;
///
/// let mut views = tee([1, 2, 3], 2)?;
/// let second = views.pop().unwrap();
/// let mut first = views.pop().unwrap();
///
/// assert_eq!(first.next(), Some(1));
/// assert_eq!(second.collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(first.collect::<Vec<_>>(), [2, 3]);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub fn tee<I>(iterable: I, n: usize) -> Result<Vec<Tee<I::IntoIter>>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if n == 0 {
        return Err(Error::invalid_argument("n", "a tee needs at least one view"));
    }

    let shared = Rc::new(RefCell::new(Shared {
        source: iterable.into_iter(),
        source_done: false,
        buffer: VecDeque::new(),
        base: 0,
        positions: (0..n).map(|_| Some(0)).collect(),
    }));
    tracing::trace!(views = n, "created tee");

    Ok((0..n)
        .map(|id| {
            assert_iterator(Tee {
                shared: Rc::clone(&shared),
                id,
            })
        })
        .collect())
}

impl<I: Iterator> Shared<I> {
    fn live_views(&self) -> usize {
        self.positions.iter().flatten().count()
    }

    fn next_for(&mut self, id: usize) -> Option<I::Item>
    where
        I::Item: Clone,
    {
        let position = self.positions[id]?;

        let item = if let Some(item) = self.buffer.get(position - self.base) {
            item.clone()
        } else {
            if self.source_done {
                return None;
            }

            let Some(item) = self.source.next() else {
                self.source_done = true;
                return None;
            };

            // The view at the front never needs its own copy back.
            if self.live_views() > 1 {
                self.buffer.push_back(item.clone());
            } else {
                self.base += 1;
            }

            item
        };

        self.positions[id] = Some(position + 1);
        self.trim();

        Some(item)
    }

    /// Drops every buffered element that no live view will read again.
    fn trim(&mut self) {
        let slowest = self
            .positions
            .iter()
            .flatten()
            .copied()
            .min()
            .unwrap_or(self.base + self.buffer.len());

        let stale = slowest - self.base;
        if stale > 0 {
            self.buffer.drain(..stale);
            self.base = slowest;
        }
    }

    fn size_hint_for(&self, id: usize) -> (usize, Option<usize>) {
        let Some(position) = self.positions[id] else {
            return (0, Some(0));
        };

        let buffered = self.base + self.buffer.len() - position;
        if self.source_done {
            return (buffered, Some(buffered));
        }

        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> Tee<I> {
    /// Returns how many elements are currently buffered for the slower views.
    pub fn buffered(&self) -> usize {
        self.shared.borrow().buffer.len()
    }
}

impl<I: Iterator> Debug for Tee<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Tee")
            .field("id", &self.id)
            .field("position", &shared.positions[self.id])
            .field("buffered", &shared.buffer.len())
            .finish()
    }
}

impl<I> Iterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.shared.borrow_mut().next_for(self.id)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shared.borrow().size_hint_for(self.id)
    }
}

impl<I> FusedIterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> Clone for Tee<I> {
    fn clone(&self) -> Self {
        let mut shared = self.shared.borrow_mut();
        let position = shared.positions[self.id];

        // Reuse the slot of a dropped view, so the table is bounded by the peak number of views.
        let id = match shared.positions.iter().position(Option::is_none) {
            Some(free) => {
                shared.positions[free] = position;
                free
            }
            None => {
                shared.positions.push(position);
                shared.positions.len() - 1
            }
        };

        Self {
            id,
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<I: Iterator> Drop for Tee<I> {
    fn drop(&mut self) {
        // Never panic in `drop`: the cell is only borrowed while a view is being read.
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.positions[self.id] = None;
            shared.trim();
            tracing::trace!(view = self.id, buffered = shared.buffer.len(), "dropped tee view");
        }
    }
}
