//! Lazy combinatoric generators and stateful sequence operators for iterators.
//!
//! [`Iterator`] already covers the single-pass plumbing (`map`, `filter`, `chain`, `zip`, ...).
//! This crate covers the operators whose correctness rests on a small state machine or on
//! index arithmetic instead: enumerating [`combinations`], [`combinations_with_replacement`],
//! [`permutations`] and the cartesian [`product`], splitting a sequence into runs with
//! [`group_by()`], replaying one source through several independent views with [`tee()`], and
//! walking sources of unequal length with [`zip_longest()`].
//!
//! Nothing is computed up front beyond what an operator needs to start. The combinatoric
//! generators materialize their input into a [`Pool`] once, then produce one row per
//! [`next()`](Iterator::next) call from an index state.
//!
//! # Examples
//!
//! ```
//! use better_itertools::prelude::*;
//!
//! let pairs: Vec<_> = [1, 2, 3].into_iter().combinations(2)?.collect();
//! assert_eq!(pairs, [[1, 2], [1, 3], [2, 3]]);
//!
//! let orders = [1, 2, 3].into_iter().permutations(None)?;
//! assert_eq!(orders.size_hint(), (6, Some(6)));
//!
//! let rows: Vec<_> = better_itertools::zip_longest([vec![1, 2], vec![3]], 0).collect();
//! assert_eq!(rows, [[1, 3], [2, 0]]);
//! # Ok::<(), better_itertools::Error>(())
//! ```
//!
//! Grouping lends each group out of the driver, so a group can only be read
//! until the next one is requested:
//!
//! ```
//! use better_itertools::{Input, group_by};
//!
//! let mut groups = group_by(Input::text("AAAABBBCCD"));
//! let mut runs = vec![];
//!
//! while let Some((key, group)) = groups.next_group() {
//!     runs.push((key, group.count()));
//! }
//!
//! assert_eq!(runs, [('A', 4), ('B', 3), ('C', 2), ('D', 1)]);
//! ```
//!
//! # Errors
//!
//! Constructors check their arguments before any lazy work begins and report a bad call
//! through [`Error`]. Reaching the end of a sequence is never an error.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

mod adaptors;
pub mod combinatorics;
mod error;
pub mod group_by;
pub mod input;
mod pool;
pub mod prelude;
pub mod tee;
#[cfg(all(test, feature = "std"))]
mod test_utils;
mod traits;
pub mod zip_longest;

pub use adaptors::*;
pub use combinatorics::*;
pub use error::*;
pub use group_by::{group_by, group_by_key};
pub use input::*;
pub use pool::Pool;
pub use tee::tee;
pub use traits::*;
pub use zip_longest::zip_longest;

#[inline(always)]
fn assert_iterator<I: Iterator>(iter: I) -> I {
    iter
}
