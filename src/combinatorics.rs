//! Combinatoric generators driven by an explicit index state.
//!
//! Every generator here first reads its input into a [`Pool`](crate::Pool), then keeps a
//! small vector of indices into it. Each call to [`next()`](Iterator::next) moves the index
//! state to its successor and clones the addressed elements into a fresh row.
//!
//! | Generator | Rows | Order of the index tuples |
//! |-----------|------|---------------------------|
//! | [`Combinations`] | `C(n, r)` | lexicographic, strictly increasing |
//! | [`CombinationsWithReplacement`] | `C(n + r - 1, r)` | lexicographic, non-decreasing |
//! | [`Permutations`] | `n! / (n - r)!` | lexicographic over positions |
//! | [`Product`] | `len(p0) * len(p1) * ...` | odometer, last pool fastest |
//!
//! The total number of rows is known up front, so every generator reports an exact
//! [`size_hint()`](Iterator::size_hint) unless that number overflows `usize`.

mod combinations;
mod combinations_with_replacement;
mod permutations;
mod product;

pub use combinations::*;
pub use combinations_with_replacement::*;
pub use permutations::*;
pub use product::*;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Tracks where a generator is in its sequence of rows and how many are left.
#[derive(Debug, Clone)]
struct Progress {
    phase: Phase,
    // `None` if the total overflowed `usize`.
    remaining: Option<usize>,
}

impl Progress {
    fn new(total: Option<usize>) -> Self {
        Self {
            phase: if total == Some(0) {
                Phase::Done
            } else {
                Phase::Fresh
            },
            remaining: total,
        }
    }

    /// Returns whether another row is available.
    ///
    /// The first row of a fresh generator is its initial index state. After that, `step`
    /// moves the index state to its successor and returns `false` if there is none.
    #[inline]
    fn next_row(&mut self, step: impl FnOnce() -> bool) -> bool {
        match self.phase {
            Phase::Done => return false,
            Phase::Fresh => self.phase = Phase::Running,
            Phase::Running if step() => {}
            Phase::Running => {
                self.phase = Phase::Done;
                self.remaining = Some(0);
                return false;
            }
        }

        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }

        true
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

/// `C(n, k)`, or `None` if it overflows.
fn checked_binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }

    // C(n, k) == C(n, n - k); the smaller side needs fewer steps.
    let k = k.min(n - k);

    (0..k).try_fold(1_usize, |acc, i| {
        // `acc * (n - i)` is always divisible by `i + 1` here, but may overflow
        // even when the quotient does not.
        let gcd = gcd(acc, i + 1);
        let (acc, divisor) = (acc / gcd, (i + 1) / gcd);
        acc.checked_mul((n - i) / divisor)
    })
}

/// `C(n + k - 1, k)`: the number of size-`k` multisets over `n` elements.
fn checked_multichoose(n: usize, k: usize) -> Option<usize> {
    match (n, k) {
        (_, 0) => Some(1),
        (0, _) => Some(0),
        _ => checked_binomial(n.checked_add(k - 1)?, k),
    }
}

/// `n! / (n - k)!`, or `None` if it overflows.
fn checked_falling_factorial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }

    (n - k + 1..=n).try_fold(1_usize, |acc, factor| acc.checked_mul(factor))
}

/// `base.pow(exp)`, or `None` if it overflows.
fn checked_pow(base: usize, exp: usize) -> Option<usize> {
    match (base, exp) {
        (_, 0) => Some(1),
        (0 | 1, _) => Some(base),
        _ => base.checked_pow(u32::try_from(exp).ok()?),
    }
}

/// Allocates `len` indices, each set by `init`, reporting a size that cannot be allocated
/// against the argument `name`.
fn index_state(
    len: usize,
    name: &'static str,
    init: impl FnMut(usize) -> usize,
) -> Result<Vec<usize>> {
    let mut indices = Vec::new();
    indices
        .try_reserve_exact(len)
        .map_err(|_| Error::invalid_argument(name, "rows are too long to allocate"))?;
    indices.extend((0..len).map(init));

    Ok(indices)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
