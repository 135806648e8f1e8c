use std::iter::FusedIterator;

use crate::{Error, Result, assert_iterator};

/// A half-open range of integers walked with a fixed, possibly negative, step.
///
/// This `struct` is created by [`xrange()`]. See its documentation for more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRange {
    // `None` once the range is exhausted, including when the next value would overflow.
    next: Option<i64>,
    stop: i64,
    step: i64,
}

/// Returns `start, start + step, start + 2 * step, ...` for as long as the value stays
/// strictly before `stop` in the direction of `step`.
///
/// The range is empty if `step` points away from `stop`, or if `start == stop`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `step` is zero.
///
/// # Examples
///
/// ```
/// use better_itertools::xrange;
///
/// assert_eq!(xrange(0, 10, 3)?.collect::<Vec<_>>(), [0, 3, 6, 9]);
/// assert_eq!(xrange(5, 0, -2)?.collect::<Vec<_>>(), [5, 3, 1]);
/// assert_eq!(xrange(0, 5, -1)?.count(), 0);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub fn xrange(start: i64, stop: i64, step: i64) -> Result<StepRange> {
    if step == 0 {
        return Err(Error::invalid_argument("step", "must not be zero"));
    }

    Ok(assert_iterator(StepRange {
        next: Some(start),
        stop,
        step,
    }))
}

/// Returns `0, 1, ..., stop - 1`: [`xrange()`] counting up from zero in steps of one.
///
/// This form cannot fail. A `stop` of zero or below gives an empty range.
///
/// # Examples
///
/// ```
/// use better_itertools::xrange_to;
///
/// assert_eq!(xrange_to(4).collect::<Vec<_>>(), [0, 1, 2, 3]);
/// assert_eq!(xrange_to(-3).count(), 0);
/// ```
pub fn xrange_to(stop: i64) -> StepRange {
    assert_iterator(StepRange {
        next: Some(0),
        stop,
        step: 1,
    })
}

impl StepRange {
    #[inline]
    fn in_range(&self, value: i64) -> bool {
        if self.step > 0 {
            value < self.stop
        } else {
            value > self.stop
        }
    }

    fn remaining(&self) -> u128 {
        match self.next {
            Some(next) if self.in_range(next) => {
                let distance = (i128::from(self.stop) - i128::from(next)).unsigned_abs();
                distance.div_ceil(u128::from(self.step.unsigned_abs()))
            }
            _ => 0,
        }
    }
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.next.filter(|&value| self.in_range(value))?;
        self.next = value.checked_add(self.step);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for StepRange {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::test_utils::drain_checked;

    #[test]
    fn zero_step() {
        assert!(matches!(
            xrange(0, 10, 0),
            Err(Error::InvalidArgument { name: "step", .. })
        ));
    }

    #[test]
    fn directions() {
        drain_checked(xrange(0, 5, 1).unwrap(), &[0, 1, 2, 3, 4]).unwrap();
        drain_checked(xrange(0, 10, 4).unwrap(), &[0, 4, 8]).unwrap();
        drain_checked(xrange(3, -3, -2).unwrap(), &[3, 1, -1]).unwrap();
        drain_checked(xrange(0, 5, -1).unwrap(), &[]).unwrap();
        drain_checked(xrange(5, 0, 1).unwrap(), &[]).unwrap();
        drain_checked(xrange(2, 2, 1).unwrap(), &[]).unwrap();
    }

    #[test]
    fn counting_up_to_stop() {
        drain_checked(xrange_to(3), &[0, 1, 2]).unwrap();
        drain_checked(xrange_to(0), &[]).unwrap();
        drain_checked(xrange_to(-5), &[]).unwrap();
        assert_eq!(xrange_to(7), xrange(0, 7, 1).unwrap());
    }

    #[test]
    fn stepping_past_stop() {
        // A step that jumps over `stop` still terminates.
        drain_checked(xrange(0, 5, 2).unwrap(), &[0, 2, 4]).unwrap();
    }

    #[test]
    fn near_the_edges_of_i64() {
        drain_checked(
            xrange(i64::MAX - 2, i64::MAX, 1).unwrap(),
            &[i64::MAX - 2, i64::MAX - 1],
        )
        .unwrap();
        drain_checked(
            xrange(i64::MIN + 1, i64::MIN, -1).unwrap(),
            &[i64::MIN + 1],
        )
        .unwrap();
        drain_checked(xrange(i64::MAX - 1, i64::MAX, i64::MAX).unwrap(), &[i64::MAX - 1]).unwrap();
    }
}
