use std::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::{Progress, checked_pow, index_state};
use crate::{Error, Pool, Result, assert_iterator};

/// An iterator over the cartesian product of several pools.
///
/// This `struct` is created by [`product()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Product<T> {
    pools: Vec<Pool<T>>,
    // One odometer wheel per pool and repetition. Wheel `k` turns over `pools[k % pools.len()]`.
    indices: Vec<usize>,
    progress: Progress,
}

/// Returns the cartesian product of `sources`, each repeated `repeat` times.
///
/// Rows come in odometer order: the last source varies fastest, exactly like nested loops
/// with the last source innermost. With `repeat = k` the rows are those of the list of sources
/// concatenated with itself `k` times, so `product([a], 2)` equals `product([a, a], 1)`.
///
/// Every source is materialized once, before the first row, and is never copied for the
/// repetitions. The product is empty if any source is empty, and is a single empty row if
/// there are no sources at all (or `repeat == 0`).
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any source reports itself as unbounded. See
/// [`Pool::materialize()`].
///
/// Returns [`Error::InvalidArgument`] if no source is empty and a row of
/// `repeat` times the number of sources cannot be allocated.
///
/// # Examples
///
/// ```
/// use better_itertools::{Input, product};
///
/// let rows: Vec<String> = product([Input::text("AB"), Input::text("xy")], 1)?
///     .map(String::from_iter)
///     .collect();
/// assert_eq!(rows, ["Ax", "Ay", "Bx", "By"]);
///
/// let bits: Vec<_> = product([[0, 1]], 3)?.collect();
/// assert_eq!(bits.len(), 8);
/// assert_eq!(bits[3], [0, 1, 1]);
/// # Ok::<(), better_itertools::Error>(())
/// ```
pub fn product<S, T>(sources: S, repeat: usize) -> Result<Product<T>>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Clone,
{
    let pools = sources
        .into_iter()
        .map(|source| Pool::materialize(source))
        .collect::<Result<Vec<_>>>()?;

    Ok(assert_iterator(Product::new(pools, repeat)?))
}

impl<T> Product<T> {
    pub(crate) fn new(pools: Vec<Pool<T>>, repeat: usize) -> Result<Self> {
        let (total, indices) = if pools.is_empty() || repeat == 0 {
            (Some(1), Vec::new())
        } else if pools.iter().any(|pool| pool.is_empty()) {
            (Some(0), Vec::new())
        } else {
            let wheels = pools
                .len()
                .checked_mul(repeat)
                .ok_or_else(|| Error::invalid_argument("repeat", "rows are too long to allocate"))?;
            let total = pools
                .iter()
                .try_fold(1_usize, |acc, pool| acc.checked_mul(pool.len()))
                .and_then(|once| checked_pow(once, repeat));

            (total, index_state(wheels, "repeat", |_| 0)?)
        };

        Ok(Self {
            progress: Progress::new(total),
            indices,
            pools,
        })
    }

    /// Returns the distinct pools the rows are drawn from, once each.
    #[inline]
    pub fn pools(&self) -> &[Pool<T>] {
        &self.pools
    }

    fn step(indices: &mut [usize], pools: &[Pool<T>]) -> bool {
        for (wheel, index) in indices.iter_mut().enumerate().rev() {
            *index += 1;
            if *index < pools[wheel % pools.len()].len() {
                return true;
            }
            *index = 0;
        }

        false
    }
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (indices, pools) = (&mut self.indices, &self.pools);

        self.progress
            .next_row(|| Self::step(indices, pools))
            .then(|| {
                self.indices
                    .iter()
                    .zip(self.pools.iter().cycle())
                    .map(|(&index, pool)| pool[index].clone())
                    .collect()
            })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.progress.size_hint()
    }
}

impl<T: Clone> FusedIterator for Product<T> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::{Input, test_utils::drain_checked};

    #[test]
    fn letters() {
        let rows: Vec<String> = product([Input::text("ABCD"), Input::text("xy")], 1)
            .unwrap()
            .map(String::from_iter)
            .collect();
        assert_eq!(rows, ["Ax", "Ay", "Bx", "By", "Cx", "Cy", "Dx", "Dy"]);
    }

    #[test]
    fn edges() {
        drain_checked(product(Vec::<Vec<i32>>::new(), 1).unwrap(), &[vec![]]).unwrap();
        drain_checked(product([vec![1, 2]], 0).unwrap(), &[vec![]]).unwrap();
        drain_checked(product([vec![1, 2], vec![]], 1).unwrap(), &[]).unwrap();
        drain_checked(product([vec![1, 2], vec![]], 0).unwrap(), &[vec![]]).unwrap();
    }

    #[test]
    fn repeat_equals_listing_twice() {
        let repeated: Vec<_> = product([vec![1, 2, 3]], 2).unwrap().collect();
        let listed: Vec<_> = product([vec![1, 2, 3], vec![1, 2, 3]], 1).unwrap().collect();
        assert_eq!(repeated, listed);

        let sources = || [vec!['a', 'b'], vec!['x']];
        let repeated: Vec<_> = product(sources(), 2).unwrap().collect();
        let listed: Vec<_> = product(sources().into_iter().chain(sources()), 1).unwrap().collect();
        assert_eq!(repeated, listed);
        assert_eq!(repeated[1], ['a', 'x', 'b', 'x']);
    }

    #[test]
    fn huge_repeat() {
        drain_checked(product(Vec::<Vec<i32>>::new(), usize::MAX).unwrap(), &[vec![]]).unwrap();
        drain_checked(product([vec![1], vec![]], usize::MAX).unwrap(), &[]).unwrap();

        assert!(matches!(
            product([vec![1, 2]], usize::MAX / 2),
            Err(Error::InvalidArgument { name: "repeat", .. })
        ));
        assert!(matches!(
            product([vec![1, 2], vec![3]], usize::MAX),
            Err(Error::InvalidArgument { name: "repeat", .. })
        ));
    }

    #[test]
    fn pools_are_kept_once() {
        let rows = product([vec![1, 2], vec![3]], 3).unwrap();
        assert_eq!(rows.pools().len(), 2);
        assert_eq!(rows.size_hint(), (8, Some(8)));
    }

    #[test]
    fn restarts_identically() {
        let mut rows = product([vec![1, 2], vec![3, 4, 5]], 2).unwrap();
        rows.next();
        assert!(rows.clone().eq(rows));
    }

    #[test]
    fn unbounded_source() {
        assert!(product([Input::lazy(0..), Input::lazy(0..3)], 1).is_err());
    }
}
