use std::fmt::Debug;

use proptest::{prelude::*, test_runner::TestCaseResult};

/// Drains `iter`, checking it yields exactly `expected` and behaves well along the way.
///
/// Before every call to `next()`, the reported `size_hint()` must bracket the number of
/// items still to come, and must be exact whenever both bounds agree. Once exhausted, the
/// iterator must stay exhausted.
pub fn drain_checked<I>(mut iter: I, expected: &[I::Item]) -> TestCaseResult
where
    I: Iterator,
    I::Item: PartialEq + Debug,
{
    for (index, expected_item) in expected.iter().enumerate() {
        check_size_hint(&iter, expected.len() - index)?;

        let item = iter.next();
        prop_assert_eq!(
            item.as_ref(),
            Some(expected_item),
            "item {} mismatched",
            index
        );
    }

    check_size_hint(&iter, 0)?;
    for _ in 0..3 {
        prop_assert!(iter.next().is_none(), "yielded more than {} items", expected.len());
    }

    Ok(())
}

fn check_size_hint<I: Iterator>(iter: &I, remaining: usize) -> TestCaseResult {
    let (lower, upper) = iter.size_hint();

    prop_assert!(
        lower <= remaining && upper.is_none_or(|upper| remaining <= upper),
        "size_hint {:?} doesn't bracket {} remaining items",
        (lower, upper),
        remaining,
    );

    Ok(())
}
