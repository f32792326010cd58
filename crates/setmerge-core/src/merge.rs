//! Union operations over [`UniqueContainer`]s.

use tracing::debug;

use crate::container::UniqueContainer;
use crate::report::MergeReport;

/// Merge two containers into a new container holding their union.
///
/// Every element of `left` is inserted, then every element of `right`.
/// Elements present in both inputs appear once. Neither input is modified.
/// Runs in `O(|left| + |right|)` insertions.
pub fn merge_set<C>(left: &C, right: &C) -> C
where
    C: UniqueContainer,
    C::Item: Clone,
{
    let mut merged = C::empty();
    for item in left.items().chain(right.items()) {
        merged.insert(item.clone());
    }
    merged
}

/// Merge any number of containers into a new container.
///
/// An empty input sequence yields an empty container.
pub fn merge_all<'a, C, I>(sets: I) -> C
where
    C: UniqueContainer + 'a,
    C::Item: Clone,
    I: IntoIterator<Item = &'a C>,
{
    let mut merged = C::empty();
    for set in sets {
        merge_into(&mut merged, set);
    }
    merged
}

/// Insert every element of `other` into `acc`.
///
/// Returns the number of elements that were not already in `acc`.
pub fn merge_into<C>(acc: &mut C, other: &C) -> usize
where
    C: UniqueContainer,
    C::Item: Clone,
{
    let mut added = 0;
    for item in other.items() {
        if acc.insert(item.clone()) {
            added += 1;
        }
    }
    added
}

/// Like [`merge_set`], also returning overlap statistics.
pub fn merge_with_report<C>(left: &C, right: &C) -> (C, MergeReport)
where
    C: UniqueContainer,
    C::Item: Clone,
{
    let merged = merge_set(left, right);
    let shared = left.items().filter(|item| right.contains(item)).count();
    let report = MergeReport {
        left_len: left.len(),
        right_len: right.len(),
        shared,
        merged_len: merged.len(),
    };
    debug!(
        left = report.left_len,
        right = report.right_len,
        shared = report.shared,
        merged = report.merged_len,
        "sets merged"
    );
    (merged, report)
}

/// Method-call form of [`merge_set`].
pub trait SetMergeExt: UniqueContainer + Sized {
    /// Return the union of `self` and `other` as a new container.
    fn merged_with(&self, other: &Self) -> Self;
}

impl<C> SetMergeExt for C
where
    C: UniqueContainer,
    C::Item: Clone,
{
    fn merged_with(&self, other: &Self) -> Self {
        merge_set(self, other)
    }
}
