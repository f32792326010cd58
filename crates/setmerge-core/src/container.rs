//! The container abstraction merged by this crate.

use std::collections::{btree_set, hash_set, BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// An insertable collection of unique elements.
///
/// Inserting an element that is already present leaves the container
/// unchanged. The element bounds required by each adapter (`Eq + Hash` for
/// hash sets, `Ord` for tree sets) are enforced at compile time.
pub trait UniqueContainer {
    /// The element type held by the container.
    type Item;

    /// Borrowing iterator over the elements, in the container's own order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Create a new empty container.
    fn empty() -> Self;

    /// Insert an element. Returns `true` if it was not already present.
    fn insert(&mut self, item: Self::Item) -> bool;

    /// Returns `true` if the element is present.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Number of distinct elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the elements.
    fn items(&self) -> Self::Iter<'_>;
}

impl<T, S> UniqueContainer for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn empty() -> Self {
        HashSet::with_hasher(S::default())
    }

    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T: Ord> UniqueContainer for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn empty() -> Self {
        BTreeSet::new()
    }

    fn insert(&mut self, item: T) -> bool {
        BTreeSet::insert(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}
