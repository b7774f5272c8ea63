//! [HashSet] is a set without any order guarantees.
use ordered_util::{fmt::fmt_join, DefaultBuildHasher};
use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::{BuildHasher, Hash},
};

/// A hash set that makes no promise about the order of its elements.
///
/// This is a thin wrapper around [`hashbrown::HashSet`] with the bulk operations offered by
/// [`OrderedSet`](crate::OrderedSet). Iteration, [`to_vec`](Self::to_vec) and
/// [`join`](Self::join) visit the elements in an unspecified order.
#[derive(Clone)]
pub struct HashSet<T, S = DefaultBuildHasher> {
    inner: hashbrown::HashSet<T, S>,
}

impl<T, S: Default> Default for HashSet<T, S> {
    fn default() -> Self {
        HashSet {
            inner: hashbrown::HashSet::with_hasher(S::default()),
        }
    }
}

impl<T> HashSet<T> {
    /// Returns an empty set.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
    }
}

impl<T, S> HashSet<T, S> {
    /// Returns an empty set with the provided BuildHasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        HashSet {
            inner: hashbrown::HashSet::with_hasher(build_hasher),
        }
    }
    /// Returns an empty set with the specified capacity and provided BuildHasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        HashSet {
            inner: hashbrown::HashSet::with_capacity_and_hasher(capacity, build_hasher),
        }
    }
    /// Returns the number of items in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    /// Removes all items, but keeps the allocated memory.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
    /// Returns an iterator over the set, in an unspecified order.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, T> {
        self.inner.iter()
    }
    /// Returns a copy of all items, in an unspecified order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }
    /// Renders all items with their [`Display`] implementation, in an unspecified order,
    /// separated by `sep`.
    pub fn join(&self, sep: &str) -> String
    where
        T: Display,
    {
        fmt_join(sep, || self.inner.iter()).to_string()
    }
}

impl<T: Hash + Eq, S: BuildHasher> HashSet<T, S> {
    /// Inserts an item. Returns `true` if it was not present yet.
    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }
    /// Inserts all given items.
    pub fn add(&mut self, items: impl IntoIterator<Item = T>) {
        self.inner.extend(items);
    }
    /// Returns `true` if the set contains a value equivalent to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }
    /// Removes all given values from the set and returns the number of removed items.
    pub fn remove<'q, Q>(&mut self, values: impl IntoIterator<Item = &'q Q>) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
    {
        values
            .into_iter()
            .filter(|value| self.inner.remove(*value))
            .count()
    }
    /// Returns `true` if every item of `self` is contained in `other`.
    pub fn is_subset<S2: BuildHasher>(&self, other: &HashSet<T, S2>) -> bool {
        self.len() <= other.len() && self.iter().all(|t| other.contains(t))
    }
}

/// Sets are equal when they have the same number of elements and every element of one is
/// contained in the other.
impl<T: Hash + Eq, S1: BuildHasher, S2: BuildHasher> PartialEq<HashSet<T, S2>> for HashSet<T, S1> {
    fn eq(&self, other: &HashSet<T, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for HashSet<T, S> {}

impl<T: Debug, S> Debug for HashSet<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

/// Formats as `Set{a, b, c}`, in an unspecified order.
impl<T: Display, S> Display for HashSet<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Set{{{}}}", fmt_join(", ", || self.inner.iter()))
    }
}

impl<T, S> IntoIterator for HashSet<T, S> {
    type Item = T;
    type IntoIter = hashbrown::hash_set::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoIter = hashbrown::hash_set::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for HashSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::default();
        set.add(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}
