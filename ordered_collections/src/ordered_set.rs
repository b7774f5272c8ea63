//! [OrderedSet] is a hash set that maintains the insertion order of its elements.
use crate::{
    indexed_seq::{IndexedSeq, SetKey},
    util::{forward_double_ended, forward_iterator},
};
use ordered_util::{fmt::fmt_join, DefaultBuildHasher};
use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::{BuildHasher, Hash},
    ops::ControlFlow,
};

/// A hash set that maintains the insertion order of its elements.
///
/// In `OrderedSet<T, S>`,
/// `T: Hash + Eq` is the type of elements of the set
/// and `S: BuildHasher` is used for hashing elements.
#[derive(Clone)]
pub struct OrderedSet<T, S = DefaultBuildHasher> {
    seq: IndexedSeq<T, SetKey, S>,
}

impl<T, S: Default> Default for OrderedSet<T, S> {
    fn default() -> Self {
        OrderedSet {
            seq: IndexedSeq::default(),
        }
    }
}

impl<T> OrderedSet<T> {
    /// Returns an empty set.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Returns an empty set with the provided BuildHasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        OrderedSet {
            seq: IndexedSeq::with_hasher(build_hasher),
        }
    }
    /// Returns an empty set with the specified capacity and provided BuildHasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        OrderedSet {
            seq: IndexedSeq::with_capacity_and_hasher(capacity, build_hasher),
        }
    }
    /// Removes all items, but keeps the allocated memory.
    pub fn clear(&mut self) {
        self.seq.clear();
    }
    /// Removes all items except for the first `len` items, but keeps the allocated memory.
    pub fn truncate(&mut self, len: usize) {
        self.seq.truncate(len);
    }
    /// Returns the number of items in the set.
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
    /// Returns the first item in the set, if it exists.
    pub fn first(&self) -> Option<&T> {
        self.seq.first()
    }
    /// Returns the last item in the set, if it exists.
    pub fn last(&self) -> Option<&T> {
        self.seq.last()
    }
    /// Returns the item with the given index, if it exists.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.seq.get_index(index)
    }
    /// Returns a view of all items in order, without copying them.
    ///
    /// The view borrows the set, so the set cannot be modified while the view is in use. Use
    /// [`to_vec`](Self::to_vec) for a copy that can be kept across modifications.
    pub fn as_slice(&self) -> &[T] {
        self.seq.as_slice()
    }
    /// Returns a copy of all items in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.seq.to_vec()
    }
    /// Converts the set into a `Vec`. The hashtable containing the indices is dropped.
    pub fn into_vec(self) -> Vec<T> {
        self.seq.into_vec()
    }
    /// Returns an iterator over the set.
    ///
    /// The iterator yields all items in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.seq.as_slice().iter(),
        }
    }
    /// Calls `visit` with the index of and a reference to each item, in order.
    ///
    /// Iteration stops as soon as `visit` returns [`ControlFlow::Break`], and that value is
    /// returned.
    pub fn for_each<B>(&self, visit: impl FnMut(usize, &T) -> ControlFlow<B>) -> ControlFlow<B> {
        self.seq.for_each(visit)
    }
    /// Renders all items with their [`Display`] implementation, in order, separated by `sep`.
    pub fn join(&self, sep: &str) -> String
    where
        T: Display,
    {
        fmt_join(sep, || self.iter()).to_string()
    }
}

impl<T: Hash + Eq, S: BuildHasher> OrderedSet<T, S> {
    /// Reserve memory for an extra `additional` items.
    pub fn reserve(&mut self, additional: usize) {
        self.seq.reserve(additional);
    }
    /// Releases as much spare memory as possible.
    pub fn shrink_to_fit(&mut self) {
        self.seq.shrink_to_fit();
    }
    /// Inserts an item to the end of the set, unless the set contains an equivalent item already.
    /// Returns `true` if the item was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_full(value).1
    }
    /// Inserts an item to the end of the set, unless the set contains an equivalent item already.
    /// Returns the index of the existing or new item, and `true` if the given item was inserted.
    pub fn insert_full(&mut self, value: T) -> (usize, bool) {
        match self.seq.push_unique(value) {
            Ok(index) => (index, true),
            Err((index, _)) => (index, false),
        }
    }
    /// Inserts all given items in order, skipping items already present.
    pub fn add(&mut self, items: impl IntoIterator<Item = T>) {
        self.seq.extend(items);
    }
    /// Returns a reference to the item in the set equivalent to `value`, if it exists.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seq.get(value)
    }
    /// Returns the index of and a reference to the item in the set equivalent to `value`, if it
    /// exists.
    pub fn get_full<Q>(&self, value: &Q) -> Option<(usize, &T)>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seq.get_full(value)
    }
    /// Returns `true` if the set contains a value equivalent to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seq.contains(value)
    }
    /// Returns the index of the item equivalent to `value`, if it exists.
    pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seq.index_of(value)
    }
    /// Removes all given values from the set and returns the number of removed items.
    ///
    /// Values that are not present are ignored. The remaining items keep their order.
    pub fn remove<'q, Q>(&mut self, values: impl IntoIterator<Item = &'q Q>) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
    {
        self.seq.remove_all(values)
    }
    /// Removes the item equivalent to `value` and returns it, if it exists.
    ///
    /// The following items move up by one index.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seq.remove(value).map(|(_, item)| item)
    }
    /// Removes the last item from the set and returns it, if it exists.
    pub fn pop(&mut self) -> Option<T> {
        self.seq.pop()
    }
    /// Removes all items from the set for which `f` evaluates to `false` and returns the number
    /// of removed items.
    ///
    /// `f` is guaranteed to be called exactly once for each item and in order.
    ///
    /// The order of elements is preserved.
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) -> usize {
        self.seq.retain(f)
    }
    /// Returns `true` if the set is a subset of `other`.
    ///
    /// The order of elements is ignored.
    pub fn is_subset<S2: BuildHasher>(&self, other: &OrderedSet<T, S2>) -> bool {
        self.len() <= other.len() && self.iter().all(|t| other.contains(t))
    }
    #[cfg(test)]
    pub(crate) fn check(&self) {
        self.seq.check();
    }
}

/// Sets are equal when they contain the same elements. The order of elements is ignored.
impl<T: Hash + Eq, S1: BuildHasher, S2: BuildHasher> PartialEq<OrderedSet<T, S2>>
    for OrderedSet<T, S1>
{
    fn eq(&self, other: &OrderedSet<T, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for OrderedSet<T, S> {}

impl<T: Debug, S> Debug for OrderedSet<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self).finish()
    }
}

/// Formats as `OrderedSet{a, b, c}`, in order.
impl<T: Display, S> Display for OrderedSet<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderedSet{{{}}}", fmt_join(", ", || self.iter()))
    }
}

/// An iterator that moves out of a set.
///
/// This struct is created by the `into_iter` method on [`OrderedSet`].
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;
    forward_iterator!();
}
forward_double_ended!(IntoIter<T>);

impl<T, S> IntoIterator for OrderedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.seq.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator that returns references into a set.
///
/// This struct is created by the [`iter`](OrderedSet::iter) method on [`OrderedSet`].
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    forward_iterator!();
}
forward_double_ended!(Iter<'a, T>);

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for OrderedSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for OrderedSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::default();
        set.add(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}
