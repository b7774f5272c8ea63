//! [OrderedMap] is a hash map that maintains the insertion order of its entries.
use crate::{
    indexed_seq::{IndexedSeq, MapKey},
    util::{forward_double_ended, forward_iterator},
};
use ordered_util::{
    fmt::{fmt_closure, fmt_join},
    DefaultBuildHasher,
};
use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::{BuildHasher, Hash},
    ops::{ControlFlow, Index},
};

/// A hash map that maintains the insertion order of its entries.
///
/// Updating the value of an existing key keeps the entry at its position. Removing entries keeps
/// the order of the remaining entries.
///
/// In `OrderedMap<K, V, S>`, `K: Hash + Eq` is the key type, `V` the value type and
/// `S: BuildHasher` is used for hashing keys.
#[derive(Clone)]
pub struct OrderedMap<K, V, S = DefaultBuildHasher> {
    seq: IndexedSeq<(K, V), MapKey, S>,
}

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    fn default() -> Self {
        OrderedMap {
            seq: IndexedSeq::default(),
        }
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Returns an empty map.
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns an empty map with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Returns an empty map with the provided BuildHasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        OrderedMap {
            seq: IndexedSeq::with_hasher(build_hasher),
        }
    }
    /// Returns an empty map with the specified capacity and provided BuildHasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        OrderedMap {
            seq: IndexedSeq::with_capacity_and_hasher(capacity, build_hasher),
        }
    }
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
    /// Removes all entries from the map, but keeps the allocated memory.
    pub fn clear(&mut self) {
        self.seq.clear();
    }
    /// Removes all entries except for the first `len` entries, but keeps the allocated memory.
    pub fn truncate(&mut self, len: usize) {
        self.seq.truncate(len);
    }
    /// Returns the first key-value pair, if it exists.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.seq.first().map(|(k, v)| (k, v))
    }
    /// Returns the last key-value pair, if it exists.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.seq.last().map(|(k, v)| (k, v))
    }
    /// Returns a reference to the key and value with the specified index, if it exists.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.seq.get_index(index).map(|(k, v)| (k, v))
    }
    /// Returns a shared reference to the key and a mutable reference to the value with the
    /// specified index, if it exists.
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        self.seq.get_index_mut(index).map(|(k, v)| (&*k, v))
    }
    /// Returns a view of all key-value pairs in order, without copying them.
    ///
    /// The view borrows the map, so the map cannot be modified while the view is in use. Use
    /// [`to_vec`](Self::to_vec) for a copy that can be kept across modifications.
    pub fn as_slice(&self) -> &[(K, V)] {
        self.seq.as_slice()
    }
    /// Returns a copy of all key-value pairs in order.
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.seq.to_vec()
    }
    /// Returns a copy of all keys in order.
    pub fn keys_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }
    /// Returns a copy of all values in order.
    pub fn values_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }
    /// Calls `visit` with each key and value, in order.
    ///
    /// Iteration stops as soon as `visit` returns [`ControlFlow::Break`], and that value is
    /// returned.
    pub fn for_each<B>(
        &self,
        mut visit: impl FnMut(&K, &V) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        self.seq.for_each(|_, (k, v)| visit(k, v))
    }
    /// Returns an iterator over all key-values pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.seq.as_slice().iter(),
        }
    }
    /// Returns an iterator over all key-value pairs, allowing mutation of values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.seq.entries_mut().iter_mut(),
        }
    }
    /// Returns an iterator over all keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.seq.as_slice().iter(),
        }
    }
    /// Returns an iterator over all values.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.seq.as_slice().iter(),
        }
    }
    /// Returns an iterator over all values, allowing mutation.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.seq.entries_mut().iter_mut(),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> OrderedMap<K, V, S> {
    /// Reserve memory for an extra `additional` entries.
    pub fn reserve(&mut self, additional: usize) {
        self.seq.reserve(additional);
    }
    /// Releases as much spare memory as possible.
    pub fn shrink_to_fit(&mut self) {
        self.seq.shrink_to_fit();
    }
    /// Inserts `value` at `key`, replacing any previous value.
    /// Returns the index of the entry and any previous value.
    ///
    /// If there was no previous value, the key-value pair is inserted at the end. Otherwise the
    /// entry keeps its index and its original key.
    pub fn insert_full(&mut self, key: K, value: V) -> (usize, Option<V>) {
        match self.seq.push_unique((key, value)) {
            Ok(index) => (index, None),
            Err((index, (_, value))) => {
                let (_, slot) = self
                    .seq
                    .get_index_mut(index)
                    .unwrap_or_else(|| unreachable!("indexed position {index} out of bounds"));
                (index, Some(std::mem::replace(slot, value)))
            }
        }
    }
    /// Inserts `value` at `key`, replacing and returning any previous value.
    ///
    /// If there was no previous value, the key-value pair is inserted at the end.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_full(key, value).1
    }
    /// Sets the value of `key`, see [`insert`](Self::insert).
    pub fn set(&mut self, key: K, value: V) {
        self.insert_full(key, value);
    }
    /// Returns the index of the entry with the specified key, if it exists.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.seq.index_of(key)
    }
    /// Returns `true` if the map contains an entry with the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.seq.contains(key)
    }
    /// Returns the index and references to the key and value of the entry with the specified
    /// key, if it exists.
    pub fn get_full<Q>(&self, key: &Q) -> Option<(usize, &K, &V)>
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.seq.get_full(key).map(|(index, (k, v))| (index, k, v))
    }
    /// Returns a reference to the value corresponding to the specified key, if it exists.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.seq.get(key).map(|(_, v)| v)
    }
    /// Returns references to the stored key and the value for the specified key, if it exists.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.seq.get(key).map(|(k, v)| (k, v))
    }
    /// Returns a mutable reference to the value corresponding to the specified key, if it exists.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        let index = self.seq.index_of(key)?;
        self.seq.get_index_mut(index).map(|(_, v)| v)
    }
    /// Removes the entry with the specified key and returns its key and value, if it exists.
    ///
    /// The following entries move up by one index, so this takes linear time. Use
    /// [`remove_all`](Self::remove_all) to remove several keys in a single pass.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.seq.remove(key).map(|(_, entry)| entry)
    }
    /// Removes the entry with the specified key and returns its value, if it exists.
    ///
    /// See [`remove_entry`](Self::remove_entry).
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Hash + Eq + ?Sized,
        K: Borrow<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }
    /// Removes the entries for all given keys and returns the number of removed entries.
    ///
    /// Keys that are not present are ignored. The remaining entries keep their order and the
    /// removed values are dropped before this returns.
    pub fn remove_all<'q, Q>(&mut self, keys: impl IntoIterator<Item = &'q Q>) -> usize
    where
        Q: Hash + Eq + ?Sized + 'q,
        K: Borrow<Q>,
    {
        self.seq.remove_all(keys)
    }
    /// Removes the last entry and returns its key and value, if it exists.
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.seq.pop()
    }
    /// Removes all entries for which `f` evaluates to `false` and returns the number of removed
    /// entries.
    ///
    /// `f` is guaranteed to be called exactly once for each entry and in order, and may mutate the
    /// values.
    ///
    /// The order of entries is preserved.
    pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) -> usize {
        self.seq.retain_mut(|(k, v)| f(k, v))
    }
    /// Returns `true` if every key of `self` is present in `other` with an equal value.
    fn is_submap<S2: BuildHasher>(&self, other: &OrderedMap<K, V, S2>) -> bool
    where
        V: PartialEq,
    {
        self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
    #[cfg(test)]
    pub(crate) fn check(&self) {
        self.seq.check();
    }
}

impl<K: Debug, V: Debug, S> Debug for OrderedMap<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Formats as `OrderedMap[{k1: v1} {k2: v2}]`, in order.
impl<K: Display, V: Display, S> Display for OrderedMap<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = fmt_join(" ", || {
            self.iter()
                .map(|(k, v)| fmt_closure(move |f| write!(f, "{{{k}: {v}}}")))
        });
        write!(f, "OrderedMap[{entries}]")
    }
}

/// Maps are equal when they contain the same keys with equal values. The order of entries is
/// ignored.
impl<K, V, S1, S2> PartialEq<OrderedMap<K, V, S2>> for OrderedMap<K, V, S1>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &OrderedMap<K, V, S2>) -> bool {
        self.len() == other.len() && self.is_submap(other)
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for OrderedMap<K, V, S> {}

impl<K, V, Q, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not present in OrderedMap"),
        }
    }
}

/// An iterator over the entries of an [`OrderedMap`].
///
/// This struct is created by the [`iter`](`OrderedMap::iter`) method on [`OrderedMap`].
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}
impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    forward_iterator!(|(k, v)| (k, v));
}
forward_double_ended!(Iter<'a, K, V>, |(k, v)| (k, v));

/// An iterator over the entries of an [`OrderedMap`] with mutable references to the values.
///
/// This struct is created by the [`iter_mut`](`OrderedMap::iter_mut`) method on [`OrderedMap`].
pub struct IterMut<'a, K, V> {
    inner: std::slice::IterMut<'a, (K, V)>,
}
impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    forward_iterator!(|(k, v)| (&*k, v));
}
forward_double_ended!(IterMut<'a, K, V>, |(k, v)| (&*k, v));

/// An iterator over the keys of an [`OrderedMap`].
///
/// This struct is created by the [`keys`](`OrderedMap::keys`) method on [`OrderedMap`].
pub struct Keys<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}
impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    forward_iterator!(|(k, _)| k);
}
forward_double_ended!(Keys<'a, K, V>, |(k, _)| k);

/// An iterator over the values of an [`OrderedMap`].
///
/// This struct is created by the [`values`](`OrderedMap::values`) method on [`OrderedMap`].
pub struct Values<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}
impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    forward_iterator!(|(_, v)| v);
}
forward_double_ended!(Values<'a, K, V>, |(_, v)| v);

/// A mutable iterator over the values of an [`OrderedMap`].
///
/// This struct is created by the [`values_mut`](`OrderedMap::values_mut`) method on
/// [`OrderedMap`].
pub struct ValuesMut<'a, K, V> {
    inner: std::slice::IterMut<'a, (K, V)>,
}
impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;
    forward_iterator!(|(_, v)| v);
}
forward_double_ended!(ValuesMut<'a, K, V>, |(_, v)| v);

/// An iterator moving entries out of an [`OrderedMap`].
///
/// This struct is created by the `into_iter` method on [`OrderedMap`].
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}
impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    forward_iterator!();
}
forward_double_ended!(IntoIter<K, V>);

impl<K, V, S> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.seq.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for OrderedMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for OrderedMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
