//! [IndexedSeq] is the engine shared by [`OrderedMap`](crate::OrderedMap) and
//! [`OrderedSet`](crate::OrderedSet).
//!
//! Entries live in a dense `Vec` in insertion order. A hashbrown `HashTable` maps every key to the
//! position of its entry in that `Vec`. Hashes are not stored, they are recomputed from the
//! entry's key whenever the table needs them.
//!
//! Every operation leaves the two structures consistent before it returns:
//!
//! 1. each position stored in the table refers to the entry whose key was used to find it,
//! 2. the table holds exactly one position per entry,
//! 3. the positions in use are exactly `0..len`.
//!
//! Removal keeps the relative order of the remaining entries. Removing a batch of keys costs a
//! single compacting pass over the entries, independent of the number of keys removed, and drops
//! the removed entries before returning.
use crate::{
    position_index::{PositionIndex, Slot},
    util::{forward_double_ended, forward_iterator},
};
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    ops::ControlFlow,
};

/// Extracts the key from an entry of an [`IndexedSeq`].
pub trait KeyOf<E> {
    /// The type of the extracted key.
    type Key;
    /// Returns the key of `entry`.
    fn key_of(entry: &E) -> &Self::Key;
}

/// Uses the first component of a `(key, value)` pair as key.
#[derive(Clone, Copy, Debug)]
pub enum MapKey {}

impl<K, V> KeyOf<(K, V)> for MapKey {
    type Key = K;
    #[inline(always)]
    fn key_of(entry: &(K, V)) -> &K {
        &entry.0
    }
}

/// Uses the entry itself as key.
#[derive(Clone, Copy, Debug)]
pub enum SetKey {}

impl<T> KeyOf<T> for SetKey {
    type Key = T;
    #[inline(always)]
    fn key_of(entry: &T) -> &T {
        entry
    }
}

/// A sequence of entries with unique keys, indexed by key.
///
/// In `IndexedSeq<E, X, S>`,
/// `E` is the type of the stored entries,
/// `X: KeyOf<E>` selects the part of an entry that acts as its key
/// and `S: BuildHasher` is used for hashing keys.
///
/// The sequence is not synchronized. Sharing it between threads requires external locking, and
/// it cannot be modified while any borrow returned by it (iterators, slices, entry references)
/// is alive.
pub struct IndexedSeq<E, X, S> {
    positions: PositionIndex,
    entries: Vec<E>,
    build_hasher: S,
    key: PhantomData<fn() -> X>,
}

impl<E: Clone, X, S: Clone> Clone for IndexedSeq<E, X, S> {
    fn clone(&self) -> Self {
        IndexedSeq {
            positions: self.positions.clone(),
            entries: self.entries.clone(),
            build_hasher: self.build_hasher.clone(),
            key: PhantomData,
        }
    }
}

impl<E: std::fmt::Debug, X, S> std::fmt::Debug for IndexedSeq<E, X, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

impl<E, X, S: Default> Default for IndexedSeq<E, X, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<E, X, S> IndexedSeq<E, X, S> {
    /// Returns an empty sequence with the provided BuildHasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        IndexedSeq {
            positions: PositionIndex::default(),
            entries: Vec::new(),
            build_hasher,
            key: PhantomData,
        }
    }
    /// Returns an empty sequence with the specified capacity and provided BuildHasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        IndexedSeq {
            positions: PositionIndex::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            build_hasher,
            key: PhantomData,
        }
    }
    /// Returns a reference to the BuildHasher.
    pub fn hasher(&self) -> &S {
        &self.build_hasher
    }
    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Returns the number of entries the sequence can hold without reallocating its entries.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
    /// Removes all entries, but keeps the allocated memory.
    ///
    /// The removed entries are dropped before this returns.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.entries.clear();
    }
    /// Removes all entries except for the first `len` entries, but keeps the allocated memory.
    pub fn truncate(&mut self, len: usize) {
        if len < self.entries.len() {
            self.positions.retain_below(len);
            self.entries.truncate(len);
        }
    }
    /// Returns the first entry, if it exists.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.entries.first()
    }
    /// Returns the last entry, if it exists.
    #[inline]
    pub fn last(&self) -> Option<&E> {
        self.entries.last()
    }
    /// Returns the entry at the given position, if it exists.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }
    /// Returns the entry at the given position for mutation, if it exists.
    ///
    /// Callers must not change the key of the entry.
    #[inline]
    pub(crate) fn get_index_mut(&mut self, index: usize) -> Option<&mut E> {
        self.entries.get_mut(index)
    }
    /// Returns all entries for mutation. Callers must not change any keys.
    #[inline]
    pub(crate) fn entries_mut(&mut self) -> &mut [E] {
        &mut self.entries
    }
    /// Returns a view of all entries in order, without copying them.
    ///
    /// The view borrows the sequence, so no entry can be inserted, updated or removed while it is
    /// in use. Use [`to_vec`](Self::to_vec) to obtain a snapshot that can be kept across
    /// modifications.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.entries
    }
    /// Returns a copy of all entries in order.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.entries.clone()
    }
    /// Converts the sequence into a `Vec` of its entries. The index is dropped.
    pub fn into_vec(self) -> Vec<E> {
        self.entries
    }
    /// Returns an iterator over all entries in order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.entries.iter(),
        }
    }
    /// Calls `visit` with the position and a reference to each entry, in order.
    ///
    /// Iteration stops as soon as `visit` returns [`ControlFlow::Break`], and that value is
    /// returned.
    pub fn for_each<B>(
        &self,
        mut visit: impl FnMut(usize, &E) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        self.entries
            .iter()
            .enumerate()
            .try_for_each(|(index, entry)| visit(index, entry))
    }
}

impl<E, X: KeyOf<E>, S: BuildHasher> IndexedSeq<E, X, S>
where
    X::Key: Hash + Eq,
{
    #[inline(always)]
    fn hash_key<Q: Hash + ?Sized>(&self, key: &Q) -> u64 {
        self.build_hasher.hash_one(key)
    }
    /// Reserve memory for an extra `additional` entries.
    pub fn reserve(&mut self, additional: usize) {
        let Self {
            positions,
            entries,
            build_hasher,
            ..
        } = self;
        entries.reserve(additional);
        positions.reserve(additional, |pos| {
            build_hasher.hash_one(X::key_of(&entries[pos]))
        });
    }
    /// Releases as much spare memory as possible.
    pub fn shrink_to_fit(&mut self) {
        let Self {
            positions,
            entries,
            build_hasher,
            ..
        } = self;
        entries.shrink_to_fit();
        positions.shrink_to_fit(|pos| build_hasher.hash_one(X::key_of(&entries[pos])));
    }
    /// Appends `entry` unless an entry with an equal key is present.
    ///
    /// Returns the position of the new entry, or the position of the existing entry together with
    /// the rejected `entry`. The existing entry is left untouched either way.
    pub fn push_unique(&mut self, entry: E) -> Result<usize, (usize, E)> {
        let hash = self.hash_key(X::key_of(&entry));
        let Self {
            positions,
            entries,
            build_hasher,
            ..
        } = self;
        match positions.slot(
            hash,
            |pos| X::key_of(&entries[pos]) == X::key_of(&entry),
            |pos| build_hasher.hash_one(X::key_of(&entries[pos])),
        ) {
            Slot::Occupied(pos) => Err((pos, entry)),
            Slot::Vacant(slot) => {
                let pos = entries.len();
                entries.push(entry);
                slot.insert(pos);
                Ok(pos)
            }
        }
    }
    /// Returns the position of the entry with the given key, if it exists.
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        X::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_key(key);
        self.positions
            .find(hash, |pos| Borrow::<Q>::borrow(X::key_of(&self.entries[pos])) == key)
    }
    /// Returns the position of and a reference to the entry with the given key, if it exists.
    pub fn get_full<Q>(&self, key: &Q) -> Option<(usize, &E)>
    where
        X::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).map(|pos| (pos, &self.entries[pos]))
    }
    /// Returns a reference to the entry with the given key, if it exists.
    pub fn get<Q>(&self, key: &Q) -> Option<&E>
    where
        X::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_full(key).map(|(_, entry)| entry)
    }
    /// Returns `true` if an entry with the given key exists.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        X::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(key).is_some()
    }
    /// Removes the last entry and returns it, if it exists.
    pub fn pop(&mut self) -> Option<E> {
        let entry = self.entries.pop()?;
        let hash = self.hash_key(X::key_of(&entry));
        let last = self.entries.len();
        let removed = self.positions.take(hash, |pos| pos == last);
        debug_assert_eq!(removed, Some(last));
        Some(entry)
    }
    /// Removes the entry with the given key and returns its former position and the entry, if it
    /// exists.
    ///
    /// All following entries move up by one position, so this takes time linear in the number
    /// of those entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(usize, E)>
    where
        X::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_key(key);
        let entries = &self.entries;
        let index = self
            .positions
            .take(hash, |pos| Borrow::<Q>::borrow(X::key_of(&entries[pos])) == key)?;
        let entry = self.entries.remove(index);
        for (to, moved) in self.entries.iter().enumerate().skip(index) {
            let hash = self.build_hasher.hash_one(X::key_of(moved));
            let relocated = self.positions.relocate(hash, to + 1, to);
            debug_assert!(relocated);
        }
        Some((index, entry))
    }
    /// Removes every entry whose key is among `keys` and returns how many entries were removed.
    ///
    /// Keys that are not present are ignored, as are repetitions of a key. The remaining entries
    /// keep their order. All removed entries are dropped before this returns.
    ///
    /// This performs a single pass over the entries no matter how many keys are given, and no
    /// pass at all when none of them are present.
    pub fn remove_all<'q, Q>(&mut self, keys: impl IntoIterator<Item = &'q Q>) -> usize
    where
        X::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
    {
        let mut doomed: Vec<bool> = Vec::new();
        let mut requested = 0;
        for key in keys {
            if let Some(pos) = self.index_of(key) {
                if doomed.is_empty() {
                    doomed.resize(self.entries.len(), false);
                }
                if !std::mem::replace(&mut doomed[pos], true) {
                    requested += 1;
                }
            }
        }
        if requested == 0 {
            return 0;
        }
        let removed = self.compact(|pos, _| !doomed[pos]);
        debug_assert_eq!(removed, requested);
        removed
    }
    /// Removes all entries for which `f` evaluates to `false`.
    ///
    /// `f` is guaranteed to be called exactly once for each entry and in order, and may mutate
    /// the entries as long as their keys are unchanged.
    ///
    /// The order of entries is preserved.
    pub(crate) fn retain_mut(&mut self, mut f: impl FnMut(&mut E) -> bool) -> usize {
        self.compact(|_, entry| f(entry))
    }
    /// Removes all entries for which `f` evaluates to `false`, see
    /// [`retain_mut`](Self::retain_mut).
    pub fn retain(&mut self, mut f: impl FnMut(&E) -> bool) -> usize {
        self.compact(|_, entry| f(entry))
    }
    /// Drops every entry for which `keep` returns `false`, moving the remaining entries down to
    /// close the gaps and updating their positions. Returns the number of dropped entries.
    fn compact(&mut self, mut keep: impl FnMut(usize, &mut E) -> bool) -> usize {
        let Self {
            positions,
            entries,
            build_hasher,
            ..
        } = self;
        let len = entries.len();
        let mut in_pos = 0;
        let mut out_pos = 0;
        let mut shifted = 0;
        entries.retain_mut(|entry| {
            let kept = keep(in_pos, entry);
            if kept {
                if in_pos != out_pos {
                    let hash = build_hasher.hash_one(X::key_of(entry));
                    let relocated = positions.relocate(hash, in_pos, out_pos);
                    debug_assert!(relocated);
                    shifted += 1;
                }
                out_pos += 1;
            } else {
                let hash = build_hasher.hash_one(X::key_of(entry));
                let removed = positions.take(hash, |pos| pos == in_pos);
                debug_assert_eq!(removed, Some(in_pos));
            }
            in_pos += 1;
            kept
        });
        let removed = len - out_pos;
        if removed > 0 {
            log::trace!("compacted {removed} of {len} entries, {shifted} shifted");
        }
        removed
    }
    /// Asserts that the index and the entries are consistent.
    #[cfg(test)]
    pub(crate) fn check(&self) {
        assert_eq!(self.positions.len(), self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let hash = self.hash_key(X::key_of(entry));
            assert_eq!(self.positions.find(hash, |pos| pos == index), Some(index));
            assert_eq!(self.index_of(X::key_of(entry)), Some(index));
        }
    }
}

impl<E, X, S> IntoIterator for IndexedSeq<E, X, S> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, E, X, S> IntoIterator for &'a IndexedSeq<E, X, S> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of an [`IndexedSeq`], in order.
///
/// This struct is created by the [`iter`](IndexedSeq::iter) method on [`IndexedSeq`].
pub struct Iter<'a, E> {
    inner: std::slice::Iter<'a, E>,
}
impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;
    forward_iterator!();
}
forward_double_ended!(Iter<'a, E>);

impl<E, X: KeyOf<E>, S: BuildHasher> Extend<E> for IndexedSeq<E, X, S>
where
    X::Key: Hash + Eq,
{
    /// Appends every entry whose key is not yet present, in order.
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for entry in iter {
            let _ = self.push_unique(entry);
        }
    }
}
