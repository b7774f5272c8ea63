use hashbrown::hash_table::{self, HashTable};

/// Maps keys to their current position in an entry vector.
///
/// Only positions are stored. Every method that needs to compare or rehash keys takes closures
/// that resolve a position to the entry stored there, so the owner of the entries stays the
/// only place holding keys.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    table: HashTable<usize>,
}

/// Result of [`PositionIndex::slot`].
pub enum Slot<'a> {
    Occupied(usize),
    Vacant(hash_table::VacantEntry<'a, usize>),
}

impl PositionIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        PositionIndex {
            table: HashTable::with_capacity(capacity),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.table.clear()
    }

    #[inline(always)]
    pub fn find(&self, hash: u64, mut eq: impl FnMut(usize) -> bool) -> Option<usize> {
        self.table.find(hash, |&pos| eq(pos)).copied()
    }

    /// Looks up a key, returning either its position or a vacant slot to record a new one.
    #[inline(always)]
    pub fn slot(
        &mut self,
        hash: u64,
        mut eq: impl FnMut(usize) -> bool,
        rehash: impl Fn(usize) -> u64,
    ) -> Slot<'_> {
        match self
            .table
            .entry(hash, |&pos| eq(pos), |&pos| rehash(pos))
        {
            hash_table::Entry::Occupied(entry) => Slot::Occupied(*entry.get()),
            hash_table::Entry::Vacant(entry) => Slot::Vacant(entry),
        }
    }

    /// Removes a key from the index and returns the position it had.
    #[inline(always)]
    pub fn take(&mut self, hash: u64, mut eq: impl FnMut(usize) -> bool) -> Option<usize> {
        match self.table.find_entry(hash, |&pos| eq(pos)) {
            Ok(entry) => Some(entry.remove().0),
            Err(_) => None,
        }
    }

    /// Records that the entry hashing to `hash` moved from position `from` to position `to`.
    ///
    /// Returns `false` if no entry was recorded at `from`.
    #[inline(always)]
    pub fn relocate(&mut self, hash: u64, from: usize, to: usize) -> bool {
        match self.table.find_mut(hash, |&pos| pos == from) {
            Some(pos) => {
                *pos = to;
                true
            }
            None => false,
        }
    }

    /// Drops every position `>= len`.
    pub fn retain_below(&mut self, len: usize) {
        if len == 0 {
            self.table.clear();
        } else {
            self.table.retain(|&mut pos| pos < len);
        }
    }

    pub fn reserve(&mut self, additional: usize, rehash: impl Fn(usize) -> u64) {
        self.table.reserve(additional, |&pos| rehash(pos))
    }

    pub fn shrink_to_fit(&mut self, rehash: impl Fn(usize) -> u64) {
        self.table.shrink_to_fit(|&pos| rehash(pos))
    }
}
