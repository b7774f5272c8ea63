//! [OrderedMap] and [OrderedSet] are a hash map and hash set that preserve the order of their
//! entries, i.e. the order in which entries are inserted is remembered and iterators yield
//! elements in that order. [HashSet] is a plain set without order guarantees that offers the same
//! bulk operations.
//!
//! Updating the value of a key that is already present keeps the entry at its position. Removing
//! entries keeps the order of the remaining entries: the gap left behind is closed by moving the
//! following entries up, so positions reported by `index_of` always match the iteration order.
//! Removing many keys at once through `remove_all` (or [`OrderedSet::remove`]) costs a single
//! pass over the entries.
//!
//! Both ordered collections are implemented by [`IndexedSeq`](indexed_seq::IndexedSeq), a `Vec`
//! storing the actual entries, supplemented by a hashbrown `HashTable` that maps keys to their
//! position in the `Vec`. Hashes are not stored with the entries, but recalculated when needed.
//!
//! # Views and copies
//!
//! `as_slice` returns the entries without copying them. The returned slice borrows the
//! collection, so it cannot be held across any modification; `to_vec` returns an owned copy for
//! that purpose.
//!
//! # Threads
//!
//! None of the collections synchronize internally. Modification requires `&mut` access, so a
//! collection shared between threads has to be wrapped in a lock by its owner.

mod position_index;
mod util;

pub use hash_set::HashSet;
pub use ordered_map::OrderedMap;
pub use ordered_set::OrderedSet;

pub mod hash_set;
pub mod indexed_seq;
pub mod ordered_map;
pub mod ordered_set;

#[cfg(test)]
mod test_seq;
#[cfg(test)]
mod test_set;
