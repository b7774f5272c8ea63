#![allow(missing_docs)]
use crate::indexed_seq::{IndexedSeq, MapKey, SetKey};
use ordered_util::DefaultBuildHasher;
use std::{cell::Cell, ops::ControlFlow, rc::Rc};

type Seq<K, V> = IndexedSeq<(K, V), MapKey, DefaultBuildHasher>;

/// Counts how many values sharing the counter have been dropped.
#[derive(Debug)]
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn keys<V>(seq: &Seq<&'static str, V>) -> Vec<&'static str> {
    seq.iter().map(|&(k, _)| k).collect()
}

#[test]
fn push_unique_hands_back_duplicates() {
    let mut seq: Seq<&str, i32> = Seq::default();
    assert_eq!(seq.push_unique(("a", 1)), Ok(0));
    assert_eq!(seq.push_unique(("b", 2)), Ok(1));
    assert_eq!(seq.push_unique(("a", 3)), Err((0, ("a", 3))));
    assert_eq!(seq.get("a"), Some(&("a", 1)));
    assert_eq!(seq.len(), 2);
    seq.check();
}

#[test]
fn remove_all_compacts_and_renumbers() {
    let mut seq: Seq<&str, i32> = Seq::default();
    seq.extend([("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5), ("f", 6)]);
    assert_eq!(seq.remove_all(["b", "x", "e", "b"].iter().copied()), 2);
    assert_eq!(keys(&seq), ["a", "c", "d", "f"]);
    for (index, key) in ["a", "c", "d", "f"].into_iter().enumerate() {
        assert_eq!(seq.index_of(key), Some(index));
    }
    assert!(!seq.contains("b"));
    assert!(!seq.contains("e"));
    seq.check();
}

#[test]
fn remove_all_without_hits_is_a_noop() {
    let mut seq: Seq<&str, i32> = Seq::default();
    seq.extend([("a", 1), ("b", 2)]);
    assert_eq!(seq.remove_all(["x", "y"].iter().copied()), 0);
    assert_eq!(seq.remove_all(std::iter::empty::<&str>()), 0);
    assert_eq!(keys(&seq), ["a", "b"]);
    seq.check();

    let mut empty: Seq<&str, i32> = Seq::default();
    assert_eq!(empty.remove_all(["a"].iter().copied()), 0);
    assert!(empty.is_empty());
}

#[test]
fn remove_all_everything() {
    let mut seq: IndexedSeq<u32, SetKey, DefaultBuildHasher> = IndexedSeq::default();
    seq.extend(0..100);
    let all: Vec<u32> = (0..100).rev().collect();
    assert_eq!(seq.remove_all(&all), 100);
    assert!(seq.is_empty());
    assert_eq!(seq.first(), None);
    seq.check();
    seq.extend([7, 8]);
    assert_eq!(seq.as_slice(), [7, 8]);
    seq.check();
}

#[test]
fn removed_entries_are_dropped_immediately() {
    let drops = Rc::new(Cell::new(0));
    let mut seq: Seq<u32, DropCounter> = Seq::default();
    for key in 0..10 {
        assert!(seq.push_unique((key, DropCounter(drops.clone()))).is_ok());
    }

    assert_eq!(seq.remove_all(&[1u32, 3, 5]), 3);
    assert_eq!(drops.get(), 3);

    let (index, entry) = seq.remove(&0u32).unwrap();
    assert_eq!(index, 0);
    assert_eq!(drops.get(), 3);
    drop(entry);
    assert_eq!(drops.get(), 4);

    assert_eq!(seq.retain(|(key, _)| key % 4 != 0), 2);
    assert_eq!(drops.get(), 6);

    seq.truncate(2);
    assert_eq!(drops.get(), 8);
    assert_eq!(seq.len(), 2);
    seq.check();

    seq.clear();
    assert_eq!(drops.get(), 10);
    assert_eq!(Rc::strong_count(&drops), 1);
}

#[test]
fn single_remove_shifts_following_entries() {
    let mut seq: Seq<&str, i32> = Seq::default();
    seq.extend([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    assert_eq!(seq.remove("b"), Some((1, ("b", 2))));
    assert_eq!(seq.remove("b"), None);
    assert_eq!(keys(&seq), ["a", "c", "d"]);
    assert_eq!(seq.index_of("c"), Some(1));
    assert_eq!(seq.index_of("d"), Some(2));
    seq.check();
}

#[test]
fn pop_and_positions() {
    let mut seq: Seq<&str, i32> = Seq::default();
    seq.extend([("a", 1), ("b", 2)]);
    assert_eq!(seq.pop(), Some(("b", 2)));
    assert_eq!(seq.last(), Some(&("a", 1)));
    assert_eq!(seq.get_index(1), None);
    assert_eq!(seq.pop(), Some(("a", 1)));
    assert_eq!(seq.pop(), None);
    seq.check();
}

#[test]
fn for_each_stops_after_break() {
    let mut seq: IndexedSeq<u32, SetKey, DefaultBuildHasher> = IndexedSeq::default();
    seq.extend(0..10);
    for stop_after in 1..=10 {
        let mut visited = 0;
        let flow = seq.for_each(|index, &item| {
            assert_eq!(index as u32, item);
            visited += 1;
            if visited == stop_after {
                ControlFlow::Break(item)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visited, stop_after);
        assert_eq!(flow, ControlFlow::Break(stop_after as u32 - 1));
    }
}

#[test]
fn copies_are_independent() {
    let mut seq: Seq<&str, i32> = Seq::default();
    seq.extend([("a", 1), ("b", 2)]);
    let snapshot = seq.to_vec();
    assert_eq!(seq.remove_all(["a"].iter().copied()), 1);
    assert_eq!(snapshot, [("a", 1), ("b", 2)]);
    assert_eq!(seq.as_slice(), [("b", 2)]);
}

#[test]
fn shrink_and_reserve_keep_index() {
    let mut seq: IndexedSeq<String, SetKey, DefaultBuildHasher> = IndexedSeq::default();
    seq.reserve(1000);
    assert!(seq.capacity() >= 1000);
    seq.extend((0..500).map(|i| i.to_string()));
    let odd: Vec<String> = (0..500).filter(|i| i % 2 == 1).map(|i| i.to_string()).collect();
    assert_eq!(seq.remove_all(&odd), 250);
    seq.shrink_to_fit();
    assert!(seq.capacity() < 1000);
    seq.check();
    assert_eq!(seq.index_of("498"), Some(249));
    assert_eq!(seq.get_full("0"), Some((0, &"0".to_string())));
}
