#![allow(missing_docs)]
use crate::OrderedSet;
use indexmap::IndexSet;
use rand::prelude::*;
use std::{borrow::Borrow, hash::Hash, ops::ControlFlow};

/// An [`OrderedSet`] that mirrors every operation on an [`IndexSet`] and compares the results.
struct CheckedSet<T> {
    dut: OrderedSet<T>,
    ref_set: IndexSet<T>,
}

impl<T: Hash + Eq + Clone + std::fmt::Debug> CheckedSet<T> {
    fn new() -> Self {
        CheckedSet {
            dut: OrderedSet::new(),
            ref_set: IndexSet::new(),
        }
    }
    fn get_full<Q>(&mut self, value: &Q) -> Option<(usize, &T)>
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        let ref_result = self.ref_set.get_full(value);
        let dut_result = self.dut.get_full(value);
        assert_eq!(ref_result, dut_result);
        assert_eq!(ref_result.map(|x| x.0), self.dut.index_of(value));
        ref_result
    }
    fn insert_full(&mut self, value: T) -> (usize, bool) {
        let ref_result = self.ref_set.insert_full(value.clone());
        let dut_result = self.dut.insert_full(value);
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        let ref_result = self.ref_set.shift_take(value);
        let dut_result = self.dut.take(value);
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn remove(&mut self, values: &[T]) -> usize {
        let ref_result = values
            .iter()
            .filter(|value| self.ref_set.shift_remove(*value))
            .count();
        let dut_result = self.dut.remove(values);
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn pop(&mut self) -> Option<T> {
        let ref_result = self.ref_set.pop();
        let dut_result = self.dut.pop();
        assert_eq!(ref_result, dut_result);
        ref_result
    }
    fn truncate(&mut self, len: usize) {
        self.ref_set.truncate(len);
        self.dut.truncate(len);
        self.check();
    }
    fn retain(&mut self, fun: impl Fn(&T) -> bool) -> usize {
        let mut ref_iter = self.ref_set.iter();
        let removed = self.dut.retain(|item| {
            // make sure that retain visits in the correct order
            assert_eq!(Some(item), ref_iter.next());
            fun(item)
        });
        assert_eq!(None, ref_iter.next());
        let old_len = self.ref_set.len();
        self.ref_set.retain(&fun);
        assert_eq!(removed, old_len - self.ref_set.len());
        self.check();
        removed
    }
    fn check(&mut self) {
        self.dut.check();
        assert!(self.ref_set.iter().eq(&self.dut));
        assert_eq!(self.ref_set.first(), self.dut.first());
        assert_eq!(self.ref_set.last(), self.dut.last());
    }
}

macro_rules! weighted_choose {
    ($rng:expr, $($name:ident: $weight:expr => $body:expr),+) => {
        {
            enum Branches { $( $name,  )* }
            let weights = [$((Branches::$name, $weight)),+];
            match weights.choose_weighted($rng, |x| x.1).unwrap().0 {
                $(Branches::$name => $body),*
            }
        }
    }
}

fn test_suite<T: Hash + Eq + Clone + std::fmt::Debug, R: Rng + SeedableRng>(
    mut rand_t: impl FnMut(&mut R) -> T,
    retain_fn: impl Fn(&T) -> bool,
) {
    let mut set: CheckedSet<T> = CheckedSet::new();
    let mut rng = R::seed_from_u64(25);
    let mut max_size = 0;
    let verbosity = 1;
    for _ in 0..5000 {
        weighted_choose! {&mut rng,
            Insert: 1.0 => {
                let item = rand_t(&mut rng);
                let result = set.insert_full(item.clone());
                if verbosity > 0 {
                    println!("inserting {item:?} -> {result:?}");
                }
            },
            GetPresent: 0.5 => {
                if let Some(item) = set.ref_set.iter().choose(&mut rng).cloned() {
                    let result = set.get_full(&item);
                    if verbosity > 0 {
                        println!("getting {item:?} -> {result:?}");
                    }
                }
            },
            GetRandom: 0.5 => {
                let item = rand_t(&mut rng);
                let result = set.get_full(&item);
                if verbosity > 0 {
                    println!("getting {item:?} -> {result:?}");
                }
            },
            TakePresent: 0.2 => {
                if let Some(item) = set.ref_set.iter().choose(&mut rng).cloned() {
                    let result = set.take(&item);
                    if verbosity > 0 {
                        println!("taking {item:?} -> {result:?}");
                    }
                }
            },
            RemoveBatch: 0.3 => {
                // mix present items, duplicates and absent items
                let present = rng.gen_range(0..4);
                let mut items: Vec<T> = set
                    .ref_set
                    .iter()
                    .cloned()
                    .choose_multiple(&mut rng, present);
                if let Some(item) = items.first().cloned() {
                    items.push(item);
                }
                for _ in 0..rng.gen_range(0..3) {
                    items.push(rand_t(&mut rng));
                }
                items.shuffle(&mut rng);
                let result = set.remove(&items);
                if verbosity > 0 {
                    println!("removing {items:?} -> {result:?}");
                }
            },
            Pop: 0.1 => {
                let result = set.pop();
                if verbosity > 0 {
                    println!("popping -> {result:?}");
                }
            },
            Truncate: 0.02 => {
                let len = set.ref_set.len();
                let new_len = rng.gen_range(len / 2..=len);
                set.truncate(new_len);
                if verbosity > 0 {
                    println!("truncating {len} -> {new_len}");
                }
            },
            Retain: 0.05 => {
                let old_len = set.ref_set.len();
                set.retain(&retain_fn);
                let new_len = set.ref_set.len();
                if verbosity > 0 {
                    println!("retaining, {old_len} -> {new_len}");
                }
            },
            Check: 0.15 => {
                set.check();
                if verbosity > 0 {
                    println!("check");
                }
            }
        };
        max_size = std::cmp::max(max_size, set.ref_set.len());
    }
    set.check();
    println!("max size: {max_size}");
}

#[test]
fn test_suite_usize() {
    test_suite::<usize, rand_pcg::Pcg64>(
        |rng| rng.gen::<usize>() >> rng.gen_range(0..usize::BITS),
        |item| item % 17 < 15,
    );
}

#[test]
fn test_suite_boxed_usize() {
    test_suite::<Box<usize>, rand_pcg::Pcg64>(
        |rng| Box::new(rng.gen::<usize>() >> rng.gen_range(0..usize::BITS)),
        |item| **item % 17 < 15,
    );
}

#[test]
fn test_suite_string() {
    test_suite::<String, rand_pcg::Pcg64>(
        |rng| {
            let len = rng.gen_range(4..32);
            String::from_iter((0..len).map(|_| rng.gen_range('!'..'~')))
        },
        |item| !item.contains('!'),
    );
}

#[test]
fn test_small_domain() {
    // few distinct values, so duplicates and batch removals of present keys dominate
    test_suite::<u8, rand_pcg::Pcg64>(|rng| rng.gen_range(0..40), |item| item % 3 != 0);
}

#[test]
fn test_reserve() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(58);
    for size in [10, 50, 100, 200, 500, 1000] {
        let mut set = CheckedSet::<usize>::new();
        set.dut.reserve(size);
        set.ref_set.reserve(size);
        for _ in 0..size + 5 {
            set.insert_full(rng.gen());
        }
        set.dut.shrink_to_fit();
        set.check();
    }
}

#[test]
fn test_from_iter_extend() {
    let rng_start = rand_pcg::Pcg64::seed_from_u64(58);
    let mut rng = rng_start.clone();
    let mut set = (0..1000).map(|_| rng.gen()).collect::<OrderedSet<usize>>();
    set.extend((0..1000).map(|_| rng.gen()));
    set.check();
    rng = rng_start.clone();
    assert!(set.iter().copied().eq((0..2000).map(|_| rng.gen::<usize>())));
}

#[test]
fn test_primes() {
    let mut set: OrderedSet<usize> = (2..200).collect();
    let mut ref_primes = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
        97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
        191, 193, 197, 199,
    ]
    .into_iter();
    while let Some(&k) = set.first() {
        assert_eq!(ref_primes.next(), Some(k));
        let multiples: Vec<usize> = (1..200 / k + 1).map(|n| n * k).collect();
        set.remove(&multiples);
        set.check();
    }
    assert_eq!(ref_primes.next(), None);
    assert!(set.is_empty());
}

#[test]
fn test_add_keeps_first_occurrence() {
    let mut set = OrderedSet::new();
    set.add([3, 1, 2]);
    set.add([1, 2, 4]);
    assert_eq!(set.as_slice(), [3, 1, 2, 4]);
    assert_eq!(set.index_of(&4), Some(3));
    set.check();
}

#[test]
fn test_for_each_index() {
    let set = OrderedSet::from(["a", "b", "c", "d"]);
    let mut seen = vec![];
    let flow = set.for_each(|index, &item| {
        seen.push((index, item));
        if item == "c" {
            ControlFlow::Break(index)
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(flow, ControlFlow::Break(2));
    assert_eq!(seen, [(0, "a"), (1, "b"), (2, "c")]);
}

#[test]
fn test_join_and_display() {
    let mut set = OrderedSet::new();
    assert_eq!(set.join(", "), "");
    assert_eq!(set.to_string(), "OrderedSet{}");
    set.add([3, 1, 2]);
    assert_eq!(set.join(", "), "3, 1, 2");
    assert_eq!(set.join("-"), "3-1-2");
    assert_eq!(set.to_string(), "OrderedSet{3, 1, 2}");
    assert_eq!(format!("{set:?}"), "{3, 1, 2}");
}

#[test]
fn test_equality_ignores_order() {
    let a = OrderedSet::from([1, 2, 3]);
    let b = OrderedSet::from([3, 2, 1]);
    let c = OrderedSet::from([1, 2]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(c.is_subset(&a));
    assert!(!a.is_subset(&c));
}
