/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use rs_collections::binheap::Error;
use rs_collections::BinHeap;

use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

const NTRIALS: usize = 50;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn by_value(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Assert that no parent compares greater than one of its children.
fn check_heap<T>(h: &BinHeap<T>) {
    let compare = h.comparator();
    let elements = h.elements();
    for i in 0..elements.len() {
        for &c in &[2 * i + 1, 2 * i + 2] {
            if c < elements.len() {
                assert_ne!(compare(&elements[i], &elements[c]), Ordering::Greater);
            }
        }
    }
}

fn random_multiset(rng: &mut StdRng) -> Vec<i32> {
    let n = rng.gen_range(0..100);
    let mut values: Vec<i32> = (0..n).map(|_| rng.gen_range(-20..20)).collect();
    values.shuffle(rng);
    values
}

#[test]
fn test_sorted_extraction() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..NTRIALS {
        let values = random_multiset(&mut rng);

        let mut h = BinHeap::new(by_value);
        for (i, &x) in values.iter().enumerate() {
            h.insert(x);
            assert_eq!(h.len(), i + 1);
            check_heap(&h);
        }

        let mut extracted = vec![];
        while !h.is_empty() {
            extracted.push(h.remove().unwrap());
            check_heap(&h);
            assert_eq!(h.len(), values.len() - extracted.len());
        }

        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(extracted, sorted);
    }
}

#[test]
fn test_sorted_extraction_max() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..NTRIALS {
        let values = random_multiset(&mut rng);

        let mut h = BinHeap::max(by_value);
        for &x in &values {
            h.insert(x);
            check_heap(&h);
        }

        let mut extracted = vec![];
        while let Ok(x) = h.remove() {
            check_heap(&h);
            extracted.push(x);
        }

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(extracted, sorted);
    }
}

#[test]
fn test_interleaved() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(4711);
    let mut h = BinHeap::new(by_value);
    let mut model: Vec<i32> = vec![];
    let (mut ninserts, mut nremoves) = (0, 0);

    for _ in 0..2000 {
        if rng.gen_bool(0.55) {
            let x = rng.gen_range(0..50);
            h.insert(x);
            model.push(x);
            ninserts += 1;
        } else {
            match h.remove() {
                Ok(x) => {
                    model.sort();
                    assert_eq!(x, model.remove(0));
                    nremoves += 1;
                }
                Err(err) => {
                    assert_eq!(err, Error::Empty);
                    assert!(model.is_empty());
                }
            }
        }
        check_heap(&h);
        assert_eq!(h.len(), ninserts - nremoves);
        assert_eq!(h.len(), model.len());
    }
}

#[test]
fn test_peek_idempotent() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(1);
    let mut h = BinHeap::new(by_value);
    for x in random_multiset(&mut rng) {
        h.insert(x);
        let len = h.len();
        let first = *h.peek().unwrap();
        let second = *h.peek().unwrap();
        assert_eq!(first, second);
        assert_eq!(h.len(), len);
        assert!(h.elements().iter().all(|&y| first <= y));
    }
}

#[test]
fn test_empty_after_drain() {
    init_logger();
    let mut h = BinHeap::new(by_value);
    h.insert(3);
    h.insert(1);
    assert_eq!(h.remove(), Ok(1));
    assert_eq!(h.remove(), Ok(3));

    assert_eq!(h.remove(), Err(Error::Empty));
    assert_eq!(h.peek(), Err(Error::Empty));
    assert_eq!(h.len(), 0);
    assert!(h.elements().is_empty());

    h.insert(2);
    assert_eq!(h.peek(), Ok(&2));
}

#[test]
fn test_float_heap() {
    init_logger();
    let mut h = BinHeap::max(|a: &OrderedFloat<f64>, b: &OrderedFloat<f64>| a.cmp(b));
    for &x in &[0.5, -1.25, 3.0, 2.75, 0.0] {
        h.insert(OrderedFloat(x));
    }
    let mut extracted = vec![];
    while let Ok(x) = h.remove() {
        extracted.push(x.into_inner());
    }
    assert_eq!(extracted, vec![3.0, 2.75, 0.5, 0.0, -1.25]);
}

#[test]
fn test_inconsistent_comparator() {
    init_logger();
    // Not a total order: the layout is unspecified, but nothing breaks.
    let mut h = BinHeap::new(|a: &i32, b: &i32| if (a + b) % 2 == 0 { Ordering::Less } else { Ordering::Greater });
    for x in 0..100 {
        h.insert(x);
    }
    let mut n = 0;
    while h.remove().is_ok() {
        n += 1;
    }
    assert_eq!(n, 100);
}
