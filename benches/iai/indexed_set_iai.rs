//! IAI-Callgrind benchmark for IndexedSet construction APIs.
//!
//! Measures instruction counts for bulk construction vs incremental insert.
//! Data sizes: 100, 1000, 10000.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use idxset::set::IndexedSet;
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_sorted_vec_100() -> Vec<i32> {
    (0..100).collect()
}

fn setup_sorted_vec_1000() -> Vec<i32> {
    (0..1000).collect()
}

fn setup_sorted_vec_10000() -> Vec<i32> {
    (0..10000).collect()
}

// from_sorted_vec benchmarks
#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_100())]
fn from_sorted_vec_100(elements: Vec<i32>) -> IndexedSet<i32> {
    black_box(IndexedSet::from_sorted_vec(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_1000())]
fn from_sorted_vec_1000(elements: Vec<i32>) -> IndexedSet<i32> {
    black_box(IndexedSet::from_sorted_vec(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_10000())]
fn from_sorted_vec_10000(elements: Vec<i32>) -> IndexedSet<i32> {
    black_box(IndexedSet::from_sorted_vec(black_box(elements)))
}

// from_sorted_iter benchmarks
#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_100())]
fn from_sorted_iter_100(elements: Vec<i32>) -> IndexedSet<i32> {
    black_box(IndexedSet::from_sorted_iter(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_1000())]
fn from_sorted_iter_1000(elements: Vec<i32>) -> IndexedSet<i32> {
    black_box(IndexedSet::from_sorted_iter(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_10000())]
fn from_sorted_iter_10000(elements: Vec<i32>) -> IndexedSet<i32> {
    black_box(IndexedSet::from_sorted_iter(black_box(elements)))
}

// Incremental insert benchmarks (baseline for comparison)
#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_100())]
fn incremental_insert_100(elements: Vec<i32>) -> IndexedSet<i32> {
    let mut set = IndexedSet::new();
    for element in black_box(elements) {
        set.insert(black_box(element));
    }
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_1000())]
fn incremental_insert_1000(elements: Vec<i32>) -> IndexedSet<i32> {
    let mut set = IndexedSet::new();
    for element in black_box(elements) {
        set.insert(black_box(element));
    }
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_vec_10000())]
fn incremental_insert_10000(elements: Vec<i32>) -> IndexedSet<i32> {
    let mut set = IndexedSet::new();
    for element in black_box(elements) {
        set.insert(black_box(element));
    }
    black_box(set)
}

library_benchmark_group!(
    name = indexed_set_construction_group;
    benchmarks =
        from_sorted_vec_100, from_sorted_vec_1000, from_sorted_vec_10000,
        from_sorted_iter_100, from_sorted_iter_1000, from_sorted_iter_10000,
        incremental_insert_100, incremental_insert_1000, incremental_insert_10000
);

main!(library_benchmark_groups = indexed_set_construction_group);
