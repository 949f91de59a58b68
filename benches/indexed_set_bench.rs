//! IndexedSet construction and lookup benchmarks.
//!
//! Compares `from_sorted_vec` against incremental `insert` (baseline) and
//! measures membership lookups on both sides of the linear/binary search
//! boundary.
//!
//! Pre-generated Vec is reused via clone() in setup to avoid regeneration
//! overhead and ensure consistent benchmark data across iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use idxset::set::IndexedSet;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Pre-generates sorted Vec for each size to be reused in benchmarks.
fn generate_sorted_vec(size: i32) -> Vec<i32> {
    (0..size).collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_from_sorted_vec(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_from_sorted_vec");

    for size in SIZES {
        let base_vec = generate_sorted_vec(size);
        group.bench_with_input(
            BenchmarkId::new("from_sorted_vec", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| black_box(IndexedSet::from_sorted_vec(black_box(elements))),
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_incremental_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_incremental_insert");

    for size in SIZES {
        let base_vec = generate_sorted_vec(size);
        group.bench_with_input(
            BenchmarkId::new("insert", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| {
                        let mut set = IndexedSet::new();
                        for element in elements {
                            set.insert(black_box(element));
                        }
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_contains");

    // 8 exercises the linear-scan regime, the rest binary search
    for size in [8, 100, 1000, 10000] {
        let set = IndexedSet::from_sorted_vec(generate_sorted_vec(size));
        group.bench_with_input(BenchmarkId::new("contains", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0_u32;
                for probe in 0..size {
                    if set.contains(black_box(&probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn benchmark_retain_all_indexed(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_retain_all_indexed");

    for size in SIZES {
        let base_set = IndexedSet::from_sorted_vec(generate_sorted_vec(size));
        group.bench_with_input(
            BenchmarkId::new("retain_even", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_set.clone(),
                    |mut set| {
                        set.retain_all_indexed(|_, value| value % 2 == 0);
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_from_sorted_vec,
    benchmark_incremental_insert,
    benchmark_contains,
    benchmark_retain_all_indexed
);
criterion_main!(benches);
