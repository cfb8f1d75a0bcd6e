//! Prefix query benchmark.
//!
//! Compares the border-based queries against a linear scan over the same
//! sorted phrases. Border queries should stay flat as the list grows; the scan
//! grows linearly.

use autocomplete::collection::PhraseCollection;
use autocomplete::compare::starts_with_ignore_case;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 4] = [100, 1000, 10000, 100_000];

/// Pre-generates a sorted collection of zero-padded numbers.
fn generate_collection(size: usize) -> PhraseCollection {
    PhraseCollection::from_unsorted((0..size).map(|number| format!("{number:06}")))
}

fn benchmark_count_by_prefix(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("count_by_prefix");

    for size in SIZES {
        let collection = generate_collection(size);
        group.bench_with_input(BenchmarkId::new("borders", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(collection.count_by_prefix(black_box("0001"))));
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", size), &collection, |bencher, collection| {
            bencher.iter(|| {
                black_box(
                    collection
                        .iter()
                        .filter(|phrase| starts_with_ignore_case(phrase, black_box("0001")))
                        .count(),
                )
            });
        });
    }

    group.finish();
}

fn benchmark_top_by_prefix(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("top_by_prefix");

    for size in SIZES {
        let collection = generate_collection(size);
        group.bench_with_input(BenchmarkId::new("top_10", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(collection.top_by_prefix(black_box("00"), 10)));
        });
    }

    group.finish();
}

fn benchmark_find_first(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find_first");

    for size in SIZES {
        let collection = generate_collection(size);
        group.bench_with_input(BenchmarkId::new("present", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(collection.find_first(black_box("00005"))));
        });
        group.bench_with_input(BenchmarkId::new("absent", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(collection.find_first(black_box("zz"))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_count_by_prefix,
    benchmark_top_by_prefix,
    benchmark_find_first
);
criterion_main!(benches);
