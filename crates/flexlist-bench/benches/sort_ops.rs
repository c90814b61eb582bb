//! Criterion micro-benchmarks for the in-place quicksort.
//!
//! Random input shows the average O(n log n) case; the sorted and reversed
//! profiles exercise the last-element-pivot's quadratic worst case. Each
//! iteration clones a prebuilt template list, which is linear and small
//! next to the sort itself.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flexlist::FlexList;
use flexlist_bench::{random_list, reversed_list, sorted_list};

fn bench_sort(c: &mut Criterion, name: &str, template: &FlexList<u64>) {
    c.bench_function(name, |b| {
        b.iter(|| {
            let mut list = template.clone();
            list.sort();
            black_box(&list);
        });
    });
}

fn bench_sort_random_1k(c: &mut Criterion) {
    bench_sort(c, "sort_random_1k", &random_list(1_000, 29));
}

fn bench_sort_sorted_1k(c: &mut Criterion) {
    bench_sort(c, "sort_sorted_1k", &sorted_list(1_000));
}

fn bench_sort_reversed_1k(c: &mut Criterion) {
    bench_sort(c, "sort_reversed_1k", &reversed_list(1_000));
}

criterion_group!(
    benches,
    bench_sort_random_1k,
    bench_sort_sorted_1k,
    bench_sort_reversed_1k
);
criterion_main!(benches);
