//! Criterion micro-benchmarks for the append, insert, and remove paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flexlist::FlexList;
use flexlist_bench::{random_list, random_values};

/// Benchmark: append 1K values, exercising the doubling growth path from
/// the initial capacity of 10.
fn bench_push_1k(c: &mut Criterion) {
    let values = random_values(1_000, 7);

    c.bench_function("push_1k", |b| {
        b.iter(|| {
            let mut list = FlexList::new();
            for &value in &values {
                list.push(value);
            }
            black_box(&list);
        });
    });
}

/// Benchmark: insert 1K values at index 0, the full-shift worst case.
fn bench_insert_head_1k(c: &mut Criterion) {
    let values = random_values(1_000, 11);

    c.bench_function("insert_head_1k", |b| {
        b.iter(|| {
            let mut list = FlexList::new();
            for &value in &values {
                list.insert(0, value).unwrap();
            }
            black_box(&list);
        });
    });
}

/// Benchmark: drain a 1K list by removing the head until empty.
///
/// The per-iteration clone of the template list is included in the
/// measurement; it is linear and small next to the quadratic drain.
fn bench_remove_head_1k(c: &mut Criterion) {
    let template = random_list(1_000, 13);

    c.bench_function("remove_head_1k", |b| {
        b.iter(|| {
            let mut list = template.clone();
            while !list.is_empty() {
                black_box(list.remove(0).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_push_1k,
    bench_insert_head_1k,
    bench_remove_head_1k
);
criterion_main!(benches);
