//! Benchmarks for GrowableArray vs SmallVec vs Vec
//!
//! Run with: `cargo bench --bench growable_array`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use growable_array::GrowableArray;
use smallvec::SmallVec;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    // Start from the default capacity so growth is part of the measurement
    for size in [4, 64, 1024, 16384] {
        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::new();
                for i in 0..size {
                    array.add(black_box(i as u32));
                }
                black_box(array);
            });
        });

        group.bench_with_input(BenchmarkId::new("SmallVec<5>", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = SmallVec::<[u32; 5]>::new();
                for i in 0..size {
                    vec.push(black_box(i as u32));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u32>::with_capacity(5);
                for i in 0..size {
                    vec.push(black_box(i as u32));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_insert_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_range_front");

    // Tight capacity forces the single-pass splice path
    for size in [64, 1024, 16384] {
        let batch: Vec<u32> = (0..size as u32 / 4).collect();

        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::with_capacity(size);
                array.add_range(0..size as u32);
                array
                    .insert_range(0, black_box(batch.iter().copied()))
                    .unwrap();
                black_box(array);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::with_capacity(size);
                vec.extend(0..size as u32);
                vec.splice(0..0, black_box(batch.iter().copied()));
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_all_odd");

    for size in [64, 1024] {
        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array: GrowableArray<u32> = (0..size).collect();
                black_box(array.remove_all(|x| x % 2 == 1));
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec::retain", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec: Vec<u32> = (0..size).collect();
                vec.retain(|x| x % 2 == 0);
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let array: GrowableArray<u64> = (0..4096).collect();
    let vec: Vec<u64> = (0..4096).collect();

    c.bench_function("iterate_GrowableArray_4096", |b| {
        b.iter(|| black_box(array.iter().sum::<u64>()));
    });

    c.bench_function("iterate_Vec_4096", |b| {
        b.iter(|| black_box(vec.iter().sum::<u64>()));
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_insert_range,
    bench_remove_all,
    bench_iterate
);
criterion_main!(benches);
