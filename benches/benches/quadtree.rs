// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for quadtree insertion, window queries, and removal.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use understory_benches::{WORLD, random_boxes};
use understory_quadtree::{BoundingBox, Quadtree};

type B = BoundingBox<f64>;

fn build(boxes: &[B]) -> Quadtree<f64, B, fn(&B) -> B> {
    let box_of: fn(&B) -> B = |b| *b;
    let mut tree = Quadtree::new(WORLD, box_of);
    for b in boxes {
        tree.add(*b);
    }
    tree
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_add");
    for count in [1_000, 10_000, 50_000] {
        let boxes = random_boxes(count, 16.0, 0x5EED);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &boxes, |b, boxes| {
            b.iter(|| black_box(build(boxes)));
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let tree = build(&random_boxes(50_000, 16.0, 0x5EED));
    let windows = random_boxes(256, 256.0, 0xF00D);
    for (name, windows) in [("small", &windows[..]), ("world", &[WORLD][..])] {
        group.bench_with_input(BenchmarkId::new("window", name), windows, |b, windows| {
            b.iter(|| {
                let mut hits = 0_usize;
                for w in windows {
                    tree.visit_rect(*w, |_| hits += 1);
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_remove");
    let count = 10_000;
    let boxes = random_boxes(count, 16.0, 0xBEEF);
    group.throughput(Throughput::Elements(count as u64));
    group.bench_function("all", |b| {
        b.iter_batched(
            || build(&boxes),
            |mut tree| {
                for v in &boxes {
                    black_box(tree.remove(v));
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_query, bench_remove);
criterion_main!(benches);
