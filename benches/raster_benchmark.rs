#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for primitive rasterization throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use trazo::prelude::*;
use trazo::raster::{circle_points, ellipse_points};

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_trace");

    for algo in [
        LineAlgorithm::Naive,
        LineAlgorithm::Dda,
        LineAlgorithm::Bresenham,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algo:?}")),
            &algo,
            |b, &algo| {
                b.iter(|| {
                    algo.trace(black_box(0), black_box(0), black_box(799), black_box(599))
                        .count()
                });
            },
        );
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_points");

    for radius in [10i64, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            b.iter(|| circle_points(black_box(0), black_box(0), black_box(r)).len());
        });
    }

    group.finish();
}

fn ellipse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipse_points");

    for (rx, ry) in [(20i64, 10i64), (200, 100)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rx}x{ry}")),
            &(rx, ry),
            |b, &(rx, ry)| {
                b.iter(|| ellipse_points(black_box(0), black_box(0), rx, ry).len());
            },
        );
    }

    group.finish();
}

fn scene_benchmark(c: &mut Criterion) {
    c.bench_function("finalize_scene", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(800, 600).expect("canvas creation should succeed");
            canvas.fill(Rgb::WHITE);
            canvas.set_color(Rgb::BLACK);
            for i in 0..50 {
                canvas.draw_line(0, i * 12, 799, 599 - i * 12);
            }
            canvas.draw_circle(400, 300, 250).expect("radius is valid");
            canvas.finalize();
            black_box(canvas.pixels().len())
        });
    });
}

criterion_group!(
    benches,
    line_benchmark,
    circle_benchmark,
    ellipse_benchmark,
    scene_benchmark
);
criterion_main!(benches);
