//! Benchmarks for the chequer pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chequer::pattern::{generate, generate_par};
use chequer::render::to_image;
use chequer::types::{BoardSize, Colour, Configuration, NodeSize, Sizing, Spacing, Tier};

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for board in [BoardSize::Tiny, BoardSize::Medium, BoardSize::Huge] {
        let size = board.value();

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, &size| {
            b.iter(|| generate(black_box(size), 32, Colour::TAN, Colour::CREAM).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &size| {
            b.iter(|| generate_par(black_box(size), 32, Colour::TAN, Colour::CREAM).unwrap())
        });
    }

    group.finish();
}

// -- End-to-end benchmarks --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let config = Configuration::new(Sizing::Tiered {
        board: BoardSize::Large,
        node: NodeSize::M,
        spacing: Spacing::Small,
    });

    group.bench_function("resolve_generate_1024", |b| {
        b.iter(|| black_box(&config).resolve().unwrap().generate().unwrap())
    });

    let buffer = config.resolve().unwrap().generate().unwrap();
    group.bench_function("to_image_1024_x2", |b| {
        b.iter(|| to_image(black_box(&buffer), 2).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_pipeline);
criterion_main!(benches);
