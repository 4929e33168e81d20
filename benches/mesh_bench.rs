//! Benchmarks for mesh generation and the text codec.
//!
//! Run with: `cargo bench --bench mesh_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fvmesh::{Discretization, GeometrySpec, build, parse_mesh, serialize_mesh};

/// Benchmark mesh generation across sizes and spacing laws.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for n in [100u32, 10_000, 1_000_000] {
        let uniform = GeometrySpec::uniform(0.0, 1.0, n).unwrap();
        group.bench_with_input(BenchmarkId::new("uniform", n), &uniform, |b, spec| {
            b.iter(|| build(black_box(spec), Discretization::CellCenter).unwrap());
        });
    }

    // Large counts make alpha^N overflow the series sum, so the geometric
    // law is only benchmarked at realistic grading sizes.
    for n in [100u32, 10_000] {
        let geometric = GeometrySpec::geometric(0.0, 1.0, n, 1.001).unwrap();
        group.bench_with_input(BenchmarkId::new("geometric", n), &geometric, |b, spec| {
            b.iter(|| build(black_box(spec), Discretization::CellCenter).unwrap());
        });
    }

    group.finish();
}

/// Benchmark serialization and parsing of a mid-sized mesh.
fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let spec = GeometrySpec::uniform(0.0, 1.0, 10_000).unwrap();
    let mesh = build(&spec, Discretization::CellCenter).unwrap();
    let text = serialize_mesh(&mesh);

    group.bench_function("serialize", |b| {
        b.iter(|| serialize_mesh(black_box(&mesh)));
    });

    group.bench_function("parse", |b| {
        b.iter(|| parse_mesh(black_box(&text)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
