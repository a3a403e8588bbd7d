//! Criterion benchmarks for triangle packing.
//! Focus: depth in {1, 5, 10, 20} plus threshold mode, and the Descartes pair solver.
//! Results land under target/criterion.

use circpack::geom2::rand::{draw_triangle, ReplayToken, TriangleCfg};
use circpack::{Circle, PackCfg, Triangle};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;

fn triangles(n: u64, seed: u64) -> Vec<Triangle> {
    (0..n)
        .filter_map(|index| draw_triangle(TriangleCfg::default(), ReplayToken { seed, index }))
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for &depth in &[1usize, 5, 10, 20] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter_batched(
                || triangles(32, 43),
                |tris| {
                    let _res = circpack::pack_all(&tris, PackCfg::with_depth(depth));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function(BenchmarkId::new("threshold", "5%"), |b| {
        b.iter_batched(
            || triangles(32, 44),
            |tris| {
                let _res = circpack::pack_all(&tris, PackCfg::default());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_descartes(c: &mut Criterion) {
    let c0 = Circle::new(Vector2::new(0.0, 0.0), 1.0).unwrap();
    let c1 = Circle::new(Vector2::new(3.0, 0.0), 2.0).unwrap();
    c.bench_function("tangent_to_pair", |b| b.iter(|| c0.tangent_to_pair(&c1)));
}

criterion_group!(benches, bench_pack, bench_descartes);
criterion_main!(benches);
