//! Criterion benchmarks for `ShapeCollection` growth, erase and area sums.
//! Focus sizes: n in {16, 256, 4096}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use figures::{Point, Shape, ShapeCollection, Square, Triangle};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_collection(n: usize, seed: u64) -> ShapeCollection<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x: f64 = rng.gen_range(-10.0..10.0);
            let y: f64 = rng.gen_range(-10.0..10.0);
            let s: f64 = rng.gen_range(0.1..3.0);
            let shape: Shape<f64> = if rng.gen::<bool>() {
                Square::new(
                    Point::new(x, y),
                    Point::new(x + s, y),
                    Point::new(x + s, y + s),
                    Point::new(x, y + s),
                )
                .into()
            } else {
                Triangle::new(Point::new(x, y), Point::new(x + s, y), Point::new(x, y + s)).into()
            };
            shape.into_handle()
        })
        .collect()
}

fn bench_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            b.iter(|| random_collection(n, 41))
        });

        group.bench_with_input(BenchmarkId::new("total_area", n), &n, |b, &n| {
            let coll = random_collection(n, 42);
            b.iter(|| coll.total_area())
        });

        group.bench_with_input(BenchmarkId::new("erase_front", n), &n, |b, &n| {
            b.iter_batched(
                || random_collection(n, 43),
                |mut coll| {
                    let _removed = coll.erase(0).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_collection);
criterion_main!(benches);
