//! Criterion benchmarks for the per-point hot paths.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use point2d::{Point2D, Translation2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2D::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)))
        .collect()
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point2d");
    let center = Point2D::new(1.0, -2.0);

    group.bench_function("rotate_point_1k", |b| {
        let pts = random_points(1_000, 41);
        b.iter(|| {
            for p in &pts {
                black_box(p.rotate_point(Some(&center), black_box(-1.3)));
            }
        })
    });

    group.bench_function("compute_angle_1k", |b| {
        let pts = random_points(1_000, 42);
        b.iter(|| {
            for p in &pts {
                black_box(center.compute_angle(Some(p)));
            }
        })
    });

    group.bench_function("translate_by_1k", |b| {
        let t = Translation2::new(0.5, -0.25);
        b.iter_batched(
            || random_points(1_000, 43),
            |mut pts| {
                for p in &mut pts {
                    p.translate_by(Some(&t));
                }
                pts
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_point_1k", |b| {
        b.iter_batched(
            || (StdRng::seed_from_u64(44), StdRng::seed_from_u64(45)),
            |(mut rx, mut ry)| {
                let mut p = Point2D::origin();
                for _ in 0..1_000 {
                    p.set_point(&mut rx, &mut ry);
                }
                p
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
