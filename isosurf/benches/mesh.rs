use criterion::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use isosurf::{
    field::{Sampling, ScalarField},
    mesh::{Settings, SurfaceTracker, ThreadPool, VolumeScanner},
};

/// Gyroid lattice, which crosses most of the volume
fn gyroid(n: usize) -> ScalarField {
    let s = Sampling::new(n, 2.0 / (n - 1) as f64, -1.0);
    ScalarField::from_fn([s; 3], |i1, i2, i3| {
        let [x, y, z] = [i1, i2, i3]
            .map(|i| s.value(i as f64) as f32 * std::f32::consts::TAU);
        x.sin() * y.cos() + y.sin() * z.cos() + z.sin() * x.cos()
    })
    .unwrap()
}

/// Small sphere in a large volume
fn sphere(n: usize) -> ScalarField {
    let c = (n - 1) as f32 / 2.0;
    ScalarField::from_fn([Sampling::unit(n); 3], |i1, i2, i3| {
        let d = [i1, i2, i3].map(|i| i as f32 - c);
        (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt() - n as f32 / 8.0
    })
    .unwrap()
}

pub fn gyroid_thread_sweep(c: &mut Criterion) {
    let field = &gyroid(128);

    let mut group = c.benchmark_group("speed vs threads (gyroid, scan) (128)");
    for threads in [1, 2, 4, 8] {
        let pool = ThreadPool::Custom(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap(),
        );
        group.bench_function(BenchmarkId::new("scan", threads), |b| {
            let settings = Settings {
                threads: Some(&pool),
                ..Default::default()
            };
            b.iter(|| {
                black_box(VolumeScanner::new(field).run(0.0, &settings))
            })
        });
    }
    group.bench_function("serial", |b| {
        let settings = Settings::default();
        b.iter(|| black_box(VolumeScanner::new(field).run(0.0, &settings)))
    });
}

pub fn sphere_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan vs track (sphere)");
    for n in [64, 128] {
        let field = &sphere(n);
        let settings = &Settings::default();
        group.bench_function(BenchmarkId::new("scan", n), move |b| {
            b.iter(|| black_box(VolumeScanner::new(field).run(0.0, settings)))
        });
        group.bench_function(BenchmarkId::new("track", n), move |b| {
            b.iter(|| {
                black_box(SurfaceTracker::new(field).run(0.0, None, settings))
            })
        });
    }
}

criterion_group!(benches, gyroid_thread_sweep, sphere_strategies);
criterion_main!(benches);
