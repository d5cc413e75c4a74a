//! Benchmarks for the resample and rebin kernels
//!
//! Run with:
//!   cargo bench --bench kernel_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use spectra_resample::{rebin, smooth_resample, SmoothMode};

fn irregular_grid(n: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut x = Vec::with_capacity(n);
    let mut current = 0.0;
    for _ in 0..n {
        current += rng.gen_range(0.5..1.5);
        x.push(current);
    }
    x
}

fn bench_smooth_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_resample");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[256usize, 4096, 65536] {
        let old_x = irregular_grid(n, &mut rng);
        let old_y: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
        let old_err: Vec<f64> = old_y.iter().map(|y| y.sqrt()).collect();
        let end = old_x[n - 1];
        let new_x: Vec<f64> = (0..n).map(|i| end * i as f64 / n as f64).collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("linear", n), &n, |b, _| {
            b.iter(|| {
                smooth_resample(
                    black_box(&old_x),
                    black_box(&old_y),
                    Some(old_err.as_slice()),
                    black_box(&new_x),
                    SmoothMode::Linear,
                )
            })
        });
        group.bench_with_input(BenchmarkId::new("nearest", n), &n, |b, _| {
            b.iter(|| {
                smooth_resample(
                    black_box(&old_x),
                    black_box(&old_y),
                    None,
                    black_box(&new_x),
                    SmoothMode::None,
                )
            })
        });
    }

    group.finish();
}

fn bench_rebin(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebin");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[256usize, 4096, 65536] {
        let old_edges = irregular_grid(n + 1, &mut rng);
        let counts: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..1000.0)).collect();
        let errors: Vec<f64> = counts.iter().map(|c| c.sqrt()).collect();
        let (lo, hi) = (old_edges[0], old_edges[n]);

        for &factor in &[4usize, 1] {
            let bins = (n / factor).max(1);
            let new_edges: Vec<f64> = (0..=bins)
                .map(|i| lo + (hi - lo) * i as f64 / bins as f64)
                .collect();
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("coarsen_x{factor}"), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        rebin(
                            black_box(&old_edges),
                            black_box(&counts),
                            Some(errors.as_slice()),
                            black_box(&new_edges),
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_smooth_resample, bench_rebin);
criterion_main!(benches);
