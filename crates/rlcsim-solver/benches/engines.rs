//! Benchmarks for the sweep and transient engines.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rlcsim_core::{ParameterSet, Topology};
use rlcsim_solver::{SweepParams, TimeSpan, sweep, transient};

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let params = ParameterSet::new(Topology::RLC, 80.0, 10e-3, 150e-9, 50.0).unwrap();

    for points in [100, 500, 5_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(points),
            &points,
            |bencher, &points| {
                let sp = SweepParams::default().with_points(points);
                bencher.iter(|| sweep(black_box(&params), black_box(&sp)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_transient(c: &mut Criterion) {
    let mut group = c.benchmark_group("transient");

    let cases = [
        (
            "rc",
            ParameterSet::new(Topology::RC, 1000.0, 0.0, 100e-9, 5.0).unwrap(),
        ),
        (
            "rl",
            ParameterSet::new(Topology::RL, 100.0, 10e-3, 0.0, 5.0).unwrap(),
        ),
        (
            "rlc",
            ParameterSet::new(Topology::RLC, 80.0, 10e-3, 150e-9, 50.0).unwrap(),
        ),
    ];

    for (name, params) in &cases {
        group.bench_with_input(BenchmarkId::new("default", name), params, |bencher, p| {
            bencher.iter(|| transient(black_box(p), None).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("10k", name), params, |bencher, p| {
            let span = Some(TimeSpan::new(1e-3, 10_000));
            bencher.iter(|| transient(black_box(p), black_box(span)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_transient);
criterion_main!(benches);
