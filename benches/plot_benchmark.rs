#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for formula sampling and curve rendering.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plotnet::prelude::*;
use std::hint::black_box;

fn sine(ctx: &Context) -> f64 {
    ctx.get("x").unwrap_or(0.0).sin()
}

fn sample_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    for steps in [10, 20, 40] {
        let config = PlotConfig::default();
        let var = Variable::new("x", 0.0, f64::from(steps), 1.0);

        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, _| {
            b.iter(|| {
                let mut ctx = Context::new().with("x", 0.0);
                plotnet::sample::sample(&sine, &mut ctx, black_box(&var), &config)
                    .expect("sampling should succeed")
            });
        });
    }

    group.finish();
}

fn plot_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot");

    for size in [100, 400, 800] {
        let var = Variable::new("x", 0.0, 40.0, 1.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let surface = RasterSurface::new(size, size).expect("surface should allocate");
                let mut session = Session::new(surface);
                let mut ctx = Context::new().with("x", 0.0);
                session
                    .plot(&sine, &mut ctx, black_box(std::slice::from_ref(&var)))
                    .expect("plot should succeed");
                session.into_surface()
            });
        });
    }

    group.finish();
}

fn plot_net_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_net");

    let var = Variable::new("x", 0.0, 40.0, 1.0);
    let range = SampleRange::new(0.0, 40.0, 1.0);

    group.bench_function("400x400", |b| {
        b.iter(|| {
            let surface = RasterSurface::new(400, 400).expect("surface should allocate");
            let mut session = Session::new(surface);
            let mut ctx = Context::new().with("x", 0.0);
            session
                .plot_net(&sine, &mut ctx, std::slice::from_ref(&var), black_box(&range))
                .expect("net should draw");
            session.into_surface()
        });
    });

    group.finish();
}

criterion_group!(benches, sample_benchmark, plot_benchmark, plot_net_benchmark);
criterion_main!(benches);
