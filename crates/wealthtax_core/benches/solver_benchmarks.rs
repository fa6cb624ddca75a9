//! Criterion benchmarks for wealthtax_core
//!
//! Run with: cargo bench -p wealthtax_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wealthtax_core::analysis::tax_effect_sweep;
use wealthtax_core::model::EconomicParameters;
use wealthtax_core::optimization::{OptimizerConfig, solve};
use wealthtax_core::session::Session;

fn bench_cold_solve(c: &mut Criterion) {
    let params = EconomicParameters::default();
    let config = OptimizerConfig::default();

    c.bench_function("solve_cold", |b| {
        b.iter(|| solve(black_box(&params), &config, None).unwrap());
    });
}

fn bench_warm_solve(c: &mut Criterion) {
    let params = EconomicParameters::default();
    let config = OptimizerConfig::default();
    let hint = solve(&params, &config, None).unwrap().pair();

    c.bench_function("solve_warm", |b| {
        b.iter(|| solve(black_box(&params), &config, Some(hint)).unwrap());
    });
}

fn bench_grid_resolution(c: &mut Criterion) {
    let params = EconomicParameters::default();
    let mut group = c.benchmark_group("grid_resolution");

    for steps in [25usize, 50, 100] {
        let config = OptimizerConfig {
            grid_steps: steps,
            ..OptimizerConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, config| {
            b.iter(|| solve(black_box(&params), config, None).unwrap());
        });
    }
    group.finish();
}

fn bench_tax_sweep(c: &mut Criterion) {
    let base = EconomicParameters::default();

    c.bench_function("tax_effect_sweep_cold", |b| {
        b.iter(|| {
            // Fresh session each iteration so nothing is served from cache.
            let mut session = Session::new();
            tax_effect_sweep(&mut session, black_box(&base)).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_cold_solve,
    bench_warm_solve,
    bench_grid_resolution,
    bench_tax_sweep
);
criterion_main!(benches);
