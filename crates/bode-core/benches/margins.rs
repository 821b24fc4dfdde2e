//! Benchmarks for margin searches
//!
//! Tests performance of the dense crossover scans and a full analysis.

use bode_core::{Analyzer, FrequencyRange, MarginSearch, TransferFunction};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// 40 / ((s + 1)(s + 2)(s + 3)): has both crossovers
fn create_test_system() -> TransferFunction {
    TransferFunction::new(vec![40.0], vec![1.0, 6.0, 11.0, 6.0]).unwrap()
}

fn bench_gain_margin(c: &mut Criterion) {
    let mut group = c.benchmark_group("gain_margin");
    let tf = create_test_system();

    for npoints in [10_000, 100_000, 1_000_000].iter() {
        let search = MarginSearch::new(1e-2, 1e7, *npoints);
        let id = BenchmarkId::from_parameter(npoints);

        group.bench_with_input(id, npoints, |b, _| b.iter(|| black_box(tf.gain_margin(&search))));
    }

    group.finish();
}

fn bench_phase_margin(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase_margin");
    let tf = create_test_system();

    for npoints in [10_000, 100_000, 1_000_000].iter() {
        let search = MarginSearch::new(1e-2, 1e7, *npoints);
        let id = BenchmarkId::from_parameter(npoints);

        group.bench_with_input(id, npoints, |b, _| {
            b.iter(|| black_box(tf.phase_margin(&search)))
        });
    }

    group.finish();
}

fn bench_analyze_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.sample_size(10);

    let tf = create_test_system();
    let range = FrequencyRange::new(0.01, 100.0).unwrap();
    let analyzer = Analyzer::default();

    group.bench_function("default", |b| b.iter(|| black_box(analyzer.analyze(&tf, &range))));

    group.finish();
}

criterion_group!(
    benches,
    bench_gain_margin,
    bench_phase_margin,
    bench_analyze_default,
);
criterion_main!(benches);
