//! Benchmarks for aggregation and metric passes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use chrono::Duration;
use minutebars_core::types::Rule;
use minutebars_data::{aggregate, simulate_1min_ohlc};
use minutebars_indicators::{add_vwap_from_1m, trailing_window, Mean, Median};

fn benchmark_aggregate(c: &mut Criterion) {
    let table = simulate_1min_ohlc(100.0, "2025-10-07", 0.0, 0.0018, Some(42)).unwrap();
    let mut group = c.benchmark_group("aggregate");

    for rule in Rule::all() {
        group.bench_with_input(BenchmarkId::from_parameter(rule), rule, |b, rule| {
            b.iter(|| aggregate(black_box(&table), *rule))
        });
    }

    group.finish();
}

fn benchmark_vwap(c: &mut Criterion) {
    let table = simulate_1min_ohlc(100.0, "2025-10-07", 0.0, 0.0018, Some(42)).unwrap();
    let df5 = aggregate(&table, Rule::FiveMinute).unwrap();

    c.bench_function("vwap_5min", |b| {
        b.iter(|| add_vwap_from_1m(black_box(&df5), black_box(&table), Rule::FiveMinute))
    });
}

fn benchmark_trailing_window(c: &mut Criterion) {
    let table = simulate_1min_ohlc(100.0, "2025-10-07", 0.0, 0.0018, Some(42)).unwrap();
    let stamps = table.timestamps();
    let closes = table.closes();
    let mut group = c.benchmark_group("trailing_window");

    group.bench_function("mean_30m", |b| {
        b.iter(|| trailing_window(black_box(&stamps), black_box(&closes), Duration::minutes(30), &Mean))
    });
    group.bench_function("median_15m", |b| {
        b.iter(|| trailing_window(black_box(&stamps), black_box(&closes), Duration::minutes(15), &Median))
    });

    group.finish();
}

criterion_group!(benches, benchmark_aggregate, benchmark_vwap, benchmark_trailing_window);
criterion_main!(benches);
