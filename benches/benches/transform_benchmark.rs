//! Transform benchmarks over synthetic daily series.
//!
//! Run with: `cargo bench --package tickerline-bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tickerline_bench::{SeriesConfig, synthetic_series};
use tickerline_lib::{
    ChartView, DateRange, Granularity, aggregate, filter_by_range, normalize_to_percent,
};

/// Roughly one, ten and forty years of trading days.
const SIZES: [usize; 3] = [252, 2_520, 10_080];

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for size in SIZES {
        let series = synthetic_series(&SeriesConfig::default().with_trading_days(size))
            .expect("valid synthetic series");
        group.throughput(Throughput::Elements(size as u64));
        for granularity in [Granularity::Weekly, Granularity::Monthly] {
            group.bench_with_input(
                BenchmarkId::new(granularity.to_string(), size),
                series.bars(),
                |b, bars| b.iter(|| aggregate(black_box(bars), granularity)),
            );
        }
    }
    group.finish();
}

fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_range");
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2005, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2010, 12, 31).expect("valid date"),
    )
    .expect("valid range");
    for size in SIZES {
        let series = synthetic_series(&SeriesConfig::default().with_trading_days(size))
            .expect("valid synthetic series");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), series.bars(), |b, bars| {
            b.iter(|| filter_by_range(black_box(bars), Some(&range)));
        });
    }
    group.finish();
}

fn normalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_to_percent");
    for size in SIZES {
        let series = synthetic_series(&SeriesConfig::default().with_trading_days(size))
            .expect("valid synthetic series");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), series.bars(), |b, bars| {
            b.iter(|| normalize_to_percent(black_box(bars)));
        });
    }
    group.finish();
}

fn chart_view_benchmark(c: &mut Criterion) {
    let series = synthetic_series(&SeriesConfig::default().with_trading_days(SIZES[2]))
        .expect("valid synthetic series");
    c.bench_function("chart_view/weekly", |b| {
        b.iter(|| ChartView::build(black_box(&series), None, Granularity::Weekly));
    });
}

criterion_group!(
    benches,
    aggregate_benchmark,
    filter_benchmark,
    normalize_benchmark,
    chart_view_benchmark
);
criterion_main!(benches);
