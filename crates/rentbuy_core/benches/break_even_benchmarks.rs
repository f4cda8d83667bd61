//! Criterion benchmarks for rentbuy_core
//!
//! Run with: cargo bench -p rentbuy_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jiff::civil::date;
use rentbuy_core::{
    Assumptions, SolverConfig, analyze, buyer_outcome, renter_opportunity_cost,
};

fn assumptions(holding_years: u32) -> Assumptions {
    Assumptions {
        holding_years,
        ..Assumptions::default()
    }
}

fn bench_buyer_model(c: &mut Criterion) {
    let a = assumptions(30);
    let start = date(2025, 1, 1);

    c.bench_function("buyer_outcome_30yr", |b| {
        b.iter(|| buyer_outcome(black_box(&a), black_box(start)))
    });
}

fn bench_renter_cost(c: &mut Criterion) {
    let a = assumptions(30);
    let start = date(2025, 1, 1);

    c.bench_function("renter_cost_30yr", |b| {
        b.iter(|| renter_opportunity_cost(black_box(2_500.0), black_box(&a), black_box(start)))
    });
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let config = SolverConfig::default();
    let start = date(2025, 1, 1);

    for years in [3u32, 10, 30, 100].iter() {
        let a = assumptions(*years);
        group.bench_with_input(BenchmarkId::new("holding_years", years), years, |b, _| {
            b.iter(|| analyze(black_box(&a), black_box(start), black_box(&config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_buyer_model, bench_renter_cost, bench_analysis);
criterion_main!(benches);
