// ============================================================================
// Mortgage Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Single Calculations - Each of the three formulas in isolation
// 2. Full Prequalification - Validation plus the composed flow
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mortgage_engine::prelude::*;

// ============================================================================
// Single Calculation Benchmarks
// ============================================================================

fn benchmark_single_calculations(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_calculations");

    group.bench_function("maximum_affordable_payment", |b| {
        b.iter(|| {
            black_box(maximum_affordable_payment(
                black_box(10_000.0),
                black_box(500.0),
                black_box(0.36),
            ))
        })
    });

    group.bench_function("maximum_loan_amount", |b| {
        b.iter(|| {
            black_box(maximum_loan_amount(
                black_box(3_100.0),
                black_box(4.5),
                black_box(10),
            ))
        })
    });

    group.bench_function("monthly_mortgage_payment", |b| {
        b.iter(|| {
            black_box(monthly_mortgage_payment(
                black_box(299_116.90),
                black_box(4.5),
                black_box(10),
            ))
        })
    });

    group.finish();
}

// ============================================================================
// Full Prequalification Benchmarks
// The exponentiation cost scales with the term, so sweep the term range
// ============================================================================

fn benchmark_prequalification(c: &mut Criterion) {
    let mut group = c.benchmark_group("prequalification");

    for term_years in [1u32, 10, 30] {
        let request = PrequalificationRequest {
            monthly_income: 10_000.0,
            monthly_debt: 500.0,
            interest: 4.5,
            loan_term: term_years,
            dti: None,
        };

        group.bench_with_input(
            BenchmarkId::new("prequalify", term_years),
            &request,
            |b, request| b.iter(|| black_box(prequalify(black_box(request)))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculations,
    benchmark_prequalification
);
criterion_main!(benches);
