// ============================================================================
// Fraction Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Core Operations - add/multiply plus the checked and reducing variants
// 2. Sequences - Iterator sums and calculator folds under each preset
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fraction_arith::prelude::*;
use std::hint::black_box;

fn operands(count: i64) -> Vec<Fraction> {
    (1..=count)
        .map(|i| Fraction::new(i % 97 - 48, i % 13 + 1))
        .collect()
}

// ============================================================================
// Core Operation Benchmarks
// ============================================================================

fn benchmark_core_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("core_operations");
    let a = Fraction::new(2, 3);
    let b = Fraction::new(4, 5);

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(add(black_box(a), black_box(b))))
    });
    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(multiply(black_box(a), black_box(b))))
    });
    group.bench_function("checked_add", |bench| {
        bench.iter(|| black_box(black_box(a).checked_add(black_box(b))))
    });
    group.bench_function("reduced", |bench| {
        let unreduced = Fraction::new(6 * 7 * 11, 6 * 13);
        bench.iter(|| black_box(black_box(unreduced).reduced()))
    });

    group.finish();
}

// ============================================================================
// Sequence Benchmarks
// ============================================================================

fn benchmark_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequences");

    for count in [10, 100, 1000].iter() {
        let values = operands(*count);

        group.bench_with_input(BenchmarkId::new("sum", count), &values, |bench, values| {
            bench.iter(|| black_box(values.iter().sum::<Fraction>()))
        });

        let permissive = FractionCalculator::new(ArithmeticConfig::permissive("bench"));
        group.bench_with_input(
            BenchmarkId::new("calculator_fold_permissive", count),
            &values,
            |bench, values| {
                bench.iter(|| black_box(permissive.fold(Operation::Add, values.iter().copied())))
            },
        );

        let strict = FractionCalculator::new(ArithmeticConfig::strict("bench"));
        group.bench_with_input(
            BenchmarkId::new("calculator_fold_strict", count),
            &values,
            |bench, values| {
                bench.iter(|| black_box(strict.fold(Operation::Add, values.iter().copied())))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_core_operations, benchmark_sequences);
criterion_main!(benches);
