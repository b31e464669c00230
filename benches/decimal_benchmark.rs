// ============================================================================
// Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - text to value across input shapes
// 2. Arithmetic - add/sub including the carry and borrow paths
// 3. Comparison - full ordering
// 4. Rendering - plain and thousands-grouped output
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exactdec::prelude::*;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in [
        "7",
        "123456789.012345",
        "-8675309.1337",
        "18446744073709551615.18446744073709551615",
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(input.len()),
            &input,
            |b, input| {
                b.iter(|| black_box(Decimal::parse(black_box(input))));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    let cases = [
        ("same_sign", "123456789.012345", "8675309.1337"),
        ("carry", "111.555", "111.666"),
        ("mixed_sign", "123456789.012345", "-8675309.1337"),
    ];

    for (name, lhs, rhs) in cases {
        let lhs = Decimal::parse(lhs).unwrap();
        let rhs = Decimal::parse(rhs).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(lhs, rhs),
            |b, (lhs, rhs)| {
                b.iter(|| black_box(lhs.checked_add(rhs)));
            },
        );
    }

    group.finish();
}

fn benchmark_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub");

    let cases = [
        ("no_borrow", "123456789.012345", "8675309.0012"),
        ("borrow", "111.111", "0.999"),
    ];

    for (name, lhs, rhs) in cases {
        let lhs = Decimal::parse(lhs).unwrap();
        let rhs = Decimal::parse(rhs).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(lhs, rhs),
            |b, (lhs, rhs)| {
                b.iter(|| black_box(lhs.checked_sub(rhs)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn benchmark_cmp(c: &mut Criterion) {
    let lhs = Decimal::parse("123456789.012345").unwrap();
    let rhs = Decimal::parse("-123456789.012345").unwrap();

    c.bench_function("cmp", |b| {
        b.iter(|| black_box(black_box(&lhs).cmp(black_box(&rhs))));
    });
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn benchmark_render(c: &mut Criterion) {
    let value = Decimal::parse("1234567890.012345").unwrap();

    c.bench_function("render_plain", |b| {
        b.iter(|| black_box(value.to_string()));
    });

    c.bench_function("render_grouped", |b| {
        b.iter(|| black_box(value.to_grouped_string()));
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_add,
    benchmark_sub,
    benchmark_cmp,
    benchmark_render,
);
criterion_main!(benches);
