//! Benchmark suite for the simplification pipeline
//!
//! Formulas are grouped by variable count, since the truth table and the
//! cover search both grow exponentially with it.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qmc_logic::cover::{minimum_cover, prime_implicants, CoverCheck};
use qmc_logic::{minterms, Formula, Simplifier};

/// Formulas of increasing width
const FORMULAS: &[(&str, &str)] = &[
    ("2vars", "(a&~b)|(~a&b)"),
    ("3vars", "(a&b)|(~a&c)|(b&c)"),
    ("4vars", "(a&~b&~c)|(a&~b&c&~d)|(a&b&~d)|(~a&b&~c&~d)|(a&b&c)"),
    ("5vars", "(a&b)|(c&~d)|(~a&e)|(b&~c&e)|(a^d)"),
    ("6vars", "(a>b)&(c|d)&(e/f)|(a&~c&f)"),
];

fn parsed() -> Vec<(&'static str, Formula)> {
    FORMULAS
        .iter()
        .map(|&(name, text)| (name, Formula::parse(text).unwrap()))
        .collect()
}

/// Benchmark: Truth table enumeration
fn bench_minterms(c: &mut Criterion) {
    let mut group = c.benchmark_group("minterms");

    for (name, formula) in parsed() {
        group.throughput(Throughput::Elements(1 << formula.variables().len()));
        group.bench_with_input(BenchmarkId::new("truth_table", name), &formula, |b, f| {
            b.iter(|| black_box(minterms(black_box(f))));
        });
    }

    group.finish();
}

/// Benchmark: Prime implicants and the cover search
fn bench_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("cover");

    for (name, formula) in parsed() {
        let table = minterms(&formula);
        group.bench_with_input(BenchmarkId::new("prime_implicants", name), &table, |b, t| {
            b.iter(|| black_box(prime_implicants(black_box(t))));
        });

        let primes = prime_implicants(&table);
        for check in [CoverCheck::Exact, CoverCheck::Mask] {
            let id = BenchmarkId::new(format!("minimum_cover_{:?}", check).to_lowercase(), name);
            group.bench_function(id, |b| {
                b.iter(|| black_box(minimum_cover(&primes, black_box(&table), check, None)));
            });
        }
    }

    group.finish();
}

/// Benchmark: Full pipeline (minterms + cover + reconstruction + patterns)
fn bench_full_pipeline(c: &mut Criterion) {
    let simplifier = Simplifier::default();
    let mut group = c.benchmark_group("full_pipeline");

    for (name, formula) in parsed() {
        group.bench_with_input(BenchmarkId::new("simplify", name), &formula, |b, f| {
            b.iter(|| black_box(simplifier.simplify(black_box(f))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_minterms, bench_cover, bench_full_pipeline);
criterion_main!(benches);
