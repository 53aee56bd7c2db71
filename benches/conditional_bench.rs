//! Benchmark for conditional pipelines: MemoizedBool and Conditional.
//!
//! Measures the memoized fast path against first evaluation, and the cost
//! of building and forcing composed expressions.

use condflow::{Conditional, MemoizedBool};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_memoized_evaluate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoized_evaluate");

    // Cold path: construction plus first evaluation
    group.bench_function("initial_evaluation", |bencher| {
        bencher.iter(|| {
            let memo = MemoizedBool::new(|| {
                let mut sum = 0u64;
                for index in 0..100 {
                    sum += index;
                }
                sum % 2 == 0
            });
            black_box(memo.evaluate())
        });
    });

    // Hot path: the lock-free cached read
    group.bench_function("cached_read", |bencher| {
        let memo = MemoizedBool::new(|| true);
        let _ = memo.evaluate();
        bencher.iter(|| black_box(memo.evaluate()));
    });

    group.finish();
}

fn benchmark_composition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composition");

    for depth in [4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("and_chain_depth", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| {
                    let mut pipeline = Conditional::when(true);
                    for _ in 0..depth {
                        pipeline = pipeline.and_lazy(|| true);
                    }
                    black_box(pipeline.value())
                });
            },
        );
    }

    group.bench_function("choose_branch", |bencher| {
        bencher.iter(|| {
            let chosen = Conditional::when_lazy(|| true)
                .choose(|| 1u64, || 0u64)
                .unwrap_or(0);
            black_box(chosen)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_memoized_evaluate,
    benchmark_composition
);
criterion_main!(benches);
