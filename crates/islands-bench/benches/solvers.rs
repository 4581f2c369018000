//! Criterion benchmarks comparing the three island counters.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use islands_bench::{bench_grid, BENCH_SEED, SQUARE_SIDES, STRIP_SHAPES};
use islands_solve::Algorithm;

/// Benchmark: every solver on square grids of increasing side.
fn bench_square_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("square");
    for side in SQUARE_SIDES {
        let grid = bench_grid(side, side, BENCH_SEED).unwrap();
        group.throughput(Throughput::Elements((side * side) as u64));
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), side), &grid, |b, g| {
                b.iter(|| std::hint::black_box(algorithm.count(g).unwrap()));
            });
        }
    }
    group.finish();
}

/// Benchmark: every solver on wide and tall strips of the same cell count.
fn bench_strip_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip");
    for (height, width) in STRIP_SHAPES {
        let grid = bench_grid(height, width, BENCH_SEED).unwrap();
        group.throughput(Throughput::Elements((height * width) as u64));
        let shape = format!("{height}x{width}");
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), &shape), &grid, |b, g| {
                b.iter(|| std::hint::black_box(algorithm.count(g).unwrap()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_square_grids, bench_strip_grids);
criterion_main!(benches);
