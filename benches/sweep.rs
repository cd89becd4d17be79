//! Sweep Benchmarks
//!
//! Measures what a conformance run spends its time on:
//!
//! - building a fixture (drawing both 10,000-sample pools)
//! - one full sweep (every window) of representative instructions, from
//!   plain lane-wise arithmetic to immediate sweeps and table lookups
//! - a short pass over the whole catalogue, single-threaded and on a
//!   rayon pool

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanecheck::fixture::{Fixture, MAX_ITERATIONS};
use lanecheck::registry::Instruction;
use lanecheck::runner::{run, run_instruction, RunConfig};

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// One instruction per catalogue family shape.
const REPRESENTATIVE: &[Instruction] = &[
    Instruction::vaddq_s8,      // lane-wise, one wide register
    Instruction::vqdmulhq_s32,  // saturating, widened intermediate
    Instruction::vmaxq_f32,     // float rules plus infinity injection
    Instruction::vceqq_f32,     // masks plus NaN injection
    Instruction::vshrq_n_s64,   // 64-immediate sweep per window
    Instruction::vtbl4_u8,      // four-register table
    Instruction::vreinterpretq_u8_f32,
];

/// Windows per instruction in the whole-catalogue pass.
const CATALOGUE_WINDOWS: usize = 16;

fn bench_seed() -> u64 {
    StdRng::seed_from_u64(42).random()
}

// ================================================================================================
// BENCHMARKS
// ================================================================================================

fn benchmark_fixture(c: &mut Criterion) {
    let seed = bench_seed();
    c.bench_function("fixture_new", |b| b.iter(|| black_box(Fixture::new(black_box(seed)))));
}

fn benchmark_full_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_sweep");
    group.throughput(Throughput::Elements(MAX_ITERATIONS as u64));
    group.sample_size(10);

    let mut fixture = Fixture::new(bench_seed());
    for &instruction in REPRESENTATIVE {
        group.bench_with_input(
            BenchmarkId::from_parameter(instruction),
            &instruction,
            |b, &instruction| {
                b.iter(|| black_box(run_instruction(&mut fixture, instruction, MAX_ITERATIONS)))
            },
        );
    }

    group.finish();
}

fn benchmark_catalogue(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalogue");
    group.throughput(Throughput::Elements(Instruction::COUNT as u64));
    group.sample_size(10);

    let jobs = std::thread::available_parallelism().map_or(1, |n| n.get());
    for jobs in [1, jobs] {
        let Ok(config) = RunConfig::new(bench_seed(), CATALOGUE_WINDOWS, jobs) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("jobs", jobs), &config, |b, config| {
            b.iter(|| black_box(run(config, Instruction::ALL)))
        });
    }

    group.finish();
}

fn all_benchmarks(c: &mut Criterion) {
    println!(
        "Sweeping {} representative instructions over {} windows",
        REPRESENTATIVE.len(),
        MAX_ITERATIONS
    );

    let start_time = Instant::now();

    benchmark_fixture(c);
    benchmark_full_sweeps(c);
    benchmark_catalogue(c);

    println!(
        "Benchmark suite completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

// ================================================================================================
// CRITERION INTEGRATION
// ================================================================================================

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
