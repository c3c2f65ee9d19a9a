//! # End-to-End Simulation Benchmarks
//!
//! Measures full circuit construction and execution for the Shor and
//! Grover demonstrations, ideal and noisy.
//!
//! Run: `cargo bench --bench simulation_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pqx_analyzer::speedup_factors;
use pqx_circuit::{build_grover_circuit, build_shor_circuit};
use pqx_simulator::{NoiseKind, NoiseModel, SimulatorConfig, run};

fn config(shots: u32) -> SimulatorConfig {
    SimulatorConfig {
        shots,
        seed: Some(42),
    }
}

/// Benchmark circuit construction alone
fn bench_circuit_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_build");

    group.bench_function("shor_n15", |b| {
        b.iter(|| black_box(build_shor_circuit(15, Some(7))))
    });

    group.bench_function("shor_n21", |b| {
        b.iter(|| black_box(build_shor_circuit(21, Some(2))))
    });

    for qubits in [3usize, 6, 9] {
        group.bench_with_input(BenchmarkId::new("grover", qubits), &qubits, |b, &n| {
            let target = "1".repeat(n);
            b.iter(|| black_box(build_grover_circuit(n, &target, None)))
        });
    }

    group.finish();
}

/// Benchmark ideal (noiseless) simulation
fn bench_ideal_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ideal_simulation");
    group.sample_size(10);

    for qubits in [3usize, 5, 7] {
        let target = "1".repeat(qubits);
        let circuit = build_grover_circuit(qubits, &target, None).unwrap();

        group.bench_with_input(BenchmarkId::new("grover", qubits), &circuit, |b, qc| {
            b.iter(|| black_box(run(qc, &NoiseModel::ideal(), &config(1024))))
        });
    }

    let shor = build_shor_circuit(15, Some(7)).unwrap();
    group.bench_function("shor_n15", |b| {
        b.iter(|| black_box(run(&shor, &NoiseModel::ideal(), &config(1024))))
    });

    group.finish();
}

/// Benchmark noisy trajectory simulation (one trajectory per shot)
fn bench_noisy_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("noisy_simulation");
    group.sample_size(10);

    let circuit = build_grover_circuit(3, "111", None).unwrap();

    for kind in NoiseKind::all() {
        group.bench_with_input(
            BenchmarkId::new("grover_3q", kind.name()),
            &kind,
            |b, &kind| {
                let noise = NoiseModel::new(kind, 0.02);
                b.iter(|| black_box(run(&circuit, &noise, &config(128))))
            },
        );
    }

    group.finish();
}

/// Benchmark analytic speedup tables
fn bench_speedup_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("speedup_tables");

    let bits: Vec<u32> = (1..=64).map(|i| i * 64).collect();
    group.bench_function("speedup_factors_64_rows", |b| {
        b.iter(|| black_box(speedup_factors(black_box(&bits))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_circuit_build,
    bench_ideal_simulation,
    bench_noisy_simulation,
    bench_speedup_tables,
);

criterion_main!(benches);
