//! # State Vector Benchmarks
//!
//! Measures dense state-vector gate application across register sizes.
//! Each gate is one O(2^n) pass over the amplitudes.
//!
//! Run: `cargo bench --bench statevector_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pqx_circuit::Gate;
use pqx_simulator::StateVector;

/// Benchmark single-qubit gate application
fn bench_single_qubit_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gates");

    for num_qubits in [8usize, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("hadamard", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut sv = StateVector::new(n).unwrap();
                b.iter(|| sv.apply_gate(black_box(&Gate::H), &[0]).unwrap())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("pauli_x", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut sv = StateVector::new(n).unwrap();
                b.iter(|| sv.apply_gate(black_box(&Gate::X), &[0]).unwrap())
            },
        );
    }

    group.finish();
}

/// Benchmark controlled gates
fn bench_controlled_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled_gates");

    for num_qubits in [8usize, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("cx", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut sv = StateVector::new(n).unwrap();
                sv.apply_gate(&Gate::H, &[0]).unwrap();
                b.iter(|| sv.apply_gate(black_box(&Gate::Cx), &[0, 1]).unwrap())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ccx", num_qubits),
            &num_qubits,
            |b, &n| {
                let mut sv = StateVector::new(n).unwrap();
                sv.apply_gate(&Gate::H, &[0]).unwrap();
                sv.apply_gate(&Gate::H, &[1]).unwrap();
                b.iter(|| sv.apply_gate(black_box(&Gate::Ccx), &[0, 1, 2]).unwrap())
            },
        );
    }

    group.finish();
}

/// Benchmark probability extraction
fn bench_probabilities(c: &mut Criterion) {
    let mut group = c.benchmark_group("probabilities");

    for num_qubits in [8usize, 12, 16] {
        let mut sv = StateVector::new(num_qubits).unwrap();
        for q in 0..num_qubits {
            sv.apply_gate(&Gate::H, &[q]).unwrap();
        }

        group.bench_with_input(
            BenchmarkId::new("full_distribution", num_qubits),
            &sv,
            |b, sv| b.iter(|| black_box(sv.probabilities())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit_gates,
    bench_controlled_gates,
    bench_probabilities,
);

criterion_main!(benches);
