//! # Classical Attack Benchmarks
//!
//! Measures trial-division factorization and exhaustive key search, the
//! baselines the quantum circuits are compared against.
//!
//! Run: `cargo bench --bench classical_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pqx_classical::{brute_force_search, factorize, generate_keypair, is_prime, mod_pow};

/// Benchmark factorization of semiprimes of growing size
fn bench_factorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorization");

    // Products of two primes of similar magnitude
    for n in [15u64, 3233, 1_000_003 * 999_983] {
        group.bench_with_input(BenchmarkId::new("trial_division", n), &n, |b, &n| {
            b.iter(|| black_box(factorize(black_box(n))))
        });
    }

    group.finish();
}

/// Benchmark exhaustive symmetric key search
fn bench_key_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_search");

    for bits in [8u32, 16, 20] {
        // Worst case: the secret is the last candidate
        let target = (1u64 << bits) - 1;
        group.bench_with_input(BenchmarkId::new("brute_force", bits), &bits, |b, &bits| {
            b.iter(|| black_box(brute_force_search(black_box(target), bits)))
        });
    }

    group.finish();
}

/// Benchmark the RSA primitives
fn bench_rsa_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsa_primitives");

    group.bench_function("is_prime_large", |b| {
        b.iter(|| black_box(is_prime(black_box(1_000_003))))
    });

    group.bench_function("mod_pow", |b| {
        b.iter(|| black_box(mod_pow(black_box(65537), black_box(1_000_003), 3233)))
    });

    group.bench_function("generate_keypair", |b| {
        b.iter(|| black_box(generate_keypair(61, 53)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_factorization,
    bench_key_search,
    bench_rsa_primitives,
);

criterion_main!(benches);
