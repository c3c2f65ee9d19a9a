//! Testes integrados para pqx-classical

use crate::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_keygen_roundtrip() {
    let mut rng = StdRng::seed_from_u64(7);
    let keys = generate_keypair_with_rng(61, 53, &mut rng).unwrap();

    let message = 42;
    let ciphertext = keys.encrypt(message);
    assert_ne!(ciphertext, message);
    assert_eq!(keys.decrypt(ciphertext), message);
}

#[test]
fn test_factor_recovers_keypair_primes() {
    let mut rng = StdRng::seed_from_u64(9);
    let keys = generate_keypair_with_rng(61, 53, &mut rng).unwrap();

    let outcome = factorize(keys.modulus());
    assert_eq!(outcome.p * outcome.q, keys.modulus());
    assert!(is_prime(outcome.p));
    assert!(is_prime(outcome.q));
}

#[test]
fn test_factorization_iteration_growth() {
    // Semiprimos maiores exigem mais iterações de divisão por tentativa
    let small = factorize(3 * 5);
    let large = factorize(101 * 103);
    assert!(large.iterations > small.iterations);
}

#[test]
fn test_search_average_cost_scales_with_bits() {
    // A chave no meio do espaço custa metade dele
    let outcome = brute_force_search(1 << 9, 10).unwrap();
    assert_eq!(outcome.iterations, (1 << 9) + 1);
}
