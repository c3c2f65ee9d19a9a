//! # 🔑 pqx-classical — Baselines Clássicos
//!
//! Implementa os ataques clássicos de referência contra criptografia:
//! fatoração RSA por divisão por tentativa e busca exaustiva de chave
//! simétrica. Cada operação reporta tempo decorrido e iterações.
//!
//! ## Computational Complexity
//!
//! **Factorization — O(√N):**
//! - Trial division over odd candidates up to √N
//!
//! **Symmetric search — O(2^b):**
//! - b = key size in bits
//! - Average case checks half the space, worst case all of it
//!
//! These loops are intentionally the textbook baselines that Shor and
//! Grover are compared against in `pqx-analyzer`.
//!
//! ## Exemplo
//!
//! ```
//! use pqx_classical::{factorize, generate_keypair};
//!
//! let outcome = factorize(15);
//! assert_eq!((outcome.p, outcome.q), (3, 5));
//!
//! let keys = generate_keypair(61, 53).unwrap();
//! assert_eq!(keys.modulus(), 61 * 53);
//! ```

pub mod error;
pub mod rsa;
pub mod symmetric;

pub use error::{ClassicalError, ClassicalResult};
pub use rsa::{
    FactorizationOutcome, RsaKeyPair, factorize, gcd, generate_keypair, generate_keypair_with_rng,
    is_prime, mod_pow,
};
pub use symmetric::{SearchOutcome, brute_force_search};

#[cfg(test)]
mod tests;
