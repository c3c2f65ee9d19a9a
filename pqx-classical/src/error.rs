//! Tipos de erro para pqx-classical

use thiserror::Error;

/// Resultado customizado para operações clássicas
pub type ClassicalResult<T> = Result<T, ClassicalError>;

/// Erros que podem ocorrer nos baselines clássicos
#[derive(Debug, Clone, Error)]
pub enum ClassicalError {
    #[error("Both numbers must be prime: got p={p}, q={q}")]
    NotPrime { p: u64, q: u64 },

    #[error("p and q cannot be equal")]
    EqualPrimes,

    #[error("Target {target} is outside the {bits}-bit search space")]
    TargetOutOfRange { target: u64, bits: u32 },

    #[error("Key space of {0} bits is too large for exhaustive search")]
    KeySpaceTooLarge(u32),

    #[error("No modular inverse for e={e} mod phi={phi}")]
    NoInverse { e: u64, phi: u64 },
}
