//! Tipos de erro para pqx-circuit

use thiserror::Error;

/// Resultado customizado para construção de circuitos
pub type CircuitResult<T> = Result<T, CircuitError>;

/// Erros que podem ocorrer ao construir circuitos
#[derive(Debug, Clone, Error)]
pub enum CircuitError {
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit circuit")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("Classical bit {clbit} out of range for {num_clbits} classical bits")]
    ClbitOutOfRange { clbit: usize, num_clbits: usize },

    #[error("Gate '{gate}' expects {expected} qubits, got {got}")]
    WrongArity {
        gate: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Gate operands must be distinct qubits")]
    DuplicateQubits,

    #[error("Qubit map has {got} entries for a {expected}-qubit subcircuit")]
    QubitMapMismatch { expected: usize, got: usize },

    #[error("Cannot invert or append a circuit containing measurements")]
    HasMeasurements,

    #[error("Circuit needs at least one qubit")]
    EmptyRegister,

    #[error("Only N=15 and N=21 are currently supported for demonstration, got N={0}")]
    UnsupportedModulus(u64),

    #[error("'a'={a} must be coprime to {n} (and one of 2, 7, 8, 11, 13 for N=15)")]
    InvalidBase { a: u64, n: u64 },

    #[error("Target state length {got} must match the number of qubits {expected}")]
    TargetLengthMismatch { expected: usize, got: usize },

    #[error("Target state must be binary, found '{0}'")]
    InvalidTargetBit(char),
}
