//! Tipos de erro para pqx-simulator

use thiserror::Error;

/// Resultado customizado para simulação
pub type SimulatorResult<T> = Result<T, SimulatorError>;

/// Erros que podem ocorrer durante a simulação
#[derive(Debug, Clone, Error)]
pub enum SimulatorError {
    #[error("Simulating {requested} qubits exceeds the {max}-qubit limit")]
    TooManyQubits { requested: usize, max: usize },

    #[error("Qubit {qubit} out of range for {num_qubits}-qubit state")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("Gate '{gate}' applied to {got} operands")]
    InvalidOperands { gate: &'static str, got: usize },

    #[error("Unsupported noise type: {0}")]
    UnsupportedNoise(String),

    #[error("Shots must be greater than zero")]
    ZeroShots,
}
