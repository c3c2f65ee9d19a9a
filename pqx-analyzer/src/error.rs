//! Tipos de erro para pqx-analyzer

use thiserror::Error;

use pqx_circuit::CircuitError;
use pqx_simulator::SimulatorError;

/// Resultado customizado para análise
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Erros que podem ocorrer ao gerar dados de análise
#[derive(Debug, Clone, Error)]
pub enum AnalyzerError {
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    Simulator(#[from] SimulatorError),

    #[error("Mismatched lengths: {probs} success probabilities vs {levels} noise levels")]
    LengthMismatch { probs: usize, levels: usize },
}
