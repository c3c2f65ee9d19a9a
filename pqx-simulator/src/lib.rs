//! # 🎛️ pqx-simulator — Simulação de Vetor de Estado
//!
//! Executa circuitos do `pqx-circuit` em um vetor de estado denso de
//! 2^n amplitudes, com canais de ruído NISQ opcionais (depolarizing,
//! bit flip, phase flip) e amostragem de medição com seed.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(2^n):**
//! - Uma passada pelas amplitudes por porta
//!
//! **Ideal run — O(G × 2^n + shots × log 2^n):**
//! - G = número de gates; amostragem por busca binária na cumulativa
//!
//! **Noisy run — O(shots × G × 2^n):**
//! - Uma trajetória estocástica completa por shot
//!
//! **Scalability:** os circuitos da demonstração usam no máximo 14
//! qubits (Shor N=21); o limite duro é [`MAX_QUBITS`].
//!
//! ## Exemplo
//!
//! ```
//! use pqx_circuit::build_grover_circuit;
//! use pqx_simulator::{run, NoiseModel, SimulatorConfig};
//!
//! let qc = build_grover_circuit(2, "11", None).unwrap();
//! let config = SimulatorConfig { shots: 256, seed: Some(7) };
//! let outcome = run(&qc, &NoiseModel::ideal(), &config).unwrap();
//!
//! assert!(outcome.probabilities["11"] > 0.9);
//! ```

pub mod error;
pub mod noise;
pub mod runner;
pub mod statevector;

pub use error::{SimulatorError, SimulatorResult};
pub use noise::{NoiseKind, NoiseModel};
pub use runner::{RunMetrics, RunOutcome, SimulatorConfig, run};
pub use statevector::{MAX_QUBITS, StateVector};

#[cfg(test)]
mod tests;
