//! # ⚛️ pqx-circuit — Circuitos de Ataque Quântico
//!
//! Constrói os circuitos quânticos parametrizados usados na comparação
//! clássico vs. quântico: order finding de Shor para N pequeno (15, 21),
//! busca de Grover com contagem de qubits variável e a QFT usada pelos dois.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumCircuit                         │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Operations (gates + measurements)        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Depth / gate-count metrics               │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//!          ▲                    ▲
//!   build_shor_circuit   build_grover_circuit
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use pqx_circuit::build_grover_circuit;
//!
//! let qc = build_grover_circuit(3, "101", None).unwrap();
//! assert_eq!(qc.num_qubits(), 3);
//! assert!(qc.depth() > 0);
//! ```

pub mod circuit;
pub mod error;
pub mod gates;
pub mod grover;
pub mod qft;
pub mod shor;

pub use circuit::{Operation, QuantumCircuit};
pub use error::{CircuitError, CircuitResult};
pub use gates::{Gate, Matrix2x2};
pub use grover::{build_grover_circuit, build_grover_oracle, diffuser, optimal_iterations};
pub use qft::{inverse_qft_circuit, qft_circuit};
pub use shor::{SUPPORTED_MODULI, build_shor_circuit};
