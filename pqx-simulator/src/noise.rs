//! Canais de ruído NISQ por trajetória estocástica
//!
//! O modelo segue a parametrização da demonstração: erro de um qubit com
//! probabilidade `level`, erro dobrado para gates de dois ou mais qubits.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SimulatorError, SimulatorResult};
use crate::statevector::StateVector;
use pqx_circuit::Gate;

/// Tipo de canal de ruído
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Pauli aleatório (X, Y ou Z) com probabilidade p
    Depolarizing,
    /// X com probabilidade p
    BitFlip,
    /// Z com probabilidade p
    PhaseFlip,
}

impl NoiseKind {
    /// Nome canônico (formato aceito pela CLI)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Depolarizing => "depolarizing",
            Self::BitFlip => "bit_flip",
            Self::PhaseFlip => "phase_flip",
        }
    }

    /// Todos os canais disponíveis
    pub fn all() -> [NoiseKind; 3] {
        [Self::Depolarizing, Self::BitFlip, Self::PhaseFlip]
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NoiseKind {
    type Err = SimulatorError;

    fn from_str(s: &str) -> SimulatorResult<Self> {
        match s {
            "depolarizing" => Ok(Self::Depolarizing),
            "bit_flip" => Ok(Self::BitFlip),
            "phase_flip" => Ok(Self::PhaseFlip),
            other => Err(SimulatorError::UnsupportedNoise(other.to_string())),
        }
    }
}

/// Modelo de ruído aplicado após cada porta
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseModel {
    /// Canal de erro
    pub kind: NoiseKind,
    /// Probabilidade de erro por qubit por porta
    pub level: f64,
}

impl NoiseModel {
    /// Cria modelo com canal e nível dados
    pub fn new(kind: NoiseKind, level: f64) -> Self {
        Self { kind, level }
    }

    /// Simulação ideal (nível zero)
    pub fn ideal() -> Self {
        Self {
            kind: NoiseKind::Depolarizing,
            level: 0.0,
        }
    }

    /// Nível <= 0 significa nenhum erro injetado
    pub fn is_ideal(&self) -> bool {
        self.level <= 0.0
    }

    /// Injeta erros nos qubits tocados por uma porta
    ///
    /// Gates de dois ou mais qubits sofrem o dobro do nível, como no
    /// modelo da demonstração original.
    pub fn apply<R: Rng>(
        &self,
        state: &mut StateVector,
        qubits: &[usize],
        rng: &mut R,
    ) -> SimulatorResult<()> {
        if self.is_ideal() {
            return Ok(());
        }

        let factor = if qubits.len() >= 2 { 2.0 } else { 1.0 };
        let p = (self.level * factor).min(1.0);

        for &q in qubits {
            if rng.r#gen::<f64>() >= p {
                continue;
            }
            let pauli = match self.kind {
                NoiseKind::Depolarizing => match rng.gen_range(0..3u8) {
                    0 => Gate::X,
                    1 => Gate::Y,
                    _ => Gate::Z,
                },
                NoiseKind::BitFlip => Gate::X,
                NoiseKind::PhaseFlip => Gate::Z,
            };
            state.apply_gate(&pauli, &[q])?;
        }
        Ok(())
    }
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self::ideal()
    }
}
