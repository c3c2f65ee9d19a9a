//! Varredura de ruído sobre Grover (dados de heatmap)
//!
//! Executa simulações reais por célula da grade, então é a parte cara
//! do analyzer; a camada de UI chama com spinner/progresso.

use serde::Serialize;

use crate::error::AnalyzerResult;
use pqx_circuit::build_grover_circuit;
use pqx_simulator::{NoiseKind, NoiseModel, SimulatorConfig, run};

/// Níveis de ruído padrão da varredura
pub const DEFAULT_NOISE_LEVELS: [f64; 8] = [0.0, 0.005, 0.01, 0.02, 0.03, 0.05, 0.08, 0.1];

/// Contagens de qubits padrão da varredura
pub const DEFAULT_QUBIT_COUNTS: [usize; 3] = [2, 3, 4];

/// Shots por célula da grade
pub const SWEEP_SHOTS: u32 = 512;

/// Célula da grade qubits × canal × nível
#[derive(Debug, Clone, Serialize)]
pub struct NoiseSweepPoint {
    pub qubits: usize,
    pub noise_kind: NoiseKind,
    pub noise_level: f64,
    pub success_probability: f64,
}

/// Varre tipos, níveis e contagens de qubits rodando Grover por célula
///
/// O alvo é o estado todo-uns de cada contagem de qubits; o sucesso é a
/// probabilidade medida desse alvo.
pub fn noise_sweep(
    kinds: &[NoiseKind],
    levels: &[f64],
    qubit_counts: &[usize],
    seed: Option<u64>,
) -> AnalyzerResult<Vec<NoiseSweepPoint>> {
    let mut rows = Vec::with_capacity(kinds.len() * levels.len() * qubit_counts.len());
    let config = SimulatorConfig {
        shots: SWEEP_SHOTS,
        seed,
    };

    for &nq in qubit_counts {
        let target = "1".repeat(nq);
        let circuit = build_grover_circuit(nq, &target, None)?;

        for &kind in kinds {
            for &level in levels {
                let noise = NoiseModel::new(kind, level);
                let outcome = run(&circuit, &noise, &config)?;
                let success = outcome.probabilities.get(&target).copied().unwrap_or(0.0);

                rows.push(NoiseSweepPoint {
                    qubits: nq,
                    noise_kind: kind,
                    noise_level: level,
                    success_probability: success,
                });
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_grid_shape() {
        let rows = noise_sweep(
            &[NoiseKind::Depolarizing, NoiseKind::BitFlip],
            &[0.0, 0.05],
            &[2],
            Some(3),
        )
        .unwrap();

        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert!(row.success_probability >= 0.0 && row.success_probability <= 1.0);
        }
    }

    #[test]
    fn test_sweep_ideal_cell_is_perfect() {
        // Grover de 2 qubits sem ruído acha "11" com probabilidade 1
        let rows = noise_sweep(&[NoiseKind::Depolarizing], &[0.0], &[2], Some(1)).unwrap();
        assert!((rows[0].success_probability - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_noise_hurts() {
        let rows =
            noise_sweep(&[NoiseKind::Depolarizing], &[0.0, 0.1], &[2], Some(7)).unwrap();
        assert!(rows[1].success_probability < rows[0].success_probability);
    }
}
