//! Execução de circuitos com amostragem e métricas

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

use crate::error::{SimulatorError, SimulatorResult};
use crate::noise::NoiseModel;
use crate::statevector::StateVector;
use pqx_circuit::{Operation, QuantumCircuit};

/// Configuração da simulação
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Número de medições amostradas
    pub shots: u32,
    /// Seed do RNG (None = entropia do sistema)
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
        }
    }
}

/// Métricas de uma execução
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Tempo de simulação em segundos
    pub execution_time_seconds: f64,
    /// Profundidade do circuito
    pub depth: usize,
    /// Total de operações (gates + medições)
    pub total_gates: u64,
    /// Contagem por nome de porta
    pub gate_counts: BTreeMap<String, u64>,
    /// Qubits usados pelo circuito
    pub qubits_required: usize,
}

/// Resultado de uma execução
///
/// As chaves seguem a convenção do Qiskit: bit clássico mais
/// significativo primeiro.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Frequência relativa de cada resultado (count / shots)
    pub probabilities: BTreeMap<String, f64>,
    /// Contagem bruta por resultado
    pub counts: BTreeMap<String, u64>,
    /// Métricas do circuito e da execução
    pub metrics: RunMetrics,
}

/// Executa um circuito no simulador de vetor de estado
///
/// Sem ruído o circuito roda uma única vez e os shots são amostrados da
/// distribuição final; com ruído cada shot é uma trajetória estocástica
/// independente.
pub fn run(
    circuit: &QuantumCircuit,
    noise: &NoiseModel,
    config: &SimulatorConfig,
) -> SimulatorResult<RunOutcome> {
    if config.shots == 0 {
        return Err(SimulatorError::ZeroShots);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Circuito sem medições mede todos os qubits (fallback do Qiskit Aer)
    let mut measured = circuit.measurements();
    let num_clbits = if measured.is_empty() {
        measured = (0..circuit.num_qubits()).map(|q| (q, q)).collect();
        circuit.num_qubits()
    } else {
        circuit.num_clbits()
    };

    let start = Instant::now();
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();

    if noise.is_ideal() {
        let sv = apply_all(circuit, noise, None)?;
        for basis in sv.sample_many(config.shots, &mut rng) {
            *counts.entry(format_key(basis, &measured, num_clbits)).or_insert(0) += 1;
        }
    } else {
        for _ in 0..config.shots {
            let sv = apply_all(circuit, noise, Some(&mut rng))?;
            let basis = sv.sample(&mut rng);
            *counts.entry(format_key(basis, &measured, num_clbits)).or_insert(0) += 1;
        }
    }

    let execution_time_seconds = start.elapsed().as_secs_f64();

    let shots = f64::from(config.shots);
    let probabilities = counts
        .iter()
        .map(|(key, &count)| (key.clone(), count as f64 / shots))
        .collect();

    Ok(RunOutcome {
        probabilities,
        counts,
        metrics: RunMetrics {
            execution_time_seconds,
            depth: circuit.depth(),
            total_gates: circuit.total_gates(),
            gate_counts: circuit.gate_counts(),
            qubits_required: circuit.num_qubits(),
        },
    })
}

fn apply_all(
    circuit: &QuantumCircuit,
    noise: &NoiseModel,
    mut rng: Option<&mut StdRng>,
) -> SimulatorResult<StateVector> {
    let mut sv = StateVector::new(circuit.num_qubits())?;

    for op in circuit.ops() {
        if let Operation::Gate { gate, qubits } = op {
            sv.apply_gate(gate, qubits)?;
            if let Some(rng) = rng.as_deref_mut() {
                noise.apply(&mut sv, qubits, rng)?;
            }
        }
    }
    Ok(sv)
}

/// Projeta um estado de base nos bits clássicos medidos
fn format_key(basis: usize, measured: &[(usize, usize)], num_clbits: usize) -> String {
    let mut bits = vec!['0'; num_clbits];
    for &(qubit, clbit) in measured {
        if (basis >> qubit) & 1 == 1 {
            bits[num_clbits - 1 - clbit] = '1';
        }
    }
    bits.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqx_circuit::QuantumCircuit;

    #[test]
    fn test_format_key_ordering() {
        // qubit 0 -> clbit 0 ocupa a posição mais à direita
        let measured = [(0, 0), (1, 1), (2, 2)];
        assert_eq!(format_key(0b001, &measured, 3), "001");
        assert_eq!(format_key(0b100, &measured, 3), "100");
    }

    #[test]
    fn test_format_key_partial_register() {
        // Só o qubit 2 é medido, no clbit 0
        let measured = [(2, 0)];
        assert_eq!(format_key(0b100, &measured, 1), "1");
        assert_eq!(format_key(0b011, &measured, 1), "0");
    }

    #[test]
    fn test_zero_shots_rejected() {
        let qc = QuantumCircuit::new(1, 1);
        let config = SimulatorConfig {
            shots: 0,
            seed: None,
        };
        assert!(matches!(
            run(&qc, &NoiseModel::ideal(), &config),
            Err(SimulatorError::ZeroShots)
        ));
    }

    #[test]
    fn test_deterministic_circuit() {
        let mut qc = QuantumCircuit::new(2, 2);
        qc.x(0).unwrap().measure_all().unwrap();

        let config = SimulatorConfig {
            shots: 128,
            seed: Some(1),
        };
        let outcome = run(&qc, &NoiseModel::ideal(), &config).unwrap();

        assert_eq!(outcome.counts["01"], 128);
        assert!((outcome.probabilities["01"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_measure_all_fallback() {
        // Sem medições explícitas, todos os qubits entram na chave
        let mut qc = QuantumCircuit::new(2, 0);
        qc.x(1).unwrap();

        let config = SimulatorConfig {
            shots: 16,
            seed: Some(5),
        };
        let outcome = run(&qc, &NoiseModel::ideal(), &config).unwrap();
        assert_eq!(outcome.counts["10"], 16);
    }

    #[test]
    fn test_metrics_populated() {
        let mut qc = QuantumCircuit::new(2, 2);
        qc.h(0).unwrap().cx(0, 1).unwrap().measure_all().unwrap();

        let config = SimulatorConfig {
            shots: 64,
            seed: Some(9),
        };
        let outcome = run(&qc, &NoiseModel::ideal(), &config).unwrap();

        assert_eq!(outcome.metrics.qubits_required, 2);
        assert_eq!(outcome.metrics.total_gates, 4);
        assert!(outcome.metrics.depth >= 3);
        assert_eq!(outcome.metrics.gate_counts["measure"], 2);
    }
}
