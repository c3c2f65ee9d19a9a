//! Linhas de métricas unificadas para visualização

use serde::Serialize;

use crate::error::{AnalyzerError, AnalyzerResult};
use pqx_simulator::RunMetrics;

/// Linha da tabela de métricas de simulação
#[derive(Debug, Clone, Serialize)]
pub struct MetricsRow {
    pub algorithm: String,
    pub qubits_required: usize,
    pub circuit_depth: usize,
    pub total_gates: u64,
    /// Arredondado a 4 casas decimais
    pub execution_time_seconds: f64,
}

/// Converte métricas de simulação em uma linha de tabela
pub fn simulation_metrics_row(metrics: &RunMetrics, algo_name: &str) -> MetricsRow {
    MetricsRow {
        algorithm: algo_name.to_string(),
        qubits_required: metrics.qubits_required,
        circuit_depth: metrics.depth,
        total_gates: metrics.total_gates,
        execution_time_seconds: (metrics.execution_time_seconds * 1e4).round() / 1e4,
    }
}

/// Ponto da curva sucesso × ruído
#[derive(Debug, Clone, Serialize)]
pub struct NoisePoint {
    pub noise_level: f64,
    pub success_probability: f64,
}

/// Pareia probabilidades de sucesso com níveis de ruído
pub fn noise_comparison(
    success_probs: &[f64],
    noise_levels: &[f64],
) -> AnalyzerResult<Vec<NoisePoint>> {
    if success_probs.len() != noise_levels.len() {
        return Err(AnalyzerError::LengthMismatch {
            probs: success_probs.len(),
            levels: noise_levels.len(),
        });
    }

    Ok(noise_levels
        .iter()
        .zip(success_probs)
        .map(|(&noise_level, &success_probability)| NoisePoint {
            noise_level,
            success_probability,
        })
        .collect())
}
