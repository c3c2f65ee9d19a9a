//! # 📊 pqx-analyzer — Análise Clássico vs. Quântico
//!
//! Fórmulas fechadas de complexidade assintótica (custo sub-exponencial
//! clássico vs. polinomial quântico) e geradores de tabelas de
//! comparação entre famílias de algoritmos (RSA, AES, reticulados,
//! baseados em hash) para o dashboard.
//!
//! Os dados são objetos de valor serializáveis; nenhuma lógica de
//! renderização vive aqui.

pub mod comparison;
pub mod error;
pub mod metrics;
pub mod noise_sweep;
pub mod scaling;

pub use comparison::{
    AlgorithmProfile, Milestone, SecurityGauge, SpeedupRow, algorithm_comparison,
    security_gauge, speedup_factors, threat_timeline,
};
pub use error::{AnalyzerError, AnalyzerResult};
pub use metrics::{MetricsRow, NoisePoint, noise_comparison, simulation_metrics_row};
pub use noise_sweep::{
    DEFAULT_NOISE_LEVELS, DEFAULT_QUBIT_COUNTS, NoiseSweepPoint, SWEEP_SHOTS, noise_sweep,
};
pub use scaling::{
    classical_factorization_scaling, classical_search_scaling, grover_scaling, shor_scaling,
};
