//! Geradores de dados de comparação entre famílias de algoritmos
//!
//! Tabelas para radar de algoritmos, linha do tempo de ameaças, fatores
//! de speedup e medidores de segurança efetiva.

use serde::Serialize;

use crate::scaling::{
    classical_factorization_log10, classical_factorization_scaling, classical_search_log10,
    classical_search_scaling, grover_log10, grover_scaling, shor_log10, shor_scaling,
};

/// Perfil normalizado (0-100) de um algoritmo em cinco dimensões
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmProfile {
    pub algorithm: &'static str,
    pub key_size_efficiency: u8,
    pub classical_security: u8,
    pub quantum_resistance: u8,
    pub performance_speed: u8,
    pub standardization_maturity: u8,
}

/// Comparação para o radar: clássicos vs. PQC (reticulados e hash)
pub fn algorithm_comparison() -> Vec<AlgorithmProfile> {
    vec![
        AlgorithmProfile {
            algorithm: "RSA-2048",
            key_size_efficiency: 30,
            classical_security: 90,
            quantum_resistance: 5,
            performance_speed: 50,
            standardization_maturity: 100,
        },
        AlgorithmProfile {
            algorithm: "Diffie-Hellman",
            key_size_efficiency: 35,
            classical_security: 85,
            quantum_resistance: 5,
            performance_speed: 55,
            standardization_maturity: 100,
        },
        AlgorithmProfile {
            algorithm: "CRYSTALS-Kyber (Lattice)",
            key_size_efficiency: 85,
            classical_security: 95,
            quantum_resistance: 95,
            performance_speed: 90,
            standardization_maturity: 90,
        },
        AlgorithmProfile {
            algorithm: "CRYSTALS-Dilithium (Lattice)",
            key_size_efficiency: 70,
            classical_security: 95,
            quantum_resistance: 95,
            performance_speed: 80,
            standardization_maturity: 90,
        },
        AlgorithmProfile {
            algorithm: "SPHINCS+ (Hash-Based)",
            key_size_efficiency: 40,
            classical_security: 95,
            quantum_resistance: 98,
            performance_speed: 35,
            standardization_maturity: 85,
        },
    ]
}

/// Marco histórico de criptografia ou computação quântica
#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub year: i32,
    pub event: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
}

/// Linha do tempo de ameaças, ordenada por ano
pub fn threat_timeline() -> Vec<Milestone> {
    let mut milestones = vec![
        Milestone {
            year: 1977,
            event: "RSA Published",
            category: "Classical Crypto",
            description: "Rivest, Shamir, and Adleman publish the RSA algorithm, founding modern public-key cryptography.",
            impact: "Foundation",
        },
        Milestone {
            year: 1976,
            event: "Diffie-Hellman Key Exchange",
            category: "Classical Crypto",
            description: "Whitfield Diffie and Martin Hellman publish the first practical key exchange protocol.",
            impact: "Foundation",
        },
        Milestone {
            year: 1994,
            event: "Shor's Algorithm",
            category: "Quantum Threat",
            description: "Peter Shor discovers a polynomial-time quantum algorithm for integer factorization, threatening RSA.",
            impact: "Critical Threat",
        },
        Milestone {
            year: 1996,
            event: "Grover's Algorithm",
            category: "Quantum Threat",
            description: "Lov Grover discovers a quadratic speedup for unstructured search, weakening symmetric crypto.",
            impact: "Moderate Threat",
        },
        Milestone {
            year: 2001,
            event: "IBM Factors 15",
            category: "Quantum Milestone",
            description: "IBM uses a 7-qubit quantum computer to factor 15 into 3x5 using Shor's algorithm.",
            impact: "Proof of Concept",
        },
        Milestone {
            year: 2016,
            event: "NIST PQC Competition Begins",
            category: "Post-Quantum",
            description: "NIST announces the Post-Quantum Cryptography Standardization Process with 69 submissions.",
            impact: "Defense Initiated",
        },
        Milestone {
            year: 2019,
            event: "Google Quantum Supremacy",
            category: "Quantum Milestone",
            description: "Google's Sycamore (53 qubits) demonstrates quantum supremacy on a sampling task.",
            impact: "Escalation",
        },
        Milestone {
            year: 2023,
            event: "IBM 1,121-Qubit Condor",
            category: "Quantum Milestone",
            description: "IBM unveils the 1,121-qubit Condor chip, pushing toward error-corrected quantum computing.",
            impact: "Escalation",
        },
        Milestone {
            year: 2024,
            event: "NIST PQC Standards Published",
            category: "Post-Quantum",
            description: "NIST publishes FIPS 203 (Kyber/ML-KEM), FIPS 204 (Dilithium/ML-DSA), FIPS 205 (SPHINCS+/SLH-DSA).",
            impact: "Standard Adopted",
        },
        Milestone {
            year: 2025,
            event: "Global PQC Migration Begins",
            category: "Post-Quantum",
            description: "Major cloud providers and governments begin mandatory migration to PQC algorithms.",
            impact: "Active Defense",
        },
    ];
    milestones.sort_by_key(|m| m.year);
    milestones
}

/// Razões de speedup clássico vs. quântico para um tamanho de chave
///
/// As colunas de operações saturam em `f64::INFINITY` acima de ~1024
/// bits. As colunas log10 usam o log da razão exata enquanto ela é
/// finita (respeitando o piso inteiro de Grover) e caem para a forma
/// analítica além da saturação, permanecendo finitas em qualquer
/// tamanho de chave.
#[derive(Debug, Clone, Serialize)]
pub struct SpeedupRow {
    pub key_size_bits: u32,
    pub classical_factorization_ops: f64,
    pub shor_ops: f64,
    pub factorization_speedup: f64,
    pub factorization_speedup_log10: f64,
    pub classical_search_ops: f64,
    pub grover_ops: f64,
    pub search_speedup: f64,
    pub search_speedup_log10: f64,
}

/// Calcula fatores exatos de speedup para os tamanhos de bits dados
pub fn speedup_factors(bit_sizes: &[u32]) -> Vec<SpeedupRow> {
    let classical_factor = classical_factorization_scaling(bit_sizes);
    let quantum_factor = shor_scaling(bit_sizes);
    let classical_search = classical_search_scaling(bit_sizes);
    let quantum_search = grover_scaling(bit_sizes);

    bit_sizes
        .iter()
        .enumerate()
        .map(|(i, &bits)| {
            let shor_ops = quantum_factor[i].max(1.0);
            let grover_ops = quantum_search[i].max(1.0);

            let factorization_speedup = classical_factor[i] / shor_ops;
            let factorization_speedup_log10 = if factorization_speedup.is_finite() {
                factorization_speedup.log10().max(0.0)
            } else {
                (classical_factorization_log10(bits) - shor_log10(bits)).max(0.0)
            };

            let search_speedup = classical_search[i] / grover_ops;
            let search_speedup_log10 = if search_speedup.is_finite() {
                search_speedup.log10().max(0.0)
            } else {
                (classical_search_log10(bits) - grover_log10(bits)).max(0.0)
            };

            SpeedupRow {
                key_size_bits: bits,
                classical_factorization_ops: classical_factor[i],
                shor_ops,
                factorization_speedup,
                factorization_speedup_log10,
                classical_search_ops: classical_search[i],
                grover_ops,
                search_speedup,
                search_speedup_log10,
            }
        })
        .collect()
}

/// Força de segurança efetiva contra ataque clássico e quântico
#[derive(Debug, Clone, Serialize)]
pub struct SecurityGauge {
    pub algorithm: &'static str,
    pub kind: &'static str,
    pub classical_security_bits: u32,
    pub quantum_security_bits: u32,
    pub status: &'static str,
}

/// Dados do medidor de segurança por algoritmo
pub fn security_gauge() -> Vec<SecurityGauge> {
    vec![
        SecurityGauge {
            algorithm: "RSA-2048",
            kind: "Asymmetric",
            classical_security_bits: 112,
            quantum_security_bits: 0,
            status: "Broken by Shor's",
        },
        SecurityGauge {
            algorithm: "AES-128",
            kind: "Symmetric",
            classical_security_bits: 128,
            quantum_security_bits: 64,
            status: "Weakened by Grover's",
        },
        SecurityGauge {
            algorithm: "AES-256",
            kind: "Symmetric",
            classical_security_bits: 256,
            quantum_security_bits: 128,
            status: "Quantum-Safe (doubled key)",
        },
        SecurityGauge {
            algorithm: "CRYSTALS-Kyber-768",
            kind: "Lattice (KEM)",
            classical_security_bits: 192,
            quantum_security_bits: 192,
            status: "NIST FIPS 203",
        },
        SecurityGauge {
            algorithm: "CRYSTALS-Dilithium-3",
            kind: "Lattice (Signature)",
            classical_security_bits: 192,
            quantum_security_bits: 192,
            status: "NIST FIPS 204",
        },
        SecurityGauge {
            algorithm: "SPHINCS+-256f",
            kind: "Hash-Based (Signature)",
            classical_security_bits: 256,
            quantum_security_bits: 256,
            status: "NIST FIPS 205",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_shape() {
        let profiles = algorithm_comparison();
        assert_eq!(profiles.len(), 5);
        for p in &profiles {
            assert!(p.quantum_resistance <= 100);
            assert!(p.classical_security <= 100);
        }
    }

    #[test]
    fn test_timeline_sorted() {
        let timeline = threat_timeline();
        assert!(timeline.len() >= 8);
        for pair in timeline.windows(2) {
            assert!(pair[0].year <= pair[1].year);
        }
        assert_eq!(timeline[0].year, 1976);
    }

    #[test]
    fn test_speedup_greater_than_one() {
        for row in speedup_factors(&[32, 64, 128]) {
            assert!(row.factorization_speedup > 1.0);
            assert!(row.search_speedup > 1.0);
        }
    }

    #[test]
    fn test_speedup_increases_with_key_size() {
        let rows = speedup_factors(&[16, 32, 48, 64]);
        assert!(
            rows.last().unwrap().factorization_speedup > rows.first().unwrap().factorization_speedup
        );
    }

    #[test]
    fn test_search_speedup_log10_exact_when_finite() {
        // 5 bits: 2^5 = 32 contra ⌊√32⌋ = 5; o log10 segue a razão
        // exata 32/5, não a forma analítica bits/2 · log10(2)
        let row = &speedup_factors(&[5])[0];
        assert!((row.search_speedup_log10 - (32.0f64 / 5.0).log10()).abs() < 1e-12);
        assert!((row.search_speedup_log10 - row.search_speedup.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_speedup_log10_survives_rsa_sizes() {
        for row in speedup_factors(&[1024, 2048, 4096]) {
            assert!(row.factorization_speedup_log10.is_finite());
            assert!(row.search_speedup_log10 > 100.0);
            // A razão direta satura, o log não
            assert!(row.classical_search_ops.is_infinite());
        }
    }

    #[test]
    fn test_gauge_entries() {
        let gauges = security_gauge();
        assert!(gauges.len() >= 5);

        let rsa = &gauges[0];
        assert_eq!(rsa.algorithm, "RSA-2048");
        assert_eq!(rsa.quantum_security_bits, 0);
    }
}
