//! Curvas de escala assintótica
//!
//! Escalas arbitrárias de custo (não segundos exatos) para plotagem:
//! GNFS sub-exponencial vs. Shor polinomial, busca linear vs. Grover
//! quadrático.

use std::f64::consts::LN_2;

/// Constante c da aproximação GNFS L_n[1/3, c]
pub const GNFS_CONSTANT: f64 = 1.9;

const LOG10_2: f64 = std::f64::consts::LOG10_2;

/// Expoente natural da complexidade GNFS para n = 2^bits
///
/// L_n[1/3, c] = exp(c · (ln n)^(1/3) · (ln ln n)^(2/3)), com bits
/// limitado por baixo a 4 para evitar domínio inválido do log.
fn gnfs_exponent(bits: u32) -> f64 {
    let bits = bits.max(4);
    let ln_n = f64::from(bits) * LN_2;
    let ln_ln_n = ln_n.ln();
    GNFS_CONSTANT * ln_n.powf(1.0 / 3.0) * ln_ln_n.powf(2.0 / 3.0)
}

/// Custo clássico de fatoração (General Number Field Sieve)
pub fn classical_factorization_scaling(bits_range: &[u32]) -> Vec<f64> {
    bits_range.iter().map(|&b| gnfs_exponent(b).exp()).collect()
}

/// log10 do custo GNFS, calculado analiticamente (nunca satura)
pub fn classical_factorization_log10(bits: u32) -> f64 {
    gnfs_exponent(bits) / std::f64::consts::LN_10
}

/// Custo de Shor: O((log N)^3) = O(bits^3)
pub fn shor_scaling(bits_range: &[u32]) -> Vec<f64> {
    bits_range.iter().map(|&b| f64::from(b).powi(3)).collect()
}

/// log10 do custo de Shor
pub fn shor_log10(bits: u32) -> f64 {
    3.0 * f64::from(bits.max(1)).log10()
}

/// Custo de busca exaustiva: O(2^bits)
///
/// Satura em f64::INFINITY além de ~1024 bits; use a forma log10 para
/// tamanhos de chave RSA reais.
pub fn classical_search_scaling(bits_range: &[u32]) -> Vec<f64> {
    bits_range.iter().map(|&b| 2f64.powi(b as i32)).collect()
}

/// log10 do custo de busca exaustiva
pub fn classical_search_log10(bits: u32) -> f64 {
    f64::from(bits) * LOG10_2
}

/// Custo de Grover: O(√(2^bits)), com semântica de raiz inteira
pub fn grover_scaling(bits_range: &[u32]) -> Vec<f64> {
    bits_range
        .iter()
        .map(|&b| 2f64.powi(b as i32).sqrt().floor())
        .collect()
}

/// log10 do custo de Grover
pub fn grover_log10(bits: u32) -> f64 {
    f64::from(bits) / 2.0 * LOG10_2
}
