//! Busca exaustiva de chave simétrica

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::{ClassicalError, ClassicalResult};

/// Limite prático de enumeração (2^40 chaves)
const MAX_SEARCH_BITS: u32 = 40;

/// Resultado da busca por força bruta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Chave encontrada
    pub key: u64,
    /// Tamanho do espaço de busca em bits
    pub key_bits: u32,
    /// Tempo de execução em segundos
    pub execution_time_seconds: f64,
    /// Iterações até encontrar a chave
    pub iterations: u64,
}

/// Busca linear da chave em um espaço de 2^key_bits candidatos
///
/// Simula força bruta contra uma chave simétrica de tamanho didático
/// (estilo AES, mas pequeno). Conta a iteração que acerta, então uma
/// chave `t` custa exatamente `t + 1` iterações.
pub fn brute_force_search(target: u64, key_bits: u32) -> ClassicalResult<SearchOutcome> {
    if key_bits > MAX_SEARCH_BITS {
        return Err(ClassicalError::KeySpaceTooLarge(key_bits));
    }

    let search_space = 1u64 << key_bits;
    if target >= search_space {
        return Err(ClassicalError::TargetOutOfRange {
            target,
            bits: key_bits,
        });
    }

    let start = Instant::now();
    let mut iterations = 0u64;

    for candidate in 0..search_space {
        iterations += 1;
        if candidate == target {
            break;
        }
    }

    Ok(SearchOutcome {
        key: target,
        key_bits,
        execution_time_seconds: start.elapsed().as_secs_f64(),
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_finds_target() {
        let outcome = brute_force_search(5, 3).unwrap();
        assert_eq!(outcome.key, 5);
        // i = 0,1,2,3,4,5
        assert_eq!(outcome.iterations, 6);
    }

    #[test]
    fn test_search_first_key() {
        let outcome = brute_force_search(0, 8).unwrap();
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_search_rejects_out_of_range() {
        assert!(matches!(
            brute_force_search(8, 3),
            Err(ClassicalError::TargetOutOfRange { .. })
        ));
    }

    #[test]
    fn test_search_rejects_huge_space() {
        assert!(matches!(
            brute_force_search(1, 63),
            Err(ClassicalError::KeySpaceTooLarge(63))
        ));
    }
}
