//! Geração de chaves RSA e fatoração por divisão por tentativa

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::{ClassicalError, ClassicalResult};

/// Máximo divisor comum (Euclides)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Teste de primalidade por divisão (padrão 6k±1)
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Exponenciação modular (square-and-multiply)
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut result = 1u128;
    let mut base = base as u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

/// Inverso modular via Euclides estendido
fn mod_inverse(e: u64, phi: u64) -> Option<u64> {
    let (mut old_r, mut r) = (e as i128, phi as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(phi as i128) as u64)
}

/// Par de chaves RSA didático
///
/// Chave pública (e, n), chave privada (d, n). Os primos são pequenos
/// de propósito: o ponto é fatorar n, não resistir a isso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsaKeyPair {
    /// Chave pública (e, n)
    pub public: (u64, u64),
    /// Chave privada (d, n)
    pub private: (u64, u64),
}

impl RsaKeyPair {
    /// Módulo n compartilhado pelas duas chaves
    pub fn modulus(&self) -> u64 {
        self.public.1
    }

    /// Cifra m^e mod n
    pub fn encrypt(&self, message: u64) -> u64 {
        let (e, n) = self.public;
        mod_pow(message, e, n)
    }

    /// Decifra c^d mod n
    pub fn decrypt(&self, ciphertext: u64) -> u64 {
        let (d, n) = self.private;
        mod_pow(ciphertext, d, n)
    }
}

/// Gera par de chaves RSA a partir de dois primos
pub fn generate_keypair(p: u64, q: u64) -> ClassicalResult<RsaKeyPair> {
    generate_keypair_with_rng(p, q, &mut rand::thread_rng())
}

/// Gera par de chaves com RNG explícito (determinístico em testes)
pub fn generate_keypair_with_rng<R: Rng>(p: u64, q: u64, rng: &mut R) -> ClassicalResult<RsaKeyPair> {
    if !is_prime(p) || !is_prime(q) {
        return Err(ClassicalError::NotPrime { p, q });
    }
    if p == q {
        return Err(ClassicalError::EqualPrimes);
    }

    let n = p * q;
    let phi = (p - 1) * (q - 1);

    // Escolhe e coprimo com phi(n); phi = 2 (p=2, q=3) só admite e = 1
    let mut e = rng.gen_range(1..phi);
    while gcd(e, phi) != 1 {
        e = rng.gen_range(1..phi);
    }

    let d = mod_inverse(e, phi).ok_or(ClassicalError::NoInverse { e, phi })?;

    Ok(RsaKeyPair {
        public: (e, n),
        private: (d, n),
    })
}

/// Resultado da fatoração clássica
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorizationOutcome {
    /// Menor fator encontrado
    pub p: u64,
    /// Cofator (n / p)
    pub q: u64,
    /// Tempo de execução em segundos
    pub execution_time_seconds: f64,
    /// Iterações do loop de tentativa
    pub iterations: u64,
}

/// Fatoração por força bruta (divisão por tentativa)
///
/// Retorna os fatores (p, q), tempo decorrido e número de iterações.
/// Para n primo retorna (n, 1).
pub fn factorize(n: u64) -> FactorizationOutcome {
    let start = Instant::now();

    if n % 2 == 0 {
        return FactorizationOutcome {
            p: 2,
            q: n / 2,
            execution_time_seconds: start.elapsed().as_secs_f64(),
            iterations: 1,
        };
    }

    let mut iterations = 0u64;
    let mut factor = 3u64;
    while factor * factor <= n {
        iterations += 1;
        if n % factor == 0 {
            return FactorizationOutcome {
                p: factor,
                q: n / factor,
                execution_time_seconds: start.elapsed().as_secs_f64(),
                iterations,
            };
        }
        factor += 2;
    }

    // n é primo
    FactorizationOutcome {
        p: n,
        q: 1,
        execution_time_seconds: start.elapsed().as_secs_f64(),
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(!is_prime(4));
        assert!(is_prime(17));
        assert!(!is_prime(15));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(4, 13, 497), 445);
        assert_eq!(mod_pow(7, 0, 13), 1);
        assert_eq!(mod_pow(5, 3, 1), 0);
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 7 = 21 ≡ 1 (mod 20)
        assert_eq!(mod_inverse(3, 20), Some(7));
        assert_eq!(mod_inverse(4, 20), None);
    }

    #[test]
    fn test_keypair_modulus() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = generate_keypair_with_rng(61, 53, &mut rng).unwrap();
        assert_eq!(keys.public.1, 61 * 53);
        assert_eq!(keys.private.1, 61 * 53);
    }

    #[test]
    fn test_keypair_smallest_primes() {
        // phi(2*3) = 2 admite apenas e = 1
        let mut rng = StdRng::seed_from_u64(5);
        let keys = generate_keypair_with_rng(2, 3, &mut rng).unwrap();

        assert_eq!(keys.modulus(), 6);
        assert_eq!(keys.public.0, 1);

        let ciphertext = keys.encrypt(5);
        assert_eq!(keys.decrypt(ciphertext), 5);
    }

    #[test]
    fn test_keypair_rejects_composite() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_keypair_with_rng(15, 53, &mut rng),
            Err(ClassicalError::NotPrime { .. })
        ));
    }

    #[test]
    fn test_keypair_rejects_equal_primes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_keypair_with_rng(53, 53, &mut rng),
            Err(ClassicalError::EqualPrimes)
        ));
    }

    #[test]
    fn test_factorize_semiprime() {
        let outcome = factorize(15);
        assert_eq!((outcome.p, outcome.q), (3, 5));
        assert_eq!(outcome.p * outcome.q, 15);
    }

    #[test]
    fn test_factorize_even() {
        let outcome = factorize(22);
        assert_eq!((outcome.p, outcome.q), (2, 11));
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_factorize_prime() {
        let outcome = factorize(97);
        assert_eq!((outcome.p, outcome.q), (97, 1));
    }
}
