//! Transformada de Fourier quântica
//!
//! Construção padrão com H + fases controladas. O qubit 0 é o bit menos
//! significativo do registrador, como no Qiskit.

use std::f64::consts::PI;

use crate::circuit::QuantumCircuit;
use crate::error::{CircuitError, CircuitResult};

/// Circuito QFT de n qubits
///
/// `do_swaps = false` omite a reversão final dos qubits, espelhando
/// `QFT(n, do_swaps=False)`.
pub fn qft_circuit(num_qubits: usize, do_swaps: bool) -> CircuitResult<QuantumCircuit> {
    if num_qubits == 0 {
        return Err(CircuitError::EmptyRegister);
    }

    let mut qc = QuantumCircuit::new(num_qubits, 0);

    for j in (0..num_qubits).rev() {
        qc.h(j)?;
        for k in (0..j).rev() {
            let angle = PI / 2f64.powi((j - k) as i32);
            qc.cp(angle, k, j)?;
        }
    }

    if do_swaps {
        for q in 0..num_qubits / 2 {
            qc.swap(q, num_qubits - 1 - q)?;
        }
    }

    Ok(qc)
}

/// QFT inversa de n qubits (sem swaps finais)
///
/// Espelha `QFT(n, do_swaps=False).inverse()`: ordem revertida com
/// ângulos negados.
pub fn inverse_qft_circuit(num_qubits: usize) -> CircuitResult<QuantumCircuit> {
    qft_circuit(num_qubits, false)?.inverse()
}
