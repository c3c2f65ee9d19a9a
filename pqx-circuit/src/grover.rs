//! Circuitos de busca de Grover parametrizados
//!
//! Oráculo de phase flip para um estado alvo, operador de difusão e o
//! circuito completo com o número ótimo de iterações ⌊π/4 · √N⌋.

use std::f64::consts::PI;

use crate::circuit::QuantumCircuit;
use crate::error::{CircuitError, CircuitResult};

/// Número ótimo de iterações de Grover para n qubits
pub fn optimal_iterations(num_qubits: usize) -> usize {
    let space = 2f64.powi(num_qubits as i32);
    (PI / 4.0 * space.sqrt()) as usize
}

fn parse_target(num_qubits: usize, target: &str) -> CircuitResult<Vec<bool>> {
    if target.len() != num_qubits {
        return Err(CircuitError::TargetLengthMismatch {
            expected: num_qubits,
            got: target.len(),
        });
    }

    // String big-endian: último caractere é o qubit 0
    let mut bits = Vec::with_capacity(num_qubits);
    for c in target.chars().rev() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            other => return Err(CircuitError::InvalidTargetBit(other)),
        }
    }
    Ok(bits)
}

/// Oráculo de Grover que marca um estado alvo com inversão de fase
///
/// X nos bits zero do alvo, sanduíche H·MCX·H no último qubit (um MCZ
/// efetivo), e X de desfazimento.
pub fn build_grover_oracle(num_qubits: usize, target: &str) -> CircuitResult<QuantumCircuit> {
    if num_qubits == 0 {
        return Err(CircuitError::EmptyRegister);
    }
    let bits = parse_target(num_qubits, target)?;

    let mut qc = QuantumCircuit::new(num_qubits, 0);

    for (i, &bit) in bits.iter().enumerate() {
        if !bit {
            qc.x(i)?;
        }
    }

    let last = num_qubits - 1;
    let controls: Vec<usize> = (0..last).collect();
    qc.h(last)?;
    qc.mcx(&controls, last)?;
    qc.h(last)?;

    for (i, &bit) in bits.iter().enumerate() {
        if !bit {
            qc.x(i)?;
        }
    }

    Ok(qc)
}

/// Operador de difusão (inversão sobre a média)
pub fn diffuser(num_qubits: usize) -> CircuitResult<QuantumCircuit> {
    if num_qubits == 0 {
        return Err(CircuitError::EmptyRegister);
    }

    let mut qc = QuantumCircuit::new(num_qubits, 0);
    let last = num_qubits - 1;
    let controls: Vec<usize> = (0..last).collect();

    qc.h_all()?;
    for q in 0..num_qubits {
        qc.x(q)?;
    }
    qc.h(last)?;
    qc.mcx(&controls, last)?;
    qc.h(last)?;
    for q in 0..num_qubits {
        qc.x(q)?;
    }
    qc.h_all()?;

    Ok(qc)
}

/// Circuito completo de Grover
///
/// `iterations = None` usa a aproximação inteira ótima de π/4 · √N com
/// N = 2^num_qubits.
pub fn build_grover_circuit(
    num_qubits: usize,
    target: &str,
    iterations: Option<usize>,
) -> CircuitResult<QuantumCircuit> {
    let iterations = iterations.unwrap_or_else(|| optimal_iterations(num_qubits));

    let oracle = build_grover_oracle(num_qubits, target)?;
    let diffuser = diffuser(num_qubits)?;

    let mut qc = QuantumCircuit::new(num_qubits, num_qubits);
    let identity_map: Vec<usize> = (0..num_qubits).collect();

    qc.h_all()?;
    for _ in 0..iterations {
        qc.append(&oracle, &identity_map)?;
        qc.append(&diffuser, &identity_map)?;
    }
    qc.measure_all()?;

    Ok(qc)
}
