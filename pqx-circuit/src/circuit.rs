//! Contêiner de circuito com métricas de profundidade e contagem de gates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CircuitError, CircuitResult};
use crate::gates::Gate;

/// Uma operação do circuito
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Aplicação de porta; para gates controlados os controles vêm
    /// primeiro e o alvo é o último operando
    Gate { gate: Gate, qubits: Vec<usize> },
    /// Medição de um qubit em um bit clássico
    Measure { qubit: usize, clbit: usize },
}

/// Circuito quântico composto de gates e medições
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuantumCircuit {
    num_qubits: usize,
    num_clbits: usize,
    ops: Vec<Operation>,
}

impl QuantumCircuit {
    /// Cria circuito vazio
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            ops: Vec::new(),
        }
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Número de bits clássicos
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// Operações na ordem de aplicação
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// Número de operações (gates + medições)
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Verifica se circuito está vazio
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    fn check_qubit(&self, qubit: usize) -> CircuitResult<()> {
        if qubit >= self.num_qubits {
            return Err(CircuitError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Adiciona porta ao circuito validando operandos
    pub fn add(&mut self, gate: Gate, qubits: Vec<usize>) -> CircuitResult<&mut Self> {
        if let Some(expected) = gate.arity() {
            if qubits.len() != expected {
                return Err(CircuitError::WrongArity {
                    gate: gate.name(),
                    expected,
                    got: qubits.len(),
                });
            }
        } else if qubits.is_empty() {
            return Err(CircuitError::WrongArity {
                gate: gate.name(),
                expected: 1,
                got: 0,
            });
        }

        for &q in &qubits {
            self.check_qubit(q)?;
        }
        for (i, &q) in qubits.iter().enumerate() {
            if qubits[i + 1..].contains(&q) {
                return Err(CircuitError::DuplicateQubits);
            }
        }

        self.ops.push(Operation::Gate { gate, qubits });
        Ok(self)
    }

    /// Hadamard
    pub fn h(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::H, vec![qubit])
    }

    /// Pauli-X
    pub fn x(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::X, vec![qubit])
    }

    /// Pauli-Y
    pub fn y(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Y, vec![qubit])
    }

    /// Pauli-Z
    pub fn z(&mut self, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Z, vec![qubit])
    }

    /// Rotação em X
    pub fn rx(&mut self, theta: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Rx(theta), vec![qubit])
    }

    /// Rotação em Y
    pub fn ry(&mut self, theta: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Ry(theta), vec![qubit])
    }

    /// Rotação em Z
    pub fn rz(&mut self, theta: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Rz(theta), vec![qubit])
    }

    /// Fase genérica
    pub fn p(&mut self, phi: f64, qubit: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Phase(phi), vec![qubit])
    }

    /// NOT controlado
    pub fn cx(&mut self, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Cx, vec![control, target])
    }

    /// Z controlado
    pub fn cz(&mut self, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Cz, vec![control, target])
    }

    /// Fase controlada
    pub fn cp(&mut self, phi: f64, control: usize, target: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::CPhase(phi), vec![control, target])
    }

    /// SWAP
    pub fn swap(&mut self, a: usize, b: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Swap, vec![a, b])
    }

    /// Toffoli
    pub fn ccx(&mut self, c1: usize, c2: usize, target: usize) -> CircuitResult<&mut Self> {
        self.add(Gate::Ccx, vec![c1, c2, target])
    }

    /// X multi-controlado; rebaixa para X/CX/CCX quando a aridade permite
    pub fn mcx(&mut self, controls: &[usize], target: usize) -> CircuitResult<&mut Self> {
        match controls.len() {
            0 => self.x(target),
            1 => self.cx(controls[0], target),
            2 => self.ccx(controls[0], controls[1], target),
            _ => {
                let mut qubits = controls.to_vec();
                qubits.push(target);
                self.add(Gate::Mcx, qubits)
            }
        }
    }

    /// Hadamard em todos os qubits
    pub fn h_all(&mut self) -> CircuitResult<&mut Self> {
        for q in 0..self.num_qubits {
            self.h(q)?;
        }
        Ok(self)
    }

    /// Mede um qubit em um bit clássico
    pub fn measure(&mut self, qubit: usize, clbit: usize) -> CircuitResult<&mut Self> {
        self.check_qubit(qubit)?;
        if clbit >= self.num_clbits {
            return Err(CircuitError::ClbitOutOfRange {
                clbit,
                num_clbits: self.num_clbits,
            });
        }
        self.ops.push(Operation::Measure { qubit, clbit });
        Ok(self)
    }

    /// Mede qubit i no bit clássico i, para todos os qubits
    pub fn measure_all(&mut self) -> CircuitResult<&mut Self> {
        for q in 0..self.num_qubits {
            self.measure(q, q)?;
        }
        Ok(self)
    }

    /// Anexa as portas de outro circuito remapeando seus qubits
    ///
    /// `qubit_map[i]` é o qubit deste circuito que recebe o qubit `i` do
    /// subcircuito. Subcircuitos com medição não podem ser anexados.
    pub fn append(
        &mut self,
        other: &QuantumCircuit,
        qubit_map: &[usize],
    ) -> CircuitResult<&mut Self> {
        if qubit_map.len() != other.num_qubits {
            return Err(CircuitError::QubitMapMismatch {
                expected: other.num_qubits,
                got: qubit_map.len(),
            });
        }

        for op in &other.ops {
            match op {
                Operation::Gate { gate, qubits } => {
                    let mapped = qubits.iter().map(|&q| qubit_map[q]).collect();
                    self.add(*gate, mapped)?;
                }
                Operation::Measure { .. } => return Err(CircuitError::HasMeasurements),
            }
        }
        Ok(self)
    }

    /// Circuito inverso (ordem revertida, cada porta invertida)
    pub fn inverse(&self) -> CircuitResult<QuantumCircuit> {
        let mut inv = QuantumCircuit::new(self.num_qubits, self.num_clbits);
        for op in self.ops.iter().rev() {
            match op {
                Operation::Gate { gate, qubits } => {
                    inv.add(gate.inverse(), qubits.clone())?;
                }
                Operation::Measure { .. } => return Err(CircuitError::HasMeasurements),
            }
        }
        Ok(inv)
    }

    /// Pares (qubit, clbit) medidos, na ordem de inserção
    pub fn measurements(&self) -> Vec<(usize, usize)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Operation::Measure { qubit, clbit } => Some((*qubit, *clbit)),
                _ => None,
            })
            .collect()
    }

    /// Profundidade do circuito (camadas por frente de onda, como no Qiskit)
    pub fn depth(&self) -> usize {
        let mut qubit_level = vec![0usize; self.num_qubits];
        let mut clbit_level = vec![0usize; self.num_clbits];
        let mut max_level = 0;

        for op in &self.ops {
            match op {
                Operation::Gate { qubits, .. } => {
                    let level = qubits
                        .iter()
                        .map(|&q| qubit_level[q])
                        .max()
                        .unwrap_or(0)
                        + 1;
                    for &q in qubits {
                        qubit_level[q] = level;
                    }
                    max_level = max_level.max(level);
                }
                Operation::Measure { qubit, clbit } => {
                    let level = qubit_level[*qubit].max(clbit_level[*clbit]) + 1;
                    qubit_level[*qubit] = level;
                    clbit_level[*clbit] = level;
                    max_level = max_level.max(level);
                }
            }
        }
        max_level
    }

    /// Contagem de operações por nome (inclui "measure")
    pub fn gate_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for op in &self.ops {
            let name = match op {
                Operation::Gate { gate, .. } => gate.name(),
                Operation::Measure { .. } => "measure",
            };
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Total de operações (soma das contagens)
    pub fn total_gates(&self) -> u64 {
        self.ops.len() as u64
    }
}
