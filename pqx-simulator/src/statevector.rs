//! Vetor de estado denso de 2^n amplitudes

use num_complex::Complex64;
use rand::Rng;

use crate::error::{SimulatorError, SimulatorResult};
use pqx_circuit::Gate;

/// Limite duro de qubits (2^24 amplitudes ≈ 256 MiB)
pub const MAX_QUBITS: usize = 24;

/// Estado quântico de n qubits
///
/// O qubit 0 é o bit menos significativo do índice de base.
#[derive(Clone, Debug)]
pub struct StateVector {
    num_qubits: usize,
    amps: Vec<Complex64>,
}

impl StateVector {
    /// Cria estado |0...0>
    pub fn new(num_qubits: usize) -> SimulatorResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimulatorError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let dim = 1usize << num_qubits;
        let mut amps = vec![Complex64::new(0.0, 0.0); dim];
        amps[0] = Complex64::new(1.0, 0.0);
        Ok(Self { num_qubits, amps })
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão do espaço (2^n)
    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    /// Amplitude de um estado de base
    pub fn amplitude(&self, basis: usize) -> Complex64 {
        self.amps[basis]
    }

    /// Probabilidade de medir um estado de base
    pub fn probability(&self, basis: usize) -> f64 {
        self.amps[basis].norm_sqr()
    }

    /// Distribuição completa de probabilidades
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Verifica normalização
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        let total: f64 = self.amps.iter().map(|a| a.norm_sqr()).sum();
        (total - 1.0).abs() < epsilon
    }

    fn check_qubit(&self, qubit: usize) -> SimulatorResult<()> {
        if qubit >= self.num_qubits {
            return Err(SimulatorError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    /// Aplica uma porta aos operandos dados (controles primeiro)
    pub fn apply_gate(&mut self, gate: &Gate, qubits: &[usize]) -> SimulatorResult<()> {
        for &q in qubits {
            self.check_qubit(q)?;
        }

        match gate {
            Gate::Cx | Gate::Ccx | Gate::Mcx => {
                let expected = gate.arity();
                if qubits.is_empty() || expected.is_some_and(|e| qubits.len() != e) {
                    return Err(SimulatorError::InvalidOperands {
                        gate: gate.name(),
                        got: qubits.len(),
                    });
                }
                let (target, controls) = qubits.split_last().ok_or(
                    SimulatorError::InvalidOperands {
                        gate: gate.name(),
                        got: 0,
                    },
                )?;
                self.apply_controlled_x(controls, *target);
                Ok(())
            }
            Gate::Cz => {
                self.apply_conditional_phase(qubits, Complex64::new(-1.0, 0.0));
                Ok(())
            }
            Gate::CPhase(phi) => {
                self.apply_conditional_phase(qubits, Complex64::from_polar(1.0, *phi));
                Ok(())
            }
            Gate::Swap => {
                if qubits.len() != 2 {
                    return Err(SimulatorError::InvalidOperands {
                        gate: gate.name(),
                        got: qubits.len(),
                    });
                }
                self.apply_swap(qubits[0], qubits[1]);
                Ok(())
            }
            single => {
                let matrix = single.matrix().ok_or(SimulatorError::InvalidOperands {
                    gate: gate.name(),
                    got: qubits.len(),
                })?;
                if qubits.len() != 1 {
                    return Err(SimulatorError::InvalidOperands {
                        gate: gate.name(),
                        got: qubits.len(),
                    });
                }
                self.apply_single(&matrix, qubits[0]);
                Ok(())
            }
        }
    }

    fn apply_single(&mut self, matrix: &pqx_circuit::Matrix2x2, target: usize) {
        let tmask = 1usize << target;
        for i in 0..self.amps.len() {
            if i & tmask == 0 {
                let j = i | tmask;
                let [a, b] = matrix.apply([self.amps[i], self.amps[j]]);
                self.amps[i] = a;
                self.amps[j] = b;
            }
        }
    }

    fn apply_controlled_x(&mut self, controls: &[usize], target: usize) {
        let cmask: usize = controls.iter().map(|&c| 1usize << c).sum();
        let tmask = 1usize << target;

        // MCX sem controles degenera em X (cmask = 0 aceita todo índice)
        for i in 0..self.amps.len() {
            if i & cmask == cmask && i & tmask == 0 {
                self.amps.swap(i, i | tmask);
            }
        }
    }

    /// Fase condicional: multiplica amplitudes com todos os bits dados em 1
    fn apply_conditional_phase(&mut self, qubits: &[usize], phase: Complex64) {
        let mask: usize = qubits.iter().map(|&q| 1usize << q).sum();
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if i & mask == mask {
                *amp *= phase;
            }
        }
    }

    fn apply_swap(&mut self, a: usize, b: usize) {
        let amask = 1usize << a;
        let bmask = 1usize << b;
        for i in 0..self.amps.len() {
            if i & amask != 0 && i & bmask == 0 {
                self.amps.swap(i, (i & !amask) | bmask);
            }
        }
    }

    /// Amostra um estado de base segundo a distribuição atual
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amps.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r <= cumulative {
                return i;
            }
        }
        self.amps.len() - 1
    }

    /// Amostra vários shots com busca binária na distribuição cumulativa
    pub fn sample_many<R: Rng>(&self, shots: u32, rng: &mut R) -> Vec<usize> {
        let mut cumulative = Vec::with_capacity(self.amps.len());
        let mut total = 0.0;
        for amp in &self.amps {
            total += amp.norm_sqr();
            cumulative.push(total);
        }

        (0..shots)
            .map(|_| {
                let r: f64 = rng.r#gen::<f64>() * total;
                cumulative
                    .partition_point(|&c| c < r)
                    .min(self.amps.len() - 1)
            })
            .collect()
    }
}
