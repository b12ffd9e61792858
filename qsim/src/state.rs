use num_complex::Complex;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::api::SimError;
use crate::observable::{Pauli, PauliString};
use crate::simulator::{GateMatrix, HADAMARD, IDENTITY, PAULI_X, PAULI_Y, PAULI_Z, S_DAGGER};

/// Amplitudes of an n-qubit register. Qubit `q` is bit `q` of the basis index.
#[derive(Clone, Debug)]
pub struct StateVector {
    pub num_qubits: usize,
    pub amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits; // 2^num_qubits
        let mut amplitudes = vec![Complex::new(0.0, 0.0); size];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    pub fn apply_single_qubit_gate(&mut self, gate_matrix: &GateMatrix, target_qubit: usize) {
        let k = 1 << target_qubit;

        for i in 0..self.amplitudes.len() {
            if (i & k) == 0 {
                let j = i | k;
                let amp_i = self.amplitudes[i];
                let amp_j = self.amplitudes[j];

                self.amplitudes[i] = gate_matrix[0][0] * amp_i + gate_matrix[0][1] * amp_j;
                self.amplitudes[j] = gate_matrix[1][0] * amp_i + gate_matrix[1][1] * amp_j;
            }
        }
    }

    pub fn apply_cx(&mut self, control_qubit: usize, target_qubit: usize) {
        let control_mask = 1 << control_qubit;
        let target_mask = 1 << target_qubit;

        for i in 0..self.amplitudes.len() {
            if (i & control_mask) != 0 && (i & target_mask) == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Exact ⟨ψ|P|ψ⟩: apply P to a copy and take the inner product.
    pub fn expectation(&self, observable: &PauliString) -> f64 {
        let mut phi = self.clone();
        for &(pauli, qubit) in observable.operators() {
            let matrix = match pauli {
                Pauli::I => &IDENTITY,
                Pauli::X => &PAULI_X,
                Pauli::Y => &PAULI_Y,
                Pauli::Z => &PAULI_Z,
            };
            phi.apply_single_qubit_gate(matrix, qubit);
        }

        let mut acc = Complex::new(0.0, 0.0);
        for (a, b) in self.amplitudes.iter().zip(phi.amplitudes.iter()) {
            acc += a.conj() * b;
        }
        acc.re
    }

    /// Rotates `qubit` so that a Z measurement reads out the given Pauli basis.
    pub fn rotate_into_basis(&mut self, pauli: Pauli, qubit: usize) {
        match pauli {
            Pauli::I | Pauli::Z => {}
            Pauli::X => self.apply_single_qubit_gate(&HADAMARD, qubit),
            Pauli::Y => {
                self.apply_single_qubit_gate(&S_DAGGER, qubit);
                self.apply_single_qubit_gate(&HADAMARD, qubit);
            }
        }
    }

    /// Draws `shots` computational-basis indices without touching the state.
    pub fn sample_indices(&self, shots: u32, rng: &mut impl Rng) -> Result<Vec<usize>, SimError> {
        let dist = WeightedIndex::new(self.probabilities())
            .map_err(|e| SimError::Sampling(e.to_string()))?;
        Ok((0..shots).map(|_| dist.sample(rng)).collect())
    }

    pub fn reset(&mut self) {
        for amp in &mut self.amplitudes {
            *amp = Complex::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex::new(1.0, 0.0);
    }
}
