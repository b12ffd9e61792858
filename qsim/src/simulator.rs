use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::api::{SimError, SimulatorApi};
use crate::circuit::{Circuit, Gate};
use crate::observable::PauliString;
use crate::state::StateVector;

// custom type for gate matrices
pub type GateMatrix = [[Complex<f64>; 2]; 2];

pub const IDENTITY: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
];

pub const HADAMARD: GateMatrix = [
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(FRAC_1_SQRT_2, 0.0),
    ],
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(-FRAC_1_SQRT_2, 0.0),
    ],
];

pub const PAULI_X: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Y: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
    [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Z: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)],
];

pub const S_DAGGER: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
];

/// Rx(θ) = cos(θ/2) I - i sin(θ/2) X
pub fn rx_matrix(theta: f64) -> GateMatrix {
    let (st, ct) = (theta * 0.5).sin_cos();
    [
        [Complex::new(ct, 0.0), Complex::new(0.0, -st)],
        [Complex::new(0.0, -st), Complex::new(ct, 0.0)],
    ]
}

/// Ry(θ) = cos(θ/2) I - i sin(θ/2) Y, which is real.
pub fn ry_matrix(theta: f64) -> GateMatrix {
    let (st, ct) = (theta * 0.5).sin_cos();
    [
        [Complex::new(ct, 0.0), Complex::new(-st, 0.0)],
        [Complex::new(st, 0.0), Complex::new(ct, 0.0)],
    ]
}

pub struct StatevectorSimulator {
    num_qubits: usize,
    state: StateVector,
}

impl StatevectorSimulator {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            state: StateVector::new(num_qubits),
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn apply_gate(&mut self, gate: &Gate) {
        match *gate {
            Gate::RX { qubit, theta } => self.state.apply_single_qubit_gate(&rx_matrix(theta), qubit),
            Gate::RY { qubit, theta } => self.state.apply_single_qubit_gate(&ry_matrix(theta), qubit),
            Gate::CNOT { control, target } => self.state.apply_cx(control, target),
        }
    }
}

impl SimulatorApi for StatevectorSimulator {
    fn reset(&mut self, num_qubits: usize) {
        self.num_qubits = num_qubits;
        self.state = StateVector::new(num_qubits);
    }

    fn run(&mut self, circuit: &Circuit) -> Result<(), SimError> {
        circuit.validate()?;
        if self.num_qubits != circuit.num_qubits {
            self.reset(circuit.num_qubits);
        } else {
            self.state.reset();
        }
        for gate in &circuit.gates {
            self.apply_gate(gate);
        }
        Ok(())
    }

    fn statevector(&self) -> &StateVector {
        &self.state
    }

    fn expectation(&self, observable: &PauliString) -> Result<f64, SimError> {
        if let Some(qubit) = observable.max_qubit().filter(|&q| q >= self.num_qubits) {
            return Err(SimError::Qubit(qubit));
        }
        Ok(self.state.expectation(observable))
    }
}
