use crate::api::SimError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    RX { qubit: usize, theta: f64 },
    RY { qubit: usize, theta: f64 },
    CNOT { control: usize, target: usize },
}

impl Gate {
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::RX { qubit, .. } | Gate::RY { qubit, .. } => vec![qubit],
            Gate::CNOT { control, target } => vec![control, target],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Circuit {
    pub num_qubits: usize,
    pub gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.add_gate(gate);
        self
    }

    /// Every gate must address a qubit inside the register, and a CNOT needs
    /// two distinct qubits.
    pub fn validate(&self) -> Result<(), SimError> {
        for gate in &self.gates {
            if let Some(&q) = gate.qubits().iter().find(|&&q| q >= self.num_qubits) {
                return Err(SimError::Qubit(q));
            }
            if let Gate::CNOT { control, target } = *gate {
                if control == target {
                    return Err(SimError::Qubit(target));
                }
            }
        }
        Ok(())
    }
}
