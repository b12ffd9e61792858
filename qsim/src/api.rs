use crate::StateVector;
use crate::circuit::Circuit;
use crate::observable::PauliString;

/// A lightweight error enum so callers don't rely on simulator internals.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("Invalid qubit index: {0}")]
    Qubit(usize),
    #[error("Circuit acts on {circuit} qubits but the device has {device} wires")]
    WireMismatch { circuit: usize, device: usize },
    #[error("Observables cannot be measured together: qubit {qubit} needs both {first} and {second}")]
    IncompatibleObservables {
        qubit: usize,
        first: String,
        second: String,
    },
    #[error("Pauli string parse error: {0}")]
    Parse(String),
    #[error("Sampling error: {0}")]
    Sampling(String),
}

/// What a backend has to offer the device: run a circuit from |0...0⟩ and
/// read the resulting state.
pub trait SimulatorApi {
    fn reset(&mut self, num_qubits: usize);
    fn run(&mut self, circuit: &Circuit) -> Result<(), SimError>;
    fn statevector(&self) -> &StateVector;

    /// Non-destructive expectation ⟨ψ|P|ψ⟩ for a Pauli string.
    fn expectation(&self, observable: &PauliString) -> Result<f64, SimError>;
}
