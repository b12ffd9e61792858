use qsim::{Circuit, Device, DeviceConfig, Gate, Pauli, PauliString, SimError};

/// Rotation angles for RX and RY on qubit 0.
pub type Params = [f64; 2];

/// The ansatz always acts on two qubits.
pub const NUM_WIRES: usize = 2;

/// Builds the Bell-state ansatz: RX(θ0) then RY(θ1) on qubit 0, then a CNOT
/// from qubit 0 onto qubit 1, all applied to |00⟩.
pub fn bell_ansatz(params: &Params) -> Circuit {
    Circuit::new(NUM_WIRES)
        .with_gate(Gate::RX { qubit: 0, theta: params[0] })
        .with_gate(Gate::RY { qubit: 0, theta: params[1] })
        .with_gate(Gate::CNOT { control: 0, target: 1 })
}

/// Which expectation values a circuit evaluation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitVariant {
    /// `[⟨Z0⟩, ⟨Z1⟩]`, both read from one batch of shots.
    ZBasis,
    /// `[⟨X0 X1⟩]`.
    XBasis,
}

impl CircuitVariant {
    pub fn observables(&self) -> Vec<PauliString> {
        match self {
            CircuitVariant::ZBasis => vec![
                PauliString::single(Pauli::Z, 0),
                PauliString::single(Pauli::Z, 1),
            ],
            CircuitVariant::XBasis => {
                vec![PauliString::new().with_pauli(0, Pauli::X).with_pauli(1, Pauli::X)]
            }
        }
    }

    pub fn evaluate(
        &self,
        device: &mut Device,
        config: &DeviceConfig,
        params: &Params,
    ) -> Result<Vec<f64>, SimError> {
        device.execute(config, &bell_ansatz(params), &self.observables())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsim::Shots;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_ansatz_gate_sequence() {
        let circuit = bell_ansatz(&[0.3, 0.7]);
        assert_eq!(circuit.num_qubits, NUM_WIRES);
        assert_eq!(
            circuit.gates,
            vec![
                Gate::RX { qubit: 0, theta: 0.3 },
                Gate::RY { qubit: 0, theta: 0.7 },
                Gate::CNOT { control: 0, target: 1 },
            ]
        );
    }

    #[test]
    fn test_variants_at_the_bell_point() {
        let mut device = Device::new();
        let config = DeviceConfig::new(NUM_WIRES, Shots::Analytic);
        let bell = [0.0, FRAC_PI_2];

        let z = CircuitVariant::ZBasis.evaluate(&mut device, &config, &bell).unwrap();
        let x = CircuitVariant::XBasis.evaluate(&mut device, &config, &bell).unwrap();
        assert_eq!(z.len(), 2);
        assert!(z[0].abs() < 1e-12 && z[1].abs() < 1e-12, "z was {:?}", z);
        assert!((x[0] - 1.0).abs() < 1e-12, "x was {:?}", x);
    }

    #[test]
    fn test_variant_observables() {
        let z: Vec<String> = CircuitVariant::ZBasis.observables().iter().map(|o| o.to_string()).collect();
        let x: Vec<String> = CircuitVariant::XBasis.observables().iter().map(|o| o.to_string()).collect();
        assert_eq!(z, vec!["Z0", "Z1"]);
        assert_eq!(x, vec!["X0 X1"]);
    }
}
