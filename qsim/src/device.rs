use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;
use tracing::trace;

use crate::api::{SimError, SimulatorApi};
use crate::circuit::Circuit;
use crate::observable::{Pauli, PauliString};
use crate::simulator::StatevectorSimulator;

/// How expectation values are estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Shots {
    /// Exact ⟨ψ|P|ψ⟩, the infinite-shot limit.
    Analytic,
    /// Mean of ±1 outcomes over this many samples.
    Finite(NonZeroU32),
}

impl Shots {
    /// `0` means analytic.
    pub fn from_count(count: u32) -> Self {
        NonZeroU32::new(count).map_or(Shots::Analytic, Shots::Finite)
    }
}

impl fmt::Display for Shots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shots::Analytic => write!(f, "analytic"),
            Shots::Finite(n) => write!(f, "{}", n),
        }
    }
}

/// Device settings, passed explicitly into every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    pub wires: usize,
    pub shots: Shots,
}

impl DeviceConfig {
    pub fn new(wires: usize, shots: Shots) -> Self {
        Self { wires, shots }
    }

    pub fn with_shots(self, shots: Shots) -> Self {
        Self { shots, ..self }
    }
}

/// A sampling statevector device. It owns only the backend scratch space and
/// the random source; everything else comes in through [`DeviceConfig`].
pub struct Device {
    backend: StatevectorSimulator,
    rng: StdRng,
}

impl Device {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sampling: two devices with the same seed, fed the same
    /// calls, return identical estimates.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            backend: StatevectorSimulator::new(0),
            rng,
        }
    }

    /// Runs `circuit` and estimates every observable. With finite shots all
    /// observables are read from the same batch of samples, so they must be
    /// qubit-wise commuting.
    pub fn execute(
        &mut self,
        config: &DeviceConfig,
        circuit: &Circuit,
        observables: &[PauliString],
    ) -> Result<Vec<f64>, SimError> {
        if circuit.num_qubits != config.wires {
            return Err(SimError::WireMismatch {
                circuit: circuit.num_qubits,
                device: config.wires,
            });
        }
        if let Some(q) = observables
            .iter()
            .filter_map(PauliString::max_qubit)
            .find(|&q| q >= config.wires)
        {
            return Err(SimError::Qubit(q));
        }

        self.backend.run(circuit)?;

        match config.shots {
            Shots::Analytic => observables
                .iter()
                .map(|obs| self.backend.expectation(obs))
                .collect(),
            Shots::Finite(shots) => self.estimate(config.wires, shots.get(), observables),
        }
    }

    fn estimate(
        &mut self,
        wires: usize,
        shots: u32,
        observables: &[PauliString],
    ) -> Result<Vec<f64>, SimError> {
        let basis = measurement_basis(wires, observables)?;

        let mut rotated = self.backend.statevector().clone();
        for (qubit, &pauli) in basis.iter().enumerate() {
            rotated.rotate_into_basis(pauli, qubit);
        }

        let samples = rotated.sample_indices(shots, &mut self.rng)?;
        trace!(shots, ?basis, "sampled measurement batch");

        let estimates = observables
            .iter()
            .map(|obs| {
                let total: f64 = samples.iter().map(|&idx| obs.eigenvalue(idx)).sum();
                total / f64::from(shots)
            })
            .collect();
        Ok(estimates)
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks one Pauli basis per wire that diagonalizes every observable at once.
fn measurement_basis(wires: usize, observables: &[PauliString]) -> Result<Vec<Pauli>, SimError> {
    let mut basis = vec![Pauli::I; wires];
    for obs in observables {
        for &(pauli, qubit) in obs.operators() {
            match basis[qubit] {
                Pauli::I => basis[qubit] = pauli,
                current if current == pauli => {}
                current => {
                    return Err(SimError::IncompatibleObservables {
                        qubit,
                        first: current.to_string(),
                        second: pauli.to_string(),
                    });
                }
            }
        }
    }
    Ok(basis)
}
