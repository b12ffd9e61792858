pub mod api;
pub mod circuit;
pub mod device;
pub mod observable;
pub mod simulator;
pub mod state;

// Re-export key components for easier access from other crates.
pub use api::{SimError, SimulatorApi};
pub use circuit::{Circuit, Gate};
pub use device::{Device, DeviceConfig, Shots};
pub use observable::{Pauli, PauliString};
pub use simulator::StatevectorSimulator;
pub use state::StateVector;
