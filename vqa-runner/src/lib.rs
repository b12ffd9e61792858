//! Variational training of a two-qubit Bell-state circuit on the `qsim`
//! sampling device.

pub mod ansatz;
pub mod cost;
pub mod error;
pub mod gradient;
pub mod optimizer;
pub mod problem;
pub mod report;
pub mod training;

pub use ansatz::{CircuitVariant, NUM_WIRES, Params, bell_ansatz};
pub use cost::CostKind;
pub use error::VqaError;
pub use optimizer::{Adagrad, AdagradState, GradientDescent, Optimizer, OptimizerKind};
pub use problem::VqaProblem;
pub use report::TrainingReport;
pub use training::{Experiment, TrainingHistory, run_experiment, train};
