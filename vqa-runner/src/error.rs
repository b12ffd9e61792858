use qsim::SimError;

#[derive(thiserror::Error, Debug)]
pub enum VqaError {
    #[error("Simulation failed: {0}")]
    Sim(#[from] SimError),
    #[error("Optimizer diverged at step {step}: {quantity} is not finite ({params:?})")]
    Diverged {
        step: usize,
        quantity: &'static str,
        params: [f64; 2],
    },
}
