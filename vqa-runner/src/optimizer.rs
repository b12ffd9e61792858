use clap::ValueEnum;
use serde::Serialize;

use crate::ansatz::Params;

/// A first-order update rule with explicit, owned state.
///
/// `step` consumes the current state and hands back the next one together with
/// the new parameters, so a training run is fully described by the sequence of
/// gradients it was fed.
pub trait Optimizer {
    type State: Clone + std::fmt::Debug;

    fn init_state(&self) -> Self::State;

    fn step(&self, params: &Params, grad: &Params, state: Self::State) -> (Params, Self::State);
}

/// Per-parameter running sum of squared gradients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdagradState {
    pub accumulation: Params,
}

/// AdaGrad: a ← a + g², θ ← θ − η·g/√(a + ε).
#[derive(Debug, Clone, Copy)]
pub struct Adagrad {
    pub stepsize: f64,
    pub eps: f64,
}

impl Adagrad {
    pub fn new(stepsize: f64) -> Self {
        Self { stepsize, eps: 1e-8 }
    }
}

impl Optimizer for Adagrad {
    type State = AdagradState;

    fn init_state(&self) -> AdagradState {
        AdagradState::default()
    }

    fn step(&self, params: &Params, grad: &Params, state: AdagradState) -> (Params, AdagradState) {
        let mut next = *params;
        let mut accumulation = state.accumulation;
        for i in 0..next.len() {
            accumulation[i] += grad[i] * grad[i];
            next[i] -= self.stepsize / (accumulation[i] + self.eps).sqrt() * grad[i];
        }
        (next, AdagradState { accumulation })
    }
}

/// Plain gradient descent, θ ← θ − η·g. Stateless.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    pub stepsize: f64,
}

impl Optimizer for GradientDescent {
    type State = ();

    fn init_state(&self) -> Self::State {}

    fn step(&self, params: &Params, grad: &Params, _state: ()) -> (Params, ()) {
        let next = [
            params[0] - self.stepsize * grad[0],
            params[1] - self.stepsize * grad[1],
        ];
        (next, ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum OptimizerKind {
    Adagrad,
    #[value(name = "gd")]
    GradientDescent,
}
