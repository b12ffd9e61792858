use anyhow::Context;
use argmin::core::{CostFunction, Error, Gradient};
use qsim::{Device, DeviceConfig};
use serde::Serialize;
use tracing::{debug, info};

use crate::ansatz::Params;
use crate::cost::CostKind;
use crate::error::VqaError;
use crate::optimizer::{Adagrad, GradientDescent, Optimizer, OptimizerKind};
use crate::problem::VqaProblem;
use crate::report::TrainingReport;

/// Costs recorded before each update, and where the parameters ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingHistory {
    pub costs: Vec<f64>,
    pub final_params: Params,
}

/// Fixed-length training loop: record the cost at the current parameters, then
/// hand the gradient to the optimizer. There is no convergence check.
pub fn train<P, O>(
    problem: &P,
    optimizer: &O,
    initial: Params,
    steps: usize,
) -> Result<TrainingHistory, Error>
where
    P: CostFunction<Param = Params, Output = f64> + Gradient<Param = Params, Gradient = Params>,
    O: Optimizer,
{
    let mut params = initial;
    let mut state = optimizer.init_state();
    let mut costs = Vec::with_capacity(steps);

    for step in 0..steps {
        let cost = problem.cost(&params)?;
        if !cost.is_finite() {
            return Err(VqaError::Diverged { step, quantity: "cost", params }.into());
        }
        costs.push(cost);

        let grad = problem.gradient(&params)?;
        if grad.iter().any(|g| !g.is_finite()) {
            return Err(VqaError::Diverged { step, quantity: "gradient", params }.into());
        }

        debug!(step, cost, ?params, ?grad, "training step");
        (params, state) = optimizer.step(&params, &grad, state);
    }

    Ok(TrainingHistory {
        costs,
        final_params: params,
    })
}

/// One independent training run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub label: String,
    pub cost: CostKind,
    pub device: DeviceConfig,
    pub initial_params: Params,
    pub steps: usize,
    pub optimizer: OptimizerKind,
    pub stepsize: f64,
}

/// Trains, then evaluates the circuit once more at the final parameters.
pub fn run_experiment(experiment: &Experiment, device: &mut Device) -> anyhow::Result<TrainingReport> {
    info!(
        label = %experiment.label,
        shots = %experiment.device.shots,
        steps = experiment.steps,
        "starting training run"
    );
    let problem = VqaProblem::new(device, experiment.device, experiment.cost);

    let history = match experiment.optimizer {
        OptimizerKind::Adagrad => train(
            &problem,
            &Adagrad::new(experiment.stepsize),
            experiment.initial_params,
            experiment.steps,
        ),
        OptimizerKind::GradientDescent => train(
            &problem,
            &GradientDescent { stepsize: experiment.stepsize },
            experiment.initial_params,
            experiment.steps,
        ),
    }
    .with_context(|| format!("training run '{}' failed", experiment.label))?;

    let final_expvals = problem
        .evaluate(&history.final_params)
        .with_context(|| format!("final evaluation of '{}' failed", experiment.label))?;
    let final_cost = experiment.cost.value(&final_expvals);

    info!(label = %experiment.label, final_cost, params = ?history.final_params, "training run finished");

    Ok(TrainingReport {
        experiment: experiment.clone(),
        costs: history.costs,
        final_params: history.final_params,
        final_expvals,
        final_cost,
    })
}
