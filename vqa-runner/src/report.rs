use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::ansatz::{CircuitVariant, Params};
use crate::training::Experiment;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub experiment: Experiment,
    pub costs: Vec<f64>,
    pub final_params: Params,
    pub final_expvals: Vec<f64>,
    pub final_cost: f64,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exp = &self.experiment;
        writeln!(
            f,
            "=== {} | {} | shots = {} | {:?} stepsize {} ===",
            exp.label,
            exp.cost.label(),
            exp.device.shots,
            exp.optimizer,
            exp.stepsize
        )?;
        for (step, cost) in self.costs.iter().enumerate() {
            writeln!(f, "Cost after step {:>4}: {:>10.7}", step + 1, cost)?;
        }
        writeln!(
            f,
            "Optimized rotation angles: [{:.8}, {:.8}]",
            self.final_params[0], self.final_params[1]
        )?;
        match exp.cost.variant() {
            CircuitVariant::ZBasis => writeln!(
                f,
                "Final <Z0>, <Z1>: [{:>7.4}, {:>7.4}]",
                self.final_expvals[0], self.final_expvals[1]
            )?,
            CircuitVariant::XBasis => {
                writeln!(f, "Final <X0 X1>: {:>7.4}", self.final_expvals[0])?
            }
        }
        write!(f, "Final cost: {:>10.7}", self.final_cost)
    }
}

/// Writes each report as text, separated by blank lines.
pub fn write_text(reports: &[TrainingReport], writer: &mut impl Write) -> std::io::Result<()> {
    for report in reports {
        writeln!(writer, "{}\n", report)?;
    }
    Ok(())
}

/// Writes all reports as one pretty-printed JSON array.
pub fn write_json(reports: &[TrainingReport], writer: &mut impl Write) -> anyhow::Result<()> {
    let json_output = serde_json::to_string_pretty(reports)?;
    writeln!(writer, "{}", json_output)?;
    Ok(())
}
