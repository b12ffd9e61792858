use clap::Parser;
use qsim::{Device, DeviceConfig, Shots};
use std::io::{self, BufWriter};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vqa_runner::report::{write_json, write_text};
use vqa_runner::{CostKind, Experiment, NUM_WIRES, OptimizerKind, run_experiment};

/// Trains a two-qubit circuit towards a Bell state, sweeping the shot count.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shot counts for the Z-basis runs, comma separated. 0 means analytic.
    #[arg(long, value_delimiter = ',', default_values_t = [1u32, 10, 100, 1000])]
    shots: Vec<u32>,

    /// Optimizer steps per Z-basis run.
    #[arg(long, default_value_t = 30)]
    steps: usize,

    /// Step size for the Z-basis runs.
    #[arg(long, default_value_t = 0.3)]
    stepsize: f64,

    #[arg(long, value_enum, default_value_t = OptimizerKind::Adagrad)]
    optimizer: OptimizerKind,

    /// Optimizer steps for the X-basis run.
    #[arg(long, default_value_t = 100)]
    bonus_steps: usize,

    #[arg(long, default_value_t = 100)]
    bonus_shots: u32,

    #[arg(long, default_value_t = 0.3)]
    bonus_stepsize: f64,

    /// Skip the X-basis run.
    #[arg(long)]
    skip_bonus: bool,

    /// Seed for the device's random source; omit for a fresh seed each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the reports as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn experiments(&self) -> Vec<Experiment> {
        let base = DeviceConfig::new(NUM_WIRES, Shots::Analytic);

        let mut experiments: Vec<Experiment> = self
            .shots
            .iter()
            .map(|&count| {
                let shots = Shots::from_count(count);
                Experiment {
                    label: format!("z-basis/{}", shots),
                    cost: CostKind::ZBasis,
                    device: base.with_shots(shots),
                    initial_params: [0.0, 0.0],
                    steps: self.steps,
                    optimizer: self.optimizer,
                    stepsize: self.stepsize,
                }
            })
            .collect();

        if !self.skip_bonus {
            experiments.push(Experiment {
                label: "x-basis/bonus".to_string(),
                cost: CostKind::XBasis,
                device: base.with_shots(Shots::from_count(self.bonus_shots)),
                initial_params: [0.14, 0.14],
                steps: self.bonus_steps,
                optimizer: self.optimizer,
                stepsize: self.bonus_stepsize,
            });
        }
        experiments
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(?cli, "starting vqa-runner");

    let mut device = match cli.seed {
        Some(seed) => Device::seeded(seed),
        None => Device::new(),
    };

    let reports = cli
        .experiments()
        .iter()
        .map(|experiment| run_experiment(experiment, &mut device))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.json {
        write_json(&reports, &mut out)?;
    } else {
        write_text(&reports, &mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_the_shot_sweep() {
        let cli = Cli::parse_from(["vqa-runner"]);
        let experiments = cli.experiments();

        assert_eq!(experiments.len(), 5);
        let shots: Vec<String> = experiments[..4].iter().map(|e| e.device.shots.to_string()).collect();
        assert_eq!(shots, vec!["1", "10", "100", "1000"]);
        assert!(experiments[..4].iter().all(|e| e.steps == 30 && e.cost == CostKind::ZBasis));

        let bonus = &experiments[4];
        assert_eq!(bonus.cost, CostKind::XBasis);
        assert_eq!(bonus.steps, 100);
        assert_eq!(bonus.stepsize, 0.3);
        assert_eq!(bonus.initial_params, [0.14, 0.14]);
    }

    #[test]
    fn test_custom_sweep_and_skip_bonus() {
        let cli = Cli::parse_from(["vqa-runner", "--shots", "0,50", "--skip-bonus", "--optimizer", "gd"]);
        let experiments = cli.experiments();
        assert_eq!(experiments.len(), 2);
        assert_eq!(experiments[0].device.shots, Shots::Analytic);
        assert_eq!(experiments[1].label, "z-basis/50");
        assert_eq!(experiments[1].optimizer, OptimizerKind::GradientDescent);
    }
}
