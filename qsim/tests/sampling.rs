use proptest::prelude::*;
use qsim::{Circuit, Device, DeviceConfig, Gate, PauliString, Shots};

fn bell_like(a: f64, b: f64) -> Circuit {
    Circuit::new(2)
        .with_gate(Gate::RX { qubit: 0, theta: a })
        .with_gate(Gate::RY { qubit: 0, theta: b })
        .with_gate(Gate::CNOT { control: 0, target: 1 })
}

fn observables() -> (Vec<PauliString>, Vec<PauliString>) {
    let z = vec!["Z0".parse().unwrap(), "Z1".parse().unwrap()];
    let x = vec!["X0 X1".parse().unwrap()];
    (z, x)
}

fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
}

proptest! {
    #[test]
    fn expectations_stay_in_range(
        a in -10.0f64..10.0,
        b in -10.0f64..10.0,
        shots in prop_oneof![Just(0u32), 1u32..200],
        seed in any::<u64>(),
    ) {
        let (z, x) = observables();
        let mut device = Device::seeded(seed);
        let config = DeviceConfig::new(2, Shots::from_count(shots));
        let circuit = bell_like(a, b);

        for value in device.execute(&config, &circuit, &z).unwrap()
            .into_iter()
            .chain(device.execute(&config, &circuit, &x).unwrap())
        {
            prop_assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&value), "value {} out of range", value);
        }
    }
}

#[test]
fn spread_shrinks_as_shots_grow() {
    // At RX(π/2) the true <Z0> is 0, so a single shot has standard deviation 1
    // and n shots have 1/sqrt(n).
    let (z, _) = observables();
    let circuit = bell_like(std::f64::consts::FRAC_PI_2, 0.0);
    let mut device = Device::seeded(2024);
    let repeats = 200;

    let spreads: Vec<f64> = [1u32, 10, 100, 1000]
        .iter()
        .map(|&shots| {
            let config = DeviceConfig::new(2, Shots::from_count(shots));
            let estimates: Vec<f64> = (0..repeats)
                .map(|_| device.execute(&config, &circuit, &z).unwrap()[0])
                .collect();
            std_dev(&estimates)
        })
        .collect();

    for pair in spreads.windows(2) {
        assert!(pair[1] < pair[0], "spread did not shrink: {:?}", spreads);
    }
    assert!(spreads[3] < 0.06, "1000-shot spread too wide: {:?}", spreads);
}

#[test]
fn analytic_evaluation_is_deterministic() {
    let (z, x) = observables();
    let config = DeviceConfig::new(2, Shots::Analytic);
    let circuit = bell_like(0.14, 0.14);

    let mut first = Device::seeded(1);
    let mut second = Device::seeded(99);
    assert_eq!(
        first.execute(&config, &circuit, &z).unwrap(),
        second.execute(&config, &circuit, &z).unwrap()
    );
    assert_eq!(
        first.execute(&config, &circuit, &x).unwrap(),
        second.execute(&config, &circuit, &x).unwrap()
    );
}
