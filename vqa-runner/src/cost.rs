use serde::Serialize;

use crate::ansatz::CircuitVariant;

/// Scalar costs built from the circuit's expectation values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CostKind {
    /// `|⟨Z0⟩|`, in [0, 1].
    ///
    /// Zero whenever qubit 0 reads |0⟩ and |1⟩ equally often. That holds for
    /// both (|00⟩ + |11⟩)/√2 and (|00⟩ − |11⟩)/√2, so this cost cannot tell the
    /// two Bell states apart. Use [`CostKind::XBasis`] to pin down the sign.
    ZBasis,
    /// `−⟨X0 X1⟩`, in [−1, 1]. Reaches −1 only on (|00⟩ + |11⟩)/√2.
    XBasis,
}

impl CostKind {
    pub fn variant(&self) -> CircuitVariant {
        match self {
            CostKind::ZBasis => CircuitVariant::ZBasis,
            CostKind::XBasis => CircuitVariant::XBasis,
        }
    }

    pub fn value(&self, expvals: &[f64]) -> f64 {
        match self {
            CostKind::ZBasis => expvals[0].abs(),
            CostKind::XBasis => -expvals[0],
        }
    }

    /// ∂cost/∂⟨O_k⟩ for each expectation value the variant returns.
    /// The kink of |x| at 0 gets derivative 0.
    pub fn expval_gradient(&self, expvals: &[f64]) -> Vec<f64> {
        match self {
            CostKind::ZBasis => {
                let sign = if expvals[0] > 0.0 {
                    1.0
                } else if expvals[0] < 0.0 {
                    -1.0
                } else {
                    0.0
                };
                vec![sign, 0.0]
            }
            CostKind::XBasis => vec![-1.0],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostKind::ZBasis => "Z-basis cost |<Z0>|",
            CostKind::XBasis => "X-basis cost -<X0 X1>",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cost_values() {
        assert_eq!(CostKind::ZBasis.value(&[-0.25, -0.25]), 0.25);
        assert_eq!(CostKind::ZBasis.value(&[0.0, 0.0]), 0.0);
        assert_eq!(CostKind::XBasis.value(&[1.0]), -1.0);
        assert_eq!(CostKind::XBasis.value(&[-0.5]), 0.5);
    }

    #[test]
    fn test_expval_gradient_signs() {
        assert_eq!(CostKind::ZBasis.expval_gradient(&[0.4, 0.4]), vec![1.0, 0.0]);
        assert_eq!(CostKind::ZBasis.expval_gradient(&[-0.4, -0.4]), vec![-1.0, 0.0]);
        assert_eq!(CostKind::ZBasis.expval_gradient(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(CostKind::XBasis.expval_gradient(&[0.2]), vec![-1.0]);
    }

    proptest! {
        #[test]
        fn z_cost_in_unit_interval(e in -1.0f64..=1.0) {
            let c = CostKind::ZBasis.value(&[e, e]);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn x_cost_in_symmetric_interval(e in -1.0f64..=1.0) {
            let c = CostKind::XBasis.value(&[e]);
            prop_assert!((-1.0..=1.0).contains(&c));
        }
    }
}
