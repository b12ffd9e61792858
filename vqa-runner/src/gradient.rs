use std::f64::consts::FRAC_PI_2;

use crate::ansatz::Params;

/// Parameter-shift Jacobian of a vector of expectation values.
///
/// Row `k` holds ∂⟨O_k⟩/∂θi = (⟨O_k⟩(θ + π/2·ei) − ⟨O_k⟩(θ − π/2·ei)) / 2.
/// Exact for gates generated by a Pauli (RX, RY); with finite shots every
/// shifted evaluation is an independent estimate.
pub fn parameter_shift_jacobian<F, E>(params: &Params, mut evaluate: F) -> Result<Vec<Params>, E>
where
    F: FnMut(&Params) -> Result<Vec<f64>, E>,
{
    let mut columns = Vec::with_capacity(params.len());
    for i in 0..params.len() {
        let mut params_plus = *params;
        params_plus[i] += FRAC_PI_2;
        let plus = evaluate(&params_plus)?;

        let mut params_minus = *params;
        params_minus[i] -= FRAC_PI_2;
        let minus = evaluate(&params_minus)?;

        columns.push(
            plus.iter()
                .zip(minus.iter())
                .map(|(p, m)| 0.5 * (p - m))
                .collect::<Vec<f64>>(),
        );
    }

    let num_outputs = columns.first().map_or(0, Vec::len);
    Ok((0..num_outputs)
        .map(|k| [columns[0][k], columns[1][k]])
        .collect())
}

/// ∂C/∂θi = Σk ∂C/∂⟨O_k⟩ · ∂⟨O_k⟩/∂θi
pub fn chain_rule(cost_gradient: &[f64], jacobian: &[Params]) -> Params {
    let mut grad = [0.0; 2];
    for (dc, row) in cost_gradient.iter().zip(jacobian) {
        for (g, d) in grad.iter_mut().zip(row) {
            *g += dc * d;
        }
    }
    grad
}
