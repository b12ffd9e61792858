use argmin::core::{CostFunction, Error, Gradient};
use qsim::{Device, DeviceConfig};
use std::cell::RefCell;

use crate::ansatz::Params;
use crate::cost::CostKind;
use crate::error::VqaError;
use crate::gradient::{chain_rule, parameter_shift_jacobian};

/// Links the Bell ansatz, a cost and a device to argmin's problem traits.
///
/// The device sits behind a `RefCell` because argmin evaluates through `&self`
/// while every finite-shot evaluation advances the device's random source.
pub struct VqaProblem<'a> {
    device: RefCell<&'a mut Device>,
    config: DeviceConfig,
    cost: CostKind,
}

impl<'a> VqaProblem<'a> {
    pub fn new(device: &'a mut Device, config: DeviceConfig, cost: CostKind) -> Self {
        Self {
            device: RefCell::new(device),
            config,
            cost,
        }
    }

    /// One fresh circuit evaluation: the expectation values of the cost's
    /// circuit variant.
    pub fn evaluate(&self, params: &Params) -> Result<Vec<f64>, VqaError> {
        let mut device = self.device.borrow_mut();
        let values = self.cost.variant().evaluate(&mut **device, &self.config, params)?;
        Ok(values)
    }

    pub fn cost_at(&self, params: &Params) -> Result<f64, VqaError> {
        Ok(self.cost.value(&self.evaluate(params)?))
    }

    /// Parameter-shift gradient of the cost. The cost's own derivative is taken
    /// at a separate evaluation of the unshifted circuit.
    pub fn gradient_at(&self, params: &Params) -> Result<Params, VqaError> {
        let expvals = self.evaluate(params)?;
        let jacobian = parameter_shift_jacobian(params, |p| self.evaluate(p))?;
        Ok(chain_rule(&self.cost.expval_gradient(&expvals), &jacobian))
    }
}

impl CostFunction for VqaProblem<'_> {
    type Param = Params;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.cost_at(params)?)
    }
}

impl Gradient for VqaProblem<'_> {
    type Param = Params;
    type Gradient = Params;

    fn gradient(&self, params: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(self.gradient_at(params)?)
    }
}
