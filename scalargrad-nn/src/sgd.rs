// scalargrad-nn/src/sgd.rs

use log::debug;
use scalargrad_core::{ScalarGradError, Var};

/// Implements stochastic gradient descent.
///
/// Updates each parameter `p` according to the rule:
/// `p = p - lr * grad(p)`
#[derive(Debug)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    /// Creates a new SGD optimizer with the given learning rate.
    pub fn new(lr: f64) -> Self {
        Sgd { lr }
    }

    /// Performs a single optimization step over the given parameters.
    ///
    /// # Errors
    /// Fails with [`ScalarGradError::NonLeafAssignment`] if a handle in
    /// `params` is not a leaf node.
    pub fn step(&self, params: &[Var<'_, f64>]) -> Result<(), ScalarGradError> {
        debug!("sgd step over {} parameters (lr = {})", params.len(), self.lr);
        for p in params {
            p.set_value(p.value() - self.lr * p.grad())?;
        }
        Ok(())
    }

    /// Resets the gradient accumulator of every parameter.
    pub fn zero_grad(&self, params: &[Var<'_, f64>]) {
        for p in params {
            p.zero_grad();
        }
    }
}
