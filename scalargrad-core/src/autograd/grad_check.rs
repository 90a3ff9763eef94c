//! Numerical gradient checking.
//!
//! Compares the analytical gradients produced by the backward pass with
//! central finite differences of the forward computation. The forward
//! computation is supplied as a closure that rebuilds the expression on a
//! fresh tape from a slice of leaf variables, so the checker can evaluate
//! it at perturbed inputs.

use approx::relative_eq;
use log::debug;
use thiserror::Error;

use crate::error::ScalarGradError;
use crate::tape::Tape;
use crate::var::Var;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical} (difference: {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}: loss+ = {loss_plus}, loss- = {loss_minus}")]
    NonFiniteNumericalGradient {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must build a scalar expression over the given leaves and return
/// its output node; it is invoked once per analytical pass and twice per
/// input for the numerical estimate. `epsilon` is the perturbation step,
/// `tolerance` the relative tolerance of the comparison.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'t> Fn(&'t Tape<f64>, &[Var<'t, f64>]) -> Result<Var<'t, f64>, ScalarGradError>,
{
    // Analytical gradients: one forward build + one backward pass on a
    // fresh tape.
    let tape = Tape::new();
    let leaves: Vec<Var<'_, f64>> = inputs.iter().map(|&v| tape.leaf(v)).collect();
    let output = func(&tape, &leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // Numerical gradients: central difference per input, each evaluation
    // on its own throwaway tape.
    for (i, grad) in analytical.iter().enumerate() {
        let evaluate = |shifted: f64| -> Result<f64, GradCheckError> {
            let tape = Tape::new();
            let leaves: Vec<Var<'_, f64>> = inputs
                .iter()
                .enumerate()
                .map(|(j, &v)| tape.leaf(if j == i { shifted } else { v }))
                .collect();
            Ok(func(&tape, &leaves)?.value())
        };

        let loss_plus = evaluate(inputs[i] + epsilon)?;
        let loss_minus = evaluate(inputs[i] - epsilon)?;
        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NonFiniteNumericalGradient {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "grad check input {}: analytical {} vs numerical {}",
            i, grad, numerical
        );
        if !relative_eq!(*grad, numerical, epsilon = tolerance, max_relative = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: *grad,
                numerical,
                difference: (grad - numerical).abs(),
            });
        }
    }
    Ok(())
}
