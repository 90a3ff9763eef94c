// scalargrad-core/src/ops/arithmetic/pow.rs

use num_traits::Float;

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::var::Var;

// --- Forward Operation ---

/// Raises a node to a constant scalar power and records the result.
///
/// The exponent is a plain scalar by signature, so a differentiable
/// exponent is unrepresentable; a non-finite exponent is rejected here,
/// before any tape mutation, because its gradient rule would be
/// meaningless.
pub fn pow_op<'t, T: Float>(
    base: Var<'t, T>,
    exponent: T,
) -> Result<Var<'t, T>, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent {
            exponent: exponent.to_f64().unwrap_or(f64::NAN),
            operation: "pow".to_string(),
        });
    }
    let value = base.value().powf(exponent);
    let id = base.tape.push(Node::new(
        value,
        Op::Pow {
            base: base.id,
            exponent,
        },
    ));
    Ok(Var {
        tape: base.tape,
        id,
    })
}

// --- Backward Rule ---

/// Power rule: d(a^k)/da = k * a^(k-1).
pub(crate) fn accumulate<T: Float>(nodes: &mut [Node<T>], base: NodeId, exponent: T, upstream: T) {
    let base_value = nodes[base.0].value;
    let local = exponent * base_value.powf(exponent - T::one());
    nodes[base.0].grad = nodes[base.0].grad + local * upstream;
}

// --- Var Method ---

impl<'t, T: Float> Var<'t, T> {
    /// `self` raised to the constant power `exponent`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InvalidExponent`] if `exponent` is NaN
    /// or infinite.
    pub fn powf(&self, exponent: T) -> Result<Var<'t, T>, ScalarGradError> {
        pow_op(*self, exponent)
    }
}

// --- Tests ---
