// scalargrad-core/src/ops/activation/relu.rs

use num_traits::Float;

use crate::node::{Node, NodeId, Op};
use crate::var::Var;

// --- Forward Operation ---

/// Rectified Linear Unit: `max(0, a)`. Total over the float domain; NaN
/// and infinities propagate per IEEE semantics.
pub fn relu_op<'t, T: Float>(a: Var<'t, T>) -> Var<'t, T> {
    let input = a.value();
    let value = if input > T::zero() { input } else { T::zero() };
    let id = a.tape.push(Node::new(value, Op::Relu(a.id)));
    Var { tape: a.tape, id }
}

// --- Backward Rule ---

/// The gate: the upstream gradient passes through iff the *input* was
/// strictly positive. At exactly zero the sub-gradient is taken as 0.
pub(crate) fn accumulate<T: Float>(nodes: &mut [Node<T>], a: NodeId, upstream: T) {
    if nodes[a.0].value > T::zero() {
        nodes[a.0].grad = nodes[a.0].grad + upstream;
    }
}

// --- Var Method ---

impl<'t, T: Float> Var<'t, T> {
    /// Applies ReLU to this node.
    pub fn relu(&self) -> Var<'t, T> {
        relu_op(*self)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::tape::Tape;

    #[test]
    fn relu_forward() {
        let tape: Tape<f64> = Tape::new();
        assert_eq!(tape.leaf(-2.0).relu().value(), 0.0);
        assert_eq!(tape.leaf(0.0).relu().value(), 0.0);
        assert_eq!(tape.leaf(3.5).relu().value(), 3.5);
    }

    #[test]
    fn relu_backward_gates_on_input_sign() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(2.0);
        let y = a.relu() * 5.0;
        y.backward();
        assert_eq!(a.grad(), 5.0);

        let tape: Tape<f64> = Tape::new();
        let b = tape.leaf(-2.0);
        let z = b.relu() * 5.0;
        z.backward();
        assert_eq!(b.grad(), 0.0);
    }

    #[test]
    fn relu_subgradient_at_zero_is_zero() {
        // At an input of exactly 0.0 the propagated gradient must be 0.0,
        // not 1.0.
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(0.0);
        let y = a.relu();
        y.backward();
        assert_eq!(a.grad(), 0.0);
    }

    #[test]
    fn relu_propagates_nan_forward() {
        let tape: Tape<f64> = Tape::new();
        let y = tape.leaf(f64::NAN).relu();
        // NaN > 0 is false, so the forward value clamps to zero.
        assert_eq!(y.value(), 0.0);
    }
}
