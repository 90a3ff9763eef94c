// scalargrad-core/src/ops/arithmetic/mul.rs

use std::ops::{Mul, Neg, Sub};

use num_traits::Float;

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::ops::check_same_tape;
use crate::var::Var;

// --- Forward Operation ---

/// Multiplies two nodes and records the result on their shared tape.
/// Returns a `Result` wrapping the new `Var` or a `ScalarGradError`.
pub fn mul_op<'t, T: Float>(
    a: Var<'t, T>,
    b: Var<'t, T>,
) -> Result<Var<'t, T>, ScalarGradError> {
    check_same_tape(&a, &b, "mul")?;
    let value = a.value() * b.value();
    let id = a.tape.push(Node::new(value, Op::Mul(a.id, b.id)));
    Ok(Var { tape: a.tape, id })
}

// --- Backward Rule ---

/// d(a * b)/da = b, d(a * b)/db = a: each operand receives the *other*
/// operand's forward value times the upstream gradient. Both forward
/// values are read before writing so that `a * a` contributes twice.
pub(crate) fn accumulate<T: Float>(nodes: &mut [Node<T>], a: NodeId, b: NodeId, upstream: T) {
    let a_value = nodes[a.0].value;
    let b_value = nodes[b.0].value;
    nodes[a.0].grad = nodes[a.0].grad + b_value * upstream;
    nodes[b.0].grad = nodes[b.0].grad + a_value * upstream;
}

// --- Operator Sugar ---

impl<'t, T: Float> Mul for Var<'t, T> {
    type Output = Var<'t, T>;

    fn mul(self, rhs: Self) -> Var<'t, T> {
        mul_op(self, rhs).expect("mul: operands live on different tapes")
    }
}

/// A bare scalar operand is promoted to a fresh leaf node.
impl<'t, T: Float> Mul<T> for Var<'t, T> {
    type Output = Var<'t, T>;

    fn mul(self, rhs: T) -> Var<'t, T> {
        self * self.tape.leaf(rhs)
    }
}

/// `-a`, lowered to `a * (-1)`. Adds no engine semantics of its own.
impl<'t, T: Float> Neg for Var<'t, T> {
    type Output = Var<'t, T>;

    fn neg(self) -> Var<'t, T> {
        self * -T::one()
    }
}

/// `a - b`, lowered to `a + (-b)`.
impl<'t, T: Float> Sub for Var<'t, T> {
    type Output = Var<'t, T>;

    fn sub(self, rhs: Self) -> Var<'t, T> {
        self + -rhs
    }
}

impl<'t, T: Float> Sub<T> for Var<'t, T> {
    type Output = Var<'t, T>;

    fn sub(self, rhs: T) -> Var<'t, T> {
        self + -rhs
    }
}

// --- Tests ---
