// scalargrad-core/src/ops/arithmetic/add.rs

use std::ops::Add;

use num_traits::Float;

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::ops::check_same_tape;
use crate::var::Var;

// --- Forward Operation ---

/// Adds two nodes and records the result on their shared tape.
/// Returns a `Result` wrapping the new `Var` or a `ScalarGradError`.
pub fn add_op<'t, T: Float>(
    a: Var<'t, T>,
    b: Var<'t, T>,
) -> Result<Var<'t, T>, ScalarGradError> {
    check_same_tape(&a, &b, "add")?;
    let value = a.value() + b.value();
    let id = a.tape.push(Node::new(value, Op::Add(a.id, b.id)));
    Ok(Var { tape: a.tape, id })
}

// --- Backward Rule ---

/// d(a + b)/da = 1, d(a + b)/db = 1: the upstream gradient flows to both
/// operands unchanged. Sequential `+=` keeps `a + a` correct (the node
/// receives two contributions).
pub(crate) fn accumulate<T: Float>(nodes: &mut [Node<T>], a: NodeId, b: NodeId, upstream: T) {
    nodes[a.0].grad = nodes[a.0].grad + upstream;
    nodes[b.0].grad = nodes[b.0].grad + upstream;
}

// --- Operator Sugar ---

impl<'t, T: Float> Add for Var<'t, T> {
    type Output = Var<'t, T>;

    fn add(self, rhs: Self) -> Var<'t, T> {
        add_op(self, rhs).expect("add: operands live on different tapes")
    }
}

/// A bare scalar operand is promoted to a fresh leaf node.
impl<'t, T: Float> Add<T> for Var<'t, T> {
    type Output = Var<'t, T>;

    fn add(self, rhs: T) -> Var<'t, T> {
        self + self.tape.leaf(rhs)
    }
}

// --- Tests ---
