//! # Autograd
//!
//! The backward pass: given one output node, compute the gradient of its
//! value with respect to every node that contributed to it.
//!
//! The pass runs in three steps:
//! 1. build a reverse-topological order over the subgraph reachable from
//!    the output ([`graph::topological_sort`]);
//! 2. seed the output's gradient with 1 (d(out)/d(out)); gradients held by
//!    other nodes are left alone — callers own the reset discipline, see
//!    [`crate::Tape::zero_grad`];
//! 3. walk the order in reverse (consumers before producers) and apply
//!    each node's local gradient rule exactly once, dispatching on the
//!    node's operation tag.

pub mod grad_check;
pub(crate) mod graph;

use log::trace;
use num_traits::Float;

use crate::node::{NodeId, Op};
use crate::ops::activation::relu;
use crate::ops::arithmetic::{add, mul, pow};
use crate::tape::Tape;
use crate::var::Var;

/// Runs the backward pass from `root`, accumulating gradients into every
/// reachable node.
pub(crate) fn run_backward<T: Float>(tape: &Tape<T>, root: NodeId) {
    let order = {
        let nodes = tape.nodes.borrow();
        graph::topological_sort(&nodes, root)
    };
    trace!(
        "backward from node {} over {} reachable nodes",
        root.index(),
        order.len()
    );

    let mut nodes = tape.nodes.borrow_mut();
    nodes[root.0].grad = T::one();

    for &id in order.iter().rev() {
        let node = nodes[id.0];
        let upstream = node.grad;
        match node.op {
            Op::Leaf => {}
            Op::Add(a, b) => add::accumulate(&mut nodes, a, b, upstream),
            Op::Mul(a, b) => mul::accumulate(&mut nodes, a, b, upstream),
            Op::Pow { base, exponent } => pow::accumulate(&mut nodes, base, exponent, upstream),
            Op::Relu(a) => relu::accumulate(&mut nodes, a, upstream),
        }
    }
}

impl<T: Float> Var<'_, T> {
    /// Computes d(self)/d(node) for every node reachable from `self` and
    /// accumulates it into that node's gradient.
    ///
    /// Gradients are *accumulated*, never overwritten: two backward
    /// passes over subgraphs sharing an ancestor sum their contributions
    /// into it. Callers composing independent passes (e.g. training
    /// iterations) must reset gradients in between, the engine never does
    /// so implicitly.
    ///
    /// Calling this on a leaf is legal and simply seeds its gradient
    /// with 1.
    pub fn backward(&self) {
        run_backward(self.tape, self.id);
    }
}
