//! Node storage for the computation graph.
//!
//! A [`Node`] holds the forward value, the gradient accumulator, and a
//! tagged [`Op`] recording how the node was derived. The closure-per-node
//! idiom is replaced by this fixed variant set: the backward pass matches
//! on the tag and applies the corresponding local gradient rule, so no
//! captured behavior needs to live inside the graph.

use num_traits::Float;

/// Stable index of a node inside its [`crate::Tape`] arena.
///
/// Operand edges always point at earlier indices (nodes are appended in
/// creation order), which makes the arena acyclic by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its tape, usable as a stable identifier
    /// for external visualization.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The operation that produced a node, together with its operand edges.
///
/// `Pow` carries its exponent as a plain scalar: a differentiable exponent
/// is unrepresentable, which enforces the constant-exponent contract at
/// the type level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op<T> {
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow { base: NodeId, exponent: T },
    Relu(NodeId),
}

impl<T: Float> Op<T> {
    /// Direct predecessors of the node, in rule order.
    pub(crate) fn operands(&self) -> impl Iterator<Item = NodeId> {
        let (a, b) = match *self {
            Op::Leaf => (None, None),
            Op::Add(a, b) | Op::Mul(a, b) => (Some(a), Some(b)),
            Op::Pow { base, .. } => (Some(base), None),
            Op::Relu(a) => (Some(a), None),
        };
        a.into_iter().chain(b)
    }

    /// Human-readable label for the operation (empty for leaves), used by
    /// the graph introspection interface.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow { .. } => "**",
            Op::Relu(..) => "relu",
        }
    }
}

/// A single graph vertex: forward value, gradient accumulator, derivation.
///
/// `value` and `op` are fixed at construction (leaf values may only change
/// through the sanctioned parameter-update path, see
/// [`crate::Var::set_value`]); `grad` starts at zero and is only ever
/// accumulated into or explicitly reset.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
}

impl<T: Float> Node<T> {
    pub(crate) fn new(value: T, op: Op<T>) -> Self {
        Node {
            value,
            grad: T::zero(),
            op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operands_follow_rule_order() {
        let op: Op<f64> = Op::Add(NodeId(0), NodeId(1));
        let ids: Vec<usize> = op.operands().map(|id| id.index()).collect();
        assert_eq!(ids, vec![0, 1]);

        let pow: Op<f64> = Op::Pow {
            base: NodeId(3),
            exponent: 2.0,
        };
        let ids: Vec<usize> = pow.operands().map(|id| id.index()).collect();
        assert_eq!(ids, vec![3]);

        let leaf: Op<f64> = Op::Leaf;
        assert_eq!(leaf.operands().count(), 0);
    }

    #[test]
    fn labels_match_operations() {
        assert_eq!(Op::<f64>::Leaf.label(), "");
        assert_eq!(Op::<f64>::Add(NodeId(0), NodeId(1)).label(), "+");
        assert_eq!(Op::<f64>::Mul(NodeId(0), NodeId(1)).label(), "*");
        assert_eq!(
            Op::<f64>::Pow {
                base: NodeId(0),
                exponent: 3.0
            }
            .label(),
            "**"
        );
        assert_eq!(Op::<f64>::Relu(NodeId(0)).label(), "relu");
    }
}
