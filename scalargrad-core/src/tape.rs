//! The tape: an append-only arena owning every node of a computation graph.
//!
//! Graph nodes are shared by multiple downstream consumers, so no node can
//! own its operands exclusively. Instead of reference-counted pointers,
//! all nodes live in one arena and refer to their operands by index; the
//! whole graph is freed at once when the tape is dropped. The arena sits
//! behind a `RefCell`, which keeps the engine single-threaded by
//! construction (`Tape` is `!Sync`): concurrent backward passes over
//! overlapping subgraphs are a compile-time impossibility rather than a
//! documented race.

use std::cell::RefCell;

use num_traits::Float;

use crate::error::ScalarGradError;
use crate::node::{Node, NodeId, Op};
use crate::var::Var;

/// Arena of computation-graph nodes. Create leaves with [`Tape::leaf`],
/// derive new nodes through arithmetic on [`Var`] handles.
#[derive(Debug)]
pub struct Tape<T: Float> {
    pub(crate) nodes: RefCell<Vec<Node<T>>>,
}

impl<T: Float> Default for Tape<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Tape<T> {
    pub fn new() -> Self {
        Tape {
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// Creates a leaf node holding an explicit scalar. Leaves have no
    /// operands and a no-op backward rule.
    pub fn leaf(&self, value: T) -> Var<'_, T> {
        let id = self.push(Node::new(value, Op::Leaf));
        Var { tape: self, id }
    }

    /// Appends a node and returns its index.
    pub(crate) fn push(&self, node: Node<T>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(node);
        id
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets every gradient accumulator on the tape to zero.
    ///
    /// The engine never does this implicitly: accumulation across backward
    /// passes is intentional (a value feeding several loss terms must sum
    /// its contributions), so callers composing training iterations must
    /// reset between them.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Marks the current end of the tape. Nodes recorded after a
    /// checkpoint can be discarded with [`Tape::rewind`].
    pub fn checkpoint(&self) -> usize {
        self.len()
    }

    /// Truncates the tape back to a mark obtained from
    /// [`Tape::checkpoint`], discarding every node recorded since.
    ///
    /// Edges only ever point at earlier indices, so truncation cannot
    /// leave a dangling operand among the surviving nodes. Handles to
    /// discarded nodes must not be used afterwards. Typical use is an
    /// iterative training loop: checkpoint after creating the parameter
    /// leaves, rewind at the top of every iteration.
    pub fn rewind(&self, mark: usize) {
        let mut nodes = self.nodes.borrow_mut();
        assert!(
            mark <= nodes.len(),
            "rewind mark {} past end of tape ({} nodes)",
            mark,
            nodes.len()
        );
        nodes.truncate(mark);
    }

    // --- Introspection interface ---

    /// Forward value of a node.
    pub fn value_of(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.0].value
    }

    /// Accumulated gradient of a node.
    pub fn grad_of(&self, id: NodeId) -> T {
        self.nodes.borrow()[id.0].grad
    }

    /// Label of the operation that produced a node (`""` for leaves,
    /// `"+"`, `"*"`, `"**"`, `"relu"` otherwise).
    pub fn op_label(&self, id: NodeId) -> &'static str {
        self.nodes.borrow()[id.0].op.label()
    }

    /// Direct predecessors of a node, in rule order (empty for leaves).
    pub fn operands(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[id.0].op.operands().collect()
    }

    /// Whether a node is a leaf.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        matches!(self.nodes.borrow()[id.0].op, Op::Leaf)
    }

    /// Overwrites the value of a leaf node. This is the parameter-update
    /// path used by training loops (`value -= lr * grad`); derived nodes
    /// are immutable and rejected.
    pub(crate) fn set_value(&self, id: NodeId, value: T) -> Result<(), ScalarGradError> {
        let mut nodes = self.nodes.borrow_mut();
        let node = &mut nodes[id.0];
        if !matches!(node.op, Op::Leaf) {
            return Err(ScalarGradError::NonLeafAssignment { index: id.0 });
        }
        node.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_starts_with_zero_grad() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(3.5);
        assert_eq!(a.value(), 3.5);
        assert_eq!(a.grad(), 0.0);
        assert!(tape.is_leaf(a.id()));
        assert_eq!(tape.op_label(a.id()), "");
        assert!(tape.operands(a.id()).is_empty());
    }

    #[test]
    fn zero_grad_resets_all_nodes() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(2.0);
        let b = tape.leaf(3.0);
        let y = a * b;
        y.backward();
        assert_eq!(a.grad(), 3.0);

        tape.zero_grad();
        assert_eq!(a.grad(), 0.0);
        assert_eq!(b.grad(), 0.0);
        assert_eq!(y.grad(), 0.0);
    }

    #[test]
    fn checkpoint_and_rewind_truncate_derived_nodes() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(1.0);
        let b = tape.leaf(2.0);
        let mark = tape.checkpoint();
        assert_eq!(mark, 2);

        let _y = (a * b) + a;
        assert_eq!(tape.len(), 4);

        tape.rewind(mark);
        assert_eq!(tape.len(), 2);
        // Parameter leaves survive the rewind untouched.
        assert_eq!(a.value(), 1.0);
        assert_eq!(b.value(), 2.0);
    }

    #[test]
    #[should_panic(expected = "rewind mark")]
    fn rewind_past_end_panics() {
        let tape: Tape<f64> = Tape::new();
        tape.leaf(1.0);
        tape.rewind(5);
    }

    #[test]
    fn set_value_updates_leaves_only() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(1.0);
        let y = a * a;

        assert!(a.set_value(4.0).is_ok());
        assert_eq!(a.value(), 4.0);

        let err = y.set_value(0.0).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::NonLeafAssignment {
                index: y.id().index()
            }
        );
    }
}
