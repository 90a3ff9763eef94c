//! `Var`: the public handle to a node on a [`Tape`].
//!
//! A `Var` is a copyable (tape reference, index) pair, so expressions such
//! as `a * b + c` read like plain arithmetic while every intermediate
//! result is recorded on the tape. Operator impls live next to their
//! forward/backward rules in [`crate::ops`]; the backward entry point
//! lives in [`crate::autograd`].

use num_traits::Float;

use crate::error::ScalarGradError;
use crate::node::NodeId;
use crate::tape::Tape;

/// Handle to one scalar node of a computation graph.
#[derive(Debug, Clone, Copy)]
pub struct Var<'t, T: Float> {
    pub(crate) tape: &'t Tape<T>,
    pub(crate) id: NodeId,
}

impl<'t, T: Float> Var<'t, T> {
    /// The tape this handle points into.
    pub fn tape(&self) -> &'t Tape<T> {
        self.tape
    }

    /// Index of the underlying node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value of the node.
    pub fn value(&self) -> T {
        self.tape.value_of(self.id)
    }

    /// Accumulated gradient of the node. Holds d(output)/d(self) after a
    /// backward pass from `output`, provided gradients were reset before
    /// the pass.
    pub fn grad(&self) -> T {
        self.tape.grad_of(self.id)
    }

    /// Resets this node's gradient accumulator to zero.
    pub fn zero_grad(&self) {
        self.tape.nodes.borrow_mut()[self.id.0].grad = T::zero();
    }

    /// Overwrites the value of a leaf node (the training-loop parameter
    /// update). Fails on derived nodes, whose values are immutable.
    pub fn set_value(&self, value: T) -> Result<(), ScalarGradError> {
        self.tape.set_value(self.id, value)
    }
}
