//! # scalargrad-core
//!
//! A minimal reverse-mode automatic-differentiation engine over scalar
//! values. Arithmetic on [`Var`] handles implicitly records a computation
//! graph on a [`Tape`] arena; calling [`Var::backward`] walks that graph in
//! reverse-topological order and accumulates the gradient of the output
//! with respect to every ancestor node.

pub mod autograd;
pub mod error;
pub mod node;
pub mod ops;
pub mod tape;
pub mod var;
pub mod viz;

pub use error::ScalarGradError;
pub use node::NodeId;
pub use tape::Tape;
pub use var::Var;

// Re-export traits required by public generic signatures.
pub use num_traits;
