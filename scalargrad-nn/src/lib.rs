//! # scalargrad-nn
//!
//! Feed-forward networks built from `scalargrad-core` scalar variables:
//! [`Neuron`], [`Layer`] and [`Mlp`] record their forward passes on a
//! shared tape, and [`Sgd`] performs the parameter updates.
//!
//! Every constructor takes the random generator explicitly; there is no
//! module-level seed state.

pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;
pub mod sgd;

// Declare test module conditionally
#[cfg(test)]
mod training_test;

pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
pub use sgd::Sgd;
