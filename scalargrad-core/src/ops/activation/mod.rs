// src/ops/activation/mod.rs
// Non-linear activation functions. Currently only ReLU, the single
// activation the engine's operation set defines.

pub mod relu;

pub use relu::relu_op;
