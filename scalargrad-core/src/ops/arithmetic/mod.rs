// src/ops/arithmetic/mod.rs
// Arithmetic operations (add, mul, pow) and their derived sugar.

pub mod add;
pub mod mul;
pub mod pow;

pub use add::add_op;
pub use mul::mul_op;
pub use pow::pow_op;
