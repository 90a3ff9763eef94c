//! # Operations
//!
//! Each supported operation lives in its own file holding three things,
//! kept together because they must agree:
//!
//! - the forward `*_op` function, which computes the result value and
//!   records the new node (with its operand edges and tag) on the tape;
//! - the `accumulate` rule, the exact calculus derivative of the forward
//!   function, expressed as a contribution *added* to each operand's
//!   gradient accumulator — addition rather than assignment is what makes
//!   shared operands correct;
//! - the operator-trait sugar (`Add`, `Mul`, …) and unit tests.
//!
//! The backward pass in [`crate::autograd`] dispatches on the node's tag
//! and calls the matching `accumulate` rule.

pub mod activation;
pub mod arithmetic;

pub use activation::relu::relu_op;
pub use arithmetic::add::add_op;
pub use arithmetic::mul::mul_op;
pub use arithmetic::pow::pow_op;

use num_traits::Float;

use crate::error::ScalarGradError;
use crate::var::Var;

/// Checks that two operands share one tape. Every binary operation calls
/// this before touching the arena.
pub(crate) fn check_same_tape<T: Float>(
    a: &Var<'_, T>,
    b: &Var<'_, T>,
    operation: &str,
) -> Result<(), ScalarGradError> {
    if std::ptr::eq(a.tape, b.tape) {
        Ok(())
    } else {
        Err(ScalarGradError::TapeMismatch {
            operation: operation.to_string(),
        })
    }
}
