//! # A single gradient-descent step on a scalar expression
//!
//! Builds `L = a * b + c`, backpropagates to find how each input steers
//! the output, then nudges `a` and `b` against their gradients and
//! re-evaluates to show the output shrinking.
//!
//! ## Execution
//! `cargo run --example train_scalar`

use scalargrad_core::{ScalarGradError, Tape};

fn main() -> Result<(), ScalarGradError> {
    let tape: Tape<f64> = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(3.0);
    let c = tape.leaf(10.0);

    let loss = a * b + c;
    println!("Step 0: L = {}", loss.value());

    loss.backward();
    println!("    gradients: a.grad = {}, b.grad = {}", a.grad(), b.grad());

    // Gradient descent: move each parameter against its gradient.
    let learning_rate = 0.01;
    a.set_value(a.value() - learning_rate * a.grad())?;
    b.set_value(b.value() - learning_rate * b.grad())?;

    let new_loss = a * b + c;
    println!("Step 1: L = {}", new_loss.value());

    Ok(())
}
