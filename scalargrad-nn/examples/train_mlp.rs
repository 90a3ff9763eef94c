//! # Training a small MLP with gradient descent
//!
//! Fits a 3-input, two-hidden-layer network (41 parameters) to four
//! samples by plain SGD on a sum-of-squares loss, printing the loss every
//! ten epochs. Demonstrates the full cycle: forward pass, gradient reset,
//! backward pass, parameter update, tape rewind.
//!
//! ## Execution
//! `cargo run --example train_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_nn::{Mlp, Module, Sgd};
use scalargrad_core::{ScalarGradError, Tape, Var};

fn main() -> Result<(), ScalarGradError> {
    // Four input samples and their targets.
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, 0.0, 0.0, 1.0];

    let tape = Tape::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let model = Mlp::new(&tape, 3, &[4, 4, 1], &mut rng);
    let params = model.parameters();
    let optim = Sgd::new(0.05);

    // Parameter leaves stay; everything built per epoch is scratch.
    let mark = tape.checkpoint();

    println!("--- training ---");
    let mut predictions = Vec::new();
    for epoch in 0..100 {
        tape.rewind(mark);

        // Forward pass over all samples, accumulating the squared errors.
        let mut loss = tape.leaf(0.0);
        predictions.clear();
        for (x, &y) in xs.iter().zip(&ys) {
            let inputs: Vec<Var<'_, f64>> = x.iter().map(|&v| tape.leaf(v)).collect();
            let pred = model.forward(&inputs)[0];
            predictions.push(pred.value());
            let diff = pred - y;
            loss = loss + diff * diff;
        }

        model.zero_grad();
        loss.backward();
        optim.step(&params)?;

        if epoch % 10 == 0 {
            println!("epoch {:>3} | loss: {:.4}", epoch, loss.value());
        }
    }

    println!("\n--- results ---");
    println!("targets:     {:?}", ys);
    println!("predictions: {:?}", predictions);
    Ok(())
}
