//! End-to-end training: the full forward / zero-grad / backward / update
//! cycle on a small dataset, with the tape rewound between iterations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{ScalarGradError, Tape, Var};

use crate::mlp::Mlp;
use crate::module::Module;
use crate::sgd::Sgd;

fn mean_squared_error<'t>(
    model: &Mlp<'t>,
    tape: &'t Tape<f64>,
    xs: &[[f64; 3]],
    ys: &[f64],
) -> Var<'t, f64> {
    let mut loss = tape.leaf(0.0);
    for (x, &y) in xs.iter().zip(ys) {
        let inputs: Vec<Var<'_, f64>> = x.iter().map(|&v| tape.leaf(v)).collect();
        let pred = model.forward(&inputs)[0];
        let diff = pred - y;
        loss = loss + diff * diff;
    }
    loss
}

#[test]
fn sgd_training_decreases_the_loss() -> Result<(), ScalarGradError> {
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

    // Everything after the parameter leaves is per-iteration scratch.
    let mark = tape.checkpoint();
    assert_eq!(mark, 41);

    let mut first_loss = f64::NAN;
    let mut last_loss = f64::NAN;
    for epoch in 0..50 {
        tape.rewind(mark);

        let loss = mean_squared_error(&model, &tape, &xs, &ys);
        if epoch == 0 {
            first_loss = loss.value();
        }
        last_loss = loss.value();

        model.zero_grad();
        loss.backward();
        optim.step(&params)?;
    }

    assert!(first_loss.is_finite());
    assert!(
        last_loss < first_loss * 0.5,
        "loss failed to drop: {} -> {}",
        first_loss,
        last_loss
    );
    // The tape did not grow across iterations beyond one epoch's scratch.
    tape.rewind(mark);
    assert_eq!(tape.len(), 41);
    Ok(())
}
