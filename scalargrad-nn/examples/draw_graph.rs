//! # Rendering a computation graph with Graphviz
//!
//! Builds a tiny MLP, runs one forward and backward pass, and prints the
//! recorded computation graph in dot format. Pipe the output through
//! `dot -Tsvg` to render it.
//!
//! ## Execution
//! `cargo run --example draw_graph | dot -Tsvg > graph.svg`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{viz, Tape};
use scalargrad_nn::Mlp;

fn main() {
    let tape = Tape::new();
    let mut rng = StdRng::seed_from_u64(7);
    let model = Mlp::new(&tape, 2, &[2, 1], &mut rng);

    let xs = [tape.leaf(1.0), tape.leaf(-1.0)];
    let y = model.forward(&xs)[0];
    y.backward();

    println!("{}", viz::to_dot(y));
}
