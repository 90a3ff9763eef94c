//! A fully-connected layer of neurons.

use rand::Rng;
use scalargrad_core::{Tape, Var};

use crate::module::Module;
use crate::neuron::Neuron;

/// `nout` neurons, each reading all `nin` inputs.
pub struct Layer<'t> {
    neurons: Vec<Neuron<'t>>,
}

impl<'t> Layer<'t> {
    pub fn new<R: Rng + ?Sized>(
        tape: &'t Tape<f64>,
        nin: usize,
        nout: usize,
        nonlin: bool,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::new(tape, nin, nonlin, rng))
            .collect();
        Layer { neurons }
    }

    pub fn forward(&self, xs: &[Var<'t, f64>]) -> Vec<Var<'t, f64>> {
        self.neurons.iter().map(|n| n.forward(xs)).collect()
    }
}

impl<'t> Module<'t> for Layer<'t> {
    fn parameters(&self) -> Vec<Var<'t, f64>> {
        self.neurons
            .iter()
            .flat_map(|n| n.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn layer_output_width_and_parameter_count() {
        let tape = Tape::new();
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Layer::new(&tape, 3, 4, true, &mut rng);
        assert_eq!(layer.parameters().len(), 4 * (3 + 1));

        let xs = [tape.leaf(1.0), tape.leaf(-1.0), tape.leaf(0.5)];
        let outs = layer.forward(&xs);
        assert_eq!(outs.len(), 4);
        // ReLU layer: no negative activations.
        assert!(outs.iter().all(|o| o.value() >= 0.0));
    }
}
