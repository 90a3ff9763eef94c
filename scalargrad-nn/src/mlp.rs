//! Multi-layer perceptron.

use rand::Rng;
use scalargrad_core::{Tape, Var};

use crate::layer::Layer;
use crate::module::Module;

/// A stack of fully-connected layers. Hidden layers apply ReLU; the final
/// layer is linear so outputs are unbounded.
pub struct Mlp<'t> {
    layers: Vec<Layer<'t>>,
}

impl<'t> Mlp<'t> {
    /// Builds an MLP taking `nin` inputs, with one layer per entry of
    /// `nouts` (e.g. `nin = 3`, `nouts = &[4, 4, 1]`).
    pub fn new<R: Rng + ?Sized>(
        tape: &'t Tape<f64>,
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Self {
        let mut sizes = vec![nin];
        sizes.extend_from_slice(nouts);
        let layers = (0..nouts.len())
            .map(|i| {
                let is_last = i == nouts.len() - 1;
                Layer::new(tape, sizes[i], sizes[i + 1], !is_last, rng)
            })
            .collect();
        Mlp { layers }
    }

    pub fn forward(&self, xs: &[Var<'t, f64>]) -> Vec<Var<'t, f64>> {
        let mut activations = xs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }
        activations
    }
}

impl<'t> Module<'t> for Mlp<'t> {
    fn parameters(&self) -> Vec<Var<'t, f64>> {
        self.layers
            .iter()
            .flat_map(|l| l.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mlp_3_4_4_1_has_41_parameters() {
        let tape = Tape::new();
        let mut rng = StdRng::seed_from_u64(2);
        let model = Mlp::new(&tape, 3, &[4, 4, 1], &mut rng);
        // 4*(3+1) + 4*(4+1) + 1*(4+1)
        assert_eq!(model.parameters().len(), 41);
    }

    #[test]
    fn forward_produces_one_output_per_final_neuron() {
        let tape = Tape::new();
        let mut rng = StdRng::seed_from_u64(2);
        let model = Mlp::new(&tape, 2, &[2, 1], &mut rng);

        let xs = [tape.leaf(1.0), tape.leaf(-1.0)];
        let out = model.forward(&xs);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn backward_reaches_every_parameter_of_an_active_network() {
        let tape = Tape::new();
        let mut rng = StdRng::seed_from_u64(3);
        let model = Mlp::new(&tape, 2, &[2, 1], &mut rng);

        let xs = [tape.leaf(1.0), tape.leaf(-1.0)];
        let out = model.forward(&xs)[0];
        out.backward();

        // The output layer is linear, so at least its bias always gets a
        // gradient regardless of which ReLUs fired.
        let params = model.parameters();
        let last_bias = params[params.len() - 1];
        assert_eq!(last_bias.grad(), 1.0);
    }
}
