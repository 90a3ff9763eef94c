//! A single neuron: weighted sum of its inputs plus bias, optionally
//! passed through ReLU.

use rand::Rng;
use scalargrad_core::{Tape, Var};

use crate::init::uniform_symmetric;
use crate::module::Module;

/// One neuron with `nin` weights and a bias, all leaves on the tape.
///
/// `nonlin` controls the ReLU: hidden-layer neurons keep it on, output
/// neurons turn it off so the network can produce unbounded values.
pub struct Neuron<'t> {
    w: Vec<Var<'t, f64>>,
    b: Var<'t, f64>,
    nonlin: bool,
}

impl<'t> Neuron<'t> {
    pub fn new<R: Rng + ?Sized>(tape: &'t Tape<f64>, nin: usize, nonlin: bool, rng: &mut R) -> Self {
        let w = uniform_symmetric(rng, nin)
            .into_iter()
            .map(|v| tape.leaf(v))
            .collect();
        let b = tape.leaf(uniform_symmetric(rng, 1)[0]);
        Neuron { w, b, nonlin }
    }

    /// Weighted sum of the inputs plus bias, through ReLU when `nonlin`.
    ///
    /// # Panics
    /// Panics if `xs` does not match the neuron's input arity.
    pub fn forward(&self, xs: &[Var<'t, f64>]) -> Var<'t, f64> {
        assert_eq!(
            xs.len(),
            self.w.len(),
            "neuron expects {} inputs, got {}",
            self.w.len(),
            xs.len()
        );
        let mut act = self.b;
        for (&wi, &xi) in self.w.iter().zip(xs) {
            act = act + wi * xi;
        }
        if self.nonlin {
            act.relu()
        } else {
            act
        }
    }
}

impl<'t> Module<'t> for Neuron<'t> {
    fn parameters(&self) -> Vec<Var<'t, f64>> {
        let mut params = self.w.clone();
        params.push(self.b);
        params
    }
}
