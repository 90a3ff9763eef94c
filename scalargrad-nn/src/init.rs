//! Weight initialization.

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Draws `n` weights uniformly from `[-1, 1]`, the classic small-network
/// initialization.
pub fn uniform_symmetric<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    let dist = Uniform::new_inclusive(-1.0, 1.0);
    (0..n).map(|_| dist.sample(rng)).collect()
}

/// Draws `n` weights from a zero-mean normal distribution with the given
/// standard deviation.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, n: usize, std_dev: f64) -> Vec<f64> {
    let dist = Normal::new(0.0, std_dev).expect("standard deviation must be finite and positive");
    (0..n).map(|_| dist.sample(rng)).collect()
}
