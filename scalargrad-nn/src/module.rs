//! The `Module` trait: anything that owns trainable parameters.

use scalargrad_core::Var;

/// A network component with trainable parameters living on a tape.
pub trait Module<'t> {
    /// All trainable parameter handles of this module, in a stable order.
    fn parameters(&self) -> Vec<Var<'t, f64>>;

    /// Resets the gradient accumulator of every parameter. Must be called
    /// between training iterations: the engine accumulates gradients and
    /// never resets them on its own.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
