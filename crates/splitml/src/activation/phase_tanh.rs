use burn::module::Module;
use burn::tensor::backend::Backend;

use super::ComplexActivation;
use crate::ComplexTensor;

/// Phase-preserving hyperbolic tangent.
///
/// Squashes the magnitude of every element with `tanh` and keeps its phase:
/// `phase_tanh(z) = tanh(|z|) * z / |z|`, with `phase_tanh(0) = 0`.
#[derive(Module, Clone, Debug, Default)]
pub struct PhaseTanh;

impl PhaseTanh {
    /// Create the module.
    pub fn new() -> Self {
        Self {}
    }

    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[..., any]`
    /// - output: `[..., any]`
    pub fn forward<B: Backend, const D: usize>(
        &self,
        input: ComplexTensor<B, D>,
    ) -> ComplexTensor<B, D> {
        input.map_magnitude(|magnitude| magnitude.tanh())
    }
}

impl<B: Backend> ComplexActivation<B> for PhaseTanh {
    fn activate<const D: usize>(&self, input: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        self.forward(input)
    }
}
