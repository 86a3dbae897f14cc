use core::marker::PhantomData;

use burn::module::Module;
use burn::tensor::backend::Backend;

use super::{ComplexActivation, RealActivation};
use crate::ComplexTensor;

/// Applies a [real activation](RealActivation) to the real and imaginary parts of a complex
/// tensor independently.
///
/// `SplitActivation::new(Relu::new())` is the usual CReLU.
#[derive(Module, Debug)]
pub struct SplitActivation<B: Backend, A> {
    /// The real activation applied to each part.
    pub inner: A,
    _backend: PhantomData<B>,
}

impl<B: Backend, A: RealActivation<B>> SplitActivation<B, A> {
    /// Wraps a real activation.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            _backend: PhantomData,
        }
    }

    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[..., any]`
    /// - output: `[..., any]`
    pub fn forward<const D: usize>(&self, input: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        input.map_parts(|part| self.inner.activate(part))
    }
}

impl<B: Backend, A: RealActivation<B>> ComplexActivation<B> for SplitActivation<B, A> {
    fn activate<const D: usize>(&self, input: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        self.forward(input)
    }
}
