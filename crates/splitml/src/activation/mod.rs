use burn::module::{Module, ModuleDisplay};
use burn::tensor::Tensor;
use burn::tensor::backend::Backend;

use crate::ComplexTensor;

mod mod_relu;
mod phase_tanh;
mod real;
mod split;

pub use mod_relu::*;
pub use phase_tanh::*;
pub use split::*;

/// An element-wise activation over complex tensors.
///
/// Implementors are modules so they can sit inside a network's module tree, but they are
/// expected to hold no trainable parameters.
pub trait ComplexActivation<B: Backend>: Module<B> + ModuleDisplay {
    /// Applies the activation, keeping the shape of the input.
    fn activate<const D: usize>(&self, input: ComplexTensor<B, D>) -> ComplexTensor<B, D>;
}

/// An element-wise activation over real tensors.
///
/// Implemented for Burn's [Relu](burn::nn::Relu), [Tanh](burn::nn::Tanh),
/// [Sigmoid](burn::nn::Sigmoid), [Gelu](burn::nn::Gelu) and [LeakyRelu](burn::nn::LeakyRelu).
pub trait RealActivation<B: Backend>: Module<B> + ModuleDisplay {
    /// Applies the activation, keeping the shape of the input.
    fn activate<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D>;
}
