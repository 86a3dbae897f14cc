use burn::nn::{Gelu, LeakyRelu, Relu, Sigmoid, Tanh};
use burn::tensor::Tensor;
use burn::tensor::backend::Backend;

use super::RealActivation;

macro_rules! real_activation {
    ($($module:ty),*) => {
        $(
            impl<B: Backend> RealActivation<B> for $module {
                fn activate<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
                    self.forward(input)
                }
            }
        )*
    };
}

real_activation!(Relu, Tanh, Sigmoid, Gelu, LeakyRelu);
