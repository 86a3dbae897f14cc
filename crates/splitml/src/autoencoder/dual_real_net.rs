use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::Tensor;
use burn::tensor::backend::Backend;

use super::{AutoencoderConfig, AutoencoderError, error::check_trailing};
use crate::ComplexTensor;
use crate::activation::RealActivation;

/// Denoising autoencoder working on real data with real activations.
///
/// Same topology as [ComplexNet](super::ComplexNet) with real [Linear] stages. Complex signals
/// are handled by running their real and imaginary parts through the network separately, see
/// [forward_split](Self::forward_split).
///
/// Should be created with [AutoencoderConfig::init_dual_real].
#[derive(Module, Debug)]
pub struct DualRealNet<B: Backend, A> {
    /// `t_input -> M`
    pub transform_lin_layer: Linear<B>,
    /// `M -> H`
    pub transform_hidden_layer: Linear<B>,
    /// `H -> M`
    pub inverse_hidden_layer: Linear<B>,
    /// `M -> t_input`
    pub inverse_lin_layer: Linear<B>,
    /// Activation applied between the stages.
    pub activation: A,
}

impl AutoencoderConfig {
    /// Initialize a new [dual real autoencoder](DualRealNet) using the given activation.
    pub fn init_dual_real<B: Backend, A: RealActivation<B>>(
        &self,
        activation: A,
        device: &B::Device,
    ) -> DualRealNet<B, A> {
        self.log_init("dual real autoencoder");

        let layer = |d_input, d_output| {
            LinearConfig::new(d_input, d_output)
                .with_bias(self.bias)
                .init(device)
        };

        DualRealNet {
            transform_lin_layer: layer(self.t_input, self.m),
            transform_hidden_layer: layer(self.m, self.h),
            inverse_hidden_layer: layer(self.h, self.m),
            inverse_lin_layer: layer(self.m, self.t_input),
            activation,
        }
    }
}

impl<B: Backend, A: RealActivation<B>> DualRealNet<B, A> {
    /// Reconstructs the signal through the bottleneck.
    ///
    /// # Shapes
    ///
    /// - signal: `[..., t_input]`
    /// - output: `[..., t_input]`
    ///
    /// # Panics
    ///
    /// If the last dimension of the signal isn't `t_input`. See [try_forward](Self::try_forward).
    pub fn forward<const D: usize>(&self, signal: Tensor<B, D>) -> Tensor<B, D> {
        self.decode(self.embed(signal))
    }

    /// Encodes the signal into its bottleneck representation.
    ///
    /// # Shapes
    ///
    /// - signal: `[..., t_input]`
    /// - output: `[..., H]`
    pub fn embed<const D: usize>(&self, signal: Tensor<B, D>) -> Tensor<B, D> {
        let x = self.transform_lin_layer.forward(signal);
        let x = self.activation.activate(x);
        let x = self.transform_hidden_layer.forward(x);
        self.activation.activate(x)
    }

    /// Maps an embedding back to the signal space.
    ///
    /// # Shapes
    ///
    /// - embedding: `[..., H]`
    /// - output: `[..., t_input]`
    pub fn decode<const D: usize>(&self, embedding: Tensor<B, D>) -> Tensor<B, D> {
        let x = self.inverse_hidden_layer.forward(embedding);
        let x = self.activation.activate(x);
        self.inverse_lin_layer.forward(x)
    }

    /// Reconstructs a complex signal, its real and imaginary parts going through the network
    /// independently.
    ///
    /// # Shapes
    ///
    /// - signal: `[..., t_input]`
    /// - output: `[..., t_input]`
    pub fn forward_split<const D: usize>(
        &self,
        signal: ComplexTensor<B, D>,
    ) -> ComplexTensor<B, D> {
        signal.map_parts(|part| self.forward(part))
    }

    /// Encodes the real and imaginary parts of a complex signal independently.
    ///
    /// # Shapes
    ///
    /// - signal: `[..., t_input]`
    /// - output: `[..., H]`
    pub fn embed_split<const D: usize>(&self, signal: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        signal.map_parts(|part| self.embed(part))
    }

    /// Same as [forward](Self::forward), returning an error on a signal of the wrong length.
    pub fn try_forward<const D: usize>(
        &self,
        signal: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, AutoencoderError> {
        check_trailing(signal.dims(), self.t_input())?;

        Ok(self.forward(signal))
    }

    /// Same as [embed](Self::embed), returning an error on a signal of the wrong length.
    pub fn try_embed<const D: usize>(
        &self,
        signal: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, AutoencoderError> {
        check_trailing(signal.dims(), self.t_input())?;

        Ok(self.embed(signal))
    }

    /// Same as [decode](Self::decode), returning an error on an embedding of the wrong size.
    pub fn try_decode<const D: usize>(
        &self,
        embedding: Tensor<B, D>,
    ) -> Result<Tensor<B, D>, AutoencoderError> {
        check_trailing(embedding.dims(), self.h())?;

        Ok(self.decode(embedding))
    }

    /// Length of the reconstructed signal.
    pub fn t_input(&self) -> usize {
        let [t_input, _] = self.transform_lin_layer.weight.dims();
        t_input
    }

    /// Output size of the linear stage.
    pub fn m(&self) -> usize {
        let [_, m] = self.transform_lin_layer.weight.dims();
        m
    }

    /// Size of the embedding.
    pub fn h(&self) -> usize {
        let [_, h] = self.transform_hidden_layer.weight.dims();
        h
    }
}
