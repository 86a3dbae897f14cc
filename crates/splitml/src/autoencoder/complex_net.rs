use burn::module::Module;
use burn::tensor::backend::Backend;

use super::{AutoencoderConfig, AutoencoderError, error::check_trailing};
use crate::ComplexTensor;
use crate::activation::ComplexActivation;
use crate::nn::{ComplexLinear, ComplexLinearConfig};

/// Denoising autoencoder working on complex data with complex activations.
///
/// Every stage is a [complex linear](ComplexLinear) layer, and the activation is applied after
/// all of them except the last one.
///
/// Should be created with [AutoencoderConfig::init_complex].
#[derive(Module, Debug)]
pub struct ComplexNet<B: Backend, A> {
    /// `t_input -> M`
    pub transform_lin_layer: ComplexLinear<B>,
    /// `M -> H`
    pub transform_hidden_layer: ComplexLinear<B>,
    /// `H -> M`
    pub inverse_hidden_layer: ComplexLinear<B>,
    /// `M -> t_input`
    pub inverse_lin_layer: ComplexLinear<B>,
    /// Activation applied between the stages.
    pub activation: A,
}

impl AutoencoderConfig {
    /// Initialize a new [complex autoencoder](ComplexNet) using the given activation.
    pub fn init_complex<B: Backend, A: ComplexActivation<B>>(
        &self,
        activation: A,
        device: &B::Device,
    ) -> ComplexNet<B, A> {
        self.log_init("complex autoencoder");

        let layer = |d_input, d_output| {
            ComplexLinearConfig::new(d_input, d_output)
                .with_bias(self.bias)
                .init(device)
        };

        ComplexNet {
            transform_lin_layer: layer(self.t_input, self.m),
            transform_hidden_layer: layer(self.m, self.h),
            inverse_hidden_layer: layer(self.h, self.m),
            inverse_lin_layer: layer(self.m, self.t_input),
            activation,
        }
    }
}

impl<B: Backend, A: ComplexActivation<B>> ComplexNet<B, A> {
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
    pub fn forward<const D: usize>(&self, signal: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        self.decode(self.embed(signal))
    }

    /// Encodes the signal into its bottleneck representation.
    ///
    /// # Shapes
    ///
    /// - signal: `[..., t_input]`
    /// - output: `[..., H]`
    pub fn embed<const D: usize>(&self, signal: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
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
    pub fn decode<const D: usize>(&self, embedding: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        let x = self.inverse_hidden_layer.forward(embedding);
        let x = self.activation.activate(x);
        self.inverse_lin_layer.forward(x)
    }

    /// Same as [forward](Self::forward), returning an error on a signal of the wrong length.
    pub fn try_forward<const D: usize>(
        &self,
        signal: ComplexTensor<B, D>,
    ) -> Result<ComplexTensor<B, D>, AutoencoderError> {
        check_trailing(signal.dims(), self.t_input())?;

        Ok(self.forward(signal))
    }

    /// Same as [embed](Self::embed), returning an error on a signal of the wrong length.
    pub fn try_embed<const D: usize>(
        &self,
        signal: ComplexTensor<B, D>,
    ) -> Result<ComplexTensor<B, D>, AutoencoderError> {
        check_trailing(signal.dims(), self.t_input())?;

        Ok(self.embed(signal))
    }

    /// Same as [decode](Self::decode), returning an error on an embedding of the wrong size.
    pub fn try_decode<const D: usize>(
        &self,
        embedding: ComplexTensor<B, D>,
    ) -> Result<ComplexTensor<B, D>, AutoencoderError> {
        check_trailing(embedding.dims(), self.h())?;

        Ok(self.decode(embedding))
    }

    /// Length of the reconstructed signal.
    pub fn t_input(&self) -> usize {
        self.transform_lin_layer.d_input()
    }

    /// Output size of the linear stage.
    pub fn m(&self) -> usize {
        self.transform_lin_layer.d_output()
    }

    /// Size of the embedding.
    pub fn h(&self) -> usize {
        self.transform_hidden_layer.d_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::{PhaseTanh, SplitActivation};
    use crate::{TestAutodiffBackend, TestBackend};
    use burn::nn::Relu;
    use burn::tensor::{Distribution, Tensor};

    fn random_signal<B: Backend, const D: usize>(
        shape: [usize; D],
        device: &B::Device,
    ) -> ComplexTensor<B, D> {
        ComplexTensor::new(
            Tensor::random(shape, Distribution::Default, device),
            Tensor::random(shape, Distribution::Default, device),
        )
    }

    fn net(t_input: usize, m: usize, h: usize) -> ComplexNet<TestBackend, PhaseTanh> {
        AutoencoderConfig::new(t_input)
            .with_m(m)
            .with_h(h)
            .init_complex(PhaseTanh::new(), &Default::default())
    }

    #[test]
    fn forward_keeps_signal_shape() {
        let device = Default::default();
        let net = net(12, 6, 3);

        let output = net.forward(random_signal::<TestBackend, 3>([2, 4, 12], &device));

        assert_eq!(output.dims(), [2, 4, 12]);
    }

    #[test]
    fn embed_ends_with_hidden_size() {
        let device = Default::default();
        let net = net(12, 6, 3);

        let embedding = net.embed(random_signal::<TestBackend, 2>([5, 12], &device));

        assert_eq!(embedding.dims(), [5, 3]);
    }

    #[test]
    fn default_widths() {
        let net = AutoencoderConfig::new(20)
            .init_complex::<TestBackend, _>(PhaseTanh::new(), &Default::default());

        assert_eq!((net.t_input(), net.m(), net.h()), (20, 10, 5));
    }

    #[test]
    fn embed_applies_the_encoding_stages_in_order() {
        let device = Default::default();
        let net = net(8, 4, 2);
        let signal = random_signal::<TestBackend, 2>([3, 8], &device);

        let x = net.transform_lin_layer.forward(signal.clone());
        let x = net.activation.forward(x);
        let x = net.transform_hidden_layer.forward(x);
        let expected = net.activation.forward(x);

        let (real, imag) = net.embed(signal).into_data();
        let (expected_real, expected_imag) = expected.into_data();
        assert_eq!(real, expected_real);
        assert_eq!(imag, expected_imag);
    }

    #[test]
    fn embed_is_a_prefix_of_forward() {
        let device = Default::default();
        let net = net(8, 4, 2);
        let signal = random_signal::<TestBackend, 2>([3, 8], &device);

        let embedding = net.embed(signal.clone());
        let x = net.inverse_hidden_layer.forward(embedding);
        let x = net.activation.forward(x);
        let expected = net.inverse_lin_layer.forward(x);

        let (real, imag) = net.forward(signal).into_data();
        let (expected_real, expected_imag) = expected.into_data();
        assert_eq!(real, expected_real);
        assert_eq!(imag, expected_imag);
    }

    #[test]
    fn forward_is_deterministic() {
        let device = Default::default();
        let net = net(8, 4, 2);
        let signal = random_signal::<TestBackend, 2>([3, 8], &device);

        let first = net.forward(signal.clone()).into_data();
        let second = net.forward(signal).into_data();

        assert_eq!(first, second);
    }

    #[test]
    fn no_compression_keeps_signal_shape() {
        let device = Default::default();
        let net = AutoencoderConfig::new(6)
            .with_m(6)
            .with_h(6)
            .init_complex::<TestBackend, _>(SplitActivation::new(Relu::new()), &device);

        let signal = random_signal::<TestBackend, 2>([2, 6], &device);

        assert_eq!(net.embed(signal.clone()).dims(), [2, 6]);
        assert_eq!(net.forward(signal).dims(), [2, 6]);
    }

    #[test]
    #[should_panic]
    fn forward_rejects_wrong_signal_length() {
        let device = Default::default();
        let net = net(8, 4, 2);

        let _ = net.forward(random_signal::<TestBackend, 2>([1, 7], &device));
    }

    #[test]
    fn try_forward_reports_wrong_signal_length() {
        let device = Default::default();
        let net = net(8, 4, 2);

        let result = net.try_forward(random_signal::<TestBackend, 2>([1, 7], &device));

        assert_eq!(
            result.err(),
            Some(AutoencoderError::InputLength {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn try_decode_expects_embedding_size() {
        let device = Default::default();
        let net = net(8, 4, 2);

        let decoded = net
            .try_decode(random_signal::<TestBackend, 2>([3, 2], &device))
            .expect("Embedding should have H features");
        assert_eq!(decoded.dims(), [3, 8]);

        let result = net.try_decode(random_signal::<TestBackend, 2>([3, 4], &device));
        assert_eq!(
            result.err(),
            Some(AutoencoderError::InputLength {
                expected: 2,
                actual: 4
            })
        );
    }

    #[test]
    fn gradients_reach_every_stage() {
        let device = Default::default();
        let net = AutoencoderConfig::new(6)
            .with_m(4)
            .with_h(2)
            .init_complex::<TestAutodiffBackend, _>(PhaseTanh::new(), &device);
        let signal = random_signal::<TestAutodiffBackend, 2>([3, 6], &device);

        let error = net.forward(signal.clone()) - signal;
        let grads = error.norm_sqr().mean().backward();

        for layer in [
            &net.transform_lin_layer,
            &net.transform_hidden_layer,
            &net.inverse_hidden_layer,
            &net.inverse_lin_layer,
        ] {
            assert!(layer.fc_r.weight.grad(&grads).is_some());
            assert!(layer.fc_i.weight.grad(&grads).is_some());
        }
    }

    #[test]
    fn zero_padded_signal_keeps_gradients_finite() {
        let device = Default::default();
        let net = AutoencoderConfig::new(6)
            .with_m(4)
            .with_h(2)
            .with_bias(false)
            .init_complex::<TestAutodiffBackend, _>(PhaseTanh::new(), &device);
        let signal = ComplexTensor::<TestAutodiffBackend, 2>::from_data(
            [[0.0; 6], [0.5, -1.0, 0.25, 2.0, -0.75, 1.0]],
            [[0.0; 6], [1.0, 0.5, -0.5, 0.0, 1.5, -2.0]],
            &device,
        );

        let error = net.forward(signal.clone()) - signal;
        let grads = error.norm_sqr().mean().backward();

        for layer in [
            &net.transform_lin_layer,
            &net.transform_hidden_layer,
            &net.inverse_hidden_layer,
            &net.inverse_lin_layer,
        ] {
            for weight in [&layer.fc_r.weight, &layer.fc_i.weight] {
                let grad = weight.grad(&grads).expect("Gradient should be registered");
                assert!(grad.into_data().iter::<f32>().all(f32::is_finite));
            }
        }
    }

    #[test]
    fn num_params() {
        // 2 * ((8 * 4 + 4) + (4 * 2 + 2) + (2 * 4 + 4) + (4 * 8 + 8))
        assert_eq!(net(8, 4, 2).num_params(), 196);
    }
}
