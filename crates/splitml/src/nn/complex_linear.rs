use burn::config::Config;
use burn::module::{Content, DisplaySettings, Module, ModuleDisplay};
use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::backend::Backend;

use crate::ComplexTensor;

/// Configuration to create a [complex linear](ComplexLinear) layer using the
/// [init function](ComplexLinearConfig::init).
#[derive(Config, Debug)]
pub struct ComplexLinearConfig {
    /// The size of the input features.
    pub d_input: usize,
    /// The size of the output features.
    pub d_output: usize,
    /// If a bias should be applied during the complex linear transformation.
    #[config(default = true)]
    pub bias: bool,
    /// The type of function used to initialize the real and imaginary weights.
    #[config(default = "Initializer::KaimingUniform{gain:1.0/3.0f64.sqrt(), fan_out_only:false}")]
    pub initializer: Initializer,
}

/// Applies a complex affine transformation `Wz + b` to complex input, with `W = W_r + iW_i`
/// and `b = b_r + ib_i`.
///
/// The real and imaginary parts of the weight each live in their own real [Linear] layer:
///
/// - `re(y) = fc_r(re(z)) - fc_i(im(z))`
/// - `im(y) = fc_r(im(z)) + fc_i(re(z))`
///
/// Should be created with [ComplexLinearConfig].
#[derive(Module, Debug)]
#[module(custom_display)]
pub struct ComplexLinear<B: Backend> {
    /// Real part of the transformation.
    pub fc_r: Linear<B>,
    /// Imaginary part of the transformation.
    pub fc_i: Linear<B>,
}

impl ComplexLinearConfig {
    /// Initialize a new [complex linear](ComplexLinear) module.
    pub fn init<B: Backend>(&self, device: &B::Device) -> ComplexLinear<B> {
        let part = || {
            LinearConfig::new(self.d_input, self.d_output)
                .with_bias(self.bias)
                .with_initializer(self.initializer.clone())
                .init(device)
        };

        ComplexLinear {
            fc_r: part(),
            fc_i: part(),
        }
    }
}

impl<B: Backend> ComplexLinear<B> {
    /// Applies the forward pass on the input tensor.
    ///
    /// # Shapes
    ///
    /// - input: `[..., d_input]`
    /// - output: `[..., d_output]`
    pub fn forward<const D: usize>(&self, input: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        let (real, imag) = input.into_parts();

        let out_real = self.fc_r.forward(real.clone()) - self.fc_i.forward(imag.clone());
        let out_imag = self.fc_r.forward(imag) + self.fc_i.forward(real);

        ComplexTensor::new(out_real, out_imag)
    }

    /// The size of the input features.
    pub fn d_input(&self) -> usize {
        let [d_input, _] = self.fc_r.weight.dims();
        d_input
    }

    /// The size of the output features.
    pub fn d_output(&self) -> usize {
        let [_, d_output] = self.fc_r.weight.dims();
        d_output
    }
}

impl<B: Backend> ModuleDisplay for ComplexLinear<B> {
    fn custom_settings(&self) -> Option<DisplaySettings> {
        DisplaySettings::new()
            .with_new_line_after_attribute(false)
            .optional()
    }

    fn custom_content(&self, content: Content) -> Option<Content> {
        content
            .add("d_input", &self.d_input())
            .add("d_output", &self.d_output())
            .add("bias", &self.fc_r.bias.is_some())
            .optional()
    }
}
