use burn::config::Config;
use burn::module::{Content, DisplaySettings, Module, ModuleDisplay};
use burn::tensor::activation::relu;
use burn::tensor::backend::Backend;

use super::ComplexActivation;
use crate::ComplexTensor;

/// Magnitude ReLU.
///
/// Shifts the magnitude of every element by `bias`, clamps it at zero and keeps the phase:
/// `mod_relu(z) = relu(|z| + bias) * z / |z|`, with `mod_relu(0) = 0`.
///
/// Should be created with [ModReluConfig](ModReluConfig).
#[derive(Module, Clone, Debug)]
#[module(custom_display)]
pub struct ModRelu {
    /// The magnitude offset. A negative value zeroes every element whose magnitude is below it.
    pub bias: f64,
}

/// Configuration to create a [ModRelu](ModRelu) layer using the [init function](ModReluConfig::init).
#[derive(Config, Debug)]
pub struct ModReluConfig {
    /// The magnitude offset. Default is -0.5
    #[config(default = "-0.5")]
    pub bias: f64,
}

impl ModReluConfig {
    /// Initialize a new [ModRelu](ModRelu) layer.
    pub fn init(&self) -> ModRelu {
        ModRelu { bias: self.bias }
    }
}

impl ModuleDisplay for ModRelu {
    fn custom_settings(&self) -> Option<DisplaySettings> {
        DisplaySettings::new()
            .with_new_line_after_attribute(false)
            .optional()
    }

    fn custom_content(&self, content: Content) -> Option<Content> {
        content.add("bias", &self.bias).optional()
    }
}

impl ModRelu {
    /// Forward pass for the ModRelu layer.
    ///
    /// # Shapes
    /// - input: `[..., any]`
    /// - output: `[..., any]`
    pub fn forward<B: Backend, const D: usize>(
        &self,
        input: ComplexTensor<B, D>,
    ) -> ComplexTensor<B, D> {
        input.map_magnitude(|magnitude| relu(magnitude.add_scalar(self.bias)))
    }
}

impl<B: Backend> ComplexActivation<B> for ModRelu {
    fn activate<const D: usize>(&self, input: ComplexTensor<B, D>) -> ComplexTensor<B, D> {
        self.forward(input)
    }
}
