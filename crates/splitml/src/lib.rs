#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Complex-valued and dual real-valued denoising autoencoders built on Burn.
//!
//! Two alternative architectures are provided, both following the symmetric
//! `t_input -> M -> H -> M -> t_input` topology:
//!
//! - [ComplexNet](autoencoder::ComplexNet) works on [complex tensors](ComplexTensor)
//!   at every stage, with [complex linear layers](nn::ComplexLinear) and a
//!   [complex activation](activation::ComplexActivation).
//! - [DualRealNet](autoencoder::DualRealNet) works on real tensors with Burn's
//!   [Linear](burn::nn::Linear) layers and a [real activation](activation::RealActivation).
//!
//! Both are built from the same [AutoencoderConfig](autoencoder::AutoencoderConfig).

extern crate alloc;

/// Activation functions for the complex and real domains.
pub mod activation;

/// Autoencoder architectures.
pub mod autoencoder;

/// Complex tensors stored in split layout.
pub mod complex;

/// Neural network layers for the complex domain.
pub mod nn;

pub use complex::ComplexTensor;

/// Backend for test cases
#[cfg(test)]
pub type TestBackend = burn_ndarray::NdArray<f32>;

/// Backend for autodiff test cases
#[cfg(test)]
pub type TestAutodiffBackend = burn_autodiff::Autodiff<TestBackend>;
