use core::ops::{Add, Mul, Neg, Sub};

use burn::tensor::backend::Backend;
use burn::tensor::{Shape, Tensor, TensorData};

/// A complex tensor stored in split layout: one float tensor for the real parts and one for
/// the imaginary parts, both of the same shape.
///
/// Every operation keeps the two halves in lockstep, so autodiff flows through both of them.
#[derive(Clone, Debug)]
pub struct ComplexTensor<B: Backend, const D: usize> {
    real: Tensor<B, D>,
    imag: Tensor<B, D>,
}

impl<B: Backend, const D: usize> ComplexTensor<B, D> {
    /// Creates a complex tensor from its real and imaginary parts.
    ///
    /// # Panics
    ///
    /// If the two parts don't have the same shape.
    pub fn new(real: Tensor<B, D>, imag: Tensor<B, D>) -> Self {
        assert_eq!(
            real.dims(),
            imag.dims(),
            "Real and imaginary parts must have the same shape"
        );

        Self { real, imag }
    }

    /// Creates a complex tensor with a zero imaginary part.
    pub fn from_real(real: Tensor<B, D>) -> Self {
        let imag = real.zeros_like();

        Self { real, imag }
    }

    /// Creates a complex tensor from polar coordinates, the phase being in radians.
    pub fn from_polar(magnitude: Tensor<B, D>, phase: Tensor<B, D>) -> Self {
        let real = magnitude.clone() * phase.clone().cos();
        let imag = magnitude * phase.sin();

        Self::new(real, imag)
    }

    /// Creates a complex tensor from the data of its real and imaginary parts.
    pub fn from_data<T>(real: T, imag: T, device: &B::Device) -> Self
    where
        T: Into<TensorData>,
    {
        Self::new(
            Tensor::from_data(real, device),
            Tensor::from_data(imag, device),
        )
    }

    /// Creates a complex tensor filled with zeros.
    pub fn zeros<S: Into<Shape>>(shape: S, device: &B::Device) -> Self {
        Self::from_real(Tensor::zeros(shape, device))
    }

    /// The real part.
    pub fn real(&self) -> Tensor<B, D> {
        self.real.clone()
    }

    /// The imaginary part.
    pub fn imag(&self) -> Tensor<B, D> {
        self.imag.clone()
    }

    /// Splits the tensor into its real and imaginary parts.
    pub fn into_parts(self) -> (Tensor<B, D>, Tensor<B, D>) {
        (self.real, self.imag)
    }

    /// The dimensions of the tensor.
    pub fn dims(&self) -> [usize; D] {
        self.real.dims()
    }

    /// The shape of the tensor.
    pub fn shape(&self) -> Shape {
        self.real.shape()
    }

    /// The device the tensor lives on.
    pub fn device(&self) -> B::Device {
        self.real.device()
    }

    /// Squared magnitude `re² + im²`.
    pub fn norm_sqr(&self) -> Tensor<B, D> {
        self.real.clone().powi_scalar(2) + self.imag.clone().powi_scalar(2)
    }

    /// Magnitude `|z|`.
    pub fn abs(&self) -> Tensor<B, D> {
        self.norm_sqr().sqrt()
    }

    /// Complex conjugate.
    pub fn conj(self) -> Self {
        Self {
            real: self.real,
            imag: self.imag.neg(),
        }
    }

    /// Scales both parts by a real tensor.
    pub fn mul_real(self, factor: Tensor<B, D>) -> Self {
        Self {
            real: self.real * factor.clone(),
            imag: self.imag * factor,
        }
    }

    /// Replaces the magnitude of every element with `func(|z|)` and keeps its phase.
    ///
    /// Elements with a zero magnitude have no phase and map to zero.
    pub fn map_magnitude<F>(self, func: F) -> Self
    where
        F: FnOnce(Tensor<B, D>) -> Tensor<B, D>,
    {
        let norm_sqr = self.norm_sqr();
        let is_zero = norm_sqr.clone().equal_elem(0.0);
        // Masked before the sqrt so zeros never reach its backward pass.
        let safe = norm_sqr.mask_fill(is_zero.clone(), 1.0).sqrt();
        let magnitude = safe.clone().mask_fill(is_zero.clone(), 0.0);
        let scale = func(magnitude).div(safe).mask_fill(is_zero, 0.0);

        self.mul_real(scale)
    }

    /// Detaches both parts from the autodiff graph.
    pub fn detach(self) -> Self {
        Self {
            real: self.real.detach(),
            imag: self.imag.detach(),
        }
    }

    /// Applies `func` to the real and imaginary parts independently.
    pub fn map_parts<F>(self, mut func: F) -> Self
    where
        F: FnMut(Tensor<B, D>) -> Tensor<B, D>,
    {
        Self::new(func(self.real), func(self.imag))
    }

    /// Converts both parts to data.
    pub fn into_data(self) -> (TensorData, TensorData) {
        (self.real.into_data(), self.imag.into_data())
    }
}

impl<B: Backend, const D: usize> Add for ComplexTensor<B, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            real: self.real + rhs.real,
            imag: self.imag + rhs.imag,
        }
    }
}

impl<B: Backend, const D: usize> Sub for ComplexTensor<B, D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            real: self.real - rhs.real,
            imag: self.imag - rhs.imag,
        }
    }
}

impl<B: Backend, const D: usize> Mul for ComplexTensor<B, D> {
    type Output = Self;

    /// Element-wise complex product `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
    fn mul(self, rhs: Self) -> Self {
        let real = self.real.clone() * rhs.real.clone() - self.imag.clone() * rhs.imag.clone();
        let imag = self.real * rhs.imag + self.imag * rhs.real;

        Self { real, imag }
    }
}

impl<B: Backend, const D: usize> Neg for ComplexTensor<B, D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: self.real.neg(),
            imag: self.imag.neg(),
        }
    }
}
