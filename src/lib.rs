//! This crate provides column-wise and two-dimensional fast Fourier transforms (FFT) over
//! [`ndarray`] matrices.
//!
//! # Implementation
//! A [`TransformEngine`] owns a single 1D transform, its [`Delegate`].  The 1D operations apply
//! the delegate to every column of a matrix.  The 2D operations apply the 1D operation, transpose,
//! apply it again and transpose back.  The default delegate is backed by
//! [RustFFT](https://docs.rs/rustfft), which supports any non-zero length.
//!
//! # Normalization
//! The engine applies no scaling of its own.  By default the forward transform is unscaled and
//! the inverse transform is scaled by `1 / N`, so a round trip reproduces the input.  Other
//! conventions are selected with [`Normalization`] when constructing the delegate.
//!
//! # Optional features
//! -  **`serde`** - Implements `Serialize` and `Deserialize` for [`Normalization`] and
//!    [`Transform`].

mod delegate;
mod engine;
mod error;
mod float;
mod transform;

pub use delegate::*;
pub use engine::*;
pub use error::*;
pub use float::*;
pub use transform::*;

#[doc(hidden)]
pub use ndarray;

#[doc(hidden)]
pub use num_complex;

/// Create a transform engine over `T` using the specified normalization.
pub fn create_engine<T>(normalization: Normalization) -> TransformEngine<T>
where
    T: FftFloat,
{
    TransformEngine::with_delegate(RustFftDelegate::with_normalization(normalization))
}
