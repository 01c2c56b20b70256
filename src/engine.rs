//! Column-wise and two-dimensional transforms of matrices.
//!
//! Every operation reads an `m x n` matrix and returns a newly allocated `m x n` matrix.  The 1D
//! operations transform each column independently.  The 2D operations are composed of two 1D
//! passes separated by transposes:
//!
//! ```text
//! fwd2d(X) = transpose(fwd1d(transpose(fwd1d(X))))
//! inv2d(Y) = transpose(inv1d(transpose(inv1d(Y))))
//! ```

use core::marker::PhantomData;
use crate::delegate::{Delegate, RustFftDelegate};
use crate::error::Result;
use crate::float::FftFloat;
use crate::transform::Normalization;
use ndarray::{aview1, Array2, ArrayBase, Data, Ix2};
use num_complex::Complex;

/// Applies a 1D [`Delegate`] along the columns of a matrix.
///
/// The engine owns its delegate and holds no other state.  Operations take `&mut self` because
/// the delegate may reuse internal buffers; share an engine between threads only behind a lock.
///
/// ```
/// use fourier_matrix::TransformEngine;
/// use ndarray::array;
///
/// let mut engine = TransformEngine::<f64>::new();
/// let x = array![[1.0, 2.0], [3.0, 4.0]];
/// let y = engine.fwd2d_real(&x).unwrap();
/// assert!((y[[0, 0]].re - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct TransformEngine<T, D = RustFftDelegate<T>>
where
    T: FftFloat,
    D: Delegate<Real = T>,
{
    delegate: D,
    phantom_data: PhantomData<T>,
}

impl<T: FftFloat> TransformEngine<T> {
    /// Create an engine backed by a [`RustFftDelegate`] with the default normalization.
    pub fn new() -> Self {
        Self::with_delegate(RustFftDelegate::new())
    }
}

impl<T, D> Default for TransformEngine<T, D>
where
    T: FftFloat,
    D: Delegate<Real = T> + Default,
{
    fn default() -> Self {
        Self::with_delegate(D::default())
    }
}

impl<T, D> TransformEngine<T, D>
where
    T: FftFloat,
    D: Delegate<Real = T>,
{
    /// Create an engine that delegates to the provided 1D transform.
    pub fn with_delegate(delegate: D) -> Self {
        Self {
            delegate,
            phantom_data: PhantomData,
        }
    }

    /// Returns a reference to the delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Consumes the engine, returning its delegate.
    pub fn into_delegate(self) -> D {
        self.delegate
    }

    /// The scaling convention of the delegate.
    pub fn normalization(&self) -> Normalization {
        self.delegate.normalization()
    }

    /// Forward transform of each column of a real matrix.
    pub fn fwd1d_real<S>(&mut self, x: &ArrayBase<S, Ix2>) -> Result<Array2<Complex<T>>>
    where
        S: Data<Elem = T>,
    {
        self.columnwise(x, |delegate, input, output| {
            delegate.forward_real(input, output)
        })
    }

    /// Forward transform of each column of a complex matrix.
    pub fn fwd1d<S>(&mut self, x: &ArrayBase<S, Ix2>) -> Result<Array2<Complex<T>>>
    where
        S: Data<Elem = Complex<T>>,
    {
        self.columnwise(x, |delegate, input, output| delegate.forward(input, output))
    }

    /// Inverse transform of each column of a complex matrix.
    ///
    /// The result stays complex even if the spectrum came from a real matrix.
    pub fn inv1d<S>(&mut self, y: &ArrayBase<S, Ix2>) -> Result<Array2<Complex<T>>>
    where
        S: Data<Elem = Complex<T>>,
    {
        self.columnwise(y, |delegate, input, output| delegate.inverse(input, output))
    }

    /// Forward 2D transform of a complex matrix.
    pub fn fwd2d<S>(&mut self, x: &ArrayBase<S, Ix2>) -> Result<Array2<Complex<T>>>
    where
        S: Data<Elem = Complex<T>>,
    {
        let t = self.fwd1d(x)?.reversed_axes();
        Ok(self.fwd1d(&t)?.reversed_axes())
    }

    /// Forward 2D transform of a real matrix.
    ///
    /// Equivalent to [`fwd2d`](Self::fwd2d) on the matrix promoted to complex.
    pub fn fwd2d_real<S>(&mut self, x: &ArrayBase<S, Ix2>) -> Result<Array2<Complex<T>>>
    where
        S: Data<Elem = T>,
    {
        let t = self.fwd1d_real(x)?.reversed_axes();
        Ok(self.fwd1d(&t)?.reversed_axes())
    }

    /// Inverse 2D transform of a complex matrix.
    pub fn inv2d<S>(&mut self, y: &ArrayBase<S, Ix2>) -> Result<Array2<Complex<T>>>
    where
        S: Data<Elem = Complex<T>>,
    {
        let t = self.inv1d(y)?.reversed_axes();
        Ok(self.inv1d(&t)?.reversed_axes())
    }

    // Copies each column into a contiguous buffer, so any memory order is accepted.
    fn columnwise<A, S, F>(
        &mut self,
        x: &ArrayBase<S, Ix2>,
        mut apply: F,
    ) -> Result<Array2<Complex<T>>>
    where
        A: Copy,
        S: Data<Elem = A>,
        F: FnMut(&mut D, &[A], &mut [Complex<T>]) -> Result<()>,
    {
        let (rows, cols) = x.dim();
        let mut y = Array2::zeros((rows, cols));
        let mut input = Vec::with_capacity(rows);
        let mut output = vec![Complex::default(); rows];
        for (column, mut out) in x.columns().into_iter().zip(y.columns_mut()) {
            input.clear();
            input.extend(column.iter().copied());
            apply(&mut self.delegate, &input, &mut output)?;
            out.assign(&aview1(&output));
        }
        Ok(y)
    }
}
