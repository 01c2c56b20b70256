//! One-dimensional transforms that the matrix engine delegates to.

use crate::error::{Error, Result};
use crate::float::FftFloat;
use crate::transform::{Normalization, Transform};
use num_complex::Complex;
use rustfft::{Fft as _, FftDirection, FftPlanner};

/// The interface for performing 1D FFTs of arbitrary length.
///
/// Implementations choose their own [`Normalization`]; the engine applies no scaling of its own.
pub trait Delegate: core::fmt::Debug {
    /// The real type used by the FFT.
    type Real: FftFloat;

    /// The scaling convention applied by [`forward`](Delegate::forward) and
    /// [`inverse`](Delegate::inverse).
    fn normalization(&self) -> Normalization;

    /// Apply an FFT or IFFT in-place.
    fn transform_in_place(
        &mut self,
        input: &mut [Complex<Self::Real>],
        transform: Transform,
    ) -> Result<()>;

    /// Apply an FFT or IFFT out-of-place.
    fn transform(
        &mut self,
        input: &[Complex<Self::Real>],
        output: &mut [Complex<Self::Real>],
        transform: Transform,
    ) -> Result<()> {
        check_lengths(input.len(), output.len())?;
        output.copy_from_slice(input);
        self.transform_in_place(output, transform)
    }

    /// Apply a forward FFT to a real sequence.
    fn forward_real(
        &mut self,
        input: &[Self::Real],
        output: &mut [Complex<Self::Real>],
    ) -> Result<()> {
        check_lengths(input.len(), output.len())?;
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = Complex::from(*x);
        }
        let transform = self.normalization().forward_transform();
        self.transform_in_place(output, transform)
    }

    /// Apply a forward FFT to a complex sequence.
    fn forward(
        &mut self,
        input: &[Complex<Self::Real>],
        output: &mut [Complex<Self::Real>],
    ) -> Result<()> {
        let transform = self.normalization().forward_transform();
        self.transform(input, output, transform)
    }

    /// Apply an inverse FFT to a complex sequence.
    fn inverse(
        &mut self,
        input: &[Complex<Self::Real>],
        output: &mut [Complex<Self::Real>],
    ) -> Result<()> {
        let transform = self.normalization().inverse_transform();
        self.transform(input, output, transform)
    }
}

fn check_lengths(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, actual })
    }
}

/// A [`Delegate`] backed by [RustFFT](https://docs.rs/rustfft).
///
/// Plans are memoized by the planner, so repeated transforms of the same length only pay for
/// planning once.  A single scratch buffer is grown to the largest size requested and reused.
pub struct RustFftDelegate<T: FftFloat> {
    planner: FftPlanner<T>,
    normalization: Normalization,
    scratch: Vec<Complex<T>>,
}

impl<T: FftFloat> RustFftDelegate<T> {
    /// Create a delegate that scales the inverse transform by `1 / N`.
    pub fn new() -> Self {
        Self::with_normalization(Normalization::default())
    }

    /// Create a delegate with the specified scaling convention.
    pub fn with_normalization(normalization: Normalization) -> Self {
        Self {
            planner: FftPlanner::new(),
            normalization,
            scratch: Vec::new(),
        }
    }
}

impl<T: FftFloat> Default for RustFftDelegate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FftFloat> core::fmt::Debug for RustFftDelegate<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RustFftDelegate")
            .field("normalization", &self.normalization)
            .field("scratch_len", &self.scratch.len())
            .finish()
    }
}

impl<T: FftFloat> Delegate for RustFftDelegate<T> {
    type Real = T;

    fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn transform_in_place(&mut self, input: &mut [Complex<T>], transform: Transform) -> Result<()> {
        let size = input.len();
        if size == 0 {
            return Err(Error::EmptyInput);
        }

        let direction = if transform.is_forward() {
            FftDirection::Forward
        } else {
            FftDirection::Inverse
        };
        let fft = self.planner.plan_fft(size, direction);

        let scratch_len = fft.get_inplace_scratch_len();
        if self.scratch.len() < scratch_len {
            self.scratch.resize(scratch_len, Complex::default());
        }
        fft.process_with_scratch(input, &mut self.scratch[..scratch_len]);

        if let Some(scale) = transform.scale::<T>(size) {
            for x in input.iter_mut() {
                *x = x.scale(scale);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn near(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
        assert_eq!(actual.len(), expected.len());
        for (actual, expected) in actual.iter().zip(expected.iter()) {
            assert!(
                (actual - expected).norm() < 1e-10,
                "{} != {}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn unit_impulse_forward() {
        let mut input = vec![Complex::new(0f64, 0f64); 12];
        input[0] = Complex::new(1f64, 0f64);
        let mut fft = RustFftDelegate::new();
        fft.transform_in_place(&mut input, Transform::Fft).unwrap();
        near(&input, &[Complex::new(1f64, 0f64); 12]);
    }

    #[test]
    fn unit_constant_inverse() {
        let mut input = vec![Complex::new(1f64, 0f64); 7];
        let mut fft = RustFftDelegate::new();
        fft.transform_in_place(&mut input, Transform::Ifft).unwrap();
        assert!((input[0] - 1.0).norm() < 1e-10);
        for x in input.iter().skip(1) {
            assert!(x.norm() < 1e-10);
        }
    }

    #[test]
    fn forward_real_matches_complex() {
        let real = [1.0, -2.5, 3.25, 0.5, 4.0];
        let complex = real.iter().map(|x| Complex::new(*x, 0.0)).collect::<Vec<_>>();
        let mut fft = RustFftDelegate::<f64>::new();
        let mut from_real = vec![Complex::default(); real.len()];
        let mut from_complex = vec![Complex::default(); real.len()];
        fft.forward_real(&real, &mut from_real).unwrap();
        fft.forward(&complex, &mut from_complex).unwrap();
        near(&from_real, &from_complex);
    }

    #[test]
    fn scratch_is_reused_across_lengths() {
        let mut fft = RustFftDelegate::<f32>::new();
        for size in [97, 4, 97, 13] {
            let input = vec![Complex::new(1f32, 0f32); size];
            let mut output = vec![Complex::default(); size];
            fft.forward(&input, &mut output).unwrap();
            assert!((output[0] - size as f32).norm() < 1e-3);
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut fft = RustFftDelegate::<f64>::new();
        let mut output: Vec<Complex<f64>> = Vec::new();
        assert_eq!(fft.forward(&[], &mut output), Err(Error::EmptyInput));
        assert_eq!(fft.forward_real(&[], &mut output), Err(Error::EmptyInput));
        assert_eq!(fft.inverse(&[], &mut output), Err(Error::EmptyInput));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut fft = RustFftDelegate::<f64>::new();
        let input = vec![Complex::default(); 4];
        let mut output = vec![Complex::default(); 3];
        assert_eq!(
            fft.forward(&input, &mut output),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            fft.forward_real(&[0.0; 2], &mut output),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn unscaled_round_trip_scales_by_size() {
        let input = [
            Complex::new(1.0, 2.0),
            Complex::new(-0.5, 0.0),
            Complex::new(3.0, -1.0),
        ];
        let mut fft = RustFftDelegate::with_normalization(Normalization::Unscaled);
        let mut spectrum = [Complex::default(); 3];
        let mut output = [Complex::default(); 3];
        fft.forward(&input, &mut spectrum).unwrap();
        fft.inverse(&spectrum, &mut output).unwrap();
        let expected = input.iter().map(|x| x.scale(3.0)).collect::<Vec<_>>();
        near(&output, &expected);
    }

    #[test]
    fn debug_reports_normalization() {
        let fft = RustFftDelegate::<f32>::with_normalization(Normalization::Ortho);
        assert!(format!("{:?}", fft).contains("Ortho"));
    }
}
