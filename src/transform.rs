//! Transform directions and scaling conventions.

use crate::float::FftFloat;

/// Specifies a type of transform to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// Fast Fourier transform
    Fft,
    /// Inverse fast Fourier transform, scaled by `1 / N`
    Ifft,
    /// Unscaled IFFT
    UnscaledIfft,
    /// Square-root scaled FFT (a unitary transform)
    SqrtScaledFft,
    /// Square-root scaled IFFT (a unitary transform)
    SqrtScaledIfft,
}

impl Transform {
    /// Returns true if the transform is a forward transform.
    #[inline]
    pub fn is_forward(&self) -> bool {
        match self {
            Self::Fft | Self::SqrtScaledFft => true,
            Self::Ifft | Self::UnscaledIfft | Self::SqrtScaledIfft => false,
        }
    }

    /// Returns the inverse transform, or `None` for `UnscaledIfft`.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        match self {
            Self::Fft => Some(Self::Ifft),
            Self::Ifft => Some(Self::Fft),
            Self::SqrtScaledFft => Some(Self::SqrtScaledIfft),
            Self::SqrtScaledIfft => Some(Self::SqrtScaledFft),
            Self::UnscaledIfft => None,
        }
    }

    /// The factor applied to the raw DFT of a sequence of length `size`, or `None` if the
    /// transform is unscaled.
    pub fn scale<T: FftFloat>(&self, size: usize) -> Option<T> {
        let n = T::from_usize(size)?;
        match self {
            Self::Fft | Self::UnscaledIfft => None,
            Self::Ifft => Some(n.recip()),
            Self::SqrtScaledFft | Self::SqrtScaledIfft => Some(n.sqrt().recip()),
        }
    }
}

/// Scaling convention applied by a delegate to forward/inverse pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Normalization {
    /// Forward unscaled, inverse scaled by `1 / N`.  A round trip reproduces the input.
    #[default]
    Backward,
    /// Neither direction is scaled.  A round trip scales the input by `N`.
    Unscaled,
    /// Both directions scaled by `1 / sqrt(N)`.
    Ortho,
}

impl Normalization {
    /// The transform used for forward passes.
    pub fn forward_transform(&self) -> Transform {
        match self {
            Self::Backward | Self::Unscaled => Transform::Fft,
            Self::Ortho => Transform::SqrtScaledFft,
        }
    }

    /// The transform used for inverse passes.
    pub fn inverse_transform(&self) -> Transform {
        match self {
            Self::Backward => Transform::Ifft,
            Self::Unscaled => Transform::UnscaledIfft,
            Self::Ortho => Transform::SqrtScaledIfft,
        }
    }
}
