use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use rustfft::FftNum;

/// Floating-point types that can be transformed.
///
/// Implemented for every type satisfying the bounds, which in practice means `f32` and `f64`.
pub trait FftFloat: Float + FloatConst + FromPrimitive + NumAssign + Default + FftNum {}
impl<T> FftFloat for T where T: Float + FloatConst + FromPrimitive + NumAssign + Default + FftNum {}
