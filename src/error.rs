use thiserror::Error;

/// Errors raised by a transform delegate.
///
/// The engine never produces these itself; it forwards whatever its delegate returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The delegate was asked to transform a zero-length sequence.
    #[error("cannot transform an empty sequence")]
    EmptyInput,

    /// The input and output sequences have different lengths.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;
