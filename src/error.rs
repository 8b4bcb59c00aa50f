//! Error taxonomy shared by configuration, shape checks, and decoding.

use thiserror::Error;

/// A single error type covering every way a codec construction or operation
/// can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The configuration supplied to [`crate::codec::AnotoCodec::new`] is
    /// internally inconsistent (non-coprime SNS lengths, mismatched orders,
    /// a prime-factor product that doesn't match the delta range width, or a
    /// mismatched number of secondary sequences and prime factors).
    #[error("invalid codec configuration: {0}")]
    Config(String),

    /// An input matrix has the wrong dimensionality, wrong channel count, or
    /// is too small for the operation being requested.
    #[error("invalid bitmatrix shape: {0}")]
    Shape(String),

    /// The codec recognizes the observed window as not a well-formed Anoto
    /// pattern: a row/column could not be located in a sequence's cyclic
    /// extension, a delta fell outside the configured range, or rotation
    /// could not be resolved.
    #[error("decoding failed: {0}")]
    Decoding(String),
}

impl CodecError {
    pub fn config(message: impl Into<String>) -> Self {
        CodecError::Config(message.into())
    }

    pub fn shape(message: impl Into<String>) -> Self {
        CodecError::Shape(message.into())
    }

    pub fn decoding(message: impl Into<String>) -> Self {
        CodecError::Decoding(message.into())
    }
}
