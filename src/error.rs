use thiserror::Error;

/// General encoding errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Unsupported or unrecognized pixel format.
    #[error("invalid pixel format: {0}")]
    InvalidPixelFormat(String),
    /// Dimensions incompatible with the requested chroma subsampling.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    /// Prediction method out of range, or mapped to an unsupported mode.
    #[error("unsupported prediction method: {0}")]
    UnsupportedPrediction(String),
    /// Scratch or extradata allocation failed.
    #[error("out of memory: {0}")]
    OutOfMemory(String),
    /// The worst-case packet size estimate was exceeded.
    #[error("buffer overflow: {0}")]
    BufferOverflow(String),
    /// `ByteStream::seek_relative` moved the cursor out of bounds.
    #[error("invalid stream position: {0}")]
    InvalidPosition(String),
}

/// A specialised `Result` type for encoding operations.
pub type Result<T> = ::std::result::Result<T, Error>;
