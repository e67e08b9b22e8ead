/// Errors from PPM decoding, encoding, and conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    /// The input does not begin with the ASCII byte `P`.
    #[error("unrecognized format: input does not start with `P`")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Syntactically valid PPM, but outside the supported P3/P6,
    /// maxval <= 255 subset.
    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,
}
