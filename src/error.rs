/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("declared file size {declared} does not match computed size {expected}")]
    SizeMismatch { declared: u64, expected: u64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("row {row} has {actual} pixels, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("cannot encode a grid with no rows")]
    EmptyGrid,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
