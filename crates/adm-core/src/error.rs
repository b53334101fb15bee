use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Bit depth mismatch: expected {expected}-bit samples, got {actual}-bit")]
    FormatMismatch { expected: u8, actual: u8 },

    #[error("Row stride {stride} is smaller than the plane width {width}")]
    InvalidStride { stride: usize, width: usize },

    #[error("Plane buffer too small: need {needed} samples, got {actual}")]
    PlaneTooSmall { needed: usize, actual: usize },

    #[error("Out of memory allocating {bytes} bytes of working buffers")]
    OutOfMemory { bytes: usize },

    #[error("Invalid YUV file: {0}")]
    InvalidYuv(String),

    #[error("Frame index {index} out of range (total: {total})")]
    FrameIndexOutOfRange { index: usize, total: usize },

    #[error("Empty frame sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, AdmError>;
