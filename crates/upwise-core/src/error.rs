use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpwiseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Scale factor {0} outside supported range")]
    InvalidScale(u8),

    #[error("A batch run is already in progress")]
    BatchInProgress,

    #[error("Processing failed for '{file_name}': {source}")]
    Batch {
        file_name: String,
        source: Box<UpwiseError>,
    },
}

pub type Result<T> = std::result::Result<T, UpwiseError>;
