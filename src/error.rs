use std::{fmt, path::PathBuf};

/// The main error type for the gabial crate
#[derive(Debug)]
pub enum GabialError {
    /// Source image is missing or could not be decoded
    InputNotFound {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Slice count is zero or larger than the width being sliced
    InvalidSliceCount { slice_amt: u32, width: u32 },

    /// An in-memory image operation failed (crop, paste, ...)
    ImageOperation(image::ImageError),

    /// Error occurred while writing or encoding the output image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// Pipeline config file could not be parsed
    Config(String),
}

impl fmt::Display for GabialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GabialError::InputNotFound { path, .. } => {
                write!(f, "File {} not found.", path.display())
            }
            GabialError::InvalidSliceCount { slice_amt, width } => write!(
                f,
                "Invalid slice amount {}: must be between 1 and the image width ({})",
                slice_amt, width
            ),
            GabialError::ImageOperation(e) => write!(f, "Image operation error: {}", e),
            GabialError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            GabialError::Io(e) => write!(f, "I/O error: {}", e),
            GabialError::Config(msg) => write!(f, "ConfigParseError {}", msg),
        }
    }
}

impl std::error::Error for GabialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GabialError::InputNotFound { source, .. } => Some(source),
            GabialError::ImageOperation(e) | GabialError::ImageEncode(e) => Some(e),
            GabialError::Io(e) => Some(e),
            GabialError::InvalidSliceCount { .. } | GabialError::Config(_) => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for GabialError {
    fn from(err: image::ImageError) -> Self {
        match &err {
            image::ImageError::Encoding(_) => GabialError::ImageEncode(err),
            _ => GabialError::ImageOperation(err),
        }
    }
}

impl From<std::io::Error> for GabialError {
    fn from(err: std::io::Error) -> Self {
        GabialError::Io(err)
    }
}

impl From<json::Error> for GabialError {
    fn from(err: json::Error) -> Self {
        GabialError::Config(err.to_string())
    }
}

// Convenience type alias for Results using GabialError
pub type Result<T = ()> = std::result::Result<T, GabialError>;
