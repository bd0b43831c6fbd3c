//! I/O error types
//!
//! Provides a unified error type for image loading and saving. The PNG
//! module maps its underlying library errors into `IoError` variants so
//! that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension does not name a supported image format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),
}

/// Result type for image I/O operations
pub type IoResult<T> = Result<T, IoError>;
