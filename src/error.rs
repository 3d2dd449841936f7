//! Error types for qrfig operations

use thiserror::Error;

/// Result type alias using qrfig's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrfig operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing/unreadable file, parse failure, missing key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(format!("JSON error: {}", e))
    }
}
