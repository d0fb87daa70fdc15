//! Error types for stylenorm library.

use crate::render::RenderError;
use std::io;
use thiserror::Error;

/// Result type alias for stylenorm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
///
/// Errors reported *by* the renderer as diagnostic messages are not errors
/// here: they end up in [`ConversionResult::conversion_errors`] and mark the
/// result as `success_with_errors`.
///
/// [`ConversionResult::conversion_errors`]: crate::convert::ConversionResult::conversion_errors
#[derive(Error, Debug)]
pub enum Error {
    /// The upload was rejected before rendering (missing filename, wrong extension).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The external renderer failed; the original cause is kept as the source.
    #[error("Conversion failed: {0}")]
    ConversionFailure(#[source] RenderError),

    /// I/O error when reading the upload.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding a response.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// A textual style-mapping rule could not be parsed.
    #[error("Invalid style rule: {0}")]
    InvalidStyleRule(String),
}

impl Error {
    /// Check if the upload was rejected before any rendering attempt.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Check if the renderer itself failed.
    pub fn is_conversion_failure(&self) -> bool {
        matches!(self, Error::ConversionFailure(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
