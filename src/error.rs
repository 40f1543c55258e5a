//! Error types for reportgen library.

use std::io;
use thiserror::Error;

/// Result type alias for reportgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or emitting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// A content block was constructed with out-of-range attributes.
    #[error("Invalid block: {0}")]
    InvalidBlock(String),

    /// The rendering backend rejected a block or failed to serialize.
    #[error("Sink error: {0}")]
    Sink(String),

    /// I/O error when writing the output artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing the document model (JSON export).
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl Error {
    /// Check if this error originated in a document sink.
    ///
    /// Write failures at finalize time count as sink errors.
    pub fn is_sink_error(&self) -> bool {
        matches!(self, Error::Sink(_) | Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidBlock("heading level 0".to_string());
        assert_eq!(err.to_string(), "Invalid block: heading level 0");

        let err = Error::Sink("no paragraph to space".to_string());
        assert_eq!(err.to_string(), "Sink error: no paragraph to space");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "locked");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_sink_error());
    }

    #[test]
    fn test_invalid_block_is_not_sink_error() {
        assert!(!Error::InvalidBlock("x".into()).is_sink_error());
        assert!(!Error::Serialize("x".into()).is_sink_error());
    }
}
