//! Error types for wordscope library.

use serde_json::{json, Map, Value};
use std::io;
use thiserror::Error;

/// Result type alias for wordscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering documents.
///
/// The analysis functions themselves never fail; these errors come from the
/// loading layer (validation, format dispatch, decoding) and from rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not exist or cannot be read.
    #[error("File validation failed for '{path}': {reason}")]
    Validation {
        /// Offending path
        path: String,
        /// Human-readable reason
        reason: String,
    },

    /// The file extension has no registered document source.
    #[error("File validation failed for '{path}': Unsupported format '{extension}'. Supported formats: {}", .supported.join(", "))]
    UnsupportedFormat {
        /// Offending path
        path: String,
        /// Lowercase extension without the dot
        extension: String,
        /// Extensions that would have been accepted
        supported: Vec<String>,
    },

    /// The file exceeds the configured size limit.
    #[error("File validation failed for '{path}': File size {size_mb:.2}MB exceeds maximum allowed size {max_mb}MB")]
    FileTooLarge {
        /// Offending path
        path: String,
        /// Actual size in megabytes
        size_mb: f64,
        /// Configured limit in megabytes
        max_mb: u64,
    },

    /// The document content could not be decoded.
    #[error("Document '{path}' appears to be corrupted or unreadable: {reason}")]
    Corrupted {
        /// Offending path (empty when loading from bytes)
        path: String,
        /// Decoder message
        reason: String,
    },

    /// The input bytes are not a recognized document format.
    #[error("Unknown file format: not a recognized document")]
    UnknownFormat,

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Stable category name used in serialized reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "IoError",
            Error::Validation { .. } => "FileValidationError",
            Error::UnsupportedFormat { .. } => "UnsupportedFormatError",
            Error::FileTooLarge { .. } => "FileSizeError",
            Error::Corrupted { .. } => "CorruptDocumentError",
            Error::UnknownFormat => "UnsupportedFormatError",
            Error::Render(_) => "OutputError",
            Error::Other(_) => "DocumentProcessingError",
        }
    }

    /// Structured details for the error, if any.
    pub fn details(&self) -> Option<Map<String, Value>> {
        let value = match self {
            Error::Validation { path, reason } => json!({ "file_path": path, "reason": reason }),
            Error::UnsupportedFormat {
                path,
                extension,
                supported,
            } => json!({
                "file_path": path,
                "extension": extension,
                "supported_formats": supported,
            }),
            Error::FileTooLarge {
                path,
                size_mb,
                max_mb,
            } => json!({
                "file_path": path,
                "file_size_mb": size_mb,
                "max_size_mb": max_mb,
            }),
            Error::Corrupted { path, reason } => {
                json!({ "file_path": path, "original_error": reason })
            }
            _ => return None,
        };

        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Attach a path to a `Corrupted` error produced without one.
    pub(crate) fn with_path(self, file_path: &str) -> Self {
        match self {
            Error::Corrupted { path, reason } if path.is_empty() => Error::Corrupted {
                path: file_path.to_string(),
                reason,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Corrupted {
            path: String::new(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FileTooLarge {
            path: "big.json".to_string(),
            size_mb: 120.5,
            max_mb: 100,
        };
        assert_eq!(
            err.to_string(),
            "File validation failed for 'big.json': File size 120.50MB exceeds maximum allowed size 100MB"
        );

        let err = Error::UnsupportedFormat {
            path: "a.pdf".to_string(),
            extension: "pdf".to_string(),
            supported: vec!["json".to_string(), "md".to_string()],
        };
        assert!(err.to_string().contains("Supported formats: json, md"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), "IoError");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), "CorruptDocumentError");

        let err = err.with_path("doc.json");
        match err {
            Error::Corrupted { path, .. } => assert_eq!(path, "doc.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_details() {
        let err = Error::Validation {
            path: "missing.json".to_string(),
            reason: "File does not exist or is not readable".to_string(),
        };
        let details = err.details().unwrap();
        assert_eq!(details["file_path"], "missing.json");
        assert!(Error::Other("x".into()).details().is_none());
    }
}
