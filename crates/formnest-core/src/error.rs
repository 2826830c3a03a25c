//! Error types for the Formnest core library
//!
//! This module defines the error handling system for Formnest, using
//! thiserror for the error definitions and anyhow for errors reported by
//! caller-provided request implementations.

use thiserror::Error;

/// Main error type for record assembly and entry sources
#[derive(Error, Debug)]
pub enum Error {
    /// URL text could not be parsed
    #[error("Invalid URL: {message}")]
    InvalidUrl {
        message: String,
        #[source]
        source: url::ParseError,
    },

    /// Reading a request body failed
    #[error("Failed to read request body: {message}")]
    Body {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Multipart form body could not be decoded
    #[error("Multipart error: {message}")]
    Multipart {
        message: String,
        #[source]
        source: multer::Error,
    },

    /// Request body is not a form submission
    #[error("Unsupported content type: {content_type}")]
    UnsupportedContentType { content_type: String },

    /// A path walks through a value that cannot hold children
    #[error("Path conflict at '{path}': cannot descend into {found}")]
    PathConflict { path: String, found: &'static str },

    /// An array index exceeds the configured limit
    #[error("Index {index} at '{path}' exceeds the limit of {limit}")]
    IndexLimit {
        index: usize,
        limit: usize,
        path: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by the parse adapters
///
/// Failures that happen while gathering entries or assembling the record are
/// reported as [`ParseError::Input`]. Whatever the validator returns is passed
/// through untouched as [`ParseError::Validation`].
#[derive(Error, Debug)]
pub enum ParseError<E> {
    /// Entries could not be read or assembled
    #[error(transparent)]
    Input(#[from] Error),

    /// The validator rejected the assembled record
    #[error("Validation failed: {0}")]
    Validation(#[source] E),
}

impl<E> ParseError<E> {
    /// Returns the validator error, if this is a validation failure
    pub fn validation(&self) -> Option<&E> {
        match self {
            ParseError::Validation(err) => Some(err),
            ParseError::Input(_) => None,
        }
    }

    /// Consumes the error and returns the validator error, if any
    pub fn into_validation(self) -> Option<E> {
        match self {
            ParseError::Validation(err) => Some(err),
            ParseError::Input(_) => None,
        }
    }
}

impl Error {
    /// Create a body read error from any caller error
    pub fn body(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Error::Body {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

// Conversion implementations
impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<multer::Error> for Error {
    fn from(err: multer::Error) -> Self {
        Error::Multipart {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PathConflict {
            path: "a.b".to_string(),
            found: "number",
        };
        assert_eq!(err.to_string(), "Path conflict at 'a.b': cannot descend into number");
    }

    #[test]
    fn test_index_limit_display() {
        let err = Error::IndexLimit {
            index: 20,
            limit: 10,
            path: "tasks[20]".to_string(),
        };
        assert!(err.to_string().contains("tasks[20]"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_url_error_conversion() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_error_accessors() {
        let err: ParseError<std::fmt::Error> = ParseError::Validation(std::fmt::Error);
        assert!(err.validation().is_some());

        let err: ParseError<std::fmt::Error> = Error::UnsupportedContentType {
            content_type: "text/plain".to_string(),
        }
        .into();
        assert!(err.validation().is_none());
        assert!(err.into_validation().is_none());
    }
}
