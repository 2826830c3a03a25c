//! Field-level validation issues reported by the helper transforms

use crate::path::Path;
use std::fmt;

/// Kind of failure a helper reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// No collection item matched the value
    NoMatch,
    /// The value is not a JSON document the inner validator accepts
    InvalidJson,
}

impl IssueCode {
    pub fn message(self) -> &'static str {
        match self {
            IssueCode::NoMatch => "must match a value from the provided array",
            IssueCode::InvalidJson => "must be a valid JSON string",
        }
    }
}

/// A validation failure attached to a field path
///
/// Helpers report issues with an empty path; the calling layer attaches the
/// field being validated with [`ValidationIssue::with_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,
    pub path: Path,
}

impl ValidationIssue {
    pub fn new(code: IssueCode) -> Self {
        Self {
            code,
            message: code.message().to_string(),
            path: Path::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<Path>) -> Self {
        self.path = path.into();
        self
    }

    /// Convert into the error type of a serde deserializer
    ///
    /// Lets helpers run inside `#[serde(deserialize_with = "...")]`
    /// functions, where the issue then surfaces through the validator's
    /// own error.
    pub fn into_de_error<E: serde::de::Error>(self) -> E {
        E::custom(self)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationIssue {}
