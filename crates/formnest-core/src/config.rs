//! Record assembly configuration
//!
//! `BuildConfig` controls how raw entry values are coerced and how far a
//! single key may extend a sequence. All fields have defaults, so partial
//! JSON documents are accepted.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default upper bound for array indices in keys
///
/// Keys such as `tasks[10001].label` exceed it and fail with
/// [`Error::IndexLimit`]. Raise it with [`BuildConfig::with_max_index`].
pub const DEFAULT_MAX_INDEX: usize = 10_000;

/// Options for record assembly
///
/// Array indices in keys are bounded by `max_index`, so a single key cannot
/// force an arbitrarily large sequence allocation. Sequences are padded up
/// to the addressed index, which makes the bound a cap on memory per key.
/// Setting it to `usize::MAX` lifts the bound; keys addressing indices too
/// large to allocate then still fail with [`Error::IndexLimit`] rather than
/// overflowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Interpret text values as JSON where they parse (`"23"` becomes `23`)
    pub coerce_json: bool,

    /// Largest array index a key may address (default [`DEFAULT_MAX_INDEX`])
    pub max_index: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            coerce_json: true,
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

impl BuildConfig {
    /// Load configuration from a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::Configuration {
            message: format!("Failed to parse build config: {}", e),
            source: Some(e.into()),
        })
    }

    /// Keep text values as strings instead of parsing them as JSON
    pub fn without_coercion(mut self) -> Self {
        self.coerce_json = false;
        self
    }

    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }
}
