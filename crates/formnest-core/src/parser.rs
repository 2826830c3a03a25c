//! Parse adapters
//!
//! Each adapter gathers entries from a source, assembles them into a record
//! and hands the record to a [`Validator`]. Failures before validation are
//! reported as [`ParseError::Input`]; validator errors come back unchanged
//! as [`ParseError::Validation`].
//!
//! ```
//! use formnest_core::{parse_query, typed};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Search {
//!     q: String,
//!     page: u32,
//! }
//!
//! let search = parse_query("https://example.com/?q=rust&page=2", typed::<Search>()).unwrap();
//! assert_eq!(search.q, "rust");
//! assert_eq!(search.page, 2);
//! ```
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

use crate::config::BuildConfig;
use crate::entry::RawEntry;
use crate::error::ParseError;
use crate::record::build_record_with;
use crate::source::{self, FormSource, QuerySource, RequestHandle};
use crate::validate::Validator;
use tracing::{debug, instrument};

/// Result type returned by the parse adapters
pub type ParseResult<V> =
    std::result::Result<<V as Validator>::Output, ParseError<<V as Validator>::Error>>;

/// Parse adapters sharing one build configuration
#[derive(Debug, Clone, Default)]
pub struct FormParser {
    config: BuildConfig,
}

impl FormParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Validate the query of a URL, query collection or request
    #[instrument(skip_all)]
    pub fn parse_query<V: Validator>(
        &self,
        source: impl QuerySource,
        validator: V,
    ) -> ParseResult<V> {
        let entries = source::from_query(source)?;
        self.validate(entries, validator)
    }

    /// Validate a form submission, reading the request body if needed
    #[instrument(skip_all)]
    pub async fn parse_form<V: Validator>(
        &self,
        source: impl FormSource,
        validator: V,
    ) -> ParseResult<V> {
        let entries = source::from_form(source).await?;
        self.validate(entries, validator)
    }

    /// Validate a request: multipart body plus query, or query alone
    #[instrument(skip_all, fields(content_type = request.content_type().unwrap_or_default()))]
    pub async fn parse_request<V, R>(&self, request: &mut R, validator: V) -> ParseResult<V>
    where
        V: Validator,
        R: RequestHandle,
    {
        let entries = source::from_request(request).await?;
        self.validate(entries, validator)
    }

    fn validate<V: Validator>(&self, entries: Vec<RawEntry>, validator: V) -> ParseResult<V> {
        debug!(entries = entries.len(), "Assembling record");
        let record = build_record_with(entries, &self.config)?;
        validator
            .parse(record.into_node())
            .map_err(ParseError::Validation)
    }
}

/// Validate the query of a URL, query collection or request
pub fn parse_query<V: Validator>(source: impl QuerySource, validator: V) -> ParseResult<V> {
    FormParser::new().parse_query(source, validator)
}

/// Validate a form submission, reading the request body if needed
pub async fn parse_form<V: Validator>(source: impl FormSource, validator: V) -> ParseResult<V> {
    FormParser::new().parse_form(source, validator).await
}

/// Validate a request: multipart body plus query, or query alone
pub async fn parse_request<V, R>(request: &mut R, validator: V) -> ParseResult<V>
where
    V: Validator,
    R: RequestHandle,
{
    FormParser::new().parse_request(request, validator).await
}
