//! Entry sources
//!
//! Normalizes URLs, query-parameter collections, form submissions and
//! requests into the ordered list of raw entries consumed by the record
//! builder. Source order is preserved exactly, duplicates included.
//!
//! - [`from_query`] reads the query string of a URL, collection or request;
//!   wrap any [`RequestHandle`] in [`RequestQuery`] to read its query
//! - [`from_form`] reads a form submission, decoding a request body if needed
//! - [`from_request`] reads a multipart body plus the URL query, or just the
//!   query for any other content type
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

pub mod multipart;
pub mod request;


pub use request::{is_multipart, RequestHandle};

use crate::entry::{EntryValue, RawEntry};
use crate::error::Result;
use async_trait::async_trait;
use url::{form_urlencoded, Url};

/// Ordered query-string parameters, duplicates preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` query string
    ///
    /// A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes()).into_owned().collect()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn into_entries(self) -> impl Iterator<Item = RawEntry> {
        self.pairs
            .into_iter()
            .map(|(key, value)| RawEntry::new(key, EntryValue::Text(value)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered form submission entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, EntryValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text value or file
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<EntryValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<EntryValue>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for FormData {
    type Item = RawEntry;
    type IntoIter = std::vec::IntoIter<RawEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(|(key, value)| RawEntry { key, value })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Anything that carries a query-parameter collection
pub trait QuerySource {
    fn into_query_params(self) -> Result<QueryParams>;
}

/// Absolute URL text
impl QuerySource for &str {
    fn into_query_params(self) -> Result<QueryParams> {
        let url = Url::parse(self)?;
        Ok(url.query_pairs().into_owned().collect())
    }
}

impl QuerySource for &Url {
    fn into_query_params(self) -> Result<QueryParams> {
        Ok(self.query_pairs().into_owned().collect())
    }
}

impl QuerySource for Url {
    fn into_query_params(self) -> Result<QueryParams> {
        (&self).into_query_params()
    }
}

impl QuerySource for QueryParams {
    fn into_query_params(self) -> Result<QueryParams> {
        Ok(self)
    }
}

impl QuerySource for &QueryParams {
    fn into_query_params(self) -> Result<QueryParams> {
        Ok(self.clone())
    }
}

/// The query of the request URI; the body is not read
impl<B> QuerySource for &http::Request<B> {
    fn into_query_params(self) -> Result<QueryParams> {
        Ok(self.uri().query().map(QueryParams::parse).unwrap_or_default())
    }
}

/// The query of any [`RequestHandle`]; the body is not read
///
/// ```
/// use formnest_core::source::{from_query, RequestQuery};
///
/// let request = http::Request::builder()
///     .uri("/search?q=photos")
///     .body(bytes::Bytes::new())
///     .unwrap();
/// let entries = from_query(RequestQuery(&request)).unwrap();
/// assert_eq!(entries[0].key, "q");
/// ```
#[derive(Debug)]
pub struct RequestQuery<'a, R: ?Sized>(pub &'a R);

impl<R: RequestHandle + ?Sized> QuerySource for RequestQuery<'_, R> {
    fn into_query_params(self) -> Result<QueryParams> {
        Ok(self.0.query().map(QueryParams::parse).unwrap_or_default())
    }
}

/// Anything that can produce a form submission, possibly by reading a body
#[async_trait]
pub trait FormSource: Send {
    async fn into_form_data(self) -> Result<FormData>;
}

#[async_trait]
impl FormSource for FormData {
    async fn into_form_data(self) -> Result<FormData> {
        Ok(self)
    }
}

#[async_trait]
impl<R: RequestHandle> FormSource for &mut R {
    async fn into_form_data(self) -> Result<FormData> {
        self.form_data().await
    }
}

/// Entries of a URL, query-parameter collection or request query
pub fn from_query(source: impl QuerySource) -> Result<Vec<RawEntry>> {
    let params = source.into_query_params()?;
    tracing::trace!(count = params.len(), "Read query parameters");
    Ok(params.into_entries().collect())
}

/// Entries of a form submission, reading the request body if needed
pub async fn from_form(source: impl FormSource) -> Result<Vec<RawEntry>> {
    let form = source.into_form_data().await?;
    tracing::trace!(count = form.len(), "Read form entries");
    Ok(form.into_iter().collect())
}

/// Entries of a request
///
/// For a `multipart/form-data` body the form entries come first and the
/// URL query entries are appended after them. Any other request is read as
/// its query alone.
pub async fn from_request<R: RequestHandle>(request: &mut R) -> Result<Vec<RawEntry>> {
    if !is_multipart(request.content_type()) {
        tracing::trace!("Request is not multipart, reading query only");
        return from_query(RequestQuery(&*request));
    }

    let mut entries = from_form(&mut *request).await?;
    entries.extend(from_query(RequestQuery(&*request))?);
    Ok(entries)
}
