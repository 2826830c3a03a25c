//! Request handles
//!
//! A [`RequestHandle`] exposes the pieces of an incoming request that entry
//! sources need: the URL query, the content type and, on demand, the decoded
//! form body. It is implemented for `http::Request<Bytes>`; other server
//! frameworks can implement it over their own request types.
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

use super::multipart::decode_multipart;
use super::FormData;
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use url::form_urlencoded;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";
const URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// An incoming request whose body may hold a form submission
#[async_trait]
pub trait RequestHandle: Send {
    /// Raw query string of the request URL, without the leading `?`
    fn query(&self) -> Option<&str>;

    /// Value of the `Content-Type` header
    fn content_type(&self) -> Option<&str>;

    /// Read and decode the body as a form submission
    ///
    /// The body is consumed; reading it a second time yields an empty form
    /// or an error, depending on the implementation.
    async fn form_data(&mut self) -> Result<FormData>;
}

#[async_trait]
impl RequestHandle for http::Request<Bytes> {
    fn query(&self) -> Option<&str> {
        self.uri().query()
    }

    fn content_type(&self) -> Option<&str> {
        self.headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    async fn form_data(&mut self) -> Result<FormData> {
        let content_type = self.content_type().unwrap_or_default().to_string();
        let body = std::mem::take(self.body_mut());
        decode_form(&content_type, body).await
    }
}

/// Decode a form body according to its content type
pub async fn decode_form(content_type: &str, body: Bytes) -> Result<FormData> {
    match essence(content_type).as_str() {
        MULTIPART_FORM_DATA => decode_multipart(content_type, body).await,
        URL_ENCODED => Ok(form_urlencoded::parse(&body).into_owned().collect()),
        _ => Err(Error::UnsupportedContentType {
            content_type: content_type.to_string(),
        }),
    }
}

/// Whether a content type denotes a multipart form submission
pub fn is_multipart(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| essence(value) == MULTIPART_FORM_DATA)
}

/// Media type without parameters, lowercased
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
