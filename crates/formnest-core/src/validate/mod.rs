//! Validator seam
//!
//! Records are handed to a [`Validator`] which turns them into typed
//! output. Validation itself is delegated entirely: the adapters neither
//! inspect nor rewrite validator errors.
//!
//! - [`Typed`] deserializes the record into any `DeserializeOwned` type
//! - closures of the form `Fn(Node) -> Result<T, E>` are validators too
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

pub mod issue;

pub use issue::{IssueCode, ValidationIssue};

use crate::record::Node;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Turns an assembled record into validated output
pub trait Validator {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, node: Node) -> Result<Self::Output, Self::Error>;
}

impl<F, T, E> Validator for F
where
    F: Fn(Node) -> Result<T, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = T;
    type Error = E;

    fn parse(&self, node: Node) -> Result<T, E> {
        self(node)
    }
}

/// Validator that deserializes the record with serde
///
/// ```
/// use formnest_core::{typed, Node, Validator};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct Signup {
///     age: u32,
/// }
///
/// let signup = typed::<Signup>().parse(Node::from(json!({"age": 23}))).unwrap();
/// assert_eq!(signup.age, 23);
/// ```
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Typed<T> {}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Typed")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> Validator for Typed<T> {
    type Output = T;
    type Error = serde_json::Error;

    fn parse(&self, node: Node) -> Result<T, serde_json::Error> {
        serde_json::from_value(node.into_value())
    }
}

/// Shorthand for [`Typed::new`]
pub fn typed<T: DeserializeOwned>() -> Typed<T> {
    Typed::new()
}
