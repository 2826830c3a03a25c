//! Field paths for addressing locations in a nested record
//!
//! Keys such as `tasks[0].label` are parsed into an ordered list of
//! [`PathSegment`]s. Segments are either field names or array indices.
//!
//! Grammar:
//!
//! ```text
//! path    = segment ("." segment)*
//! segment = field? "[" digits "]" | field
//! ```
//!
//! Only one bracket group is recognized per dot-separated token; nested
//! indices are written as dotted tokens (`matrix[0].[1]`).
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

pub mod parser;


pub use parser::{parse_path, Scanner};

use std::fmt;
use std::str::FromStr;

/// A single step in a [`Path`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named field of a mapping
    Field(String),
    /// Position in a sequence
    Index(usize),
}

impl PathSegment {
    /// Whether this segment addresses a sequence position
    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Ordered sequence of segments addressing a location in a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a key into a path. Never fails; see [`parse_path`].
    pub fn parse(key: &str) -> Self {
        parse_path(key)
    }

    /// Append a segment
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// The segments of this path
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[PathSegment]> for Path {
    fn as_ref(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parse_path(s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_path(&self.segments))
    }
}

/// Render segments back into key syntax
///
/// A field appends `.name` (just `name` at the start) and an index appends
/// `[index]` with no separator. This inverts [`parse_path`] for keys written
/// in canonical form.
pub fn format_path(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            PathSegment::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            PathSegment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}
