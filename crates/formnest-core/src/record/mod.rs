//! Nested record assembly
//!
//! This module turns an ordered list of raw entries into a single nested
//! record. Keys are parsed into paths, values are coerced, and repeated keys
//! are merged into arrays.
//!
//! # Module Organization
//!
//! - [`node`] - The recursive `Node` tree
//! - [`builder`] - Coercion, merge policy and the `RecordBuilder`
//!
//! # Examples
//!
//! ```
//! use formnest_core::record::build_record;
//! use formnest_core::RawEntry;
//! use serde_json::json;
//!
//! let record = build_record(vec![
//!     RawEntry::new("tasks[0].label", "A"),
//!     RawEntry::new("tasks[1].label", "B"),
//!     RawEntry::new("hobbies", "chess"),
//!     RawEntry::new("hobbies", "go"),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     record.into_value(),
//!     json!({
//!         "tasks": [{"label": "A"}, {"label": "B"}],
//!         "hobbies": ["chess", "go"]
//!     })
//! );
//! ```
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod node;


pub use builder::{build_record, build_record_with, coerce, merge, RecordBuilder};
pub use node::{Mapping, Node};

use crate::config::DEFAULT_MAX_INDEX;
use crate::error::{Error, Result};
use crate::path::{format_path, PathSegment};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A nested record whose root is always a mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    root: Node,
    max_index: usize,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// Create an empty record with the default index limit
    pub fn new() -> Self {
        Self::with_index_limit(DEFAULT_MAX_INDEX)
    }

    /// Create an empty record that rejects sequence indices above `max_index`
    pub fn with_index_limit(max_index: usize) -> Self {
        Self {
            root: Node::Mapping(Mapping::new()),
            max_index,
        }
    }

    /// Walk to `path` and replace the value there with `update(previous)`
    ///
    /// Missing intermediate slots are created as mappings when the following
    /// segment is a field and as sequences when it is an index. `previous` is
    /// [`Node::Absent`] when nothing occupied the slot. An empty path leaves
    /// the record untouched.
    pub fn assign<F>(&mut self, path: &[PathSegment], update: F) -> Result<()>
    where
        F: FnOnce(Node) -> Node,
    {
        let Some((last, parents)) = path.split_last() else {
            return Ok(());
        };

        let max_index = self.max_index;
        let mut cursor = &mut self.root;
        for (depth, segment) in parents.iter().enumerate() {
            let slot = slot_mut(cursor, segment, path, depth, max_index)?;
            if slot.is_absent() {
                *slot = if path[depth + 1].is_index() {
                    Node::Sequence(Vec::new())
                } else {
                    Node::Mapping(Mapping::new())
                };
            }
            cursor = slot;
        }

        let slot = slot_mut(cursor, last, path, parents.len(), max_index)?;
        let previous = std::mem::take(slot);
        *slot = update(previous);
        Ok(())
    }

    /// Look up the node at `path`; the empty path addresses the root
    pub fn get(&self, path: &[PathSegment]) -> Option<&Node> {
        let mut cursor = &self.root;
        for segment in path {
            cursor = match (cursor, segment) {
                (Node::Mapping(map), PathSegment::Field(name)) => map.get(name.as_str())?,
                (Node::Mapping(map), PathSegment::Index(index)) => {
                    map.get(index.to_string().as_str())?
                }
                (Node::Sequence(items), PathSegment::Index(index)) => items.get(*index)?,
                (Node::Sequence(items), PathSegment::Field(name)) => {
                    items.get(canonical_index(name)?)?
                }
                _ => return None,
            };
        }
        Some(cursor)
    }

    /// The root mapping node
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_node(self) -> Node {
        self.root
    }

    /// Convert into a JSON object; see [`Node::into_value`]
    pub fn into_value(self) -> Value {
        self.root.into_value()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

/// Resolve one segment inside `node`, creating the slot if needed
fn slot_mut<'a>(
    node: &'a mut Node,
    segment: &PathSegment,
    path: &[PathSegment],
    depth: usize,
    max_index: usize,
) -> Result<&'a mut Node> {
    match node {
        Node::Mapping(map) => {
            let key = match segment {
                PathSegment::Field(name) => name.clone(),
                PathSegment::Index(index) => index.to_string(),
            };
            Ok(map.entry(key).or_default())
        }
        Node::Sequence(items) => {
            let index = match segment {
                PathSegment::Index(index) => *index,
                PathSegment::Field(name) => {
                    canonical_index(name).ok_or_else(|| conflict(path, depth, "array"))?
                }
            };
            let len = index
                .checked_add(1)
                .filter(|_| index <= max_index)
                .ok_or_else(|| Error::IndexLimit {
                    index,
                    limit: max_index,
                    path: format_path(&path[..=depth]),
                })?;
            if items.len() < len {
                items.resize(len, Node::Absent);
            }
            Ok(&mut items[index])
        }
        other => Err(conflict(path, depth, other.kind())),
    }
}

fn conflict(path: &[PathSegment], depth: usize, found: &'static str) -> Error {
    Error::PathConflict {
        path: format_path(&path[..=depth]),
        found,
    }
}

/// A field name that is exactly a non-negative integer in canonical form
fn canonical_index(name: &str) -> Option<usize> {
    let canonical = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'));
    if canonical {
        name.parse().ok()
    } else {
        None
    }
}
