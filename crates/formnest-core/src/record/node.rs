//! Nested record tree
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

use crate::entry::FileHandle;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Ordered field map of a [`Node::Mapping`]
pub type Mapping = IndexMap<String, Node>;

/// A value in an assembled record
///
/// Intermediate containers are `Mapping`s when addressed by field names and
/// `Sequence`s when addressed by indices. `Absent` marks a slot that was
/// submitted empty; it is distinct from an explicit JSON `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// No value was provided
    #[default]
    Absent,
    /// JSON null, boolean, number or string
    Scalar(Value),
    /// Uploaded file
    File(FileHandle),
    Mapping(Mapping),
    Sequence(Vec<Node>),
}

impl Node {
    /// Convenience constructor for a string scalar
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(Value::String(value.into()))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    /// Short description of the node type, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Absent => "absent value",
            Node::Scalar(Value::Null) => "null",
            Node::Scalar(Value::Bool(_)) => "boolean",
            Node::Scalar(Value::Number(_)) => "number",
            Node::Scalar(Value::String(_)) => "string",
            // normalized into Mapping/Sequence by From<Value>
            Node::Scalar(Value::Array(_)) => "array",
            Node::Scalar(Value::Object(_)) => "object",
            Node::File(_) => "file",
            Node::Mapping(_) => "object",
            Node::Sequence(_) => "array",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileHandle> {
        match self {
            Node::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a field of a mapping
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Convert into a JSON value
    ///
    /// Absent fields are dropped from objects and absent array elements
    /// become `null`. Files are rendered as `{"name", "type", "size"}`.
    pub fn into_value(self) -> Value {
        match self {
            Node::Absent => Value::Null,
            Node::Scalar(value) => value,
            Node::File(file) => file_to_value(&file),
            Node::Mapping(map) => Value::Object(
                map.into_iter()
                    .filter(|(_, node)| !node.is_absent())
                    .map(|(key, node)| (key, node.into_value()))
                    .collect::<Map<String, Value>>(),
            ),
            Node::Sequence(items) => {
                Value::Array(items.into_iter().map(Node::into_value).collect())
            }
        }
    }
}

fn file_to_value(file: &FileHandle) -> Value {
    let mut map = Map::new();
    map.insert("name".to_string(), Value::String(file.name().to_string()));
    map.insert(
        "type".to_string(),
        file.content_type()
            .map(|t| Value::String(t.to_string()))
            .unwrap_or(Value::Null),
    );
    map.insert("size".to_string(), Value::from(file.size()));
    Value::Object(map)
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            scalar => Node::Scalar(scalar),
        }
    }
}

impl From<FileHandle> for Node {
    fn from(file: FileHandle) -> Self {
        Node::File(file)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Absent => serializer.serialize_none(),
            Node::Scalar(value) => value.serialize(serializer),
            Node::File(file) => file.serialize(serializer),
            Node::Mapping(map) => {
                let present = map.iter().filter(|(_, node)| !node.is_absent());
                let mut state = serializer.serialize_map(None)?;
                for (key, node) in present {
                    state.serialize_entry(key, node)?;
                }
                state.end()
            }
            Node::Sequence(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for node in items {
                    state.serialize_element(node)?;
                }
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_builds_containers() {
        let node = Node::from(json!({"a": [1, {"b": true}], "c": null}));
        let map = node.as_mapping().unwrap();
        assert!(matches!(map["a"], Node::Sequence(_)));
        assert_eq!(map["c"], Node::Scalar(Value::Null));
        assert_eq!(node.get("a").unwrap().as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_into_value_drops_absent_fields() {
        let mut map = Mapping::new();
        map.insert("kept".to_string(), Node::string("x"));
        map.insert("missing".to_string(), Node::Absent);
        map.insert(
            "holes".to_string(),
            Node::Sequence(vec![Node::Absent, Node::string("y")]),
        );
        assert_eq!(
            Node::Mapping(map).into_value(),
            json!({"kept": "x", "holes": [null, "y"]})
        );
    }

    #[test]
    fn test_serialize_matches_into_value() {
        let node = Node::from(json!({"a": [1, 2], "b": {"c": "d"}}));
        let serialized = serde_json::to_value(&node).unwrap();
        assert_eq!(serialized, node.into_value());
    }

    #[test]
    fn test_file_into_value() {
        let file = FileHandle::new("a.txt", None, "hello");
        assert_eq!(
            Node::from(file).into_value(),
            json!({"name": "a.txt", "type": null, "size": 5})
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Node::Absent.kind(), "absent value");
        assert_eq!(Node::from(json!(1)).kind(), "number");
        assert_eq!(Node::from(json!([])).kind(), "array");
        assert_eq!(Node::from(json!({})).kind(), "object");
        assert_eq!(Node::string("s").kind(), "string");
    }
}
