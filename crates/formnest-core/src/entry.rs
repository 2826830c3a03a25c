//! Raw key/value entries produced by query strings and form submissions

use bytes::Bytes;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// An uploaded file from a multipart form submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileHandle {
    name: String,
    content_type: Option<String>,
    data: Bytes,
}

impl FileHandle {
    /// Create a file handle from its parts
    pub fn new(
        name: impl Into<String>,
        content_type: Option<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type,
            data: data.into(),
        }
    }

    /// Client-supplied file name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// File contents
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Size of the contents in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// A file input submitted without a selection: no name and no content
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.data.is_empty()
    }
}

/// Files serialize as their metadata; contents stay out of JSON
impl Serialize for FileHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileHandle", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", &self.content_type)?;
        state.serialize_field("size", &self.size())?;
        state.end()
    }
}

/// Value half of a raw entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Text(String),
    File(FileHandle),
}

impl From<&str> for EntryValue {
    fn from(text: &str) -> Self {
        EntryValue::Text(text.to_string())
    }
}

impl From<String> for EntryValue {
    fn from(text: String) -> Self {
        EntryValue::Text(text)
    }
}

impl From<FileHandle> for EntryValue {
    fn from(file: FileHandle) -> Self {
        EntryValue::File(file)
    }
}

/// A single `(key, value)` pair in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub value: EntryValue,
}

impl RawEntry {
    pub fn new(key: impl Into<String>, value: impl Into<EntryValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<EntryValue>> From<(K, V)> for RawEntry {
    fn from((key, value): (K, V)) -> Self {
        RawEntry::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        assert!(FileHandle::default().is_empty());
        assert!(!FileHandle::new("", None, "x").is_empty());
        assert!(!FileHandle::new("a.txt", None, Bytes::new()).is_empty());
    }

    #[test]
    fn test_file_serializes_metadata() {
        let file = FileHandle::new("avatar.png", Some("image/png".to_string()), vec![1u8, 2, 3]);
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "avatar.png", "type": "image/png", "size": 3})
        );
    }

    #[test]
    fn test_entry_from_tuple() {
        let entry: RawEntry = ("q", "photos").into();
        assert_eq!(entry.key, "q");
        assert_eq!(entry.value, EntryValue::Text("photos".to_string()));
    }
}
