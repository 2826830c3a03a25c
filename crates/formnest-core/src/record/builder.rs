//! Record builder
//!
//! Applies coercion and the multi-value merge policy to each entry in
//! source order.
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

use super::{Node, Record};
use crate::config::BuildConfig;
use crate::entry::{EntryValue, RawEntry};
use crate::error::Result;
use crate::path::parse_path;
use serde_json::Value;

/// Interpret a raw entry value
///
/// Empty text and empty files become [`Node::Absent`]. Text is parsed as
/// JSON when `coerce_json` is set and kept as a string when it does not
/// parse. Non-empty files pass through unchanged.
pub fn coerce(value: EntryValue, config: &BuildConfig) -> Node {
    match value {
        EntryValue::Text(text) if text.is_empty() => Node::Absent,
        EntryValue::Text(text) if config.coerce_json => match serde_json::from_str::<Value>(&text) {
            Ok(value) => Node::from(value),
            Err(_) => Node::Scalar(Value::String(text)),
        },
        EntryValue::Text(text) => Node::Scalar(Value::String(text)),
        EntryValue::File(file) if file.is_empty() => Node::Absent,
        EntryValue::File(file) => Node::File(file),
    }
}

/// Combine the value already at a path with the next value for it
///
/// Absent never overwrites, the first repeat creates a two-element sequence,
/// and later repeats append.
pub fn merge(previous: Node, next: Node) -> Node {
    match (previous, next) {
        (Node::Absent, next) => next,
        (previous, Node::Absent) => previous,
        (Node::Sequence(mut items), next) => {
            items.push(next);
            Node::Sequence(items)
        }
        (previous, next) => Node::Sequence(vec![previous, next]),
    }
}

/// Incremental record assembly
///
/// ```
/// use formnest_core::{BuildConfig, RawEntry, RecordBuilder};
///
/// let mut builder = RecordBuilder::new(BuildConfig::default());
/// builder.push(RawEntry::new("age", "23")).unwrap();
/// let record = builder.finish();
/// assert_eq!(record.into_value()["age"], 23);
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
    config: BuildConfig,
    skipped: usize,
}

impl RecordBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            record: Record::with_index_limit(config.max_index),
            config,
            skipped: 0,
        }
    }

    /// Merge one entry into the record
    pub fn push(&mut self, entry: RawEntry) -> Result<()> {
        let RawEntry { key, value } = entry;
        let path = parse_path(&key);
        if path.is_empty() {
            self.skipped += 1;
            tracing::debug!("Skipping entry with empty key");
            return Ok(());
        }

        let next = coerce(value, &self.config);
        tracing::trace!(path = %path, kind = next.kind(), "Assigning entry");
        self.record
            .assign(path.segments(), move |previous| merge(previous, next))
    }

    /// Merge every entry in order, stopping at the first error
    pub fn extend<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        for entry in entries {
            self.push(entry)?;
        }
        Ok(())
    }

    /// Number of entries dropped because their key was empty
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> Record {
        self.record
    }
}

/// Assemble a record from entries using the default configuration
pub fn build_record<I>(entries: I) -> Result<Record>
where
    I: IntoIterator<Item = RawEntry>,
{
    build_record_with(entries, &BuildConfig::default())
}

/// Assemble a record from entries
pub fn build_record_with<I>(entries: I, config: &BuildConfig) -> Result<Record>
where
    I: IntoIterator<Item = RawEntry>,
{
    let mut builder = RecordBuilder::new(config.clone());
    builder.extend(entries)?;
    if builder.skipped() > 0 {
        tracing::debug!(skipped = builder.skipped(), "Entries with empty keys were ignored");
    }
    Ok(builder.finish())
}
