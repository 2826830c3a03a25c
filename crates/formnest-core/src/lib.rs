//! Formnest Core - Nested records from flat query strings and form submissions
//!
//! This crate turns flat `(key, value)` entries such as
//! `tasks[0].label=A` into a nested record, then hands the record to a
//! validator that produces typed output.
//!
//! # Main Components
//!
//! - **Paths**: Parse and format keys like `tasks[0].label`
//! - **Records**: Coerce values and assemble entries into a nested `Node` tree
//! - **Entry Sources**: Read entries from URLs, query collections, forms and requests
//! - **Validation**: A `Validator` seam with a serde-backed `Typed` validator
//! - **Helpers**: `find_by` and `json` transforms returning `ValidationIssue`s
//!
//! # Index limit
//!
//! Array indices in keys are bounded by [`BuildConfig::max_index`], which
//! defaults to [`config::DEFAULT_MAX_INDEX`] (10 000). A key such as
//! `tasks[10001].label` is rejected with [`Error::IndexLimit`] unless the
//! limit is raised, since each key pads its sequence up to the index it
//! addresses.
//!
//! # Example
//!
//! ```
//! use formnest_core::{parse_query, typed};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Task {
//!     label: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct Board {
//!     tasks: Vec<Task>,
//!     hobbies: Vec<String>,
//! }
//!
//! let url = "https://example.com/?tasks[0].label=A&tasks[1].label=B&hobbies=chess&hobbies=go";
//! let board = parse_query(url, typed::<Board>()).unwrap();
//! assert_eq!(board.tasks[1].label, "B");
//! assert_eq!(board.hobbies, ["chess", "go"]);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod helpers;
pub mod parser;
pub mod path;
pub mod record;
pub mod source;
pub mod validate;

// Re-export main types for convenience
pub use config::BuildConfig;
pub use entry::{EntryValue, FileHandle, RawEntry};
pub use error::{Error, ParseError, Result};
pub use helpers::{find_by, json};
pub use parser::{parse_form, parse_query, parse_request, FormParser, ParseResult};
pub use path::{format_path, parse_path, Path, PathSegment};
pub use record::{build_record, build_record_with, Node, Record, RecordBuilder};
pub use source::{
    from_form, from_query, from_request, FormData, FormSource, QueryParams, QuerySource,
    RequestHandle, RequestQuery,
};
pub use validate::{typed, IssueCode, Typed, ValidationIssue, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        let path = parse_path("tasks[0].label");
        assert_eq!(format_path(path.segments()), "tasks[0].label");

        let record = build_record(vec![RawEntry::new("a", "1")]).unwrap();
        assert_eq!(record.into_value()["a"], 1);
    }
}
