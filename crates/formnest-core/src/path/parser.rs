//! Key scanner
//!
//! Splits a key on `.` and classifies each token as either a bare field name
//! or a `name[index]` group. Tokens that fit neither shape are kept verbatim
//! as field names, so scanning never fails.
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

use super::{Path, PathSegment};
use std::str::Split;

/// Shape of a single dot-separated token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// No bracket group, or a malformed one kept as a literal name
    Field(&'a str),
    /// `name[index]`, where `name` may be empty
    Indexed { name: &'a str, index: usize },
}

impl<'a> Token<'a> {
    fn classify(token: &'a str) -> Self {
        let Some(open) = token.find('[') else {
            return Token::Field(token);
        };
        let (name, group) = token.split_at(open);

        // `group` starts with the '[' found above
        let Some(digits) = group[1..].strip_suffix(']') else {
            return Token::Field(token);
        };
        if name.contains(']') || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Token::Field(token);
        }

        match digits.parse::<usize>() {
            Ok(index) => Token::Indexed { name, index },
            // too large for usize
            Err(_) => Token::Field(token),
        }
    }
}

/// Iterator over the segments of a key
///
/// ```
/// use formnest_core::path::{PathSegment, Scanner};
///
/// let segments: Vec<_> = Scanner::new("tasks[0].label").collect();
/// assert_eq!(
///     segments,
///     vec![
///         PathSegment::Field("tasks".to_string()),
///         PathSegment::Index(0),
///         PathSegment::Field("label".to_string()),
///     ]
/// );
/// ```
pub struct Scanner<'a> {
    /// Remaining tokens; `None` for empty input
    tokens: Option<Split<'a, char>>,
    /// Index half of a `name[index]` token whose name was already yielded
    pending: Option<usize>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over the given key
    pub fn new(input: &'a str) -> Self {
        let tokens = if input.is_empty() {
            None
        } else {
            Some(input.split('.'))
        };

        Self {
            tokens,
            pending: None,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(index) = self.pending.take() {
            return Some(PathSegment::Index(index));
        }

        let token = self.tokens.as_mut()?.next()?;
        match Token::classify(token) {
            Token::Field(name) => Some(PathSegment::Field(name.to_string())),
            Token::Indexed { name, index } if name.is_empty() => Some(PathSegment::Index(index)),
            Token::Indexed { name, index } => {
                self.pending = Some(index);
                Some(PathSegment::Field(name.to_string()))
            }
        }
    }
}

/// Parse a key into a [`Path`]
///
/// An empty key yields an empty path.
pub fn parse_path(key: &str) -> Path {
    Scanner::new(key).collect()
}
