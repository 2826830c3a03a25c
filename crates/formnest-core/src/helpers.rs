//! Value transform helpers
//!
//! Small transforms meant to run after a field has been validated as a
//! scalar. Each returns `Result<_, ValidationIssue>`; the issue carries no
//! path, so the caller attaches the field path before reporting it.
//!
//! Copyright (c) 2025 Formnest Team
//! Licensed under the Apache-2.0 license

use crate::record::Node;
use crate::validate::{IssueCode, ValidationIssue, Validator};
use serde_json::Value;

/// Look up a collection item by one of its attributes
///
/// The returned transform scans `collection` in order and yields the first
/// item whose key equals the value.
///
/// ```
/// use formnest_core::helpers::find_by;
///
/// struct User {
///     name: String,
/// }
///
/// let users = vec![
///     User { name: "ada".into() },
///     User { name: "grace".into() },
/// ];
/// let by_name = find_by(|user: &User| user.name.as_str(), &users);
///
/// assert_eq!(by_name("grace").unwrap().name, "grace");
/// assert!(by_name("linus").is_err());
/// ```
pub fn find_by<'a, T, K, F>(
    key: F,
    collection: &'a [T],
) -> impl Fn(&K) -> Result<&'a T, ValidationIssue>
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    move |value: &K| {
        collection
            .iter()
            .find(|item| key(item) == value)
            .ok_or_else(|| ValidationIssue::new(IssueCode::NoMatch))
    }
}

/// Decode a JSON string field and validate its contents
///
/// `None` passes through untouched. Text that is not JSON, or JSON the inner
/// validator rejects, yields an [`IssueCode::InvalidJson`] issue.
pub fn json<V: Validator>(
    inner: V,
) -> impl Fn(Option<&str>) -> Result<Option<V::Output>, ValidationIssue> {
    move |value: Option<&str>| {
        let Some(text) = value else {
            return Ok(None);
        };

        let decoded: Value = serde_json::from_str(text).map_err(|err| {
            tracing::trace!(error = %err, "Field is not valid JSON");
            ValidationIssue::new(IssueCode::InvalidJson)
        })?;

        inner.parse(Node::from(decoded)).map(Some).map_err(|err| {
            tracing::trace!(error = %err, "Decoded JSON failed inner validation");
            ValidationIssue::new(IssueCode::InvalidJson)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::validate::typed;
    use serde::Deserialize;

    #[derive(Debug, PartialEq)]
    struct User {
        id: u32,
        name: &'static str,
    }

    fn users() -> Vec<User> {
        vec![
            User { id: 1, name: "Ada" },
            User { id: 2, name: "Grace" },
            User { id: 3, name: "Ada" },
        ]
    }

    #[test]
    fn test_find_by_returns_first_match() {
        let users = users();
        let by_name = find_by(|user: &User| user.name, &users);
        assert_eq!(by_name("Ada").unwrap().id, 1);
        assert_eq!(by_name("Grace").unwrap().id, 2);
    }

    #[test]
    fn test_find_by_numeric_key() {
        let users = users();
        let by_id = find_by(|user: &User| &user.id, &users);
        assert_eq!(by_id(&3).unwrap(), &users[2]);
    }

    #[test]
    fn test_find_by_miss() {
        let users = users();
        let by_name = find_by(|user: &User| user.name, &users);
        let issue = by_name("NotInList").unwrap_err();
        assert_eq!(issue.code, IssueCode::NoMatch);
        assert_eq!(issue.message, "must match a value from the provided array");

        let issue = issue.with_path(Path::parse("owner"));
        assert_eq!(
            issue.to_string(),
            "owner: must match a value from the provided array"
        );
    }

    #[test]
    fn test_find_by_empty_collection() {
        let empty: Vec<User> = Vec::new();
        let by_name = find_by(|user: &User| user.name, &empty);
        assert!(by_name("Ada").is_err());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Settings {
        theme: String,
    }

    #[test]
    fn test_json_passes_none_through() {
        let parse = json(typed::<Settings>());
        assert_eq!(parse(None).unwrap(), None);
    }

    #[test]
    fn test_json_decodes_and_validates() {
        let parse = json(typed::<Settings>());
        let settings = parse(Some(r#"{"theme":"dark"}"#)).unwrap();
        assert_eq!(
            settings,
            Some(Settings {
                theme: "dark".to_string()
            })
        );

        let numbers = json(typed::<Vec<u32>>());
        assert_eq!(numbers(Some("[1, 2, 3]")).unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_json_rejects_invalid_text() {
        let parse = json(typed::<Settings>());
        let issue = parse(Some("{theme: dark")).unwrap_err();
        assert_eq!(issue.code, IssueCode::InvalidJson);
        assert_eq!(issue.to_string(), "must be a valid JSON string");
    }

    #[test]
    fn test_json_rejects_inner_failure() {
        let parse = json(typed::<Settings>());
        let issue = parse(Some(r#"{"colour":"red"}"#)).unwrap_err();
        assert_eq!(issue.code, IssueCode::InvalidJson);
    }
}
