//! Helper transforms used from serde validators
//!
//! `find_by` and `json` report `ValidationIssue`s; inside
//! `deserialize_with` functions they are translated into the
//! deserializer's error type.

use formnest_core::{find_by, json, parse_query, typed, BuildConfig, FormParser, IssueCode};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Plan {
    id: String,
    seats: u32,
}

fn plans() -> &'static [Plan] {
    static PLANS: std::sync::OnceLock<Vec<Plan>> = std::sync::OnceLock::new();
    PLANS.get_or_init(|| {
        vec![
            Plan {
                id: "starter".to_string(),
                seats: 1,
            },
            Plan {
                id: "team".to_string(),
                seats: 10,
            },
        ]
    })
}

fn plan_by_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Plan, D::Error> {
    let id = String::deserialize(deserializer)?;
    let by_id = find_by(|plan: &Plan| plan.id.as_str(), plans());
    by_id(id.as_str())
        .cloned()
        .map_err(|issue| issue.with_path(formnest_core::Path::parse("plan")).into_de_error())
}

#[derive(Debug, Deserialize, PartialEq)]
struct Preferences {
    theme: String,
}

fn preferences_json<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Preferences>, D::Error> {
    let text = Option::<String>::deserialize(deserializer)?;
    json(typed::<Preferences>())(text.as_deref()).map_err(|issue| issue.into_de_error())
}

#[derive(Debug, Deserialize)]
struct Subscription {
    #[serde(deserialize_with = "plan_by_id")]
    plan: Plan,
    #[serde(default, deserialize_with = "preferences_json")]
    preferences: Option<Preferences>,
}

fn raw_parser() -> FormParser {
    FormParser::with_config(BuildConfig::default().without_coercion())
}

#[test]
fn test_find_by_resolves_item() {
    let subscription = parse_query("https://example.com/?plan=team", typed::<Subscription>())
        .expect("Plan should resolve");
    assert_eq!(subscription.plan.seats, 10);
    assert!(subscription.preferences.is_none());
}

#[test]
fn test_find_by_miss_reports_issue() {
    let err = parse_query("https://example.com/?plan=NotInList", typed::<Subscription>())
        .unwrap_err();
    let message = err.validation().expect("Validation error").to_string();
    assert!(message.contains("plan: must match a value from the provided array"));
}

#[test]
fn test_json_field_decodes() {
    let url = "https://example.com/?plan=starter&preferences=%7B%22theme%22%3A%22dark%22%7D";
    let subscription = raw_parser()
        .parse_query(url, typed::<Subscription>())
        .expect("Preferences should decode");
    assert_eq!(
        subscription.preferences,
        Some(Preferences {
            theme: "dark".to_string()
        })
    );
}

#[test]
fn test_json_field_rejects_invalid_text() {
    let url = "https://example.com/?plan=starter&preferences=%7Btheme";
    let err = raw_parser()
        .parse_query(url, typed::<Subscription>())
        .unwrap_err();
    let message = err.validation().expect("Validation error").to_string();
    assert!(message.contains(IssueCode::InvalidJson.message()));
}
