//! Empty-like checks over decoded JSON documents
#![cfg(feature = "json")]

use emptylike::predicate::require_not_empty_like;
use emptylike::{classify, is_empty_like_default, is_not_empty_like, Absence, EmptyReason};
use serde_json::{json, Value};

#[test]
fn documented_cases() {
    assert!(is_empty_like_default(&Value::Null));
    assert!(is_empty_like_default(&json!(null)));
    assert!(!is_empty_like_default(&json!(0)));
    assert!(!is_empty_like_default(&json!([1, 2, 3])));
    assert!(is_empty_like_default(&json!([])));
    assert!(is_empty_like_default(&json!("")));
    assert!(is_empty_like_default(&json!("    ")));
    assert!(is_empty_like_default(&json!({})));
    assert!(!is_empty_like_default(&json!({"length": 0})));
}

#[test]
fn missing_and_null_fields_differ_in_reason() {
    let doc: Value = serde_json::from_str(r#"{"nickname": null}"#).unwrap();

    assert_eq!(
        classify(&doc.get("nickname"), true),
        Some(EmptyReason::Absent(Absence::Null))
    );
    assert_eq!(
        classify(&doc.get("email"), true),
        Some(EmptyReason::Absent(Absence::Undefined))
    );
}

#[test]
fn nested_values_are_not_inspected() {
    let doc = json!({"items": [null, "", {}]});
    assert!(is_not_empty_like(&doc));
    assert!(is_not_empty_like(&doc["items"]));
}

#[test]
fn required_json_fields() {
    let doc = json!({"name": "Ada", "bio": " ", "tags": []});

    let result = require_not_empty_like("name", &doc["name"])
        .and(require_not_empty_like("bio", &doc["bio"]))
        .and(require_not_empty_like("tags", &doc["tags"]))
        .and(require_not_empty_like("email", &doc["email"]));

    let reasons: Vec<(String, EmptyReason)> = result
        .into_result()
        .unwrap_err()
        .into_iter()
        .map(|e| (e.field, e.reason))
        .collect();

    assert_eq!(
        reasons,
        vec![
            ("bio".to_string(), EmptyReason::Whitespace),
            ("tags".to_string(), EmptyReason::ZeroLength),
            ("email".to_string(), EmptyReason::Absent(Absence::Null)),
        ]
    );
}
