//! Integration tests for required-field validation

use emptylike::predicate::{not_empty_like, require_not_empty_like, validate, PredicateExt};
use emptylike::{assert_failure, assert_success, Absence, EmptyReason, EmptyValue, Validation};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct SignupForm {
    name: String,
    email: Option<String>,
    tags: Vec<String>,
    settings: HashMap<String, String>,
}

#[derive(Debug, PartialEq)]
struct Signup {
    name: String,
    email: String,
    tag_count: usize,
}

fn validate_signup(form: SignupForm) -> Validation<Signup, Vec<EmptyValue>> {
    require_not_empty_like("name", form.name)
        .and(require_not_empty_like("email", form.email))
        .and(require_not_empty_like("tags", form.tags))
        .map(|((name, email), tags)| Signup {
            name,
            email: email.unwrap_or_default(),
            tag_count: tags.len(),
        })
}

fn filled_form() -> SignupForm {
    SignupForm {
        name: "Ada".to_string(),
        email: Some("ada@example.com".to_string()),
        tags: vec!["math".to_string()],
        settings: HashMap::new(),
    }
}

#[test]
fn filled_form_passes() {
    assert_eq!(
        validate_signup(filled_form()),
        Validation::success(Signup {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            tag_count: 1,
        })
    );
}

#[test]
fn every_empty_field_is_reported() {
    let form = SignupForm {
        name: "   ".to_string(),
        email: None,
        tags: vec![],
        ..filled_form()
    };

    let result = validate_signup(form);
    assert_eq!(
        result,
        Validation::failure(vec![
            EmptyValue::new("name", EmptyReason::Whitespace),
            EmptyValue::new("email", EmptyReason::Absent(Absence::Undefined)),
            EmptyValue::new("tags", EmptyReason::ZeroLength),
        ])
    );
}

#[test]
fn blank_email_is_rejected() {
    let form = SignupForm {
        email: Some("\t".to_string()),
        ..filled_form()
    };
    assert_failure!(validate_signup(form));
}

#[test]
fn optional_settings_may_be_empty() {
    let form = filled_form();
    assert!(form.settings.is_empty());
    assert_success!(validate_signup(form));
}

#[test]
fn not_empty_like_composes_with_custom_rule() {
    let has_at = |s: &String| s.contains('@');
    let email_rule = PredicateExt::<String>::and(not_empty_like(), has_at);

    assert!(validate("ada@example.com".to_string(), email_rule, "bad email").is_success());
    assert_eq!(
        validate("   ".to_string(), email_rule, "bad email"),
        Validation::failure("bad email")
    );
    assert_eq!(
        validate("ada".to_string(), email_rule, "bad email"),
        Validation::failure("bad email")
    );
}

#[test]
fn all_vec_collects_errors_from_many_values() {
    let values = vec!["a", "", "b", " "];
    let result = Validation::all_vec(
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| require_not_empty_like(&format!("item[{}]", i), v))
            .collect(),
    );

    let errors = result.into_result().unwrap_err();
    let fields: Vec<String> = errors.into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["item[1]", "item[3]"]);
}
