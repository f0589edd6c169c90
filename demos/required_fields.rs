//! Required fields example - reporting every empty field at once
//!
//! Run with `cargo run --example required_fields`.

use emptylike::predicate::require_not_empty_like;
use emptylike::{EmptyValue, Validation};

#[derive(Debug)]
struct SignupForm {
    name: String,
    email: Option<String>,
    tags: Vec<String>,
}

#[derive(Debug)]
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

fn report(form: SignupForm) {
    match validate_signup(form) {
        Validation::Success(signup) => println!(
            "✓ Signed up {} <{}> with {} tags",
            signup.name, signup.email, signup.tag_count
        ),
        Validation::Failure(errors) => {
            println!("✗ Found {} empty fields:", errors.len());
            for (i, err) in errors.iter().enumerate() {
                println!("  {}. {}", i + 1, err);
            }
        }
    }
}

fn main() {
    println!("=== Required Fields ===\n");

    println!("Filled form");
    report(SignupForm {
        name: "Ada".to_string(),
        email: Some("ada@example.com".to_string()),
        tags: vec!["math".to_string()],
    });

    println!("\n---\n");

    println!("Blank name, missing email, no tags");
    report(SignupForm {
        name: "   ".to_string(),
        email: None,
        tags: vec![],
    });

    println!("\n---\n");

    // NEL is not trimmed, so this name counts as filled
    println!("Name made of a next-line character");
    report(SignupForm {
        name: "\u{85}".to_string(),
        email: Some("\t".to_string()),
        tags: vec!["x".to_string()],
    });
}
