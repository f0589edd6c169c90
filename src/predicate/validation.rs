//! Validation integration for predicates
//!
//! This module provides integration between predicates and the `Validation` type.

use super::combinators::Predicate;
use crate::candidate::AsCandidate;
use crate::emptiness::classify;
use crate::error::EmptyValue;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use emptylike::{Validation, predicate::*};
///
/// let result = validate(String::from("hello"), not_empty_like(), "blank");
/// assert_eq!(result, Validation::success(String::from("hello")));
///
/// let result = validate(String::from("  "), not_empty_like(), "blank");
/// assert_eq!(result, Validation::failure("blank"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

/// Validate a value with an error factory.
///
/// Like `validate`, but the closure sees the rejected value.
///
/// # Example
///
/// ```rust
/// use emptylike::{Validation, predicate::*};
///
/// let result = validate_with(vec![0u8; 0], not_empty_like(), |v| format!("{} items", v.len()));
/// assert_eq!(result, Validation::failure("0 items".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Validation<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(&value))
    }
}

/// Require `value` to be not empty-like, trimming whitespace.
///
/// On failure the error names `field` and the rule that matched, so several
/// requirements joined with [`Validation::and`] report every empty field.
///
/// # Example
///
/// ```rust
/// use emptylike::{EmptyReason, EmptyValue, Validation, predicate::*};
///
/// assert_eq!(require_not_empty_like("name", "Ada"), Validation::success("Ada"));
/// assert_eq!(
///     require_not_empty_like("name", " "),
///     Validation::failure(vec![EmptyValue::new("name", EmptyReason::Whitespace)])
/// );
/// ```
pub fn require_not_empty_like<T: AsCandidate>(
    field: &str,
    value: T,
) -> Validation<T, Vec<EmptyValue>> {
    match classify(&value, true) {
        None => Validation::success(value),
        Some(reason) => Validation::failure(vec![EmptyValue::new(field, reason)]),
    }
}
