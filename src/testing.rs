//! Testing utilities
//!
//! Assertion macros for empty-like checks and validations, plus property-based
//! testing strategies behind the `proptest` feature.
//!
//! # Example
//!
//! ```rust
//! use emptylike::{assert_empty_like, assert_not_empty_like, assert_failure};
//! use emptylike::predicate::require_not_empty_like;
//!
//! assert_empty_like!("   ");
//! assert_not_empty_like!("   ", false);
//! assert_not_empty_like!(vec![1]);
//! assert_failure!(require_not_empty_like("name", ""));
//! ```

/// Assert that a value is empty-like.
///
/// Trims whitespace unless a second `false` argument is given.
#[macro_export]
macro_rules! assert_empty_like {
    ($value:expr) => {
        $crate::assert_empty_like!($value, true)
    };
    ($value:expr, $trim_whitespace:expr) => {
        match &$value {
            value => {
                if !$crate::is_empty_like(value, $trim_whitespace) {
                    panic!(
                        "Expected empty-like value, got {:?}",
                        $crate::AsCandidate::as_candidate(value)
                    );
                }
            }
        }
    };
}

/// Assert that a value is not empty-like.
///
/// Trims whitespace unless a second `false` argument is given.
#[macro_export]
macro_rules! assert_not_empty_like {
    ($value:expr) => {
        $crate::assert_not_empty_like!($value, true)
    };
    ($value:expr, $trim_whitespace:expr) => {
        match &$value {
            value => {
                if let Some(reason) = $crate::classify(value, $trim_whitespace) {
                    panic!("Expected value that is not empty-like, but {}", reason);
                }
            }
        }
    };
}

/// Assert that a validation succeeds.
///
/// # Example
///
/// ```rust
/// use emptylike::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Whitespace characters removed by trimming, across several Unicode categories.
#[cfg(feature = "proptest")]
const WHITESPACE: &[char] = &[
    ' ', '\t', '\n', '\r', '\u{b}', '\u{c}', '\u{a0}', '\u{2003}', '\u{2028}', '\u{3000}',
    '\u{feff}',
];

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing non-empty strings made only of whitespace.
#[cfg(feature = "proptest")]
pub fn blank_string() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(WHITESPACE), 1..16)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy producing strings with at least one non-whitespace character.
#[cfg(feature = "proptest")]
pub fn non_blank_string() -> impl Strategy<Value = String> {
    (any::<String>(), "[a-zA-Z0-9]", any::<String>())
        .prop_map(|(prefix, anchor, suffix)| format!("{}{}{}", prefix, anchor, suffix))
}
