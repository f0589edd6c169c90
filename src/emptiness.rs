//! Top-level empty-like checks
//!
//! These functions accept anything implementing [`AsCandidate`] and apply the
//! rules documented on [`Candidate::classify`](crate::Candidate::classify).
//!
//! # Example
//!
//! ```rust
//! use emptylike::{is_empty_like, is_empty_like_default, is_not_empty_like};
//! use std::collections::HashMap;
//!
//! assert!(is_empty_like_default(&None::<i32>));
//! assert!(!is_empty_like_default(&0));
//! assert!(!is_empty_like_default(&vec![1, 2, 3]));
//! assert!(is_empty_like_default(&Vec::<i32>::new()));
//! assert!(is_empty_like_default(""));
//! assert!(is_empty_like_default("    "));
//! assert!(!is_empty_like("    ", false));
//! assert!(is_empty_like_default(&HashMap::<String, i32>::new()));
//! assert!(!is_empty_like_default(&HashMap::from([("length", 0)])));
//! assert!(is_empty_like_default(&Vec::<u8>::new()));
//! assert!(is_not_empty_like("hello"));
//! ```

use crate::candidate::{AsCandidate, EmptyReason};

/// Report which empty-like rule `value` matches, if any.
///
/// # Example
///
/// ```rust
/// use emptylike::{classify, EmptyReason};
///
/// assert_eq!(classify(" ", true), Some(EmptyReason::Whitespace));
/// assert_eq!(classify(" ", false), None);
/// ```
#[inline]
pub fn classify<T: AsCandidate + ?Sized>(value: &T, trim_whitespace: bool) -> Option<EmptyReason> {
    value.as_candidate().classify(trim_whitespace)
}

/// Whether `value` is absent, zero-length, or (with `trim_whitespace`) blank text.
#[inline]
pub fn is_empty_like<T: AsCandidate + ?Sized>(value: &T, trim_whitespace: bool) -> bool {
    classify(value, trim_whitespace).is_some()
}

/// [`is_empty_like`] with whitespace trimming enabled.
#[inline]
pub fn is_empty_like_default<T: AsCandidate + ?Sized>(value: &T) -> bool {
    is_empty_like(value, true)
}

/// Negation of [`is_empty_like_default`].
#[inline]
pub fn is_not_empty_like<T: AsCandidate + ?Sized>(value: &T) -> bool {
    !is_empty_like(value, true)
}
