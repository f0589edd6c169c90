//! Semigroup trait for accumulating errors
//!
//! [`Validation::and`](crate::Validation::and) uses `combine` to merge the
//! errors of two failed checks, so every empty field is reported at once.
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Example
//!
//! ```
//! use emptylike::{EmptyReason, EmptyValue, Semigroup};
//!
//! let first = vec![EmptyValue::new("name", EmptyReason::ZeroLength)];
//! let second = vec![EmptyValue::new("email", EmptyReason::Whitespace)];
//! assert_eq!(first.combine(second).len(), 2);
//! ```

/// A type that supports an associative binary operation.
///
/// `combine` takes `self` by value; clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
