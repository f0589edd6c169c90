//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the `and`, `or`
//! and `not` combinators for composing predicates.

/// A composable predicate over values of type T.
///
/// # Example
///
/// ```rust
/// use emptylike::predicate::*;
///
/// let p = empty_like();
/// assert!(p.check("   "));
/// assert!(p.check(&None::<u32>));
/// assert!(!p.check(&vec![0]));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types. Predicates that accept many value types,
/// such as [`EmptyLike`](super::EmptyLike), need the target type spelled out:
///
/// ```rust
/// use emptylike::predicate::*;
///
/// let blank_or_short = PredicateExt::<str>::or(empty_like(), |s: &str| s.trim().len() < 3);
/// assert!(blank_or_short.check("  "));
/// assert!(blank_or_short.check(" ab "));
/// assert!(!blank_or_short.check("abc"));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{empty_like, empty_like_untrimmed};

    #[test]
    fn test_and() {
        let p = PredicateExt::<str>::and(empty_like(), empty_like_untrimmed());
        assert!(p.check(""));
        assert!(!p.check("  ")); // untrimmed rejects whitespace
        assert!(!p.check("x"));
    }

    #[test]
    fn test_or() {
        let zero = |n: &Option<i32>| *n == Some(0);
        let p = PredicateExt::<Option<i32>>::or(empty_like(), zero);
        assert!(p.check(&None));
        assert!(p.check(&Some(0)));
        assert!(!p.check(&Some(7)));
    }

    #[test]
    fn test_not() {
        let p = PredicateExt::<Vec<u8>>::not(empty_like());
        assert!(p.check(&vec![1]));
        assert!(!p.check(&Vec::<u8>::new()));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.check(&4));
        assert!(!is_even.check(&3));
        assert!(is_even.not().check(&3));
    }
}
