//! Empty-like predicates
//!
//! [`EmptyLike`] is the predicate form of [`is_empty_like`](crate::is_empty_like),
//! usable with the combinators and with [`validate`](super::validate).

use super::combinators::{Not, Predicate};
use crate::candidate::AsCandidate;
use crate::emptiness::is_empty_like;

/// Predicate that checks if a value is empty-like.
///
/// Trims whitespace by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyLike {
    trim_whitespace: bool,
}

impl EmptyLike {
    /// Set whether whitespace-only text counts as empty.
    pub fn with_trim_whitespace(self, trim_whitespace: bool) -> Self {
        Self { trim_whitespace }
    }

    /// Whether whitespace-only text counts as empty.
    pub fn trims_whitespace(&self) -> bool {
        self.trim_whitespace
    }
}

impl Default for EmptyLike {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
        }
    }
}

impl<T: AsCandidate + ?Sized> Predicate<T> for EmptyLike {
    #[inline]
    fn check(&self, value: &T) -> bool {
        is_empty_like(value, self.trim_whitespace)
    }
}

/// Predicate that checks if a value is not empty-like.
pub type NotEmptyLike = Not<EmptyLike>;

/// Create a predicate that checks if a value is empty-like, trimming whitespace.
///
/// # Example
///
/// ```rust
/// use emptylike::predicate::*;
///
/// assert!(empty_like().check(""));
/// assert!(empty_like().check(" \t "));
/// assert!(empty_like().check(&None::<String>));
/// assert!(!empty_like().check(&0));
/// ```
pub fn empty_like() -> EmptyLike {
    EmptyLike::default()
}

/// Create a predicate that checks if a value is empty-like without trimming.
///
/// # Example
///
/// ```rust
/// use emptylike::predicate::*;
///
/// assert!(empty_like_untrimmed().check(""));
/// assert!(!empty_like_untrimmed().check("   "));
/// ```
pub fn empty_like_untrimmed() -> EmptyLike {
    EmptyLike::default().with_trim_whitespace(false)
}

/// Create a predicate that checks if a value is not empty-like.
///
/// # Example
///
/// ```rust
/// use emptylike::predicate::*;
///
/// assert!(not_empty_like().check("hello"));
/// assert!(!not_empty_like().check("   "));
/// assert!(!not_empty_like().check(&Vec::<i32>::new()));
/// ```
pub fn not_empty_like() -> NotEmptyLike {
    Not(empty_like())
}
