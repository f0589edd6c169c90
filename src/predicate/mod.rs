//! Predicate combinators for empty-like checks
//!
//! The empty-like check is available as a predicate value, [`EmptyLike`], so it
//! composes with other predicates through `and`, `or` and `not` and plugs into
//! [`Validation`](crate::Validation) for error accumulation.
//!
//! # Example
//!
//! ```rust
//! use emptylike::predicate::*;
//!
//! assert!(empty_like().check("   "));
//! assert!(!empty_like_untrimmed().check("   "));
//! assert!(not_empty_like().check(&vec![1, 2, 3]));
//! ```
//!
//! # Integration with Validation
//!
//! ```rust
//! use emptylike::{Validation, predicate::*};
//!
//! let result = validate(String::from("hello"), not_empty_like(), "required");
//! assert_eq!(result, Validation::success(String::from("hello")));
//!
//! let result = validate(None::<String>, not_empty_like(), "required");
//! assert_eq!(result, Validation::failure("required"));
//! ```

mod combinators;
mod emptiness;
mod validation;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export empty-like predicates
pub use emptiness::{empty_like, empty_like_untrimmed, not_empty_like, EmptyLike, NotEmptyLike};

// Re-export validation integration
pub use validation::{require_not_empty_like, validate, validate_with};
