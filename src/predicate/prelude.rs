//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use emptylike::predicate::prelude::*;
//!
//! assert!(not_empty_like().check("value"));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Empty-like predicates
pub use super::emptiness::{empty_like, empty_like_untrimmed, not_empty_like};

// Validation integration
pub use super::validation::{require_not_empty_like, validate, validate_with};
