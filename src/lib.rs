//! # emptylike
//!
//! One question, asked the same way everywhere: *is this value empty-like?*
//!
//! A value is empty-like when, checked in this order:
//!
//! 1. it is absent (`None`, or an explicit null from a data format),
//! 2. it is text, a sequence or a mapping with length zero,
//! 3. it is text made only of whitespace (unless trimming is turned off).
//!
//! Numbers, booleans and non-empty collections are never empty-like, and the
//! elements of a collection are never inspected.
//!
//! ## Quick Example
//!
//! ```rust
//! use emptylike::{is_empty_like, is_empty_like_default, is_not_empty_like};
//!
//! assert!(is_empty_like_default(&None::<String>));
//! assert!(is_empty_like_default(""));
//! assert!(is_empty_like_default("   "));
//! assert!(!is_empty_like("   ", false));
//! assert!(is_empty_like_default(&Vec::<i32>::new()));
//! assert!(!is_empty_like_default(&vec![1, 2, 3]));
//! assert!(!is_empty_like_default(&0));
//! assert!(is_not_empty_like("hello"));
//! ```
//!
//! ## Required fields
//!
//! ```rust
//! use emptylike::predicate::require_not_empty_like;
//!
//! let result = require_not_empty_like("name", "")
//!     .and(require_not_empty_like("email", "ada@example.com"));
//!
//! match result.into_result() {
//!     Ok(_) => unreachable!(),
//!     Err(errors) => assert_eq!(errors[0].to_string(), "name: value has zero length"),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a trace event for every classification
//! - `serde`: `Serialize`/`Deserialize` for [`Absence`], [`EmptyReason`] and [`EmptyValue`]
//! - `json`: [`AsCandidate`] for `serde_json::Value`
//! - `proptest`: strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod candidate;
pub mod emptiness;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod predicate;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use candidate::{Absence, AsCandidate, Candidate, EmptyReason};
pub use emptiness::{classify, is_empty_like, is_empty_like_default, is_not_empty_like};
pub use error::EmptyValue;
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::candidate::{Absence, AsCandidate, Candidate, EmptyReason};
    pub use crate::emptiness::{classify, is_empty_like, is_empty_like_default, is_not_empty_like};
    pub use crate::error::EmptyValue;
    pub use crate::predicate::{
        empty_like, empty_like_untrimmed, not_empty_like, require_not_empty_like, Predicate,
        PredicateExt,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
