//! JSON candidates (feature-gated)
//!
//! With the `json` feature, [`serde_json::Value`] and [`serde_json::Map`]
//! implement [`AsCandidate`], so data decoded from JSON gets the full rule set,
//! including an explicit `null`.
//!
//! # Example
//!
//! ```rust
//! use emptylike::is_empty_like_default;
//! use serde_json::json;
//!
//! assert!(is_empty_like_default(&json!(null)));
//! assert!(is_empty_like_default(&json!({})));
//! assert!(is_empty_like_default(&json!("  ")));
//! assert!(!is_empty_like_default(&json!({"length": 0})));
//! assert!(!is_empty_like_default(&json!(0)));
//! ```

use serde_json::{Map, Value};

use crate::candidate::{Absence, AsCandidate, Candidate};

impl AsCandidate for Value {
    fn as_candidate(&self) -> Candidate<'_> {
        match self {
            Value::Null => Candidate::Absent(Absence::Null),
            Value::String(text) => Candidate::Text(text),
            Value::Array(items) => Candidate::Sequence { len: items.len() },
            Value::Object(map) => map.as_candidate(),
            Value::Bool(_) | Value::Number(_) => Candidate::Scalar,
        }
    }
}

impl AsCandidate for Map<String, Value> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Mapping { keys: self.len() }
    }
}
