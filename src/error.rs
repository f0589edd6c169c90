//! Error produced when a required value is empty-like.

use std::fmt;

use crate::candidate::EmptyReason;

/// A named value failed the not-empty-like requirement.
///
/// # Example
///
/// ```rust
/// use emptylike::{EmptyReason, EmptyValue};
///
/// let err = EmptyValue::new("name", EmptyReason::Whitespace);
/// assert_eq!(err.to_string(), "name: value is only whitespace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmptyValue {
    /// Name of the offending field.
    pub field: String,
    /// The rule that matched.
    pub reason: EmptyReason,
}

impl EmptyValue {
    /// Create a new error for `field`.
    pub fn new(field: impl Into<String>, reason: EmptyReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

impl fmt::Display for EmptyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for EmptyValue {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Absence;

    #[test]
    fn test_display_absent() {
        let err = EmptyValue::new("email", EmptyReason::Absent(Absence::Undefined));
        assert_eq!(err.to_string(), "email: value is undefined");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(EmptyValue::new("tags", EmptyReason::ZeroLength));
        assert_eq!(err.to_string(), "tags: value has zero length");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let err = EmptyValue::new("name", EmptyReason::Absent(Absence::Null));
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"field":"name","reason":{"absent":"null"}}"#);
    }
}
