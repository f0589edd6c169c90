//! Candidate values and the empty-like rules
//!
//! Every value the predicate inspects is first viewed as a [`Candidate`], a closed
//! set of shapes:
//!
//! - [`Candidate::Absent`]: no value was provided
//! - [`Candidate::Text`]: a string slice
//! - [`Candidate::Sequence`]: an ordered or unordered collection of elements
//! - [`Candidate::Mapping`]: a key/value collection
//! - [`Candidate::Scalar`]: numbers, booleans, chars and anything else with no length
//!
//! Native Rust types opt in through [`AsCandidate`]. Only the outer shape is
//! inspected; elements of a collection are never visited.
//!
//! # Example
//!
//! ```rust
//! use emptylike::{AsCandidate, Candidate};
//!
//! assert_eq!("hi".as_candidate(), Candidate::Text("hi"));
//! assert_eq!(vec![1, 2, 3].as_candidate(), Candidate::Sequence { len: 3 });
//! assert_eq!(42u8.as_candidate(), Candidate::Scalar);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// The two ways a value can be missing.
///
/// Rust only has one native marker (`None`), which maps to [`Absence::Undefined`].
/// [`Absence::Null`] is produced by data formats with an explicit null, such as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Absence {
    /// An explicit null value.
    Null,
    /// A value that was never provided.
    Undefined,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absence::Null => f.write_str("null"),
            Absence::Undefined => f.write_str("undefined"),
        }
    }
}

/// Which rule classified a value as empty-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyReason {
    /// The value is absent.
    Absent(Absence),
    /// The value is text, a sequence or a mapping with nothing in it.
    ZeroLength,
    /// The value is text made only of whitespace.
    Whitespace,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::Absent(absence) => write!(f, "value is {}", absence),
            EmptyReason::ZeroLength => f.write_str("value has zero length"),
            EmptyReason::Whitespace => f.write_str("value is only whitespace"),
        }
    }
}

/// A borrowed, shape-only view of a value.
///
/// # Example
///
/// ```rust
/// use emptylike::{Absence, Candidate, EmptyReason};
///
/// assert_eq!(Candidate::Absent(Absence::Null).classify(true), Some(EmptyReason::Absent(Absence::Null)));
/// assert_eq!(Candidate::Text("  ").classify(true), Some(EmptyReason::Whitespace));
/// assert_eq!(Candidate::Text("  ").classify(false), None);
/// assert_eq!(Candidate::Mapping { keys: 1 }.classify(true), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate<'a> {
    /// No value.
    Absent(Absence),
    /// A string slice.
    Text(&'a str),
    /// A collection of `len` elements.
    Sequence {
        /// Number of elements.
        len: usize,
    },
    /// A key/value collection with `keys` entries.
    Mapping {
        /// Number of own keys.
        keys: usize,
    },
    /// A value with no notion of length.
    Scalar,
}

impl<'a> Candidate<'a> {
    /// Apply the empty-like rules in order and report the first one that matches.
    ///
    /// 1. absent
    /// 2. zero-length text, sequence or mapping
    /// 3. whitespace-only text, when `trim_whitespace` is set
    pub fn classify(self, trim_whitespace: bool) -> Option<EmptyReason> {
        let reason = match self {
            Candidate::Absent(absence) => Some(EmptyReason::Absent(absence)),
            Candidate::Text(text) if text.is_empty() => Some(EmptyReason::ZeroLength),
            Candidate::Sequence { len: 0 } | Candidate::Mapping { keys: 0 } => {
                Some(EmptyReason::ZeroLength)
            }
            Candidate::Text(text) if trim_whitespace && is_blank(text) => {
                Some(EmptyReason::Whitespace)
            }
            _ => None,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            kind = self.kind(),
            trim_whitespace,
            reason = ?reason,
            "classified candidate"
        );

        reason
    }

    /// Whether any empty-like rule matches.
    #[inline]
    pub fn is_empty_like(self, trim_whitespace: bool) -> bool {
        self.classify(trim_whitespace).is_some()
    }

    /// Short lowercase name of the shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Candidate::Absent(_) => "absent",
            Candidate::Text(_) => "text",
            Candidate::Sequence { .. } => "sequence",
            Candidate::Mapping { .. } => "mapping",
            Candidate::Scalar => "scalar",
        }
    }
}

/// ECMAScript trims Unicode `White_Space` minus NEL, plus the byte order mark.
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_blank(text: &str) -> bool {
    text.chars().all(is_trimmable)
}

/// Conversion of a value into its [`Candidate`] shape.
///
/// # Example
///
/// ```rust
/// use emptylike::{AsCandidate, Candidate};
///
/// struct Tags(Vec<String>);
///
/// impl AsCandidate for Tags {
///     fn as_candidate(&self) -> Candidate<'_> {
///         self.0.as_candidate()
///     }
/// }
///
/// assert!(emptylike::is_empty_like(&Tags(vec![]), true));
/// ```
pub trait AsCandidate {
    /// View this value as a candidate.
    fn as_candidate(&self) -> Candidate<'_>;
}

impl AsCandidate for Candidate<'_> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        *self
    }
}

impl AsCandidate for Absence {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Absent(*self)
    }
}

impl<T: AsCandidate> AsCandidate for Option<T> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        match self {
            Some(value) => value.as_candidate(),
            None => Candidate::Absent(Absence::Undefined),
        }
    }
}

impl AsCandidate for str {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Text(self)
    }
}

impl AsCandidate for String {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Text(self)
    }
}

impl AsCandidate for Cow<'_, str> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Text(self)
    }
}

impl<T> AsCandidate for [T] {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Sequence { len: self.len() }
    }
}

impl<T, const N: usize> AsCandidate for [T; N] {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Sequence { len: N }
    }
}

// Collections that expose `len()` directly
macro_rules! impl_sequence_candidate {
    ($($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> AsCandidate for $ty<$($param),+> {
                #[inline]
                fn as_candidate(&self) -> Candidate<'_> {
                    Candidate::Sequence { len: self.len() }
                }
            }
        )+
    };
}

impl_sequence_candidate!(Vec<T>, VecDeque<T>, BTreeSet<T>);

impl<T, S> AsCandidate for HashSet<T, S> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Sequence { len: self.len() }
    }
}

impl<K, V, S> AsCandidate for HashMap<K, V, S> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Mapping { keys: self.len() }
    }
}

impl<K, V> AsCandidate for BTreeMap<K, V> {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        Candidate::Mapping { keys: self.len() }
    }
}

macro_rules! impl_scalar_candidate {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsCandidate for $ty {
                #[inline]
                fn as_candidate(&self) -> Candidate<'_> {
                    Candidate::Scalar
                }
            }
        )+
    };
}

impl_scalar_candidate!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

macro_rules! impl_delegating_candidate {
    ($($ty:ident),+) => {
        $(
            impl<T: AsCandidate + ?Sized> AsCandidate for $ty<T> {
                #[inline]
                fn as_candidate(&self) -> Candidate<'_> {
                    (**self).as_candidate()
                }
            }
        )+
    };
}

impl_delegating_candidate!(Box, Rc, Arc);

impl<T: AsCandidate + ?Sized> AsCandidate for &T {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        (**self).as_candidate()
    }
}

impl<T: AsCandidate + ?Sized> AsCandidate for &mut T {
    #[inline]
    fn as_candidate(&self) -> Candidate<'_> {
        (**self).as_candidate()
    }
}
