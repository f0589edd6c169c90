//! Validation type for accumulating empty-value errors
//!
//! `Validation` is like `Result`, but combining two failures keeps both errors
//! instead of stopping at the first. Checking several required fields with
//! [`require_not_empty_like`](crate::predicate::require_not_empty_like) and
//! joining the results with [`Validation::and`] reports every empty field at once.
//!
//! # Example
//!
//! ```
//! use emptylike::predicate::require_not_empty_like;
//!
//! let tags: Vec<String> = Vec::new();
//! let result = require_not_empty_like("name", "Ada")
//!     .and(require_not_empty_like("email", "   "))
//!     .and(require_not_empty_like("tags", &tags));
//!
//! let errors = result.into_result().unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].field, "email");
//! assert_eq!(errors[1].field, "tags");
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    ///
    /// ```
    /// use emptylike::Validation;
    ///
    /// let v = Validation::<i32, String>::success(42);
    /// assert!(v.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    ///
    /// ```
    /// use emptylike::Validation;
    ///
    /// let v = Validation::<i32, _>::failure("error".to_string());
    /// assert_eq!(v.into_result(), Err("error".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// ```
    /// use emptylike::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["name", "email"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the errors using `Semigroup::combine`.
    ///
    /// ```
    /// use emptylike::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["name"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["email"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["name", "email"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation; `f` only runs on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns a success with every value if all validations succeed, otherwise
    /// every error combined in order.
    ///
    /// ```
    /// use emptylike::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["name"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["email"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["name", "email"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failures: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failures = Some(match failures {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failures {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let v = Validation::<_, Vec<&str>>::success(42);
        assert!(v.is_success());
        assert!(!v.is_failure());
    }

    #[test]
    fn test_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert!(v.is_failure());
        assert!(!v.is_success());
    }

    #[test]
    fn test_from_result() {
        assert_eq!(Validation::from_result(Ok::<_, String>(42)), Validation::Success(42));
        assert_eq!(
            Validation::from_result(Err::<i32, _>("error".to_string())),
            Validation::Failure("error".to_string())
        );
    }

    #[test]
    fn test_map_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v.map(|x| x * 2), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_map_err_on_success() {
        let v = Validation::<_, Vec<&str>>::success(5);
        assert_eq!(v.map_err(|e| e.len()), Validation::Success(5));
    }

    #[test]
    fn test_and_both_success() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<_, Vec<&str>>::success("two");
        assert_eq!(v1.and(v2), Validation::Success((1, "two")));
    }

    #[test]
    fn test_and_one_failure() {
        let v1 = Validation::<i32, _>::failure(vec!["first"]);
        let v2 = Validation::<_, Vec<&str>>::success(2);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["first"]));

        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["second"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["second"]));
    }

    #[test]
    fn test_and_then_skips_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        let result = v.and_then(|_| -> Validation<i32, Vec<&str>> { panic!("must not run") });
        assert_eq!(result, Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_all_vec_empty() {
        let validations: Vec<Validation<i32, Vec<&str>>> = vec![];
        assert_eq!(Validation::all_vec(validations), Validation::Success(vec![]));
    }

    #[test]
    fn test_all_vec_all_success() {
        let validations = vec![
            Validation::<_, Vec<&str>>::success(1),
            Validation::success(2),
        ];
        assert_eq!(Validation::all_vec(validations), Validation::Success(vec![1, 2]));
    }
}
