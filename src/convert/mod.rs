//! Conversion helpers between [`Outcome`], core `Result`, and `Option`.
//!
//! These let an `Outcome`-based module sit next to code that speaks `Result`
//! without rewriting either side.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let outcome = result_to_outcome(Ok::<i32, &str>(42));
//! assert!(outcome.is_ok());
//! assert_eq!(outcome_to_result(outcome), Ok(42));
//! ```

use crate::outcome::core::Outcome;

/// Converts a `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome(Err::<i32, &str>("failed")), Outcome::failure("failed"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` into a `Result`.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Keeps the success value and drops any failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_option;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_option(Outcome::<i32, &str>::success(1)), Some(1));
/// assert_eq!(outcome_to_option(Outcome::<i32, &str>::failure("gone")), None);
/// ```
#[inline]
pub fn outcome_to_option<T, E>(outcome: Outcome<T, E>) -> Option<T> {
    outcome.ok()
}
