//! Control-flow macros for [`Outcome`](crate::Outcome).
//!
//! - [`macro@crate::try_outcome`] - Early-returns a `Failure` from the enclosing
//!   function, standing in for `?` which stable Rust only offers for core types.

/// Evaluates to the success value of an `Outcome`, or returns its `Failure`.
///
/// The enclosing function must return `Outcome<_, E>` with the same error type.
///
/// # Examples
///
/// ```
/// use outcome_rail::{try_outcome, Outcome};
///
/// fn checked_div(a: i32, b: i32) -> Outcome<i32, &'static str> {
///     if b == 0 {
///         Outcome::failure("divide by zero")
///     } else {
///         Outcome::success(a / b)
///     }
/// }
///
/// fn average(total: i32, count: i32) -> Outcome<i32, &'static str> {
///     let value = try_outcome!(checked_div(total, count));
///     Outcome::success(value)
/// }
///
/// assert_eq!(average(10, 2), Outcome::success(5));
/// assert_eq!(average(10, 0), Outcome::failure("divide by zero"));
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => return $crate::Outcome::Failure(error),
        }
    };
}
