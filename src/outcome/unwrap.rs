//! Extraction that fails when the outcome holds the other variant.
//!
//! The `try_*` methods report a mismatch as an [`UnwrapError`]. The plain methods
//! panic with the same message, so they should be reserved for cases where a
//! mismatch is a bug in the caller.
use core::fmt::Debug;

use crate::outcome::core::Outcome;
use crate::types::{UnwrapError, UnwrapMismatch};

impl<T, E> Outcome<T, E> {
    /// Returns the success value, or an error whose message is `"{msg}: {failure:?}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let err = Outcome::<i32, &str>::failure("emergency failure")
    ///     .try_expect("Testing expect")
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "Testing expect: \"emergency failure\"");
    /// ```
    pub fn try_expect(self, msg: &str) -> Result<T, UnwrapError>
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::new(
                UnwrapMismatch::ExpectedSuccess,
                msg,
                &error,
            )),
        }
    }

    /// Returns the failure value, or an error whose message is `"{msg}: {success:?}"`.
    pub fn try_expect_err(self, msg: &str) -> Result<E, UnwrapError>
    where
        T: Debug,
    {
        match self {
            Self::Success(value) => Err(UnwrapError::new(
                UnwrapMismatch::ExpectedFailure,
                msg,
                &value,
            )),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value, or an error reading `"Failed to unwrap Ok: {failure:?}"`.
    pub fn try_unwrap(self) -> Result<T, UnwrapError>
    where
        E: Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::with_default_context(
                UnwrapMismatch::ExpectedSuccess,
                &error,
            )),
        }
    }

    /// Returns the failure value, or an error reading `"Failed to unwrap Err: {success:?}"`.
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError>
    where
        T: Debug,
    {
        match self {
            Self::Success(value) => Err(UnwrapError::with_default_context(
                UnwrapMismatch::ExpectedFailure,
                &value,
            )),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on a `Failure` with the message `"{msg}: {failure:?}"`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<i32, &str>::failure("emergency failure").expect("Testing expect");
    /// ```
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self.try_expect(msg) {
            Ok(payload) => payload,
            Err(err) => err.raise(),
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics on a `Success` with the message `"{msg}: {success:?}"`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self.try_expect_err(msg) {
            Ok(payload) => payload,
            Err(err) => err.raise(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on a `Failure` with the message `"Failed to unwrap Ok: {failure:?}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<u32, &str>::success(2).unwrap(), 2);
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.try_unwrap() {
            Ok(payload) => payload,
            Err(err) => err.raise(),
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics on a `Success` with the message `"Failed to unwrap Err: {success:?}"`.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self.try_unwrap_err() {
            Ok(payload) => payload,
            Err(err) => err.raise(),
        }
    }
}
