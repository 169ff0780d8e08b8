use crate::outcome::core::Outcome;

/// Conversion into an [`Outcome`] that keeps the variant and payload.
pub trait IntoOutcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

/// Lifts an `Option` into an [`Outcome`] by naming the failure for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OptionOutcomeExt;
/// use outcome_rail::Outcome;
///
/// assert_eq!(Some(3).ok_or_failure("none"), Outcome::success(3));
/// assert_eq!(None::<i32>.ok_or_else_failure(|| "none"), Outcome::failure("none"));
/// ```
pub trait OptionOutcomeExt<T> {
    /// `error` is evaluated eagerly, like [`Outcome::or`].
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E>;

    fn ok_or_else_failure<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    #[inline]
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error),
        }
    }

    #[inline]
    fn ok_or_else_failure<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error()),
        }
    }
}
