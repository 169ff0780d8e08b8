use core::fmt::{self, Debug, Display, Write};

use crate::types::alloc_type::String;

/// Which side of an [`Outcome`](crate::Outcome) the caller asked for but did not get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnwrapMismatch {
    /// A success value was requested from a `Failure`.
    ExpectedSuccess,
    /// A failure value was requested from a `Success`.
    ExpectedFailure,
}

impl UnwrapMismatch {
    /// Fixed context used by `unwrap` / `unwrap_err` when the caller supplies none.
    #[must_use]
    #[inline]
    pub const fn default_context(self) -> &'static str {
        match self {
            Self::ExpectedSuccess => "Failed to unwrap Ok",
            Self::ExpectedFailure => "Failed to unwrap Err",
        }
    }
}

/// Error produced when an outcome is unwrapped on the wrong variant.
///
/// The message is always `"{context}: {payload:?}"`, where `payload` is the value
/// held by the opposite variant. `unwrap` and `unwrap_err` use the fixed contexts
/// from [`UnwrapMismatch::default_context`], while the `expect` family uses the
/// caller's message.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, UnwrapMismatch};
///
/// let err = Outcome::<i32, &str>::failure("boom").try_unwrap().unwrap_err();
/// assert_eq!(err.kind(), UnwrapMismatch::ExpectedSuccess);
/// assert_eq!(err.to_string(), "Failed to unwrap Ok: \"boom\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapError {
    kind: UnwrapMismatch,
    message: String,
}

impl UnwrapError {
    /// Builds an error from a context string and the opposite-variant payload.
    pub fn new<P: Debug + ?Sized>(kind: UnwrapMismatch, context: &str, payload: &P) -> Self {
        let mut message = String::new();
        // Writing into a String cannot fail.
        let _ = write!(message, "{context}: {payload:?}");
        Self { kind, message }
    }

    /// Builds an error using the fixed context for `kind`.
    pub fn with_default_context<P: Debug + ?Sized>(kind: UnwrapMismatch, payload: &P) -> Self {
        Self::new(kind, kind.default_context(), payload)
    }

    #[must_use]
    #[inline]
    pub fn kind(&self) -> UnwrapMismatch {
        self.kind
    }

    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Logs the mismatch (with the `tracing` feature) and panics with its message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::error!(kind = ?self.kind, message = %self.message, "outcome unwrap mismatch");
        panic!("{}", self.message)
    }
}

impl Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for UnwrapError {}
