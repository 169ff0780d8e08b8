/// A value that is either a [`Success`](Outcome::Success) or a [`Failure`](Outcome::Failure).
///
/// `Outcome<T, E>` carries recoverable failure as an ordinary value. Each instance is
/// created in its final variant and never changes: every combinator consumes the
/// receiver and hands back a new outcome.
///
/// Equality, ordering and hashing are structural, so two outcomes compare equal
/// exactly when they hold the same variant and equal payloads.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_ok());
///
/// let err = Outcome::<i32, &str>::failure("boom");
/// assert!(err.is_err());
/// assert_ne!(ok, err);
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a successful value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let v = Outcome::<i32, &str>::success(7);
    /// assert_eq!(v.ok(), Some(7));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let v = Outcome::<i32, &str>::failure("missing");
    /// assert_eq!(v.err(), Some("missing"));
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome is a `Success`.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome is a `Success` and the value satisfies `predicate`.
    ///
    /// `predicate` is not called on a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<u32, &str>::success(2).is_ok_and(|x| x > 1));
    /// assert!(!Outcome::<u32, &str>::success(0).is_ok_and(|x| x > 1));
    /// assert!(!Outcome::<u32, &str>::failure("hey").is_ok_and(|x| x > 1));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if the outcome is a `Failure` and the error satisfies `predicate`.
    ///
    /// `predicate` is not called on a `Success`.
    #[must_use]
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// Converts into `Option<T>`, discarding any failure value.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding any success value.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the payload, producing `Outcome<&T, &E>`.
    ///
    /// Useful for running predicates or extraction without giving up the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let v = Outcome::<String, ()>::success("hello".to_string());
    /// assert!(v.as_ref().is_ok_and(|s| s.len() == 5));
    /// assert!(v.is_ok());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `f` with a reference to the success value and returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let v = Outcome::<i32, &str>::success(4).inspect(|x| seen.push(*x));
    /// assert_eq!(v, Outcome::success(4));
    /// assert_eq!(seen, vec![4]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the failure value and returns the outcome unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success value, or `default` on a `Failure`.
    ///
    /// `default` is evaluated by the caller before the call; prefer
    /// [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let count = |s: &str| s.len();
    /// assert_eq!(Outcome::<usize, &str>::success(2).unwrap_or_else(count), 2);
    /// assert_eq!(Outcome::<usize, &str>::failure("foo").unwrap_or_else(count), 3);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => recover(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Returns `other` if the outcome is a `Success`, otherwise propagates the `Failure`.
    ///
    /// `other` is evaluated eagerly by the caller even when it ends up discarded.
    /// Use [`and_then`](Self::and_then) to defer that work.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let x = Outcome::<u32, &str>::success(2);
    /// let y = Outcome::<&str, &str>::failure("late error");
    /// assert_eq!(x.and(y), Outcome::failure("late error"));
    ///
    /// let x = Outcome::<u32, &str>::failure("early error");
    /// let y = Outcome::<&str, &str>::success("foo");
    /// assert_eq!(x.and(y), Outcome::failure("early error"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `op` with the success value and returns its outcome as-is.
    ///
    /// A `Failure` is returned without calling `op`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(x: u32) -> Outcome<u32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(halve).and_then(halve), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).and_then(halve).and_then(halve), Outcome::failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `other` if the outcome is a `Failure`, otherwise keeps the `Success`.
    ///
    /// `other` is evaluated eagerly by the caller. Use [`or_else`](Self::or_else)
    /// to defer that work.
    #[inline]
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Calls `op` with the failure value and returns its outcome as-is.
    ///
    /// A `Success` is returned without calling `op`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn square(x: u32) -> Outcome<u32, u32> { Outcome::success(x * x) }
    /// fn err(x: u32) -> Outcome<u32, u32> { Outcome::failure(x) }
    ///
    /// assert_eq!(Outcome::failure(3).or_else(square).or_else(err), Outcome::success(9));
    /// assert_eq!(Outcome::<u32, u32>::failure(3).or_else(err).or_else(err), Outcome::failure(3));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Converts into a core `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a core `Result`, keeping its variant and payload.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
