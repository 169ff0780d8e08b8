use crate::outcome::core::Outcome;

impl<T, E> Outcome<T, E> {
    /// Emits a `tracing` debug event naming the variant, then returns the outcome unchanged.
    ///
    /// Without the `tracing` feature this is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let v = Outcome::<i32, &str>::success(1).trace("load_config");
    /// assert_eq!(v, Outcome::success(1));
    /// ```
    #[inline]
    pub fn trace(self, label: &str) -> Self {
        #[cfg(feature = "tracing")]
        {
            let variant = if self.is_ok() { "success" } else { "failure" };
            tracing::debug!(label, variant, "outcome observed");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = label;
        self
    }
}
