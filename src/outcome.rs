/// Represents the outcome of a computation that can fail.
///
/// `Outcome` is a two-armed disjoint union: a computation either failed with
/// a diagnostic of type `E` or succeeded with a value of type `T`. Exactly
/// one arm is ever populated, and an `Outcome` is never mutated after
/// construction.
///
/// The name avoids shadowing [`std::result::Result`]; lossless conversions
/// between the two exist in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<E, T> {
    /// The computation failed, carrying a diagnostic describing why.
    Failure(E),
    /// The computation succeeded, carrying the produced value.
    Success(T),
}

impl<E, T> Outcome<E, T> {
    /// Transforms the success value, leaving a failure untouched.
    ///
    /// If `self` is `Success(v)`, returns `Success(f(v))`. If `self` is
    /// `Failure(e)`, returns `Failure(e)` unchanged and `f` is never invoked.
    /// The diagnostic type is passed through without conversion.
    ///
    /// # Parameters
    /// - `f`: Function applied to the success value, invoked exactly once on
    ///   success and zero times on failure.
    ///
    /// # Returns
    /// An `Outcome` with the success arm transformed.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Outcome;
    ///
    /// let doubled = Outcome::<String, f64>::Success(21.0).map(|v| v * 2.0);
    /// assert_eq!(doubled, Outcome::Success(42.0));
    ///
    /// let failed = Outcome::<String, f64>::Failure("bad input".to_string());
    /// assert_eq!(failed.map(|v| v * 2.0),
    ///            Outcome::Failure("bad input".to_string()));
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<E, U>
        where F: FnOnce(T) -> U
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
    /// Chains a dependent computation, short-circuiting on failure.
    ///
    /// If `self` is `Success(v)`, returns `f(v)` directly, so the chained
    /// computation may fail or succeed on its own. If `self` is `Failure(e)`,
    /// returns `Failure` immediately without invoking `f`; the diagnostic is
    /// embedded into `E2` via [`From`]. In a chain of `flat_map` calls the
    /// first failure therefore propagates to the end with every later step
    /// skipped. Chaining is strict and left-to-right: each step fully
    /// evaluates before the next is attempted, and nothing is retried.
    ///
    /// # Parameters
    /// - `f`: Function producing the next `Outcome`, invoked exactly once on
    ///   success and zero times on failure.
    ///
    /// # Returns
    /// The chained `Outcome`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Outcome;
    ///
    /// fn reciprocal(v: f64) -> Outcome<String, f64> {
    ///     if v == 0.0 {
    ///         return Outcome::Failure("cannot invert zero".to_string());
    ///     }
    ///     Outcome::Success(1.0 / v)
    /// }
    ///
    /// let inverted = Outcome::<String, f64>::Success(4.0).flat_map(reciprocal);
    /// assert_eq!(inverted, Outcome::Success(0.25));
    ///
    /// let chained = Outcome::<String, f64>::Success(0.0).flat_map(reciprocal)
    ///                                                   .flat_map(reciprocal);
    /// assert_eq!(chained, Outcome::Failure("cannot invert zero".to_string()));
    /// ```
    pub fn flat_map<E2, U, F>(self, f: F) -> Outcome<E2, U>
        where E2: From<E>,
              F: FnOnce(T) -> Outcome<E2, U>
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(E2::from(error)),
        }
    }
    /// Eliminates the `Outcome` by handling both arms.
    ///
    /// Applies exactly one of the two functions, depending on the populated
    /// variant, and returns its result. This is the canonical way to turn an
    /// `Outcome` into a final externally visible value.
    ///
    /// # Parameters
    /// - `on_failure`: Invoked with the diagnostic if `self` is `Failure`.
    /// - `on_success`: Invoked with the value if `self` is `Success`.
    ///
    /// # Returns
    /// The result of whichever function was invoked.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Outcome;
    ///
    /// let outcome = Outcome::<String, f64>::Success(2.0);
    /// let rendered = outcome.fold(|error| format!("error: {error}"),
    ///                             |value| format!("result: {value}"));
    ///
    /// assert_eq!(rendered, "result: 2");
    /// ```
    pub fn fold<C, D, S>(self, on_failure: D, on_success: S) -> C
        where D: FnOnce(E) -> C,
              S: FnOnce(T) -> C
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
    /// Returns `true` if the outcome is a `Success`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Outcome;
    ///
    /// assert!(Outcome::<String, f64>::Success(1.0).is_success());
    /// assert!(!Outcome::<String, f64>::Failure("nope".to_string()).is_success());
    /// ```
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
    /// Returns `true` if the outcome is a `Failure`.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Outcome;
    ///
    /// assert!(Outcome::<String, f64>::Failure("nope".to_string()).is_failure());
    /// ```
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
    /// Extracts the success value, discarding a failure.
    ///
    /// # Returns
    /// `Some(value)` if `self` is `Success`, `None` otherwise.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Outcome;
    ///
    /// assert_eq!(Outcome::<String, f64>::Success(3.0).success(), Some(3.0));
    /// assert_eq!(Outcome::<String, f64>::Failure("nope".to_string()).success(), None);
    /// ```
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
    /// Extracts the failure diagnostic, discarding a success.
    ///
    /// # Returns
    /// `Some(diagnostic)` if `self` is `Failure`, `None` otherwise.
    ///
    /// # Example
    /// ```
    /// use exprcalc::Outcome;
    ///
    /// let failed = Outcome::<String, f64>::Failure("nope".to_string());
    /// assert_eq!(failed.failure(), Some("nope".to_string()));
    /// ```
    #[must_use]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
