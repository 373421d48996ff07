use crate::violation::{Violation, Violations};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of any validation: the validated value, or every violation found.
///
/// `Validated<T>` is the currency exchanged between all combinators. Unlike
/// `Result`, combining several `Validated`s (see [`Apply`](crate::validated::Apply))
/// accumulates the violations of every invalid input instead of stopping at the
/// first one.
///
/// # Serde Support
///
/// `Validated` implements `Serialize` and `Deserialize` when `T` does and the
/// `serde` feature is enabled.
///
/// # Examples
///
/// ```
/// use rule_rail::validated::Validated;
///
/// let valid = Validated::valid(42);
/// assert!(valid.is_valid());
/// assert_eq!(*valid.value(), 42);
///
/// let described = valid.fold(|errors| format!("{} errors", errors.len()), |v| format!("got {v}"));
/// assert_eq!(described, "got 42");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Debug)]
pub enum Validated<T> {
    Valid(T),
    Invalid(Violations),
}

impl<T> Validated<T> {
    /// Creates a valid value.
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid result from a collection of violations.
    ///
    /// An empty collection is still reported as `Invalid`; the engine itself never
    /// produces one.
    #[inline]
    pub fn invalid(violations: Violations) -> Self {
        Self::Invalid(violations)
    }

    /// Creates an invalid result holding a single violation.
    #[inline]
    pub fn invalid_one(violation: Violation) -> Self {
        Self::Invalid(Violations::from(violation))
    }

    /// Turns a collection into `Valid(value)` when empty, `Invalid` otherwise.
    ///
    /// `value` is only invoked on the valid path.
    #[inline]
    pub fn from_violations<F>(violations: Violations, value: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if violations.is_valid() {
            Self::Valid(value())
        } else {
            Self::Invalid(violations)
        }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the validated value.
    ///
    /// # Panics
    ///
    /// Panics when called on `Invalid`. Accessing the wrong branch is a
    /// programming error; use [`as_value`](Self::as_value) or
    /// [`fold`](Self::fold) when the branch is not known.
    #[track_caller]
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(violations) => panic!(
                "called `Validated::value()` on an `Invalid` value with {} violation(s)",
                violations.len()
            ),
        }
    }

    /// Returns the violations.
    ///
    /// # Panics
    ///
    /// Panics when called on `Valid`.
    #[track_caller]
    #[inline]
    pub fn errors(&self) -> &Violations {
        match self {
            Self::Valid(_) => panic!("called `Validated::errors()` on a `Valid` value"),
            Self::Invalid(violations) => violations,
        }
    }

    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    #[inline]
    pub fn as_errors(&self) -> Option<&Violations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    /// Extracts the value, if valid.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Extracts the violations, if invalid.
    #[inline]
    pub fn into_errors(self) -> Option<Violations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    /// Maps both branches to one type.
    ///
    /// The invalid handler comes first.
    #[inline]
    pub fn fold<U, I, V>(self, on_invalid: I, on_valid: V) -> U
    where
        I: FnOnce(Violations) -> U,
        V: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(violations) => on_invalid(violations),
        }
    }

    /// Maps the valid value; violations pass through unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validated<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Invalid(violations) => Validated::Invalid(violations),
        }
    }

    /// Maps the violations; a valid value passes through unchanged.
    #[inline]
    pub fn map_errors<F>(self, f: F) -> Validated<T>
    where
        F: FnOnce(Violations) -> Violations,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(violations) => Self::Invalid(f(violations)),
        }
    }

    /// Chains a dependent validation step.
    ///
    /// Monadic: `f` only runs on a valid value, so its violations are never reported
    /// alongside this one's. Use [`Apply`](crate::validated::Apply) to accumulate
    /// independent steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::message::ViolationMessage;
    /// use rule_rail::validated::Validated;
    /// use rule_rail::violation::{Arg, Violation};
    ///
    /// const EVEN: ViolationMessage = ViolationMessage::new("even", "\"{0}\" must be even");
    ///
    /// fn even(n: i32) -> Validated<i32> {
    ///     if n % 2 == 0 {
    ///         Validated::valid(n)
    ///     } else {
    ///         Validated::invalid_one(Violation::of("n", &EVEN, Arg::from(n)))
    ///     }
    /// }
    ///
    /// assert_eq!(Validated::valid(4).and_then(even).into_value(), Some(4));
    /// assert!(Validated::valid(3).and_then(even).is_invalid());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validated<U>
    where
        F: FnOnce(T) -> Validated<U>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(violations) => Validated::Invalid(violations),
        }
    }

    /// Calls `op` if invalid, otherwise returns the valid value.
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validated<T>
    where
        F: FnOnce(Violations) -> Validated<T>,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(violations) => op(violations),
        }
    }

    /// Combines two results into a tuple, accumulating all violations in order.
    #[inline]
    pub fn zip<U>(self, other: Validated<U>) -> Validated<(T, U)> {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Validated::Invalid(e), Validated::Valid(_)) => Validated::Invalid(e),
            (Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e),
            (Validated::Invalid(mut e1), Validated::Invalid(e2)) => {
                e1.extend(e2);
                Validated::Invalid(e1)
            },
        }
    }

    /// Runs `f` on the valid value by reference, then returns `self`.
    #[inline]
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Valid(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` on the violations by reference, then returns `self`.
    #[inline]
    pub fn peek_errors<F>(self, f: F) -> Self
    where
        F: FnOnce(&Violations),
    {
        if let Self::Invalid(violations) = &self {
            f(violations);
        }
        self
    }

    /// Converts into a `Result` carrying every violation on the error side.
    #[inline]
    pub fn into_result(self) -> Result<T, Violations> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(violations),
        }
    }

    /// Converts `Invalid` into a caller-chosen error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validated::Validated;
    /// use rule_rail::violation::Violations;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct BadRequest(usize);
    ///
    /// let invalid: Validated<i32> = Validated::invalid(Violations::new());
    /// assert_eq!(invalid.ok_or_else(|v| BadRequest(v.len())), Err(BadRequest(0)));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, mapper: F) -> Result<T, E>
    where
        F: FnOnce(Violations) -> E,
    {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(mapper(violations)),
        }
    }

    /// Returns the value or computes a fallback from the violations.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Violations) -> T,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(violations) => f(violations),
        }
    }

    /// Wraps a `Result` whose error side already carries violations.
    #[inline]
    pub fn from_result(result: Result<T, Violations>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(violations) => Self::Invalid(violations),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Validated<&T> {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(violations) => Validated::Invalid(violations.clone()),
        }
    }
}

impl<T> From<Validated<T>> for Result<T, Violations> {
    #[inline]
    fn from(validated: Validated<T>) -> Self {
        validated.into_result()
    }
}

impl<T> From<Result<T, Violations>> for Validated<T> {
    #[inline]
    fn from(result: Result<T, Violations>) -> Self {
        Validated::from_result(result)
    }
}

/// Collects results, accumulating every violation in iteration order.
///
/// # Examples
///
/// ```
/// use rule_rail::validated::Validated;
///
/// let all: Validated<Vec<i32>> = vec![Validated::valid(1), Validated::valid(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
/// ```
impl<T, C> FromIterator<Validated<T>> for Validated<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Validated<T>>>(iter: I) -> Self {
        let mut violations = Violations::new();
        let values: C = iter
            .into_iter()
            .filter_map(|item| match item {
                Validated::Valid(value) => Some(value),
                Validated::Invalid(errors) => {
                    violations.extend(errors);
                    None
                },
            })
            .collect();

        if violations.is_valid() {
            Validated::Valid(values)
        } else {
            Validated::Invalid(violations)
        }
    }
}
