//! Extension traits that lift `Result` and `Option` into [`Validated`].
//!
//! Conversions that may fail (parsing, lookups) usually return a `Result`. These
//! extensions turn the failure into a [`Violation`] so it accumulates with every
//! other violation instead of short-circuiting.
//!
//! # Examples
//!
//! ```
//! use rule_rail::traits::ResultExt;
//!
//! let port = "80a".parse::<u16>().into_validated("port");
//! assert_eq!(port.errors().field_names(), vec!["port"]);
//! assert_eq!(
//!     port.errors()[0].message(),
//!     "\"port\" could not be converted: invalid digit found in string"
//! );
//! ```

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt::Display;

use crate::message::ViolationMessage;
use crate::validated::Validated;
use crate::violation::{Arg, ArgVec, Violation};

/// Lifts a `Result` into a [`Validated`].
pub trait ResultExt<T, E> {
    /// Maps `Err(e)` to a [`ViolationMessage::CONVERSION`] violation on `name`.
    ///
    /// The error's `Display` text becomes both the message argument and the
    /// violated value.
    fn into_validated(self, name: impl Into<String>) -> Validated<T>
    where
        E: Display;

    /// Like [`into_validated`](Self::into_validated) with a caller-chosen message.
    fn into_validated_as(self, name: impl Into<String>, message: &ViolationMessage) -> Validated<T>
    where
        E: Display;

    /// Maps `Err(e)` to the violation built by `f`; `f` only runs on failure.
    fn into_validated_with<F>(self, f: F) -> Validated<T>
    where
        F: FnOnce(E) -> Violation;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_validated(self, name: impl Into<String>) -> Validated<T>
    where
        E: Display,
    {
        self.into_validated_as(name, &ViolationMessage::CONVERSION)
    }

    fn into_validated_as(self, name: impl Into<String>, message: &ViolationMessage) -> Validated<T>
    where
        E: Display,
    {
        match self {
            Ok(value) => Validated::Valid(value),
            Err(error) => {
                let text = Arg::Str(Cow::Owned(error.to_string()));
                let mut args = ArgVec::new();
                args.push(text.clone());
                Validated::invalid_one(Violation::new(name, message, args, text))
            },
        }
    }

    #[inline]
    fn into_validated_with<F>(self, f: F) -> Validated<T>
    where
        F: FnOnce(E) -> Violation,
    {
        match self {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::invalid_one(f(error)),
        }
    }
}

/// Lifts an `Option` into a [`Validated`].
///
/// # Examples
///
/// ```
/// use rule_rail::traits::OptionExt;
///
/// let missing: Option<u32> = None;
/// let checked = missing.required("id");
/// assert_eq!(checked.errors()[0].message(), "\"id\" must not be null");
/// assert_eq!(Some(7).required("id").into_value(), Some(7));
/// ```
pub trait OptionExt<T> {
    /// `None` becomes a [`ViolationMessage::NOT_NULL`] violation on `name`.
    fn required(self, name: impl Into<String>) -> Validated<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self, name: impl Into<String>) -> Validated<T> {
        match self {
            Some(value) => Validated::Valid(value),
            None => Validated::invalid_one(Violation::of(name, &ViolationMessage::NOT_NULL, Arg::Null)),
        }
    }
}
