//! Validators that transform a source value into a validated target.
//!
//! A [`ValueValidator`] is a pure function `Source -> Validated<Target>`. Unlike a
//! [`Validator`](crate::validator::Validator), which checks an existing object, a
//! value validator may produce a different type: it is the building block used to
//! check constructor arguments before anything is constructed.
//!
//! # Key Components
//!
//! - [`ValueValidator`] - The trait, with adapter methods for composition
//! - [`from_fn`] / [`pass_through`] - Ad hoc and no-op validators
//! - Adapters in [`adapters`]: pre-transforms, post-transforms, chaining and lifting
//!   over `Vec` and `Option`
//!
//! # Examples
//!
//! ```
//! use rule_rail::message::ViolationMessage;
//! use rule_rail::traits::ResultExt;
//! use rule_rail::validated::Validated;
//! use rule_rail::value::{self, ValueValidator};
//! use rule_rail::violation::{Arg, Violation};
//!
//! const RANGE: ViolationMessage = ViolationMessage::new("numeric.range", "\"{0}\" must be between 0 and 150");
//!
//! let age = value::from_fn(|n: i64| {
//!     if (0..=150).contains(&n) {
//!         Validated::valid(n)
//!     } else {
//!         Validated::invalid_one(Violation::of("age", &RANGE, Arg::Int(n)))
//!     }
//! });
//!
//! // Parse first; a parse failure is a violation too.
//! let parsed = age.compose_validated(|raw: &str| raw.parse::<i64>().into_validated("age"));
//! assert_eq!(parsed.validate("42").into_value(), Some(42));
//! assert_eq!(parsed.validate("x").errors().field_names(), vec!["age"]);
//! assert_eq!(parsed.validate("200").errors()[0].message(), "\"age\" must be between 0 and 150");
//! ```

pub mod adapters;

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::marker::PhantomData;

pub use self::adapters::{AndThen, Compose, ComposeValidated, LiftOption, LiftVec, Then};

use crate::validated::Validated;

/// A pure `Source -> Validated<Target>` function.
///
/// Implementations must not keep state between calls; every call stands alone so a
/// validator can be shared across threads.
pub trait ValueValidator {
    type Source;
    type Target;

    fn validate(&self, source: Self::Source) -> Validated<Self::Target>;

    /// Converts the input with `f` before validating it.
    fn compose<X, F>(self, f: F) -> Compose<Self, F, X>
    where
        Self: Sized,
        F: Fn(X) -> Self::Source,
    {
        Compose::new(self, f)
    }

    /// Converts the input with a fallible `f` before validating it.
    ///
    /// An `Invalid` conversion is returned as is and this validator is not called.
    fn compose_validated<X, F>(self, f: F) -> ComposeValidated<Self, F, X>
    where
        Self: Sized,
        F: Fn(X) -> Validated<Self::Source>,
    {
        ComposeValidated::new(self, f)
    }

    /// Transforms a valid output with `f`; violations pass through untouched.
    fn and_then<U, F>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Target) -> U,
    {
        AndThen::new(self, f)
    }

    /// Feeds a valid output into `next`.
    fn then<W>(self, next: W) -> Then<Self, W>
    where
        Self: Sized,
        W: ValueValidator<Source = Self::Target>,
    {
        Then::new(self, next)
    }

    /// Validates every element of a `Vec`, reporting paths as `name[index]`.
    ///
    /// All elements are checked, even after a failure.
    fn lift_vec(self, name: &'static str) -> LiftVec<Self>
    where
        Self: Sized,
    {
        LiftVec::new(self, name)
    }

    /// Validates `Some` values; `None` is valid and stays `None`.
    fn lift_option(self) -> LiftOption<Self>
    where
        Self: Sized,
    {
        LiftOption::new(self)
    }

    /// Erases the validator type.
    fn boxed(self) -> BoxValueValidator<Self::Source, Self::Target>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased value validator.
pub type BoxValueValidator<S, T> = Box<dyn ValueValidator<Source = S, Target = T> + Send + Sync>;

impl<V: ValueValidator + ?Sized> ValueValidator for &V {
    type Source = V::Source;
    type Target = V::Target;

    #[inline]
    fn validate(&self, source: Self::Source) -> Validated<Self::Target> {
        (**self).validate(source)
    }
}

impl<V: ValueValidator + ?Sized> ValueValidator for Box<V> {
    type Source = V::Source;
    type Target = V::Target;

    #[inline]
    fn validate(&self, source: Self::Source) -> Validated<Self::Target> {
        (**self).validate(source)
    }
}

impl<V: ValueValidator + ?Sized> ValueValidator for Arc<V> {
    type Source = V::Source;
    type Target = V::Target;

    #[inline]
    fn validate(&self, source: Self::Source) -> Validated<Self::Target> {
        (**self).validate(source)
    }
}

/// Value validator backed by a closure.
pub struct FnValidator<S, T, F> {
    f: F,
    _marker: PhantomData<fn(S) -> T>,
}

impl<S, T, F: Clone> Clone for FnValidator<S, T, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, F> ValueValidator for FnValidator<S, T, F>
where
    F: Fn(S) -> Validated<T>,
{
    type Source = S;
    type Target = T;

    #[inline]
    fn validate(&self, source: S) -> Validated<T> {
        (self.f)(source)
    }
}

/// Wraps a closure as a [`ValueValidator`].
#[inline]
pub fn from_fn<S, T, F>(f: F) -> FnValidator<S, T, F>
where
    F: Fn(S) -> Validated<T>,
{
    FnValidator {
        f,
        _marker: PhantomData,
    }
}

/// Accepts every value unchanged.
pub struct PassThrough<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Clone for PassThrough<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PassThrough<T> {}

impl<T> Default for PassThrough<T> {
    fn default() -> Self {
        pass_through()
    }
}

impl<T> ValueValidator for PassThrough<T> {
    type Source = T;
    type Target = T;

    #[inline]
    fn validate(&self, source: T) -> Validated<T> {
        Validated::Valid(source)
    }
}

/// A validator with no constraints, for arguments that need none.
#[inline]
pub fn pass_through<T>() -> PassThrough<T> {
    PassThrough {
        _marker: PhantomData,
    }
}
