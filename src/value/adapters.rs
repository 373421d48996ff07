//! Adapter types returned by the [`ValueValidator`] combinator methods.

use alloc::format;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::validated::Validated;
use crate::value::ValueValidator;
use crate::violation::Violations;

/// Pre-transform, see [`ValueValidator::compose`].
#[derive(Clone)]
pub struct Compose<V, F, X> {
    inner: V,
    f: F,
    _input: PhantomData<fn(X)>,
}

impl<V, F, X> Compose<V, F, X> {
    pub(crate) fn new(inner: V, f: F) -> Self {
        Self {
            inner,
            f,
            _input: PhantomData,
        }
    }
}

impl<V, F, X> ValueValidator for Compose<V, F, X>
where
    V: ValueValidator,
    F: Fn(X) -> V::Source,
{
    type Source = X;
    type Target = V::Target;

    #[inline]
    fn validate(&self, source: X) -> Validated<V::Target> {
        self.inner.validate((self.f)(source))
    }
}

/// Fallible pre-transform, see [`ValueValidator::compose_validated`].
#[derive(Clone)]
pub struct ComposeValidated<V, F, X> {
    inner: V,
    f: F,
    _input: PhantomData<fn(X)>,
}

impl<V, F, X> ComposeValidated<V, F, X> {
    pub(crate) fn new(inner: V, f: F) -> Self {
        Self {
            inner,
            f,
            _input: PhantomData,
        }
    }
}

impl<V, F, X> ValueValidator for ComposeValidated<V, F, X>
where
    V: ValueValidator,
    F: Fn(X) -> Validated<V::Source>,
{
    type Source = X;
    type Target = V::Target;

    fn validate(&self, source: X) -> Validated<V::Target> {
        (self.f)(source).and_then(|converted| self.inner.validate(converted))
    }
}

/// Post-transform, see [`ValueValidator::and_then`].
#[derive(Clone)]
pub struct AndThen<V, F> {
    inner: V,
    f: F,
}

impl<V, F> AndThen<V, F> {
    pub(crate) fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }
}

impl<V, F, U> ValueValidator for AndThen<V, F>
where
    V: ValueValidator,
    F: Fn(V::Target) -> U,
{
    type Source = V::Source;
    type Target = U;

    #[inline]
    fn validate(&self, source: V::Source) -> Validated<U> {
        self.inner.validate(source).map(&self.f)
    }
}

/// Validator chain, see [`ValueValidator::then`].
#[derive(Clone)]
pub struct Then<V, W> {
    first: V,
    next: W,
}

impl<V, W> Then<V, W> {
    pub(crate) fn new(first: V, next: W) -> Self {
        Self { first, next }
    }
}

impl<V, W> ValueValidator for Then<V, W>
where
    V: ValueValidator,
    W: ValueValidator<Source = V::Target>,
{
    type Source = V::Source;
    type Target = W::Target;

    fn validate(&self, source: V::Source) -> Validated<W::Target> {
        self.first
            .validate(source)
            .and_then(|value| self.next.validate(value))
    }
}

/// Element-wise validation of a `Vec`, see [`ValueValidator::lift_vec`].
#[derive(Clone)]
pub struct LiftVec<V> {
    inner: V,
    name: &'static str,
}

impl<V> LiftVec<V> {
    pub(crate) fn new(inner: V, name: &'static str) -> Self {
        Self { inner, name }
    }
}

impl<V: ValueValidator> ValueValidator for LiftVec<V> {
    type Source = Vec<V::Source>;
    type Target = Vec<V::Target>;

    fn validate(&self, source: Vec<V::Source>) -> Validated<Vec<V::Target>> {
        let mut values = Vec::with_capacity(source.len());
        let mut violations = Violations::new();
        for (index, element) in source.into_iter().enumerate() {
            match self.inner.validate(element) {
                Validated::Valid(value) => values.push(value),
                Validated::Invalid(errors) => {
                    let path = format!("{}[{index}]", self.name);
                    violations.extend(errors.with_prefix(&path));
                },
            }
        }
        Validated::from_violations(violations, || values)
    }
}

/// Validation of an optional value, see [`ValueValidator::lift_option`].
#[derive(Clone)]
pub struct LiftOption<V> {
    inner: V,
}

impl<V> LiftOption<V> {
    pub(crate) fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: ValueValidator> ValueValidator for LiftOption<V> {
    type Source = Option<V::Source>;
    type Target = Option<V::Target>;

    fn validate(&self, source: Option<V::Source>) -> Validated<Option<V::Target>> {
        match source {
            Some(value) => self.inner.validate(value).map(Some),
            None => Validated::Valid(None),
        }
    }
}
