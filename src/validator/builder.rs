use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Display;

use crate::validator::constraints::Constraints;
use crate::validator::context::Rule;
use crate::validator::nested::{ForEachRule, ForEachValueRule, NestedRule};
use crate::validator::rule::{identity, ConditionalRule, FieldRule, IfPresent, Required};
use crate::validator::{ConstraintGroup, Validator};
use crate::violation::ToArg;

/// Transient builder for a [`Validator`].
///
/// Rules are evaluated in the order they are declared here, and that order is the
/// order violations are reported in, nested children included. The builder is
/// consumed by [`build`](Self::build); the resulting validator has no mutators.
///
/// # Examples
///
/// ```
/// use rule_rail::message::ViolationMessage;
/// use rule_rail::validator::{ConstraintGroup, Validator};
///
/// const NOT_BLANK: ViolationMessage = ViolationMessage::new("charSequence.notBlank", "\"{0}\" must not be blank");
/// const UPDATE: ConstraintGroup = ConstraintGroup::new("UPDATE");
///
/// struct Account {
///     id: Option<u64>,
///     name: String,
/// }
///
/// let validator = Validator::<Account>::builder()
///     .constraint("name", |a| &a.name, |c| c.predicate(|s| !s.trim().is_empty(), NOT_BLANK))
///     .constraint_on_group(UPDATE, |b| b.constraint("id", |a| &a.id, |c| c.not_null()))
///     .build();
///
/// let draft = Account { id: None, name: "ops".into() };
/// assert!(validator.validate(&draft).is_valid());
/// assert_eq!(validator.validate_with_group(&draft, &UPDATE).field_names(), vec!["id"]);
/// ```
pub struct ValidatorBuilder<T: ?Sized> {
    rules: Vec<Box<dyn Rule<T>>>,
    fail_fast: bool,
    prefix: Cow<'static, str>,
}

impl<T: ?Sized + 'static> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> ValidatorBuilder<T> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fail_fast: false,
            prefix: Cow::Borrowed(""),
        }
    }

    /// Declares a predicate chain on a field.
    pub fn constraint<F, E, C>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        extractor: E,
        constraints: C,
    ) -> Self
    where
        F: ?Sized + ToArg + 'static,
        E: for<'a> Fn(&'a T) -> &'a F + Send + Sync + 'static,
        C: FnOnce(Constraints<F>) -> Constraints<F>,
    {
        let predicates = constraints(Constraints::new()).into_predicates();
        self.rules
            .push(Box::new(FieldRule::new(name.into(), Required(extractor), predicates)));
        self
    }

    /// Declares a predicate chain on an optional field; `None` passes.
    ///
    /// Pair it with a `not_null` rule on the same field when absence is an error.
    pub fn constraint_if_present<F, E, C>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        extractor: E,
        constraints: C,
    ) -> Self
    where
        F: ?Sized + ToArg + 'static,
        E: for<'a> Fn(&'a T) -> Option<&'a F> + Send + Sync + 'static,
        C: FnOnce(Constraints<F>) -> Constraints<F>,
    {
        let predicates = constraints(Constraints::new()).into_predicates();
        self.rules
            .push(Box::new(FieldRule::new(name.into(), IfPresent(extractor), predicates)));
        self
    }

    /// Declares a cross-field rule whose predicates see the whole target.
    pub fn constraint_on_target<C>(mut self, name: impl Into<Cow<'static, str>>, constraints: C) -> Self
    where
        T: ToArg,
        C: FnOnce(Constraints<T>) -> Constraints<T>,
    {
        let predicates = constraints(Constraints::new()).into_predicates();
        self.rules.push(Box::new(FieldRule::new(
            name.into(),
            Required(identity::<T>),
            predicates,
        )));
        self
    }

    /// Validates a sub-object with `child`; its paths become `name.<field>`.
    pub fn nest<C, E>(mut self, name: impl Into<Cow<'static, str>>, extractor: E, child: Validator<C>) -> Self
    where
        C: ?Sized + 'static,
        E: for<'a> Fn(&'a T) -> &'a C + Send + Sync + 'static,
    {
        self.rules
            .push(Box::new(NestedRule::new(name.into(), Required(extractor), child)));
        self
    }

    /// Like [`nest`](Self::nest) for an optional sub-object; `None` is skipped silently.
    pub fn nest_if_present<C, E>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        extractor: E,
        child: Validator<C>,
    ) -> Self
    where
        C: ?Sized + 'static,
        E: for<'a> Fn(&'a T) -> Option<&'a C> + Send + Sync + 'static,
    {
        self.rules
            .push(Box::new(NestedRule::new(name.into(), IfPresent(extractor), child)));
        self
    }

    /// Validates every element of a collection in iteration order; paths become
    /// `name[index].<field>`.
    pub fn for_each<C, E, X>(mut self, name: impl Into<Cow<'static, str>>, extractor: X, child: Validator<E>) -> Self
    where
        C: ?Sized + 'static,
        E: 'static,
        X: for<'a> Fn(&'a T) -> &'a C + Send + Sync + 'static,
        for<'a> &'a C: IntoIterator<Item = &'a E>,
    {
        self.rules
            .push(Box::new(ForEachRule::new(name.into(), Required(extractor), child)));
        self
    }

    /// Like [`for_each`](Self::for_each) for an optional collection.
    pub fn for_each_if_present<C, E, X>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        extractor: X,
        child: Validator<E>,
    ) -> Self
    where
        C: ?Sized + 'static,
        E: 'static,
        X: for<'a> Fn(&'a T) -> Option<&'a C> + Send + Sync + 'static,
        for<'a> &'a C: IntoIterator<Item = &'a E>,
    {
        self.rules
            .push(Box::new(ForEachRule::new(name.into(), IfPresent(extractor), child)));
        self
    }

    /// Validates the values of a map; paths become `name[key].<field>`.
    pub fn for_each_value<M, K, V, X>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        extractor: X,
        child: Validator<V>,
    ) -> Self
    where
        M: ?Sized + 'static,
        K: Display + 'static,
        V: 'static,
        X: for<'a> Fn(&'a T) -> &'a M + Send + Sync + 'static,
        for<'a> &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    {
        self.rules
            .push(Box::new(ForEachValueRule::new(name.into(), Required(extractor), child)));
        self
    }

    /// Declares rules that only apply while `condition(target, group)` holds.
    ///
    /// `rules` receives an empty builder; its fail-fast flag and prefix are ignored.
    pub fn constraint_on_condition<P, B>(mut self, condition: P, rules: B) -> Self
    where
        P: Fn(&T, &ConstraintGroup) -> bool + Send + Sync + 'static,
        B: FnOnce(ValidatorBuilder<T>) -> ValidatorBuilder<T>,
    {
        let inner = rules(ValidatorBuilder::new());
        self.rules
            .push(Box::new(ConditionalRule::new(condition, inner.rules)));
        self
    }

    /// Declares rules that only apply when validating under `group`.
    pub fn constraint_on_group<B>(self, group: ConstraintGroup, rules: B) -> Self
    where
        B: FnOnce(ValidatorBuilder<T>) -> ValidatorBuilder<T>,
    {
        self.constraint_on_condition(move |_: &T, active: &ConstraintGroup| *active == group, rules)
    }

    /// Stops at the first violation, anywhere in the nested evaluation.
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Roots every reported path under `prefix`.
    #[must_use]
    pub fn prefixed(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn build(self) -> Validator<T> {
        Validator::from_parts(Arc::from(self.rules), self.fail_fast, self.prefix)
    }
}
