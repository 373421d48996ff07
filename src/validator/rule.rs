use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::ControlFlow;

use crate::validator::constraints::Predicate;
use crate::validator::context::{Evaluation, Rule};
use crate::validator::ConstraintGroup;
use crate::violation::ToArg;

/// Pulls the value a rule applies to out of its target.
///
/// `None` means the value is absent and the rule is skipped.
pub(crate) trait Extract<T: ?Sized, F: ?Sized>: Send + Sync {
    fn extract<'a>(&self, target: &'a T) -> Option<&'a F>;
}

/// Extractor for a value that is always there.
pub(crate) struct Required<E>(pub(crate) E);

impl<T: ?Sized, F: ?Sized, E> Extract<T, F> for Required<E>
where
    E: for<'a> Fn(&'a T) -> &'a F + Send + Sync,
{
    #[inline]
    fn extract<'a>(&self, target: &'a T) -> Option<&'a F> {
        Some((self.0)(target))
    }
}

/// Extractor for an optional value; `None` skips the rule silently.
pub(crate) struct IfPresent<E>(pub(crate) E);

impl<T: ?Sized, F: ?Sized, E> Extract<T, F> for IfPresent<E>
where
    E: for<'a> Fn(&'a T) -> Option<&'a F> + Send + Sync,
{
    #[inline]
    fn extract<'a>(&self, target: &'a T) -> Option<&'a F> {
        (self.0)(target)
    }
}

#[inline]
pub(crate) fn identity<T: ?Sized>(target: &T) -> &T {
    target
}

/// A named field and the predicate chain checked against it.
pub(crate) struct FieldRule<F: ?Sized, X> {
    name: Cow<'static, str>,
    extractor: X,
    predicates: Vec<Predicate<F>>,
}

impl<F: ?Sized, X> FieldRule<F, X> {
    pub(crate) fn new(name: Cow<'static, str>, extractor: X, predicates: Vec<Predicate<F>>) -> Self {
        Self {
            name,
            extractor,
            predicates,
        }
    }
}

impl<T, F, X> Rule<T> for FieldRule<F, X>
where
    T: ?Sized,
    F: ?Sized + ToArg,
    X: Extract<T, F>,
{
    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> ControlFlow<()> {
        let Some(value) = self.extractor.extract(target) else {
            return ControlFlow::Continue(());
        };
        for predicate in &self.predicates {
            if !predicate.test(value) {
                let violation = predicate.violation(eval.field_path(&self.name), value);
                eval.report(violation)?;
            }
        }
        ControlFlow::Continue(())
    }
}

/// Rules that only apply when `condition(target, group)` holds.
///
/// The condition is evaluated on every call.
pub(crate) struct ConditionalRule<T: ?Sized, P> {
    condition: P,
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T: ?Sized, P> ConditionalRule<T, P> {
    pub(crate) fn new(condition: P, rules: Vec<Box<dyn Rule<T>>>) -> Self {
        Self { condition, rules }
    }
}

impl<T, P> Rule<T> for ConditionalRule<T, P>
where
    T: ?Sized,
    P: Fn(&T, &ConstraintGroup) -> bool + Send + Sync,
{
    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> ControlFlow<()> {
        if !(self.condition)(target, eval.group()) {
            return ControlFlow::Continue(());
        }
        for rule in &self.rules {
            rule.evaluate(target, eval)?;
        }
        ControlFlow::Continue(())
    }
}
