use alloc::borrow::Cow;
use core::fmt::Display;
use core::marker::PhantomData;
use core::ops::ControlFlow;

use crate::validator::context::{Evaluation, Rule};
use crate::validator::rule::Extract;
use crate::validator::Validator;

/// Validates a sub-object with its own validator, rooting paths at `name.`.
pub(crate) struct NestedRule<C: ?Sized, X> {
    name: Cow<'static, str>,
    extractor: X,
    child: Validator<C>,
}

impl<C: ?Sized, X> NestedRule<C, X> {
    pub(crate) fn new(name: Cow<'static, str>, extractor: X, child: Validator<C>) -> Self {
        Self {
            name,
            extractor,
            child,
        }
    }
}

impl<T, C, X> Rule<T> for NestedRule<C, X>
where
    T: ?Sized,
    C: ?Sized,
    X: Extract<T, C>,
{
    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> ControlFlow<()> {
        let Some(value) = self.extractor.extract(target) else {
            return ControlFlow::Continue(());
        };
        eval.descend(&self.name, None, self.child.is_fail_fast(), |eval| {
            self.child.evaluate(value, eval)
        })
    }
}

/// Validates every element of a sequence, rooting paths at `name[index].`.
pub(crate) struct ForEachRule<C: ?Sized, E, X> {
    name: Cow<'static, str>,
    extractor: X,
    child: Validator<E>,
    _collection: PhantomData<fn(&C)>,
}

impl<C: ?Sized, E, X> ForEachRule<C, E, X> {
    pub(crate) fn new(name: Cow<'static, str>, extractor: X, child: Validator<E>) -> Self {
        Self {
            name,
            extractor,
            child,
            _collection: PhantomData,
        }
    }
}

impl<T, C, E, X> Rule<T> for ForEachRule<C, E, X>
where
    T: ?Sized,
    C: ?Sized + 'static,
    E: 'static,
    X: Extract<T, C>,
    for<'a> &'a C: IntoIterator<Item = &'a E>,
{
    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> ControlFlow<()> {
        let Some(collection) = self.extractor.extract(target) else {
            return ControlFlow::Continue(());
        };
        let child_fail_fast = self.child.is_fail_fast();
        for (index, element) in collection.into_iter().enumerate() {
            eval.descend(&self.name, Some(&index), child_fail_fast, |eval| {
                self.child.evaluate(element, eval)
            })?;
        }
        ControlFlow::Continue(())
    }
}

/// Validates the values of a map, rooting paths at `name[key].`.
///
/// Keys are only used to build the path; they are not validated.
pub(crate) struct ForEachValueRule<M: ?Sized, K, V, X> {
    name: Cow<'static, str>,
    extractor: X,
    child: Validator<V>,
    _map: PhantomData<fn(&M, &K)>,
}

impl<M: ?Sized, K, V, X> ForEachValueRule<M, K, V, X> {
    pub(crate) fn new(name: Cow<'static, str>, extractor: X, child: Validator<V>) -> Self {
        Self {
            name,
            extractor,
            child,
            _map: PhantomData,
        }
    }
}

impl<T, M, K, V, X> Rule<T> for ForEachValueRule<M, K, V, X>
where
    T: ?Sized,
    M: ?Sized + 'static,
    K: Display + 'static,
    V: 'static,
    X: Extract<T, M>,
    for<'a> &'a M: IntoIterator<Item = (&'a K, &'a V)>,
{
    fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> ControlFlow<()> {
        let Some(map) = self.extractor.extract(target) else {
            return ControlFlow::Continue(());
        };
        let child_fail_fast = self.child.is_fail_fast();
        for (key, value) in map {
            eval.descend(&self.name, Some(key), child_fail_fast, |eval| {
                self.child.evaluate(value, eval)
            })?;
        }
        ControlFlow::Continue(())
    }
}
