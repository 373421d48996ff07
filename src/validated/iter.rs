use crate::validated::core::Validated;
use crate::violation::Violation;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub enum ViolationsIter<'a> {
    Empty,
    Multi(core::slice::Iter<'a, Violation>),
}

impl<'a> Iterator for ViolationsIter<'a> {
    type Item = &'a Violation;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ViolationsIter::Empty => None,
            ViolationsIter::Multi(it) => it.next(),
        }
    }
}

impl<T> IntoIterator for Validated<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<'a, T> IntoIterator for &'a Validated<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Validated<T> {
    /// Iterates over the valid value (zero or one item).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_value(),
        }
    }

    /// Iterates over the violations (empty when valid).
    pub fn iter_errors(&self) -> ViolationsIter<'_> {
        match self {
            Validated::Invalid(violations) => ViolationsIter::Multi(violations.iter()),
            Validated::Valid(_) => ViolationsIter::Empty,
        }
    }
}
