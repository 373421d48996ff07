//! Predicate chains declared per field.
//!
//! A [`Constraints`] value is handed to the closure of every
//! [`ValidatorBuilder::constraint`](crate::validator::ValidatorBuilder::constraint)
//! call. Each predicate added to it is a pure `Fn(&F) -> bool` plus the message
//! metadata reported when it fails. Predicates run in the order they were added.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::message::ViolationMessage;
use crate::violation::{ArgVec, ToArg, Violation};

type Test<F> = Box<dyn Fn(&F) -> bool + Send + Sync>;
type ArgsFn<F> = Box<dyn Fn(&F) -> ArgVec + Send + Sync>;

pub(crate) struct Predicate<F: ?Sized> {
    test: Test<F>,
    message: ViolationMessage,
    args: Option<ArgsFn<F>>,
}

impl<F: ?Sized> Predicate<F> {
    #[inline]
    pub(crate) fn test(&self, value: &F) -> bool {
        (self.test)(value)
    }

    pub(crate) fn violation(&self, field_path: alloc::string::String, value: &F) -> Violation
    where
        F: ToArg,
    {
        let args = self.args.as_ref().map_or_else(ArgVec::new, |args| args(value));
        Violation::new(field_path, &self.message, args, value.to_arg())
    }
}

/// Ordered predicate chain for one field of type `F`.
///
/// # Examples
///
/// ```
/// use rule_rail::args;
/// use rule_rail::message::ViolationMessage;
/// use rule_rail::validator::Validator;
///
/// const MIN: ViolationMessage = ViolationMessage::new("numeric.min", "\"{0}\" must be at least {1}");
///
/// struct Item {
///     qty: i32,
/// }
///
/// let validator = Validator::<Item>::builder()
///     .constraint("qty", |i| &i.qty, |c| {
///         c.predicate_with_args(|q| *q >= 1, MIN, |_| args![1])
///     })
///     .build();
///
/// let violations = validator.validate(&Item { qty: 0 });
/// assert_eq!(violations[0].message(), "\"qty\" must be at least 1");
/// ```
pub struct Constraints<F: ?Sized> {
    predicates: Vec<Predicate<F>>,
}

impl<F: ?Sized> Constraints<F> {
    pub(crate) fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub(crate) fn into_predicates(self) -> Vec<Predicate<F>> {
        self.predicates
    }

    /// Adds a predicate; a `false` result reports `message`.
    #[must_use]
    pub fn predicate<P>(mut self, test: P, message: ViolationMessage) -> Self
    where
        P: Fn(&F) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Predicate {
            test: Box::new(test),
            message,
            args: None,
        });
        self
    }

    /// Adds a predicate whose message needs extra arguments.
    ///
    /// `args` is only called when the predicate fails. Its output is placed between
    /// the field path and the violated value.
    #[must_use]
    pub fn predicate_with_args<P, A>(mut self, test: P, message: ViolationMessage, args: A) -> Self
    where
        P: Fn(&F) -> bool + Send + Sync + 'static,
        A: Fn(&F) -> ArgVec + Send + Sync + 'static,
    {
        self.predicates.push(Predicate {
            test: Box::new(test),
            message,
            args: Some(Box::new(args)),
        });
        self
    }

    /// Replaces the default template of the most recently added predicate.
    ///
    /// The message key is kept, so catalog lookups still find the entry.
    #[must_use]
    pub fn message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        if let Some(last) = self.predicates.last_mut() {
            last.message = last.message.with_template(template);
        }
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<F: 'static> Constraints<Option<F>> {
    /// The field must be `Some`.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.predicate(Option::is_some, ViolationMessage::NOT_NULL)
    }

    /// The field must be `None`.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.predicate(Option::is_none, ViolationMessage::IS_NULL)
    }
}
