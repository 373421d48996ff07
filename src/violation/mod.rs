//! Violation records and their ordered collection.
//!
//! A [`Violation`] is the immutable record of one failed constraint: where it
//! failed (a dotted / indexed field path), which message it maps to and the
//! arguments needed to render that message. [`Violations`] is the ordered,
//! append-only aggregate the engine hands back from every validation call.
//!
//! # Examples
//!
//! ```
//! use rule_rail::message::ViolationMessage;
//! use rule_rail::violation::{Arg, Violation};
//!
//! const NOT_BLANK: ViolationMessage =
//!     ViolationMessage::new("charSequence.notBlank", "\"{0}\" must not be blank");
//!
//! let violation = Violation::new("name", &NOT_BLANK, Default::default(), Arg::from(""));
//! assert_eq!(violation.field_name(), "name");
//! assert_eq!(violation.message(), "\"name\" must not be blank");
//! assert_eq!(violation.args().len(), 2);
//! ```
pub mod arg;
pub mod collection;

pub use self::arg::{Arg, ArgVec, ToArg};
pub use self::collection::{ViolationDetail, ViolationVec, Violations};

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::message::{MessageFormatter, SimpleMessageFormatter, ViolationMessage};

/// One failed constraint.
///
/// The argument list always starts with the field path and ends with the violated
/// value; predicate-specific arguments (bounds, patterns, ...) sit between them, so
/// a template refers to the field as `{0}` and to its own arguments from `{1}` on.
///
/// Violations are immutable. Re-rooting under a parent path produces a new value
/// through [`Violation::with_prefix`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    field_name: String,
    message_key: Cow<'static, str>,
    default_message: Cow<'static, str>,
    args: ArgVec,
    violated_value: Arg,
}

impl Violation {
    /// Creates a violation for `field_name`.
    ///
    /// `args` holds only the predicate-specific arguments; the field path is
    /// prepended and the violated value appended.
    pub fn new(
        field_name: impl Into<String>,
        message: &ViolationMessage,
        args: ArgVec,
        violated_value: Arg,
    ) -> Self {
        let field_name = field_name.into();
        let mut all = ArgVec::with_capacity(args.len() + 2);
        all.push(Arg::from(field_name.as_str()));
        all.extend(args);
        all.push(violated_value.clone());
        Self {
            field_name,
            message_key: message.key.clone(),
            default_message: message.template.clone(),
            args: all,
            violated_value,
        }
    }

    /// Creates a violation that carries no predicate-specific arguments.
    #[inline]
    pub fn of(field_name: impl Into<String>, message: &ViolationMessage, violated_value: Arg) -> Self {
        Self::new(field_name, message, ArgVec::new(), violated_value)
    }

    /// The dotted / indexed path of the failing field, e.g. `items[2].qty`.
    #[inline]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Key used to look the message up in a catalog.
    #[inline]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Template used when no catalog entry overrides the key.
    #[inline]
    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    /// All message arguments: field path first, violated value last.
    #[inline]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    #[inline]
    pub fn violated_value(&self) -> &Arg {
        &self.violated_value
    }

    /// Renders the default template with [`SimpleMessageFormatter`].
    pub fn message(&self) -> String {
        self.message_with(&SimpleMessageFormatter, None)
    }

    /// Renders the message with a caller-chosen formatter and locale.
    ///
    /// Formatting only happens here, never during evaluation.
    pub fn message_with<M>(&self, formatter: &M, locale: Option<&str>) -> String
    where
        M: MessageFormatter + ?Sized,
    {
        formatter.format(&self.message_key, &self.default_message, &self.args, locale)
    }

    /// Returns a copy whose path is rooted under `prefix`.
    ///
    /// The first argument follows the path so rendered messages name the full field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::message::ViolationMessage;
    /// use rule_rail::violation::{Arg, Violation};
    ///
    /// const REQUIRED: ViolationMessage = ViolationMessage::new("object.notNull", "\"{0}\" must not be null");
    ///
    /// let v = Violation::of("city", &REQUIRED, Arg::Null).with_prefix("address");
    /// assert_eq!(v.field_name(), "address.city");
    /// assert_eq!(v.message(), "\"address.city\" must not be null");
    /// ```
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        let field_name = join_path(prefix, &self.field_name);
        let mut args = self.args.clone();
        if let Some(first) = args.first_mut() {
            *first = Arg::from(field_name.as_str());
        }
        Self {
            field_name,
            message_key: self.message_key.clone(),
            default_message: self.default_message.clone(),
            args,
            violated_value: self.violated_value.clone(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Joins a parent path and a child segment with `.`.
///
/// Empty sides are dropped, so a rule declared with an empty name on an element
/// validator reports the element path itself (`items[2]`), and a root validator
/// without prefix reports bare field names.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => String::from(name),
        (false, true) => String::from(prefix),
        (false, false) => {
            let mut path = String::with_capacity(prefix.len() + name.len() + 1);
            path.push_str(prefix);
            path.push('.');
            path.push_str(name);
            path
        },
    }
}
