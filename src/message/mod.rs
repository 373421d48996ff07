//! Violation message metadata and lazy formatting.
//!
//! Evaluation only records a message key, a default template and the ordered
//! arguments. Turning them into text is a separate presentation step performed on
//! demand through a [`MessageFormatter`].
//!
//! Templates use positional placeholders: `{0}` is the field path, `{1}` onwards
//! the predicate arguments, and the last index the violated value.
//!
//! # Examples
//!
//! ```
//! use rule_rail::message::{MessageFormatter, SimpleMessageFormatter};
//! use rule_rail::violation::Arg;
//!
//! let text = SimpleMessageFormatter.format(
//!     "numeric.greaterThanOrEqual",
//!     "\"{0}\" must be greater than or equal to {1}",
//!     &[Arg::from("age"), Arg::Int(0), Arg::Int(-5)],
//!     None,
//! );
//! assert_eq!(text, "\"age\" must be greater than or equal to 0");
//! ```

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::violation::Arg;

/// Static message metadata attached to a predicate.
///
/// Usually declared as a `const` next to the predicate it describes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViolationMessage {
    pub key: Cow<'static, str>,
    pub template: Cow<'static, str>,
}

impl ViolationMessage {
    /// Creates message metadata from static strings.
    #[inline]
    pub const fn new(key: &'static str, template: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            template: Cow::Borrowed(template),
        }
    }

    /// Creates message metadata from owned or borrowed strings.
    pub fn owned(key: impl Into<Cow<'static, str>>, template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            template: template.into(),
        }
    }

    /// Same key, different default template.
    #[must_use]
    pub fn with_template(&self, template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: self.key.clone(),
            template: template.into(),
        }
    }

    /// `Option` field that must be present.
    pub const NOT_NULL: ViolationMessage = ViolationMessage::new("object.notNull", "\"{0}\" must not be null");

    /// `Option` field that must be absent.
    pub const IS_NULL: ViolationMessage = ViolationMessage::new("object.isNull", "\"{0}\" must be null");

    /// Pre-transform (conversion) of an argument failed.
    pub const CONVERSION: ViolationMessage =
        ViolationMessage::new("conversion", "\"{0}\" could not be converted: {1}");
}

/// Trait for turning message metadata into text.
pub trait MessageFormatter {
    fn format(&self, key: &str, template: &str, args: &[Arg], locale: Option<&str>) -> String;
}

impl<M: MessageFormatter + ?Sized> MessageFormatter for &M {
    fn format(&self, key: &str, template: &str, args: &[Arg], locale: Option<&str>) -> String {
        (**self).format(key, template, args, locale)
    }
}

/// Formats the default template, ignoring key and locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleMessageFormatter;

impl MessageFormatter for SimpleMessageFormatter {
    fn format(&self, _key: &str, template: &str, args: &[Arg], _locale: Option<&str>) -> String {
        render(template, args)
    }
}

/// Formatter backed by a per-locale key -> template table.
///
/// Lookup order is `(locale, key)`, then `(None, key)`, then the violation's default
/// template.
///
/// # Examples
///
/// ```
/// use rule_rail::message::{CatalogMessageFormatter, MessageFormatter};
/// use rule_rail::violation::Arg;
///
/// let catalog = CatalogMessageFormatter::new()
///     .with_template(Some("ko"), "object.notNull", "\"{0}\"은(는) 필수입니다")
///     .with_template(None, "object.notNull", "{0} is required");
///
/// let args = [Arg::from("email"), Arg::Null];
/// assert_eq!(
///     catalog.format("object.notNull", "unused", &args, Some("ko")),
///     "\"email\"은(는) 필수입니다"
/// );
/// assert_eq!(catalog.format("object.notNull", "unused", &args, Some("fr")), "email is required");
/// assert_eq!(catalog.format("other", "{0}!", &args, None), "email!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogMessageFormatter {
    templates: BTreeMap<(Option<String>, String), String>,
}

impl CatalogMessageFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template for `key`, optionally scoped to a locale.
    #[must_use]
    pub fn with_template(
        mut self,
        locale: Option<&str>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.templates
            .insert((locale.map(String::from), key.into()), template.into());
        self
    }

    fn lookup(&self, key: &str, locale: Option<&str>) -> Option<&str> {
        let scoped = locale.and_then(|l| {
            self.templates
                .get(&(Some(String::from(l)), String::from(key)))
        });
        scoped
            .or_else(|| self.templates.get(&(None, String::from(key))))
            .map(String::as_str)
    }
}

impl MessageFormatter for CatalogMessageFormatter {
    fn format(&self, key: &str, template: &str, args: &[Arg], locale: Option<&str>) -> String {
        render(self.lookup(key, locale).unwrap_or(template), args)
    }
}

/// Substitutes `{n}` placeholders with `args[n]`.
///
/// Placeholders that are out of range or not numeric are kept verbatim.
pub(crate) fn render(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                let _ = write!(out, "{arg}");
                rest = &after[close + 1..];
            },
            None => {
                out.push('{');
                rest = after;
            },
        }
    }
    out.push_str(rest);
    out
}
