use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use smallvec::SmallVec;

use super::{Arg, Violation};
use crate::message::{MessageFormatter, SimpleMessageFormatter};

/// SmallVec-backed storage for violations.
///
/// Keeps a single violation inline, which covers fail-fast validators and the
/// common single-error case without a heap allocation.
pub type ViolationVec = SmallVec<[Violation; 1]>;

/// Ordered, append-only collection of [`Violation`]s.
///
/// Insertion order is evaluation order. A collection is valid exactly when it is
/// empty. Only the engine appends to it; callers receive it frozen.
///
/// # Examples
///
/// ```
/// use rule_rail::message::ViolationMessage;
/// use rule_rail::violation::{Arg, Violation, Violations};
///
/// const BLANK: ViolationMessage = ViolationMessage::new("charSequence.notBlank", "\"{0}\" must not be blank");
///
/// let violations: Violations = vec![
///     Violation::of("name", &BLANK, Arg::from("")),
///     Violation::of("email", &BLANK, Arg::from(" ")),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(!violations.is_valid());
/// assert_eq!(violations.field_names(), vec!["name", "email"]);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violations {
    items: ViolationVec,
}

impl Violations {
    /// Creates an empty (valid) collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ViolationVec::new(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, violation: Violation) {
        self.items.push(violation);
    }

    #[inline]
    pub(crate) fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Returns `true` when no violation was recorded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn first(&self) -> Option<&Violation> {
        self.items.first()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Violation> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Violation> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Violation] {
        &self.items
    }

    /// Field paths in evaluation order.
    pub fn field_names(&self) -> Vec<&str> {
        self.items.iter().map(Violation::field_name).collect()
    }

    /// Default-formatted messages in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.messages_with(&SimpleMessageFormatter, None)
    }

    /// Messages rendered with a caller-chosen formatter and locale.
    pub fn messages_with<M>(&self, formatter: &M, locale: Option<&str>) -> Vec<String>
    where
        M: MessageFormatter + ?Sized,
    {
        self.items
            .iter()
            .map(|v| v.message_with(formatter, locale))
            .collect()
    }

    /// Flattened, presentation-ready view of every violation.
    pub fn details(&self) -> Vec<ViolationDetail> {
        self.items.iter().map(ViolationDetail::from).collect()
    }

    /// Re-roots every violation under `prefix`.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        self.items.iter().map(|v| v.with_prefix(prefix)).collect()
    }

    /// Consumes the collection and returns the underlying `ViolationVec`.
    #[inline]
    pub fn into_inner(self) -> ViolationVec {
        self.items
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Violation> {
        self.items.into_vec()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Violations {}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        let mut items = ViolationVec::new();
        items.push(violation);
        Self { items }
    }
}

impl From<ViolationVec> for Violations {
    fn from(items: ViolationVec) -> Self {
        Self { items }
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(items: Vec<Violation>) -> Self {
        Self {
            items: ViolationVec::from_vec(items),
        }
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = smallvec::IntoIter<[Violation; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = core::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl core::ops::Index<usize> for Violations {
    type Output = Violation;

    fn index(&self, index: usize) -> &Violation {
        &self.items[index]
    }
}

/// Serializable snapshot of a violation for API responses.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViolationDetail {
    pub field_name: String,
    pub key: Cow<'static, str>,
    pub args: Vec<Arg>,
    pub default_message: String,
}

impl From<&Violation> for ViolationDetail {
    fn from(violation: &Violation) -> Self {
        Self {
            field_name: violation.field_name().into(),
            key: Cow::Owned(violation.message_key().into()),
            args: violation.args().to_vec(),
            default_message: violation.message(),
        }
    }
}
