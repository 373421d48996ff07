use alloc::borrow::Cow;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value-equality token selecting which conditioned rules are active.
///
/// Groups are compared by name, so two tokens built from the same string are the
/// same group. The active group is passed explicitly to every
/// [`Validator::validate_with_group`](crate::validator::Validator::validate_with_group)
/// call; [`ConstraintGroup::DEFAULT`] is used when none is given.
///
/// # Examples
///
/// ```
/// use rule_rail::validator::ConstraintGroup;
///
/// const CREATE: ConstraintGroup = ConstraintGroup::new("CREATE");
///
/// assert_eq!(CREATE, ConstraintGroup::named(String::from("CREATE")));
/// assert_ne!(CREATE, ConstraintGroup::DEFAULT);
/// assert_eq!(ConstraintGroup::default(), ConstraintGroup::DEFAULT);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintGroup(Cow<'static, str>);

impl ConstraintGroup {
    /// The group used when the caller does not pick one.
    pub const DEFAULT: ConstraintGroup = ConstraintGroup::new("DEFAULT");

    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[inline]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for ConstraintGroup {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
