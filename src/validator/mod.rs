//! Declarative, reusable validators for structured values.
//!
//! # Key Components
//!
//! - [`Validator`] - Immutable rule set, safe to share across threads
//! - [`ValidatorBuilder`] - Declares field constraints, nested and per-element
//!   validators, and group or condition scoped rules
//! - [`Constraints`] - Ordered predicate chain for one field
//! - [`ConstraintGroup`] - Selector for group-scoped rules
//!
//! # Evaluation order
//!
//! Rules run in declaration order. A nested validator reports its violations at the
//! position of its `nest` / `for_each` declaration, so the output order is stable
//! for a given validator and input.
//!
//! # Examples
//!
//! ```
//! use rule_rail::message::ViolationMessage;
//! use rule_rail::validator::Validator;
//!
//! const NOT_EMPTY: ViolationMessage = ViolationMessage::new("container.notEmpty", "\"{0}\" must not be empty");
//!
//! struct Address {
//!     city: String,
//! }
//!
//! struct Person {
//!     name: String,
//!     address: Address,
//! }
//!
//! let address = Validator::<Address>::builder()
//!     .constraint("city", |a| &a.city, |c| c.predicate(|s| !s.is_empty(), NOT_EMPTY))
//!     .build();
//!
//! let person = Validator::<Person>::builder()
//!     .constraint("name", |p| &p.name, |c| c.predicate(|s| !s.is_empty(), NOT_EMPTY))
//!     .nest("address", |p| &p.address, address)
//!     .build();
//!
//! let nobody = Person { name: String::new(), address: Address { city: String::new() } };
//! assert_eq!(person.validate(&nobody).field_names(), vec!["name", "address.city"]);
//! ```

mod builder;
mod context;
mod nested;
mod rule;

pub mod constraints;
pub mod group;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;
use core::ops::ControlFlow;

pub use self::builder::ValidatorBuilder;
pub use self::constraints::Constraints;
pub use self::group::ConstraintGroup;

use self::context::{Evaluation, Rule};
use crate::validated::Validated;
use crate::value::ValueValidator;
use crate::violation::Violations;

/// An immutable set of rules for values of type `T`.
///
/// Cloning is cheap: the rules live behind an `Arc`. A validator holds no mutable
/// state, so one instance can be used from any number of threads at once.
///
/// The default validation is collect-all: every rule is evaluated and every
/// violation is reported. A fail-fast validator returns right after its first
/// violation, and that policy also covers everything nested below it.
pub struct Validator<T: ?Sized> {
    rules: Arc<[Box<dyn Rule<T>>]>,
    fail_fast: bool,
    prefix: Cow<'static, str>,
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            fail_fast: self.fail_fast,
            prefix: self.prefix.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .field("fail_fast", &self.fail_fast)
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl<T: ?Sized + 'static> Validator<T> {
    /// Starts declaring a validator.
    #[inline]
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }
}

impl<T: ?Sized> Validator<T> {
    pub(crate) fn from_parts(
        rules: Arc<[Box<dyn Rule<T>>]>,
        fail_fast: bool,
        prefix: Cow<'static, str>,
    ) -> Self {
        Self {
            rules,
            fail_fast,
            prefix,
        }
    }

    /// Validates `target` under the default group.
    pub fn validate(&self, target: &T) -> Violations {
        self.validate_with_group(target, &ConstraintGroup::DEFAULT)
    }

    /// Validates `target` with `group` as the active constraint group.
    ///
    /// Only the rules whose condition holds for this target and group are evaluated.
    pub fn validate_with_group(&self, target: &T, group: &ConstraintGroup) -> Violations {
        let mut eval = Evaluation::new(group, self.fail_fast, &self.prefix);
        let _ = self.evaluate(target, &mut eval);
        let violations = eval.finish();
        rail_event!(
            trace,
            group = %group,
            violations = violations.len(),
            fail_fast = self.fail_fast,
            "validator evaluated"
        );
        violations
    }

    /// Number of top-level rules, conditional blocks counting as one.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Returns a validator sharing the same rules with a different evaluation policy.
    #[must_use]
    pub fn with_fail_fast(&self, fail_fast: bool) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            fail_fast,
            prefix: self.prefix.clone(),
        }
    }

    /// Returns a validator sharing the same rules whose paths are rooted at `prefix`.
    ///
    /// The prefix only applies when this validator is called directly; a validator
    /// used through `nest` or `for_each` is rooted at the declaring field instead.
    #[must_use]
    pub fn prefixed(&self, prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            fail_fast: self.fail_fast,
            prefix: prefix.into(),
        }
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn evaluate(&self, target: &T, eval: &mut Evaluation<'_>) -> ControlFlow<()> {
        for rule in self.rules.iter() {
            rule.evaluate(target, eval)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T> Validator<T> {
    /// Validates `target` and hands it back on success.
    pub fn validated(&self, target: T) -> Validated<T> {
        self.validated_with_group(target, &ConstraintGroup::DEFAULT)
    }

    pub fn validated_with_group(&self, target: T, group: &ConstraintGroup) -> Validated<T> {
        let violations = self.validate_with_group(&target, group);
        Validated::from_violations(violations, || target)
    }
}

impl<T> ValueValidator for Validator<T> {
    type Source = T;
    type Target = T;

    #[inline]
    fn validate(&self, source: T) -> Validated<T> {
        self.validated(source)
    }
}
