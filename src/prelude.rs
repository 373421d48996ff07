//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rule_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`args!`]
//! - **Types**: [`Validator`], [`ValidatorBuilder`], [`Constraints`], [`ConstraintGroup`],
//!   [`Validated`], [`Violation`], [`Violations`], [`Arg`], [`ViolationMessage`]
//! - **Traits**: [`ValueValidator`], [`Apply`], [`Merge`], [`ToArg`], [`ResultExt`], [`OptionExt`]
//! - **Functions**: [`split`], [`combine`]
//!
//! # Examples
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! const NOT_EMPTY: ViolationMessage = ViolationMessage::new("container.notEmpty", "\"{0}\" must not be empty");
//!
//! struct Tag {
//!     label: String,
//! }
//!
//! let tag = Validator::<Tag>::builder()
//!     .constraint("label", |t| &t.label, |c| c.predicate(|s| !s.is_empty(), NOT_EMPTY))
//!     .build();
//!
//! let checked: Validated<Tag> = tag.validated(Tag { label: String::new() });
//! assert_eq!(checked.errors().to_string(), "\"label\" must not be empty");
//! ```

pub use crate::args;

pub use crate::arguments::{combine, split};
pub use crate::message::ViolationMessage;
pub use crate::traits::{OptionExt, ResultExt};
pub use crate::validated::{Apply, Merge, Validated};
pub use crate::validator::{ConstraintGroup, Constraints, Validator, ValidatorBuilder};
pub use crate::value::ValueValidator;
pub use crate::violation::{Arg, ToArg, Violation, Violations};

/// Result type carrying every violation on failure.
pub type ValidationResult<T> = Result<T, Violations>;
