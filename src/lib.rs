//! Composable, type-safe validation for values and constructor arguments.
//!
//! A validator is a pure function from a source value to either the validated value
//! or the complete, ordered list of violations. Validators compose over nested
//! objects and collections, and N independently validated arguments can be combined
//! into one aggregate whose constructor only runs when every argument is valid.
//!
//! Each submodule re-exports its public surface from here, so consumers can depend
//! on `rule_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Declarative object validation
//!
//! ```
//! use rule_rail::message::ViolationMessage;
//! use rule_rail::validator::Validator;
//!
//! const NOT_BLANK: ViolationMessage = ViolationMessage::new("charSequence.notBlank", "\"{0}\" must not be blank");
//! const MIN: ViolationMessage = ViolationMessage::new("numeric.min", "\"{0}\" must be at least {1}");
//!
//! struct Item {
//!     sku: String,
//!     qty: i32,
//! }
//!
//! struct Order {
//!     items: Vec<Item>,
//! }
//!
//! let item = Validator::<Item>::builder()
//!     .constraint("sku", |i| &i.sku, |c| c.predicate(|s| !s.trim().is_empty(), NOT_BLANK))
//!     .constraint("qty", |i| &i.qty, |c| c.predicate_with_args(|q| *q >= 1, MIN, |_| rule_rail::args![1]))
//!     .build();
//!
//! let order = Validator::<Order>::builder().for_each("items", |o| &o.items, item).build();
//!
//! let violations = order.validate(&Order {
//!     items: vec![
//!         Item { sku: "a".into(), qty: 1 },
//!         Item { sku: " ".into(), qty: 0 },
//!     ],
//! });
//! assert_eq!(violations.field_names(), vec!["items[1].sku", "items[1].qty"]);
//! assert_eq!(violations[1].message(), "\"items[1].qty\" must be at least 1");
//! ```
//!
//! ## Argument validation before construction
//!
//! ```
//! use rule_rail::arguments::split;
//! use rule_rail::traits::ResultExt;
//! use rule_rail::value::{self, ValueValidator};
//!
//! struct Dimensions {
//!     width: u32,
//!     height: u32,
//! }
//!
//! let parse = |name: &'static str| value::from_fn(move |raw: &str| raw.parse::<u32>().into_validated(name));
//! let dimensions = split((parse("width"), parse("height"))).apply(|width, height| Dimensions { width, height });
//!
//! let ok = dimensions.validate("640", "480").into_value().map(|d| d.width * d.height);
//! assert_eq!(ok, Some(307_200));
//! assert_eq!(dimensions.validate("wide", "tall").errors().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Internal macros and the `args!` argument list builder
#[macro_use]
pub mod macros;

/// Argument validators: `split`, `combine` and tuple validators
pub mod arguments;
/// Message templates and formatters
pub mod message;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits lifting `Result` and `Option` into `Validated`
pub mod traits;
/// The `Validated` result type and applicative merge
pub mod validated;
/// Declarative object validators
pub mod validator;
/// Value validators and their combinators
pub mod value;
/// Violations and violation collections
pub mod violation;

pub use arguments::{combine, split};
pub use message::{MessageFormatter, ViolationMessage};
pub use traits::{OptionExt, ResultExt};
pub use validated::{Apply, Merge, Validated};
pub use validator::{ConstraintGroup, Constraints, Validator, ValidatorBuilder};
pub use value::ValueValidator;
pub use violation::{Arg, ArgVec, ToArg, Violation, Violations};
