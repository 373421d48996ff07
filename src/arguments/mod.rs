//! Validation of constructor arguments before construction.
//!
//! Three shapes are supported, each for 1 to 16 arguments:
//!
//! - [`split`]: one [`ValueValidator`](crate::value::ValueValidator) per argument;
//!   each argument is validated independently and the results are merged.
//! - [`combine`]: several value validators over one shared source, for example a
//!   raw form from which each validator extracts one field.
//! - [`Validator::arguments`](crate::validator::Validator): one object validator
//!   over the whole argument tuple, for rules that relate several arguments.
//!
//! In every shape the constructor runs only when all checks pass, so an invalid
//! object is never built. Its arity and parameter types must match the validators
//! at compile time.
//!
//! # Examples
//!
//! ```
//! use rule_rail::arguments::split;
//! use rule_rail::message::ViolationMessage;
//! use rule_rail::validated::Validated;
//! use rule_rail::value::{self, ValueValidator};
//! use rule_rail::violation::{Arg, Violation};
//!
//! const NOT_BLANK: ViolationMessage = ViolationMessage::new("charSequence.notBlank", "\"{0}\" must not be blank");
//! const RANGE: ViolationMessage = ViolationMessage::new("numeric.range", "\"{0}\" must be between 0 and 150");
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u8,
//! }
//!
//! let name = value::from_fn(|s: String| {
//!     if s.trim().is_empty() {
//!         Validated::invalid_one(Violation::of("name", &NOT_BLANK, Arg::from(s)))
//!     } else {
//!         Validated::valid(s)
//!     }
//! });
//! let age = value::from_fn(|n: i64| match u8::try_from(n) {
//!     Ok(age) if age <= 150 => Validated::valid(age),
//!     _ => Validated::invalid_one(Violation::of("age", &RANGE, Arg::Int(n))),
//! });
//!
//! let person = split((name, age)).apply(|name, age| Person { name, age });
//!
//! assert_eq!(
//!     person.validate("ada".to_string(), 36).into_value(),
//!     Some(Person { name: "ada".into(), age: 36 })
//! );
//! assert_eq!(person.validate(" ".to_string(), -1).errors().field_names(), vec!["name", "age"]);
//! ```

pub mod combine;
pub mod split;
pub mod tuple;

pub use self::combine::{combine, Combine, CombinedValidator};
pub use self::split::{split, Split, SplitValidator};
pub use self::tuple::ArgumentsValidator;
