//! The [`Validated`] result type and its applicative merge.
//!
//! # Key Components
//!
//! - [`Validated`] - Either the validated value or the accumulated [`Violations`](crate::violation::Violations)
//! - [`Apply`] / [`Merge`] - Applicative combination of up to 16 independent results
//! - Iterator adapters over the value and the violations
//!
//! # Examples
//!
//! ```
//! use rule_rail::validated::{Merge, Validated};
//!
//! let pair = (Validated::valid("alice"), Validated::valid(30)).merge();
//! assert_eq!(pair.into_value(), Some(("alice", 30)));
//! ```
pub mod apply;
pub mod core;
pub mod iter;

pub use self::apply::{Apply, Merge};
pub use self::core::*;
pub use self::iter::*;
