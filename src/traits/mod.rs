//! Extension traits bridging standard types and [`Validated`](crate::validated::Validated).
//!
//! - [`ResultExt`]: turns a failed conversion into a violation
//! - [`OptionExt`]: turns a missing value into a `not null` violation
//!
//! # Examples
//!
//! ```
//! use rule_rail::traits::{OptionExt, ResultExt};
//! use rule_rail::validated::Merge;
//!
//! let merged = (
//!     "12".parse::<u8>().into_validated("width"),
//!     None::<u8>.required("height"),
//! )
//!     .merge();
//! assert_eq!(merged.errors().field_names(), vec!["height"]);
//! ```

pub mod result_ext;

pub use result_ext::{OptionExt, ResultExt};
