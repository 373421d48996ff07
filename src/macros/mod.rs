//! Macros shared across the crate.
//!
//! - [`macro@crate::args`] - Builds an [`ArgVec`](crate::violation::ArgVec) from plain values,
//!   converting each one with `Arg::from`.
//!
//! The crate also uses a private tuple driver that expands an implementation macro
//! once per arity from 1 to 16. It backs the applicative merge, the `split` / `combine`
//! argument validators and the `ToArg` impls for tuples.
//!
//! # Examples
//!
//! ```
//! use rule_rail::{args, violation::Arg};
//!
//! let args = args![1_i64, "max", 2.5_f64];
//! assert_eq!(args.len(), 3);
//! assert_eq!(args[1], Arg::from("max"));
//! ```

/// Builds an [`ArgVec`](crate::violation::ArgVec) from a comma separated list of values.
///
/// Every value goes through `Arg::from`, so anything with a `From` conversion into
/// [`Arg`](crate::violation::Arg) is accepted.
///
/// # Examples
///
/// ```
/// use rule_rail::{args, violation::Arg};
///
/// let empty = args![];
/// assert!(empty.is_empty());
///
/// let bounds = args![0_i64, 150_i64];
/// assert_eq!(bounds[0], Arg::Int(0));
/// assert_eq!(bounds[1], Arg::Int(150));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::violation::ArgVec::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::violation::ArgVec::new();
        $(
            args.push($crate::violation::Arg::from($value));
        )+
        args
    }};
}

/// Expands `$m!` once per tuple arity, 1 through 16.
///
/// Each element is a `(Validator Source Target validator_var arg_var)` ident group, so
/// implementation macros can pick whichever names they need.
macro_rules! for_tuples {
    ($m:ident) => {
        for_tuples!(@step $m; [];
            (V1 A1 T1 v1 a1) (V2 A2 T2 v2 a2) (V3 A3 T3 v3 a3) (V4 A4 T4 v4 a4)
            (V5 A5 T5 v5 a5) (V6 A6 T6 v6 a6) (V7 A7 T7 v7 a7) (V8 A8 T8 v8 a8)
            (V9 A9 T9 v9 a9) (V10 A10 T10 v10 a10) (V11 A11 T11 v11 a11)
            (V12 A12 T12 v12 a12) (V13 A13 T13 v13 a13) (V14 A14 T14 v14 a14)
            (V15 A15 T15 v15 a15) (V16 A16 T16 v16 a16)
        );
    };
    (@step $m:ident; [$($done:tt)*]; $next:tt $($rest:tt)*) => {
        $m!($($done)* $next);
        for_tuples!(@step $m; [$($done)* $next]; $($rest)*);
    };
    (@step $m:ident; [$($done:tt)*];) => {};
}

/// Emits a `tracing` event when the `tracing` feature is on, and nothing otherwise.
macro_rules! rail_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!(target: "rule_rail", $($arg)+);
        }
    };
}
