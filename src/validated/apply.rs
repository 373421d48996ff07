//! Applicative merge of independently computed results.
//!
//! Given `k` already evaluated [`Validated`] values and a `k`-ary function, the
//! function runs only when every input is valid. Otherwise the result is
//! `Invalid` with the violations of all failing inputs concatenated left to right.
//! Nothing is evaluated here: each input was computed beforehand, so a failure in
//! one position never hides a failure in another.

use crate::validated::core::Validated;
use crate::violation::Violations;

/// Applies a `k`-ary function to a tuple of `k` results, for `k` in `1..=16`.
///
/// The arity of the tuple fixes the arity of the function at compile time.
///
/// # Examples
///
/// ```
/// use rule_rail::message::ViolationMessage;
/// use rule_rail::validated::{Apply, Validated};
/// use rule_rail::violation::{Arg, Violation};
///
/// const BAD: ViolationMessage = ViolationMessage::new("bad", "\"{0}\" is bad");
///
/// fn area(w: u32, h: u32) -> u32 {
///     w * h
/// }
///
/// let ok = (Validated::valid(3_u32), Validated::valid(4_u32)).apply(area);
/// assert_eq!(ok.into_value(), Some(12));
///
/// let failed = (
///     Validated::<u32>::invalid_one(Violation::of("w", &BAD, Arg::Int(-1))),
///     Validated::<u32>::invalid_one(Violation::of("h", &BAD, Arg::Int(-2))),
/// )
///     .apply(area);
/// assert_eq!(failed.errors().field_names(), vec!["w", "h"]);
/// ```
pub trait Apply<F> {
    type Output;

    fn apply(self, f: F) -> Validated<Self::Output>;
}

/// Collects a tuple of results into a result of a tuple.
///
/// # Examples
///
/// ```
/// use rule_rail::validated::{Merge, Validated};
///
/// let merged = (Validated::valid(1), Validated::valid("a"), Validated::valid(2.5)).merge();
/// assert_eq!(merged.into_value(), Some((1, "a", 2.5)));
/// ```
pub trait Merge {
    type Values;

    fn merge(self) -> Validated<Self::Values>;
}

macro_rules! impl_apply {
    ($(($V:ident $A:ident $T:ident $v:ident $a:ident))+) => {
        impl<$($T,)+ F, R> Apply<F> for ($(Validated<$T>,)+)
        where
            F: FnOnce($($T),+) -> R,
        {
            type Output = R;

            fn apply(self, f: F) -> Validated<R> {
                match self {
                    ($(Validated::Valid($a),)+) => Validated::Valid(f($($a),+)),
                    ($($a,)+) => {
                        let mut violations = Violations::new();
                        $(
                            if let Validated::Invalid(errors) = $a {
                                violations.extend(errors);
                            }
                        )+
                        rail_event!(trace, invalid = violations.len(), "applicative merge rejected");
                        Validated::Invalid(violations)
                    },
                }
            }
        }

        impl<$($T),+> Merge for ($(Validated<$T>,)+) {
            type Values = ($($T,)+);

            fn merge(self) -> Validated<Self::Values> {
                self.apply(|$($a: $T),+| ($($a,)+))
            }
        }
    };
}

for_tuples!(impl_apply);
