use core::fmt;

use crate::validated::{Apply, Validated};
use crate::value::ValueValidator;

/// A tuple of validators over one shared source, waiting for a constructor.
#[derive(Clone)]
pub struct Combine<Vs> {
    validators: Vs,
}

/// Runs every validator of the tuple on the same source.
///
/// Each validator receives its own clone of the source, typically a raw form or a
/// request from which it extracts and checks one field.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use rule_rail::arguments::combine;
/// use rule_rail::traits::{OptionExt, ResultExt};
/// use rule_rail::value::{self, ValueValidator};
///
/// type Form = BTreeMap<&'static str, &'static str>;
///
/// let width = value::from_fn(|form: Form| {
///     form.get("width").copied().required("width").and_then(|raw| raw.parse::<u32>().into_validated("width"))
/// });
/// let height = value::from_fn(|form: Form| {
///     form.get("height").copied().required("height").and_then(|raw| raw.parse::<u32>().into_validated("height"))
/// });
/// let area = combine((width, height)).apply(|w, h| w * h);
///
/// let form = Form::from([("width", "3"), ("height", "4")]);
/// assert_eq!(area.validate(form).into_value(), Some(12));
///
/// let broken = Form::from([("width", "x")]);
/// assert_eq!(area.validate(broken).errors().field_names(), vec!["width", "height"]);
/// ```
#[inline]
pub fn combine<Vs>(validators: Vs) -> Combine<Vs> {
    Combine { validators }
}

/// Validates one source with several validators, then constructs.
///
/// Every validator runs; the constructor is only called when all succeed.
#[derive(Clone)]
pub struct CombinedValidator<Vs, F> {
    validators: Vs,
    constructor: F,
}

impl<Vs> fmt::Debug for Combine<Vs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combine").finish_non_exhaustive()
    }
}

impl<Vs, F> fmt::Debug for CombinedValidator<Vs, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedValidator").finish_non_exhaustive()
    }
}

// Clones the source for every validator but the last, which takes it by value.
macro_rules! fan_out {
    (@acc [$($done:expr,)*] $source:ident; $last:ident) => {
        ($($done,)* $last.validate($source),)
    };
    (@acc [$($done:expr,)*] $source:ident; $head:ident $($rest:ident)+) => {
        fan_out!(@acc [$($done,)* $head.validate($source.clone()),] $source; $($rest)+)
    };
}

macro_rules! impl_combine {
    ($(($V:ident $A:ident $T:ident $v:ident $a:ident))+) => {
        impl<S, $($V),+> Combine<($($V,)+)>
        where
            S: Clone,
            $($V: ValueValidator<Source = S>,)+
        {
            /// Attaches the constructor called with the validated values.
            pub fn apply<F, R>(self, constructor: F) -> CombinedValidator<($($V,)+), F>
            where
                F: Fn($($V::Target),+) -> R,
            {
                CombinedValidator {
                    validators: self.validators,
                    constructor,
                }
            }
        }

        impl<S, $($V,)+ F, R> ValueValidator for CombinedValidator<($($V,)+), F>
        where
            S: Clone,
            $($V: ValueValidator<Source = S>,)+
            F: Fn($($V::Target),+) -> R,
        {
            type Source = S;
            type Target = R;

            fn validate(&self, source: S) -> Validated<R> {
                let ($($v,)+) = &self.validators;
                let ($($a,)+) = fan_out!(@acc [] source; $($v)+);
                rail_event!(
                    trace,
                    arity = [$(stringify!($V)),+].len(),
                    invalid = 0 $(+ usize::from($a.is_invalid()))+,
                    "combined arguments validated"
                );
                ($($a,)+).apply(&self.constructor)
            }
        }
    };
}

for_tuples!(impl_combine);
