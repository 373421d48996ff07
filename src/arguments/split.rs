use core::fmt;

use crate::validated::{Apply, Validated};
use crate::value::ValueValidator;

/// A tuple of per-argument validators waiting for a constructor.
///
/// Created by [`split`]; call `apply` with a function taking one parameter per
/// validator.
#[derive(Clone)]
pub struct Split<Vs> {
    validators: Vs,
}

/// Pairs the `i`-th validator with the `i`-th argument.
///
/// `validators` is a tuple of 1 to 16 [`ValueValidator`]s.
#[inline]
pub fn split<Vs>(validators: Vs) -> Split<Vs> {
    Split { validators }
}

/// Validates each argument with its own validator, then constructs.
///
/// Every validator runs, whatever the others return. The violations of all failing
/// arguments are concatenated in argument order, and the constructor is only called
/// when there are none.
#[derive(Clone)]
pub struct SplitValidator<Vs, F> {
    validators: Vs,
    constructor: F,
}

impl<Vs> fmt::Debug for Split<Vs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Split").finish_non_exhaustive()
    }
}

impl<Vs, F> fmt::Debug for SplitValidator<Vs, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitValidator").finish_non_exhaustive()
    }
}

macro_rules! impl_split {
    ($(($V:ident $A:ident $T:ident $v:ident $a:ident))+) => {
        impl<$($V: ValueValidator),+> Split<($($V,)+)> {
            /// Attaches the constructor called with the validated arguments.
            pub fn apply<F, R>(self, constructor: F) -> SplitValidator<($($V,)+), F>
            where
                F: Fn($($V::Target),+) -> R,
            {
                SplitValidator {
                    validators: self.validators,
                    constructor,
                }
            }
        }

        impl<$($V,)+ F, R> SplitValidator<($($V,)+), F>
        where
            $($V: ValueValidator,)+
            F: Fn($($V::Target),+) -> R,
        {
            /// Validates the arguments and constructs the result when all are valid.
            #[allow(clippy::too_many_arguments)]
            pub fn validate(&self, $($a: $V::Source),+) -> Validated<R> {
                let ($($v,)+) = &self.validators;
                let ($($a,)+) = ($($v.validate($a),)+);
                rail_event!(
                    trace,
                    arity = [$(stringify!($V)),+].len(),
                    invalid = 0 $(+ usize::from($a.is_invalid()))+,
                    "split arguments validated"
                );
                ($($a,)+).apply(&self.constructor)
            }
        }

        impl<$($V,)+ F, R> ValueValidator for SplitValidator<($($V,)+), F>
        where
            $($V: ValueValidator,)+
            F: Fn($($V::Target),+) -> R,
        {
            type Source = ($($V::Source,)+);
            type Target = R;

            #[inline]
            fn validate(&self, ($($a,)+): Self::Source) -> Validated<R> {
                Self::validate(self, $($a),+)
            }
        }
    };
}

for_tuples!(impl_split);
