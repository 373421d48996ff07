use core::fmt;

use crate::validated::Validated;
use crate::validator::Validator;
use crate::value::ValueValidator;

/// An object validator over an argument tuple, paired with a constructor.
///
/// Created by `Validator::<(A1, ..., Ak)>::arguments`. Rules see every argument at
/// once, which is what cross-argument checks need (`from <= to`, matching
/// passwords, ...). The constructor only runs when the tuple is valid.
///
/// # Examples
///
/// ```
/// use rule_rail::message::ViolationMessage;
/// use rule_rail::validator::Validator;
///
/// const ORDERED: ViolationMessage = ViolationMessage::new("range.ordered", "\"{0}\" must not end before it starts");
///
/// #[derive(Debug, PartialEq)]
/// struct Span {
///     from: u32,
///     to: u32,
/// }
///
/// let span = Validator::<(u32, u32)>::builder()
///     .constraint_on_target("span", |c| c.predicate(|(from, to)| from <= to, ORDERED))
///     .build()
///     .arguments(|from, to| Span { from, to });
///
/// assert_eq!(span.validate(1, 4).into_value(), Some(Span { from: 1, to: 4 }));
/// assert_eq!(span.validate(4, 1).errors()[0].message(), "\"span\" must not end before it starts");
/// ```
pub struct ArgumentsValidator<Args, F> {
    validator: Validator<Args>,
    constructor: F,
}

impl<Args, F: Clone> Clone for ArgumentsValidator<Args, F> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            constructor: self.constructor.clone(),
        }
    }
}

impl<Args, F> fmt::Debug for ArgumentsValidator<Args, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentsValidator")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

macro_rules! impl_arguments {
    ($(($V:ident $A:ident $T:ident $v:ident $a:ident))+) => {
        impl<$($A),+> Validator<($($A,)+)> {
            /// Turns this validator into an argument validator for `constructor`.
            pub fn arguments<F, R>(self, constructor: F) -> ArgumentsValidator<($($A,)+), F>
            where
                F: Fn($($A),+) -> R,
            {
                ArgumentsValidator {
                    validator: self,
                    constructor,
                }
            }
        }

        impl<$($A,)+ F, R> ArgumentsValidator<($($A,)+), F>
        where
            F: Fn($($A),+) -> R,
        {
            /// Validates the arguments together and constructs when they are valid.
            #[allow(clippy::too_many_arguments)]
            pub fn validate(&self, $($a: $A),+) -> Validated<R> {
                let arguments = ($($a,)+);
                let violations = self.validator.validate(&arguments);
                if !violations.is_valid() {
                    return Validated::Invalid(violations);
                }
                let ($($a,)+) = arguments;
                Validated::Valid((self.constructor)($($a),+))
            }
        }

        impl<$($A,)+ F, R> ValueValidator for ArgumentsValidator<($($A,)+), F>
        where
            F: Fn($($A),+) -> R,
        {
            type Source = ($($A,)+);
            type Target = R;

            #[inline]
            fn validate(&self, ($($a,)+): Self::Source) -> Validated<R> {
                Self::validate(self, $($a),+)
            }
        }
    };
}

for_tuples!(impl_arguments);
