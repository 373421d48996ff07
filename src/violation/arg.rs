//! Message arguments carried by a [`Violation`](crate::violation::Violation).
//!
//! A violation records its field path, any predicate-specific arguments and the
//! violated value as an ordered list of [`Arg`]s. Field types opt in through the
//! [`ToArg`] trait so the engine can capture the violated value without knowing
//! the concrete type.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use smallvec::SmallVec;

/// SmallVec-backed argument list.
///
/// Most messages carry the field name, at most two bounds and the violated value,
/// so four inline slots avoid a heap allocation in the common case.
pub type ArgVec = SmallVec<[Arg; 4]>;

/// One message argument.
///
/// # Examples
///
/// ```
/// use rule_rail::violation::Arg;
///
/// assert_eq!(Arg::from(42_i32), Arg::Int(42));
/// assert_eq!(Arg::from("abc").to_string(), "abc");
/// assert_eq!(Arg::from(None::<i32>), Arg::Null);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arg {
    /// An absent value.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(Cow<'static, str>),
    List(Vec<Arg>),
    /// A value rendered through its `Debug` implementation.
    Debug(String),
}

impl Arg {
    /// Captures any `Debug` value as text.
    ///
    /// This is the escape hatch for types that have no natural scalar form, such as
    /// a whole target object checked by a cross-field rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::violation::Arg;
    ///
    /// #[derive(Debug)]
    /// struct Range { lo: i32, hi: i32 }
    ///
    /// let arg = Arg::debug(&Range { lo: 3, hi: 1 });
    /// assert_eq!(arg.to_string(), "Range { lo: 3, hi: 1 }");
    /// ```
    #[inline]
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Arg::Debug(format!("{value:?}"))
    }

    /// Returns `true` for [`Arg::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }

    /// Returns the string payload of [`Arg::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("null"),
            Arg::Bool(b) => write!(f, "{b}"),
            Arg::Int(i) => write!(f, "{i}"),
            Arg::UInt(u) => write!(f, "{u}"),
            Arg::Float(x) => write!(f, "{x}"),
            Arg::Char(c) => write!(f, "{c}"),
            Arg::Str(s) => f.write_str(s),
            Arg::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Arg::Debug(s) => f.write_str(s),
        }
    }
}

macro_rules! arg_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg {
            #[inline]
            fn from(value: $t) -> Self {
                Arg::Int(value as i64)
            }
        }
    )*};
}

macro_rules! arg_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg {
            #[inline]
            fn from(value: $t) -> Self {
                Arg::UInt(value as u64)
            }
        }
    )*};
}

arg_from_signed!(i8, i16, i32, i64, isize);
arg_from_unsigned!(u8, u16, u32, u64, usize);

impl From<i128> for Arg {
    fn from(value: i128) -> Self {
        i64::try_from(value).map_or_else(|_| Arg::Debug(format!("{value}")), Arg::Int)
    }
}

impl From<u128> for Arg {
    fn from(value: u128) -> Self {
        u64::try_from(value).map_or_else(|_| Arg::Debug(format!("{value}")), Arg::UInt)
    }
}

impl From<f32> for Arg {
    #[inline]
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    #[inline]
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg {
    #[inline]
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    #[inline]
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<&str> for Arg {
    #[inline]
    fn from(value: &str) -> Self {
        Arg::Str(Cow::Owned(value.into()))
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(value: String) -> Self {
        Arg::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for Arg {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Arg::Str(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

/// Captures a borrowed value as an [`Arg`].
///
/// Every field a constraint is declared on must implement `ToArg` so the violated
/// value can be recorded. Implement it for your own types with [`Arg::debug`] or by
/// picking the scalar that best represents them.
///
/// # Examples
///
/// ```
/// use rule_rail::violation::{Arg, ToArg};
///
/// #[derive(Debug)]
/// struct Sku(u32);
///
/// impl ToArg for Sku {
///     fn to_arg(&self) -> Arg {
///         Arg::UInt(u64::from(self.0))
///     }
/// }
///
/// assert_eq!(Sku(7).to_arg(), Arg::UInt(7));
/// assert_eq!("x".to_arg(), Arg::from("x"));
/// assert_eq!(vec![1, 2].to_arg(), Arg::List(vec![Arg::Int(1), Arg::Int(2)]));
/// ```
pub trait ToArg {
    fn to_arg(&self) -> Arg;
}

macro_rules! to_arg_copy {
    ($($t:ty),*) => {$(
        impl ToArg for $t {
            #[inline]
            fn to_arg(&self) -> Arg {
                Arg::from(*self)
            }
        }
    )*};
}

to_arg_copy!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl ToArg for str {
    #[inline]
    fn to_arg(&self) -> Arg {
        Arg::from(self)
    }
}

impl ToArg for String {
    #[inline]
    fn to_arg(&self) -> Arg {
        Arg::from(self.as_str())
    }
}

impl ToArg for Cow<'_, str> {
    #[inline]
    fn to_arg(&self) -> Arg {
        Arg::from(self.as_ref())
    }
}

impl ToArg for Arg {
    #[inline]
    fn to_arg(&self) -> Arg {
        self.clone()
    }
}

impl ToArg for () {
    #[inline]
    fn to_arg(&self) -> Arg {
        Arg::Null
    }
}

impl<T: ToArg> ToArg for Option<T> {
    #[inline]
    fn to_arg(&self) -> Arg {
        self.as_ref().map_or(Arg::Null, ToArg::to_arg)
    }
}

impl<T: ToArg> ToArg for [T] {
    fn to_arg(&self) -> Arg {
        Arg::List(self.iter().map(ToArg::to_arg).collect())
    }
}

impl<T: ToArg, const N: usize> ToArg for [T; N] {
    fn to_arg(&self) -> Arg {
        self.as_slice().to_arg()
    }
}

impl<T: ToArg> ToArg for Vec<T> {
    fn to_arg(&self) -> Arg {
        self.as_slice().to_arg()
    }
}

impl<T: ToArg + ?Sized> ToArg for &T {
    #[inline]
    fn to_arg(&self) -> Arg {
        (**self).to_arg()
    }
}

impl<T: ToArg + ?Sized> ToArg for Box<T> {
    #[inline]
    fn to_arg(&self) -> Arg {
        (**self).to_arg()
    }
}

impl<T: ToArg + ?Sized> ToArg for Arc<T> {
    #[inline]
    fn to_arg(&self) -> Arg {
        (**self).to_arg()
    }
}

macro_rules! impl_to_arg_tuple {
    ($(($V:ident $A:ident $T:ident $v:ident $a:ident))+) => {
        impl<$($T: ToArg),+> ToArg for ($($T,)+) {
            fn to_arg(&self) -> Arg {
                let ($($a,)+) = self;
                Arg::List(alloc::vec![$($a.to_arg()),+])
            }
        }
    };
}

for_tuples!(impl_to_arg_tuple);
