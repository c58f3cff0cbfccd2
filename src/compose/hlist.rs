//! Type-level argument lists.
//!
//! The currying engine needs to talk about "the arguments captured so far"
//! and "the parameters still missing" as types, and to append to and match
//! against them at compile time. Tuples cannot be taken apart generically,
//! so arguments travel as heterogeneous cons lists instead:
//!
//! ```text
//! (i32, String, bool)  <=>  HCons<i32, HCons<String, HCons<bool, HNil>>>
//! ```
//!
//! [`IntoArgs`] converts tuples of up to eight elements, and the [`Args!`]
//! and [`args!`] macros spell list types and values.
//!
//! [`Args!`]: crate::Args
//! [`args!`]: crate::args

/// The empty argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HNil;

/// An argument list with a head argument in front of a tail list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HCons<H, T>(pub H, pub T);

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::HNil {}

    impl<H, T: Sealed> Sealed for super::HCons<H, T> {}
}

/// Marker for well-formed argument lists.
///
/// # Examples
///
/// ```rust
/// use kleisli::Args;
/// use kleisli::compose::ArgList;
///
/// assert_eq!(<Args![i32, String, bool]>::LEN, 3);
/// assert_eq!(<Args![]>::LEN, 0);
/// ```
pub trait ArgList: sealed::Sealed {
    /// Number of arguments in the list.
    const LEN: usize;
}

impl ArgList for HNil {
    const LEN: usize = 0;
}

impl<H, T: ArgList> ArgList for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Concatenates two argument lists, preserving order.
///
/// ```rust
/// use kleisli::args;
/// use kleisli::compose::Append;
///
/// assert_eq!(args!(1, 'a').append(args!("b")), args!(1, 'a', "b"));
/// ```
pub trait Append<Other> {
    /// `Self` followed by `Other`.
    type Output;

    /// Appends `other` after every element of `self`.
    fn append(self, other: Other) -> Self::Output;
}

impl<Other> Append<Other> for HNil {
    type Output = Other;

    #[inline]
    fn append(self, other: Other) -> Other {
        other
    }
}

impl<H, T, Other> Append<Other> for HCons<H, T>
where
    T: Append<Other>,
{
    type Output = HCons<H, T::Output>;

    #[inline]
    fn append(self, other: Other) -> Self::Output {
        HCons(self.0, self.1.append(other))
    }
}

/// Matches a batch of supplied arguments against pending parameter types.
///
/// `Pending: Supply<Batch>` holds when `Batch` is a prefix of `Pending`
/// with identical types; `Rest` is what is still missing afterwards.
/// Supplying more arguments than are pending has no impl.
pub trait Supply<Batch> {
    /// The parameters left after consuming `Batch`.
    type Rest;
}

impl<Pending> Supply<HNil> for Pending {
    type Rest = Pending;
}

impl<H, T, BatchTail> Supply<HCons<H, BatchTail>> for HCons<H, T>
where
    T: Supply<BatchTail>,
{
    type Rest = T::Rest;
}

/// Conversion from a tuple of arguments into an argument list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an argument tuple",
    label = "expected a tuple such as `(a,)` or `(a, b)`",
    note = "a single argument still needs the trailing comma: `(value,)`"
)]
pub trait IntoArgs {
    /// The corresponding argument list.
    type List: ArgList;

    /// Performs the conversion.
    fn into_args(self) -> Self::List;
}

impl IntoArgs for HNil {
    type List = Self;

    #[inline]
    fn into_args(self) -> Self {
        self
    }
}

impl<H, T: ArgList> IntoArgs for HCons<H, T> {
    type List = Self;

    #[inline]
    fn into_args(self) -> Self {
        self
    }
}

/// Spells the type of an argument list.
///
/// ```rust
/// use kleisli::Args;
/// use kleisli::compose::{HCons, HNil};
///
/// let _: Args![i32, char] = HCons(1, HCons('x', HNil));
/// ```
#[macro_export]
macro_rules! Args {
    () => { $crate::compose::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::compose::HCons<$head, $crate::Args!($($tail),*)>
    };
}

/// Builds an argument list value.
///
/// ```rust
/// use kleisli::args;
/// use kleisli::compose::{HCons, HNil};
///
/// assert_eq!(args!(1, "two"), HCons(1, HCons("two", HNil)));
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::compose::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::compose::HCons($head, $crate::args!($($tail),*))
    };
}

macro_rules! impl_into_args {
    ($($element:ident),*) => {
        paste::paste! {
            impl<$($element),*> IntoArgs for ($($element,)*) {
                type List = crate::Args![$($element),*];

                #[inline]
                #[allow(clippy::unused_unit)]
                fn into_args(self) -> Self::List {
                    let ($([<$element:lower>],)*) = self;
                    crate::args!($([<$element:lower>]),*)
                }
            }
        }
    };
}

impl_into_args!();
impl_into_args!(A1);
impl_into_args!(A1, A2);
impl_into_args!(A1, A2, A3);
impl_into_args!(A1, A2, A3, A4);
impl_into_args!(A1, A2, A3, A4, A5);
impl_into_args!(A1, A2, A3, A4, A5, A6);
impl_into_args!(A1, A2, A3, A4, A5, A6, A7);
impl_into_args!(A1, A2, A3, A4, A5, A6, A7, A8);
