//! An explicit tagged optional value.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It behaves like
//! [`Option`] as a monad, but reads its payload through
//! [`Maybe::from_maybe`], which reports an empty value as an
//! [`EmptyAccessError`], and prints as `Just 3` or `Nothing`.

use std::fmt;

use super::error::EmptyAccessError;
use crate::typeclass::{Kind, Monad, TypeConstructor};

/// A value that may be absent.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{Maybe, MaybeKind};
/// use kleisli::typeclass::lift_m2;
///
/// let sum = lift_m2::<MaybeKind, _, _, _, _>(|a: i32, b: i32| a + b);
///
/// assert_eq!(sum.call_ref((Maybe::Just(41), Maybe::Just(1))).to_string(), "Just 42");
/// assert_eq!(sum.call((Maybe::Nothing, Maybe::Just(1))).to_string(), "Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        !self.is_nothing()
    }

    /// Returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] when called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).from_maybe(), Ok(5));
    /// assert!(Maybe::<i32>::Nothing.from_maybe().is_err());
    /// ```
    #[allow(clippy::wrong_self_convention)]
    pub fn from_maybe(self) -> Result<T, EmptyAccessError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(EmptyAccessError {
                type_name: "Maybe",
                method_name: "from_maybe",
            }),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value}"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

// =============================================================================
// Monad Instance
// =============================================================================

/// Brand for [`Maybe`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeKind;

impl fmt::Debug for MaybeKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Maybe<_>")
    }
}

impl Kind for MaybeKind {
    type Applied<T> = Maybe<T>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type Constructor = MaybeKind;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl Monad for MaybeKind {
    #[inline]
    fn pure<A>(value: A) -> Maybe<A> {
        Maybe::Just(value)
    }

    #[inline]
    fn bind<A, B, F>(monadic: Maybe<A>, mut continuation: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        match monadic {
            Maybe::Just(value) => continuation(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

static_assertions::assert_impl_all!(MaybeKind: Monad);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{bind, join, lift_m, map};
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Just(3), "Just 3")]
    #[case(Maybe::Nothing, "Nothing")]
    fn display_matches_tag(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn default_is_nothing() {
        assert!(Maybe::<String>::default().is_nothing());
    }

    #[rstest]
    fn from_maybe_reports_empty_access() {
        let error = Maybe::<u8>::Nothing.from_maybe().unwrap_err();
        assert_eq!(error.type_name, "Maybe");
        assert_eq!(error.method_name, "from_maybe");
    }

    #[rstest]
    #[case(Some(1), Maybe::Just(1))]
    #[case(None, Maybe::Nothing)]
    fn converts_from_option(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::from(option), expected);
        assert_eq!(Option::from(expected), option);
    }

    #[rstest]
    fn bind_skips_continuation_on_nothing() {
        let result = bind(Maybe::<i32>::Nothing, |_: i32| -> Maybe<i32> {
            panic!("continuation must not run")
        });
        assert!(result.is_nothing());
    }

    #[rstest]
    fn map_and_join_follow_bind() {
        assert_eq!(map(|n: i32| n * 2, Maybe::Just(4)), Maybe::Just(8));
        assert_eq!(join(Maybe::Just(Maybe::Just('q'))), Maybe::Just('q'));
        assert_eq!(join(Maybe::Just(Maybe::<char>::Nothing)), Maybe::Nothing);
    }

    #[rstest]
    fn lifted_square_over_maybe() {
        let square = lift_m::<MaybeKind, _, _, _>(|n: i32| n * n);
        assert_eq!(square.call_ref((Maybe::Just(8),)).to_string(), "Just 64");
        assert_eq!(square.call((Maybe::Nothing,)).to_string(), "Nothing");
    }

    #[rstest]
    fn as_ref_borrows_payload() {
        let owned = Maybe::Just(String::from("kept"));
        assert_eq!(owned.as_ref().map_len(), Maybe::Just(4));
    }

    trait MapLen {
        fn map_len(self) -> Maybe<usize>;
    }

    impl MapLen for Maybe<&String> {
        fn map_len(self) -> Maybe<usize> {
            map(|text: &String| text.len(), self)
        }
    }
}
