//! Identity wrapper type - the identity monad.
//!
//! `Identity` adds no effect at all: `bind` simply applies the continuation.
//! It is the simplest model against which the derived operations and the
//! monad laws can be checked.

use std::fmt;

use super::higher::{Kind, TypeConstructor};
use super::monad::Monad;

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::{Identity, IdentityKind, Monad};
///
/// let wrapped = IdentityKind::bind(Identity::new(20), |value: i32| Identity::new(value + 1));
/// assert_eq!(wrapped.into_inner(), 21);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand for [`Identity`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityKind;

impl fmt::Debug for IdentityKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Identity<_>")
    }
}

impl Kind for IdentityKind {
    type Applied<T> = Identity<T>;
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type Constructor = IdentityKind;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl Monad for IdentityKind {
    #[inline]
    fn pure<A>(value: A) -> Identity<A> {
        Identity(value)
    }

    #[inline]
    fn bind<A, B, F>(monadic: Identity<A>, mut continuation: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        continuation(monadic.0)
    }
}
