//! Numeric wrapper types for different monoid operations.
//!
//! The same number can be combined by addition ([`Sum`], identity 0) or by
//! multiplication ([`Product`], identity 1). Wrapping picks the operation,
//! which makes numbers usable as Writer logs:
//!
//! ```rust
//! use kleisli::typeclass::{Monoid, Semigroup, Sum};
//!
//! let steps = (0..4).map(|_| Sum(1_u32));
//! assert_eq!(Sum::combine_all(steps), Sum(4));
//! ```

use std::fmt;

/// The additive monoid.
///
/// `Sum(a).combine(Sum(b))` is `Sum(a + b)` and the identity is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Sum;
    ///
    /// assert_eq!(Sum::new(42).into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Sum<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Sum {}", self.0)
    }
}

/// The multiplicative monoid.
///
/// `Product(a).combine(Product(b))` is `Product(a * b)` and the identity
/// is `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i32>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Product<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Product {}", self.0)
    }
}

// Default is not derived for Product: the identity is 1, so it lives in the
// per-type `Monoid` impls instead.
