//! Monad type class - sequencing computations within a context.
//!
//! A monad here is a type-constructor brand with two operations:
//!
//! - `pure`: wrap one value;
//! - `bind`: feed the payload of a monadic value into a continuation that
//!   produces the next monadic value.
//!
//! Everything else in the crate (`map`, `ap`, `join`, `lift_m`, `lift_m2`)
//! is derived from these two, so a new instance only has to implement
//! them. What happens to an absent or empty value is decided entirely by
//! the instance's `bind`.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! bind(pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! bind(m, pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{bind, join};
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&number| number > 0)
//! }
//!
//! assert_eq!(bind(Some("42"), parse_positive), Some(42));
//! assert_eq!(bind(Some("-1"), parse_positive), None);
//!
//! assert_eq!(bind(vec![1, 2], |n: i32| vec![n, n * 10]), vec![1, 10, 2, 20]);
//! assert_eq!(join(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
//! ```

use super::higher::{Applied, Kind, OptionKind, TypeConstructor, VecKind};
use super::identity::IdentityKind;

/// A type-constructor brand that supports sequencing.
///
/// Implementations must return exactly `Applied<B>` from `bind`; a brand
/// whose `bind` has any other shape does not implement the trait.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::{Monad, OptionKind, VecKind};
///
/// assert_eq!(OptionKind::bind(Some(5), |n: i32| Some(n * 2)), Some(10));
/// assert_eq!(OptionKind::pure("x"), Some("x"));
/// assert_eq!(VecKind::bind(vec![1, 2], |n: i32| vec![n; 2]), vec![1, 1, 2, 2]);
/// ```
///
/// A type that is not a brand is rejected:
///
/// ```compile_fail
/// use kleisli::typeclass::Monad;
///
/// fn needs_monad<M: Monad>() {}
/// needs_monad::<Option<i32>>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a monad brand",
    label = "expected a brand such as `OptionKind`, `VecKind` or `WriterKind<W>`",
    note = "a monad provides `pure` and a `bind` taking `Applied<A>` and `FnMut(A) -> Applied<B>` and returning `Applied<B>`"
)]
pub trait Monad: Kind {
    /// Wraps a single value.
    fn pure<A>(value: A) -> Self::Applied<A>;

    /// Feeds the payload of `monadic` into `continuation`.
    ///
    /// The continuation may run zero, one or many times, depending on the
    /// instance.
    fn bind<A, B, F>(monadic: Self::Applied<A>, continuation: F) -> Self::Applied<B>
    where
        F: FnMut(A) -> Self::Applied<B>;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Monad for OptionKind {
    #[inline]
    fn pure<A>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn bind<A, B, F>(monadic: Option<A>, continuation: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        monadic.and_then(continuation)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl Monad for VecKind {
    #[inline]
    fn pure<A>(value: A) -> Vec<A> {
        vec![value]
    }

    #[inline]
    fn bind<A, B, F>(monadic: Vec<A>, continuation: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        monadic.into_iter().flat_map(continuation).collect()
    }
}

static_assertions::assert_impl_all!(OptionKind: Monad, Kind);
static_assertions::assert_impl_all!(VecKind: Monad, Kind);
static_assertions::assert_impl_all!(IdentityKind: Monad, Kind);
static_assertions::assert_not_impl_any!(Option<i32>: Monad);

// =============================================================================
// Derived Operations
// =============================================================================

/// Binds a monadic value, inferring the monad from the value.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::bind;
///
/// let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
///
/// assert_eq!(bind(Some(8), halve), Some(4));
/// assert_eq!(bind(Some(7), halve), None);
/// assert_eq!(bind(None::<i32>, halve), None);
/// ```
#[inline]
pub fn bind<X, B, F>(monadic: X, continuation: F) -> Applied<X::Constructor, B>
where
    X: TypeConstructor,
    X::Constructor: Monad,
    F: FnMut(X::Inner) -> Applied<X::Constructor, B>,
{
    <X::Constructor as Monad>::bind::<X::Inner, B, F>(monadic.into_applied(), continuation)
}

/// Wraps `value` in the monad `M`.
///
/// ```rust
/// use kleisli::typeclass::{VecKind, pure};
///
/// assert_eq!(pure::<VecKind, _>('a'), vec!['a']);
/// ```
#[inline]
pub fn pure<M: Monad, A>(value: A) -> Applied<M, A> {
    M::pure(value)
}

/// A monadic value whose payload is a value of the same monad.
///
/// Implemented for `M<M<T>>` only; the two constructors must match.
///
/// ```compile_fail
/// use kleisli::typeclass::join;
///
/// // Option of Vec mixes two constructors.
/// join(Some(vec![1, 2]));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a value nested in its own monad",
    label = "expected `M<M<T>>` with the same constructor twice"
)]
pub trait Nested: TypeConstructor {
    /// The value with one layer removed.
    type Flattened;

    /// Removes exactly one layer of nesting.
    fn flatten_once(self) -> Self::Flattened;
}

impl<X> Nested for X
where
    X: TypeConstructor,
    X::Constructor: Monad,
    X::Inner: TypeConstructor<Constructor = X::Constructor>,
{
    type Flattened = Applied<X::Constructor, <X::Inner as TypeConstructor>::Inner>;

    #[inline]
    fn flatten_once(self) -> Self::Flattened {
        <X::Constructor as Monad>::bind::<X::Inner, <X::Inner as TypeConstructor>::Inner, _>(
            self.into_applied(),
            <X::Inner as TypeConstructor>::into_applied,
        )
    }
}

/// Flattens `M<M<T>>` into `M<T>`.
///
/// Only one level is removed:
///
/// ```rust
/// use kleisli::typeclass::join;
///
/// assert_eq!(join(Some(Some(3))), Some(3));
/// assert_eq!(join(Some(None::<i32>)), None);
/// assert_eq!(join(Some(Some(Some(3)))), Some(Some(3)));
/// ```
#[inline]
pub fn join<X: Nested>(nested: X) -> X::Flattened {
    nested.flatten_once()
}
