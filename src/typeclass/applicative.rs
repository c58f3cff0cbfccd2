//! Application inside a monad, and lifting of plain functions.
//!
//! - [`ap`] applies a wrapped function to a wrapped argument with two nested
//!   binds. The function is curried first, so applying a wrapped function of
//!   several parameters yields wrapped partial applications.
//! - [`lift_m`] and [`lift_m2`] promote functions of one and two parameters
//!   to curried functions over monadic values of any instance:
//!
//! ```text
//! lift_m(f)(x)     == ap(pure(f), x)
//! lift_m2(f)(x, y) == ap(ap(pure(f), x), y)
//! ```
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(pure(identity), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(pure(f), pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{OptionKind, VecKind, ap, lift_m, lift_m2};
//!
//! let increment = |n: i32| n + 1;
//! assert_eq!(ap(Some(increment), Some(1)), Some(2));
//!
//! let square = lift_m::<VecKind, _, _, _>(|n: i32| n * n);
//! assert_eq!(square.call((vec![1, 2, 3],)), vec![1, 4, 9]);
//!
//! let add = lift_m2::<OptionKind, _, _, _, _>(|a: i32, b: i32| a + b);
//! assert_eq!(add.call_ref((Some(2), Some(3))), Some(5));
//! assert_eq!(add.call((Some(2),)).call((None,)), None);
//! ```

use super::higher::{Applied, TypeConstructor};
use super::monad::Monad;
use crate::compose::{Apply, Curried, Curry, HNil, Invoke, curry};

/// The payload type produced by [`ap`] when `G` is applied to `A`.
pub type ApOutput<G, Marker, A> = <<G as Curry<Marker>>::Curried as Apply<A>>::Output;

/// Applies a wrapped function to a wrapped argument.
///
/// Every function in `wrapped` is paired with every payload in `argument`,
/// functions first:
///
/// ```rust
/// use kleisli::typeclass::ap;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
/// assert_eq!(ap(functions, vec![1, 2]), vec![2, 3, 10, 20]);
/// ```
///
/// An absent function or argument propagates through `bind`:
///
/// ```rust
/// use kleisli::typeclass::ap;
///
/// assert_eq!(ap(None::<fn(i32) -> i32>, Some(1)), None);
/// assert_eq!(ap(Some(|n: i32| n + 1), None), None);
/// ```
#[inline]
pub fn ap<MF, X, Marker>(
    wrapped: MF,
    argument: X,
) -> Applied<MF::Constructor, ApOutput<MF::Inner, Marker, X::Inner>>
where
    MF: TypeConstructor,
    MF::Constructor: Monad,
    MF::Inner: Curry<Marker>,
    <MF::Inner as Curry<Marker>>::Curried: Apply<X::Inner> + Clone,
    X: TypeConstructor<Constructor = MF::Constructor> + Clone,
{
    <MF::Constructor as Monad>::bind::<MF::Inner, ApOutput<MF::Inner, Marker, X::Inner>, _>(
        wrapped.into_applied(),
        move |function: MF::Inner| {
            let curried = <MF::Inner as Curry<Marker>>::curry(function);
            <MF::Constructor as Monad>::bind::<X::Inner, ApOutput<MF::Inner, Marker, X::Inner>, _>(
                argument.clone().into_applied(),
                move |value: X::Inner| <MF::Constructor as Monad>::pure(curried.clone().apply(value)),
            )
        },
    )
}

/// Promotes a function of one parameter to the monad `M`.
///
/// The result is a curried function of one `M<A>`.
#[allow(clippy::type_complexity)]
#[inline]
pub fn lift_m<M, F, A, R>(
    function: F,
) -> Curried<impl Fn(Applied<M, A>) -> Applied<M, R> + Clone, crate::Args![Applied<M, A>], HNil>
where
    M: Monad,
    F: Invoke<crate::Args![A], Output = R> + Clone,
    Applied<M, A>: Clone,
{
    curry(move |monadic: Applied<M, A>| ap(M::pure(function.clone()), monadic))
}

/// Promotes a function of two parameters to the monad `M`.
///
/// The result is a curried function of `M<A>` and `M<B>`; both arguments
/// may be supplied at once or one at a time.
///
/// ```rust
/// use kleisli::typeclass::{VecKind, lift_m2};
///
/// let pair = lift_m2::<VecKind, _, _, _, _>(|a: i32, b: char| (a, b));
/// let with_numbers = pair.call((vec![1, 2],));
///
/// assert_eq!(
///     with_numbers.call((vec!['x', 'y'],)),
///     vec![(1, 'x'), (1, 'y'), (2, 'x'), (2, 'y')]
/// );
/// ```
#[allow(clippy::type_complexity)]
#[inline]
pub fn lift_m2<M, F, A, B, R>(
    function: F,
) -> Curried<
    impl Fn(Applied<M, A>, Applied<M, B>) -> Applied<M, R> + Clone,
    crate::Args![Applied<M, A>, Applied<M, B>],
    HNil,
>
where
    M: Monad,
    F: Invoke<crate::Args![A, B], Output = R> + Clone,
    A: Clone,
    Applied<M, A>: Clone,
    Applied<M, B>: Clone,
{
    curry(move |first: Applied<M, A>, second: Applied<M, B>| {
        ap(ap(M::pure(function.clone()), first), second)
    })
}
