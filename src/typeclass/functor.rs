//! Functor mapping, derived from `bind` and `pure`.
//!
//! `map(f, x)` binds `x` with a continuation that feeds the payload to
//! `curry(f)` and wraps the result with `pure`. Because the function is
//! curried first, mapping a function of several parameters leaves partial
//! applications inside the container; [`ap`](super::ap) then supplies the
//! rest.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(identity, fa) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(g, map(f, fa)) == map(|x| g(f(x)), fa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::map;
//!
//! assert_eq!(map(|n: i32| n.to_string(), Some(5)), Some("5".to_string()));
//! assert_eq!(map(|n: i32| n.to_string(), None), None);
//! assert_eq!(map(|n: i32| n * n, vec![1, 2, 3]), vec![1, 4, 9]);
//! ```

use super::higher::{Applied, TypeConstructor};
use super::monad::Monad;
use crate::compose::{Apply, Curry};

/// Applies `function` to every payload of `functor`.
///
/// Closures need annotated parameter types. A function of several
/// parameters is applied to its first argument only:
///
/// ```rust
/// use kleisli::typeclass::map;
///
/// let partial = map(|base: u32, exponent: u32| base.pow(exponent), Some(2));
/// assert_eq!(partial.map(|pow| pow.call((10,))), Some(1024));
/// ```
#[inline]
pub fn map<X, F, Marker, B>(function: F, functor: X) -> Applied<X::Constructor, B>
where
    X: TypeConstructor,
    X::Constructor: Monad,
    F: Curry<Marker>,
    F::Curried: Apply<X::Inner, Output = B> + Clone,
{
    let curried = <F as Curry<Marker>>::curry(function);
    <X::Constructor as Monad>::bind::<X::Inner, B, _>(functor.into_applied(), move |value| {
        <X::Constructor as Monad>::pure(curried.clone().apply(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::identity;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some(10))]
    #[case(None, None)]
    fn option_map_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(map(|n: i32| n * 2, input), expected);
    }

    #[rstest]
    fn vec_map_preserves_order() {
        assert_eq!(map(|c: char| c.to_ascii_uppercase(), vec!['a', 'b', 'c']), vec!['A', 'B', 'C']);
    }

    #[rstest]
    fn vec_map_empty() {
        assert_eq!(map(|n: i32| n + 1, Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[rstest]
    fn identity_map_applies_once() {
        assert_eq!(map(|text: &str| text.len(), Identity("four")), Identity(4));
    }

    #[rstest]
    fn map_identity_function_is_identity() {
        assert_eq!(map(identity::<i32>, vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[rstest]
    fn map_runs_function_per_element() {
        let calls = std::cell::Cell::new(0);
        let counted = map(
            |n: i32| {
                calls.set(calls.get() + 1);
                n
            },
            vec![1, 2, 3],
        );
        assert_eq!(counted, vec![1, 2, 3]);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn map_binary_function_leaves_partials() {
        let partials = map(|left: i32, right: i32| left - right, vec![10, 20]);
        let applied: Vec<i32> = partials.into_iter().map(|partial| partial.call((1,))).collect();
        assert_eq!(applied, vec![9, 19]);
    }
}
