//! Compile-time capability probes.
//!
//! Each probe is a `const fn` that returns `true`, and only type-checks
//! when the probed capability holds. Used in a `const` context, a failed
//! probe is a build error naming the missing capability:
//!
//! ```rust
//! use kleisli::probe::{is_invocable, is_monad, is_monoid, is_nested};
//! use kleisli::typeclass::{OptionKind, Sum};
//!
//! const _: () = assert!(is_monad::<OptionKind>());
//! const _: () = assert!(is_monoid::<Sum<u32>>());
//! const _: () = assert!(is_nested::<Vec<Vec<u8>>>());
//! const _: () = assert!(is_invocable::<fn(i32, i32) -> i32, (i32, i32)>());
//! ```
//!
//! ```compile_fail
//! use kleisli::probe::is_monoid;
//!
//! const _: () = assert!(is_monoid::<f64>());
//! ```
//!
//! ```compile_fail
//! use kleisli::probe::is_invocable;
//!
//! // Wrong arity.
//! const _: () = assert!(is_invocable::<fn(i32) -> i32, (i32, i32)>());
//! ```

use crate::compose::{Curry, IntoArgs, Invoke, IsCurried};
#[cfg(feature = "typeclass")]
use crate::typeclass::{Applied, Kind, Monad, Monoid, Nested, TypeConstructor};

/// `F` can be invoked with the arguments in the tuple `Args`.
///
/// Covers plain callables, [`Method`](crate::compose::Method) wrappers and
/// [`Field`](crate::compose::Field) projections alike.
#[inline]
pub const fn is_invocable<F, Args>() -> bool
where
    Args: IntoArgs,
    F: Invoke<Args::List>,
{
    true
}

/// `T` is a [`Curried`](crate::compose::Curried) value.
///
/// ```rust
/// use kleisli::compose::{Curried, HNil};
/// use kleisli::probe::is_curried;
/// use kleisli::Args;
///
/// assert!(is_curried::<Curried<fn(u8) -> u8, Args![u8], HNil>>());
/// ```
///
/// ```compile_fail
/// use kleisli::probe::is_curried;
///
/// is_curried::<fn(u8) -> u8>();
/// ```
#[inline]
pub const fn is_curried<T>() -> bool
where
    T: Curry<IsCurried, Curried = T>,
{
    true
}

/// `W` is a monoid, and therefore a valid Writer log.
#[cfg(feature = "typeclass")]
#[inline]
pub const fn is_monoid<W: Monoid>() -> bool {
    true
}

/// `M` is a monad brand whose `bind` maps `M<i32>` through
/// `i32 -> M<f64>` to exactly `M<f64>`.
///
/// ```compile_fail
/// use kleisli::probe::is_monad;
///
/// // A value type, not a brand.
/// const _: () = assert!(is_monad::<Option<i32>>());
/// ```
#[cfg(feature = "typeclass")]
#[inline]
pub const fn is_monad<M: Monad>() -> bool {
    let _witness: fn(Applied<M, i32>, fn(i32) -> Applied<M, f64>) -> Applied<M, f64> =
        M::bind::<i32, f64, fn(i32) -> Applied<M, f64>>;
    true
}

/// `X` is `M<T>` for some monad `M`.
///
/// ```rust
/// use kleisli::probe::is_monadic;
///
/// assert!(is_monadic::<Option<String>>());
/// assert!(is_monadic::<Vec<()>>());
/// ```
///
/// ```compile_fail
/// use kleisli::probe::is_monadic;
///
/// is_monadic::<i32>();
/// ```
#[cfg(feature = "typeclass")]
#[inline]
pub const fn is_monadic<X>() -> bool
where
    X: TypeConstructor,
    X::Constructor: Monad,
{
    true
}

/// `X` is `M<M<T>>` with the same monad twice, so `join` applies.
///
/// ```compile_fail
/// use kleisli::probe::is_nested;
///
/// const _: () = assert!(is_nested::<Option<Vec<i32>>>());
/// ```
#[cfg(feature = "typeclass")]
#[inline]
pub const fn is_nested<X: Nested>() -> bool {
    true
}

/// `X` is a Writer value, carrying a monoid log.
///
/// ```rust
/// use kleisli::effect::{LogOnly, Writer};
/// use kleisli::probe::is_writer;
///
/// assert!(is_writer::<Writer<Vec<String>, i32>>());
/// assert!(is_writer::<LogOnly<String>>());
/// ```
///
/// ```compile_fail
/// use kleisli::probe::is_writer;
///
/// is_writer::<(Vec<String>, i32)>();
/// ```
#[cfg(feature = "effect")]
#[inline]
pub const fn is_writer<X: crate::effect::Logged>() -> bool {
    true
}

/// Brand-level check used by the static assertions below.
#[cfg(feature = "typeclass")]
const fn is_kind<K: Kind>() -> bool {
    true
}

#[cfg(feature = "typeclass")]
mod assertions {
    use super::{is_kind, is_monad, is_monadic, is_monoid, is_nested};
    use crate::typeclass::{Identity, IdentityKind, OptionKind, Product, Sum, VecKind};

    static_assertions::const_assert!(is_kind::<OptionKind>());
    static_assertions::const_assert!(is_monad::<OptionKind>());
    static_assertions::const_assert!(is_monad::<VecKind>());
    static_assertions::const_assert!(is_monad::<IdentityKind>());
    static_assertions::const_assert!(is_monadic::<Identity<String>>());
    static_assertions::const_assert!(is_monoid::<String>());
    static_assertions::const_assert!(is_monoid::<Product<f32>>());
    static_assertions::const_assert!(is_monoid::<(Sum<u8>, Vec<char>)>());
    static_assertions::const_assert!(is_nested::<Option<Option<bool>>>());
}
