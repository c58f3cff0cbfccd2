//! Type class traits and the operations derived from them.
//!
//! - [`Monad`]: a type-constructor brand with `pure` and `bind`
//! - [`map`], [`ap`], [`join`], [`lift_m`], [`lift_m2`]: derived from
//!   `bind` and `pure` for every instance
//! - [`Semigroup`] and [`Monoid`]: combinable values, used as Writer logs
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. Each type
//! constructor is named by a zero-sized brand ([`OptionKind`], [`VecKind`],
//! [`IdentityKind`], ...) implementing [`Kind`], whose generic associated
//! type `Applied<T>` gives the constructor applied to `T`. Values link back
//! to their brand through [`TypeConstructor`], so the derived operations
//! infer the monad from their arguments.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: the identity monad
//! - [`Sum`], [`Product`]: numeric wrappers picking the monoid operation
//!
//! # Examples
//!
//! ## Derived operations
//!
//! ```rust
//! use kleisli::typeclass::{OptionKind, ap, join, lift_m2, map};
//!
//! assert_eq!(map(|n: i32| n + 1, Some(1)), Some(2));
//! assert_eq!(ap(Some(|n: i32| n * 3), Some(2)), Some(6));
//! assert_eq!(join(Some(Some('x'))), Some('x'));
//!
//! let sum = lift_m2::<OptionKind, _, _, _, _>(|a: i32, b: i32| a + b);
//! assert_eq!(sum.call((Some(1),)).call((Some(2),)), Some(3));
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use kleisli::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{ApOutput, ap, lift_m, lift_m2};
pub use functor::map;
pub use higher::{Applied, Kind, OptionKind, TypeConstructor, VecKind};
pub use identity::{Identity, IdentityKind};
pub use monad::{Monad, Nested, bind, join, pure};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};

/// Derives [`Semigroup`] by combining every field.
///
/// ```rust
/// use kleisli::typeclass::{Monoid, Semigroup, Sum};
///
/// #[derive(Debug, PartialEq, Semigroup, Monoid)]
/// struct Stats {
///     visits: Sum<u32>,
///     pages: Vec<String>,
/// }
///
/// let first = Stats { visits: Sum(1), pages: vec!["/".into()] };
/// let second = Stats { visits: Sum(2), pages: vec!["/about".into()] };
///
/// assert_eq!(
///     first.combine(second),
///     Stats { visits: Sum(3), pages: vec!["/".into(), "/about".into()] }
/// );
/// assert_eq!(Stats::empty(), Stats { visits: Sum(0), pages: vec![] });
/// ```
#[cfg(feature = "derive")]
pub use kleisli_derive::Semigroup;

/// Derives [`Monoid`] from the identity of every field.
#[cfg(feature = "derive")]
pub use kleisli_derive::Monoid;
