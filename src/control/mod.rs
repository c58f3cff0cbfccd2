//! Concrete containers that plug into the monad interface.
//!
//! - [`Maybe`]: an explicit `Just`/`Nothing` optional value, with brand
//!   [`MaybeKind`]
//! - [`EmptyAccessError`]: returned when the payload of an empty value is
//!   requested
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::{Maybe, MaybeKind};
//! use kleisli::typeclass::{lift_m, map};
//!
//! assert_eq!(map(|n: i32| n + 1, Maybe::Just(1)), Maybe::Just(2));
//!
//! let square = lift_m::<MaybeKind, _, _, _>(|n: i32| n * n);
//! assert_eq!(square.call((Maybe::Just(8),)).to_string(), "Just 64");
//! ```

mod error;
mod maybe;

pub use error::EmptyAccessError;
pub use maybe::{Maybe, MaybeKind};
