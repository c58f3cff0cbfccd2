//! # kleisli
//!
//! Automatic currying and a monad interface derived from a single `bind`,
//! resolved entirely at compile time.
//!
//! ## Overview
//!
//! - **Currying**: [`curry`](compose::curry) wraps any callable; arguments
//!   may be supplied across any number of calls, and the function runs as
//!   soon as the last parameter arrives.
//! - **Invocation**: [`invoke`](compose::invoke) calls plain callables,
//!   methods against any receiver shape, and field projections uniformly.
//! - **Type Classes**: a [`Monad`](typeclass::Monad) is any type-constructor
//!   brand with `pure` and `bind`; `map`, `ap`, `join`, `lift_m` and
//!   `lift_m2` are derived from those alone.
//! - **Writer Effect**: a payload with a monoid log accumulated strictly
//!   left to right.
//! - **Probes**: `const fn` predicates that only type-check when a
//!   capability holds.
//!
//! ## Feature Flags
//!
//! - `compose`: invocation primitive and currying engine
//! - `typeclass`: monad interface, monoids and probes
//! - `control`: the [`Maybe`](control::Maybe) optional
//! - `effect`: the [`Writer`](effect::Writer) effect
//! - `derive`: `#[derive(Semigroup, Monoid)]`
//! - `serde`: serialization for the data types
//! - `tracing`: `TRACE` events from the currying engine
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::prelude::*;
//!
//! let add = curry(|first: i32, second: i32| first + second);
//! assert_eq!(add.call((1,)).call((2,)), 3);
//!
//! let sum = lift_m2::<OptionKind, _, _, _, _>(|first: i32, second: i32| first + second);
//! assert_eq!(sum.call((Some(41), Some(1))), Some(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "compose")]
    pub use crate::probe::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "compose")]
pub mod probe;
