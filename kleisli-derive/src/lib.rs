//! Derive macros for kleisli monoids.
//!
//! A struct whose fields are all monoids is itself a monoid: `combine` is
//! applied field by field and `empty` is built from the identity of every
//! field. These macros write those two impls.
//!
//! # Available Derive Macros
//!
//! - [`Semigroup`]: field-wise `combine`
//! - [`Monoid`]: field-wise `empty` (requires `Semigroup` as well)
//!
//! # Example
//!
//! ```rust,ignore
//! use kleisli::typeclass::{Monoid, Semigroup, Sum};
//!
//! #[derive(Debug, PartialEq, Semigroup, Monoid)]
//! struct Audit {
//!     steps: Sum<u32>,
//!     lines: Vec<String>,
//! }
//!
//! let total = Audit::combine_all([
//!     Audit { steps: Sum(1), lines: vec!["a".into()] },
//!     Audit { steps: Sum(1), lines: vec!["b".into()] },
//! ]);
//! assert_eq!(total.steps, Sum(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod monoid;

use proc_macro::TokenStream;

/// Derive macro for `kleisli::typeclass::Semigroup`.
///
/// Works on structs with named fields, tuple structs and unit structs.
/// Every field type must be a `Semigroup`; a bound is added for each.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Semigroup for StructName {
///     fn combine(self, other: Self) -> Self {
///         Self { a: self.a.combine(other.a), b: self.b.combine(other.b) }
///     }
/// }
/// ```
///
/// Enums and unions are rejected: there is no single field-wise
/// combination for them.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    monoid::derive_semigroup_impl(input)
}

/// Derive macro for `kleisli::typeclass::Monoid`.
///
/// The identity is the struct with every field set to its own `empty()`.
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    monoid::derive_monoid_impl(input)
}
