//! Higher-Kinded Type emulation through brands and Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. Instead, each constructor gets a zero-sized *brand* type that
//! implements [`Kind`]; `OptionKind::Applied<T>` is `Option<T>`. Generic
//! code names constructors through their brand and concrete values link
//! back to it through [`TypeConstructor`].
//!
//! # Background
//!
//! Two directions are needed:
//!
//! - brand to value: [`Kind::Applied`], used when a monad produces values;
//! - value to brand: [`TypeConstructor::Constructor`], used to infer the
//!   monad from a value such as `Some(3)`.
//!
//! # Example
//!
//! ```rust
//! use kleisli::typeclass::{Applied, OptionKind, TypeConstructor, VecKind};
//!
//! fn same_constructor<X, Y>()
//! where
//!     X: TypeConstructor,
//!     Y: TypeConstructor<Constructor = X::Constructor>,
//! {
//! }
//!
//! same_constructor::<Option<i32>, Option<String>>();
//! same_constructor::<Vec<u8>, Applied<VecKind, char>>();
//!
//! let value: Applied<OptionKind, i32> = Some(3);
//! assert_eq!(value, Some(3));
//! ```

use std::fmt;

/// A type constructor, named by a zero-sized brand type.
///
/// # Laws
///
/// For every `T`, `Self::Applied<T>` links back to `Self` with payload `T`:
///
/// ```text
/// <Self::Applied<T> as TypeConstructor>::Constructor == Self
/// <Self::Applied<T> as TypeConstructor>::Inner == T
/// ```
///
/// The associated-type bound enforces both.
pub trait Kind: Sized {
    /// The constructor applied to `T`.
    type Applied<T>: TypeConstructor<Inner = T, Constructor = Self>;
}

/// The type constructor `K` applied to `T`.
pub type Applied<K, T> = <K as Kind>::Applied<T>;

/// A value built by a type constructor.
///
/// For example, `Option<i32>` has `Inner = i32` and
/// `Constructor = OptionKind`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a value of a known type constructor",
    label = "expected something like `Option<T>`, `Vec<T>` or `Writer<W, T>`"
)]
pub trait TypeConstructor: Sized {
    /// The type the constructor is applied to.
    type Inner;

    /// The brand of the constructor.
    type Constructor: Kind;

    /// Views `self` as the constructor applied to `Inner`.
    ///
    /// Every implementation returns `self`; the method only exists so that
    /// generic code can see `Self` as `Applied<Constructor, Inner>`.
    fn into_applied(self) -> Applied<Self::Constructor, Self::Inner>;
}

// =============================================================================
// Standard Library Brands
// =============================================================================

/// Brand for [`Option`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKind;

/// Brand for [`Vec`] viewed as the list monad.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecKind;

impl fmt::Debug for OptionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Option<_>")
    }
}

impl fmt::Debug for VecKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Vec<_>")
    }
}

impl Kind for OptionKind {
    type Applied<T> = Option<T>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type Constructor = OptionKind;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl Kind for VecKind {
    type Applied<T> = Vec<T>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type Constructor = VecKind;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Type-level tests (compile-time verification)
    // =========================================================================

    #[test]
    fn option_links_to_its_brand() {
        fn assert_shape<T: TypeConstructor<Inner = i32, Constructor = OptionKind>>() {}
        assert_shape::<Option<i32>>();
    }

    #[test]
    fn vec_links_to_its_brand() {
        fn assert_shape<T: TypeConstructor<Inner = String, Constructor = VecKind>>() {}
        assert_shape::<Vec<String>>();
    }

    #[test]
    fn nested_value_sees_outer_constructor() {
        fn assert_inner<T: TypeConstructor<Inner = Vec<i32>, Constructor = OptionKind>>() {}
        assert_inner::<Option<Vec<i32>>>();
    }

    #[test]
    fn applied_chain_stays_on_one_brand() {
        type Step1 = Applied<OptionKind, i32>;
        type Step2 = Applied<<Step1 as TypeConstructor>::Constructor, bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool, Constructor = OptionKind>>() {}
        assert_is_option_bool::<Step2>();
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn into_applied_is_identity_for_option(#[case] value: Option<i32>) {
        assert_eq!(value.into_applied(), value);
    }

    #[rstest]
    fn into_applied_is_identity_for_vec() {
        assert_eq!(vec![1, 2, 3].into_applied(), vec![1, 2, 3]);
    }

    #[rstest]
    fn brands_render_their_constructor() {
        assert_eq!(format!("{OptionKind:?}"), "Option<_>");
        assert_eq!(format!("{VecKind:?}"), "Vec<_>");
    }
}
