//! Property-based tests for Functor laws.
//!
//! `map` is derived from `bind` and `pure`, so these laws hold for every
//! monad instance shipped with the crate:
//!
//! - **Identity Law**: `map(|x| x, fa) == fa`
//! - **Composition Law**: `map(g, map(f, fa)) == map(|x| g(f(x)), fa)`

#![cfg(all(feature = "control", feature = "effect"))]

use kleisli::compose::identity;
use kleisli::control::Maybe;
use kleisli::effect::{Writer, writer};
use kleisli::typeclass::{Identity, map};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn writer_strategy() -> impl Strategy<Value = Writer<Vec<String>, i32>> {
    (any::<i32>(), prop::collection::vec("[a-z]{1,4}", 0..4))
        .prop_map(|(value, log)| writer(value, log))
}

// =============================================================================
// Option<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(map(|x: i32| x, value), value);
    }

    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = map(function2, map(function1, value));
        let right = map(move |x: i32| function2(function1(x)), value);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_string_composition_law(value in any::<Option<String>>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = map(function2, map(function1, value.clone()));
        let right = map(move |x: String| function2(function1(x)), value);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Vec<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert_eq!(map(identity::<i32>, values.clone()), values);
    }

    #[test]
    fn prop_vec_composition_law(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| i64::from(n) * 3;

        let left = map(function2, map(function1, values.clone()));
        let right = map(move |x: i32| function2(function1(x)), values);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_map_preserves_length(values in prop::collection::vec(any::<u8>(), 0..20)) {
        prop_assert_eq!(map(|n: u8| n.to_string(), values.clone()).len(), values.len());
    }
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(map(|x: i32| x, value), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| n.rem_euclid(11);

        let left = map(function2, map(function1, value));
        let right = map(move |x: i32| function2(function1(x)), value);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Identity<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_identity_law(value in any::<i32>()) {
        prop_assert_eq!(map(|x: i32| x, Identity(value)), Identity(value));
    }

    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(100);
        let function2 = |n: i32| n.count_ones();

        let left = map(function2, map(function1, Identity(value)));
        let right = map(move |x: i32| function2(function1(x)), Identity(value));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Writer<W, A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_writer_identity_law(computation in writer_strategy()) {
        prop_assert_eq!(map(|x: i32| x, computation.clone()), computation);
    }

    #[test]
    fn prop_writer_composition_law(computation in writer_strategy()) {
        let function1 = |n: i32| n.wrapping_neg();
        let function2 = |n: i32| n.to_string();

        let left = map(function2, map(function1, computation.clone()));
        let right = map(move |x: i32| function2(function1(x)), computation);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_writer_map_keeps_the_log(computation in writer_strategy()) {
        let mapped = map(|n: i32| i64::from(n) * 2, computation.clone());
        prop_assert_eq!(mapped.exec(), computation.exec());
    }
}
