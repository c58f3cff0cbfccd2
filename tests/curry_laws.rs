//! Property-based tests for the currying engine.
//!
//! ## Laws
//! - Split invariance: for every way of splitting the arguments into
//!   batches, the curried call equals the direct call
//! - Re-currying: `curry(curry(f))` behaves as `curry(f)`
//! - `lift_m2(f).call((x,)).call((y,)) == lift_m2(f).call((x, y))`

#![cfg(feature = "typeclass")]

use kleisli::compose::curry;
use kleisli::typeclass::{OptionKind, VecKind, lift_m2};
use proptest::prelude::*;

fn weighted(first: i64, second: i64, third: i64, fourth: i64) -> i64 {
    first
        .wrapping_mul(1)
        .wrapping_add(second.wrapping_mul(10))
        .wrapping_add(third.wrapping_mul(100))
        .wrapping_add(fourth.wrapping_mul(1000))
}

// =============================================================================
// Split Invariance
// =============================================================================

proptest! {
    #[test]
    fn prop_every_split_matches_direct_call(
        first in any::<i64>(),
        second in any::<i64>(),
        third in any::<i64>(),
        fourth in any::<i64>(),
    ) {
        let direct = weighted(first, second, third, fourth);
        let curried = curry(weighted);

        prop_assert_eq!(curried.call((first, second, third, fourth)), direct);
        prop_assert_eq!(curried.call((first,)).call((second, third, fourth)), direct);
        prop_assert_eq!(curried.call((first, second)).call((third, fourth)), direct);
        prop_assert_eq!(curried.call((first, second, third)).call((fourth,)), direct);
        prop_assert_eq!(curried.call((first,)).call((second,)).call((third, fourth)), direct);
        prop_assert_eq!(curried.call((first,)).call((second, third)).call((fourth,)), direct);
        prop_assert_eq!(curried.call((first, second)).call((third,)).call((fourth,)), direct);
        prop_assert_eq!(
            curried.call((first,)).call((second,)).call((third,)).call((fourth,)),
            direct
        );
    }

    #[test]
    fn prop_recurrying_is_identity(first in any::<i64>(), rest in any::<(i64, i64, i64)>()) {
        let (second, third, fourth) = rest;
        let partial = curry(weighted).call((first,));
        prop_assert_eq!(
            curry(partial).call((second, third, fourth)),
            partial.call((second, third, fourth))
        );
    }

    #[test]
    fn prop_partials_are_independent(base in any::<i64>(), left in any::<i64>(), right in any::<i64>()) {
        let shared = curry(weighted).call((base, base));
        prop_assert_eq!(shared.call((left, right)), weighted(base, base, left, right));
        prop_assert_eq!(shared.call((right, left)), weighted(base, base, right, left));
    }
}

// =============================================================================
// Lifted Batching
// =============================================================================

proptest! {
    #[test]
    fn prop_lift_m2_batching_over_option(first in any::<Option<i32>>(), second in any::<Option<i32>>()) {
        let add = lift_m2::<OptionKind, _, _, _, _>(|a: i32, b: i32| a.wrapping_add(b));
        prop_assert_eq!(add.call_ref((first,)).call((second,)), add.call_ref((first, second)));
    }

    #[test]
    fn prop_lift_m2_batching_over_vec(
        first in prop::collection::vec(any::<i16>(), 0..5),
        second in prop::collection::vec(any::<i16>(), 0..5),
    ) {
        let add = lift_m2::<VecKind, _, _, _, _>(|a: i16, b: i16| a.wrapping_add(b));
        prop_assert_eq!(
            add.call_ref((first.clone(),)).call((second.clone(),)),
            add.call_ref((first.clone(), second.clone()))
        );
        prop_assert_eq!(add.call((first.clone(), second.clone())).len(), first.len() * second.len());
    }
}
