#![cfg(feature = "typeclass")]
//! Property-based tests for the conditional combinators.
//!
//! - **Truth tables**: `if_then_else`, `choose` and `bool_fold` agree with `if`
//! - **First match**: `cond` and friends return the value of the lowest
//!   index whose predicate holds
//! - **Identity**: `combine_if(false, x)` is the monoid identity
//! - **Involution**: `not_m(not_m(m)) == m`
//! - **Boolean agreement**: `or_m`, `and_m`, `xor_m` agree with `||`, `&&`, `!=`

use lambars_cond::conditional::{
    NoMatchingCondition, bool_fold, choose, combine_if, cond, cond_default, if_then_else,
    try_cond,
};
use lambars_cond::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_scalar_conditionals_agree_with_if(predicate in any::<bool>(), a in any::<i32>(), b in any::<i32>()) {
        let expected = if predicate { a } else { b };
        prop_assert_eq!(if_then_else(predicate, a, b), expected);
        prop_assert_eq!(choose(a, b, predicate), expected);
        prop_assert_eq!(bool_fold(b, a, predicate), expected);
    }

    #[test]
    fn prop_cond_returns_first_true_branch(predicates in prop::collection::vec(any::<bool>(), 1..20)) {
        prop_assume!(predicates.iter().any(|&predicate| predicate));
        let expected = predicates.iter().position(|&predicate| predicate);
        let branches = predicates.iter().copied().zip(0_usize..);
        prop_assert_eq!(Some(cond(branches)), expected);
    }

    #[test]
    fn prop_try_cond_matches_position(predicates in prop::collection::vec(any::<bool>(), 0..20)) {
        let expected = predicates
            .iter()
            .position(|&predicate| predicate)
            .ok_or(NoMatchingCondition);
        prop_assert_eq!(try_cond(predicates.iter().copied().zip(0_usize..)), expected);
    }

    #[test]
    fn prop_cond_default_only_used_without_match(predicates in prop::collection::vec(any::<bool>(), 0..20)) {
        let result = cond_default(usize::MAX, predicates.iter().copied().zip(0_usize..));
        if predicates.contains(&true) {
            prop_assert!(result < predicates.len());
        } else {
            prop_assert_eq!(result, usize::MAX);
        }
    }

    #[test]
    fn prop_combine_if_false_is_identity(flag in any::<bool>(), value in ".*", other in ".*") {
        let gated = combine_if(flag, value.clone());
        let combined = gated.combine(other.clone());
        let expected = if flag { value + &other } else { other };
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn prop_combine_if_false_yields_empty(value in prop::collection::vec(any::<u8>(), 0..10)) {
        prop_assert!(combine_if(false, value).is_empty_value());
    }
}

#[cfg(feature = "lifted")]
mod lifted_laws {
    use lambars_cond::conditional::{and_m, not_m, or_m, xor_m};
    use lambars_cond::typeclass::Identity;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_not_m_is_an_involution(value in any::<Option<bool>>()) {
            prop_assert_eq!(not_m(not_m(value)), value);
        }

        #[test]
        fn prop_boolean_operators_agree_with_native(left in any::<bool>(), right in any::<bool>()) {
            prop_assert_eq!(or_m(Identity(left), || Identity(right)), Identity(left || right));
            prop_assert_eq!(and_m(Identity(left), || Identity(right)), Identity(left && right));
            prop_assert_eq!(xor_m(Identity(left), || Identity(right)), Identity(left != right));
        }

        #[test]
        fn prop_or_m_on_options_matches_sequenced_or(left in any::<Option<bool>>(), right in any::<Option<bool>>()) {
            let expected = match left {
                None => None,
                Some(true) => Some(true),
                Some(false) => right,
            };
            prop_assert_eq!(or_m(left, || right), expected);
        }

        #[test]
        fn prop_and_m_on_options_matches_sequenced_and(left in any::<Option<bool>>(), right in any::<Option<bool>>()) {
            let expected = match left {
                None => None,
                Some(false) => Some(false),
                Some(true) => right,
            };
            prop_assert_eq!(and_m(left, || right), expected);
        }
    }
}

#[cfg(feature = "lifted")]
mod loop_laws {
    use lambars_cond::conditional::{do_while_m, while_m};
    use proptest::prelude::*;
    use std::cell::Cell;

    proptest! {
        #[test]
        fn prop_while_m_runs_body_exactly_limit_times(limit in 0_u32..500) {
            let runs = Cell::new(0_u32);
            let result = while_m(|| Some(runs.get() < limit), || Some(runs.set(runs.get() + 1)));
            prop_assert_eq!(result, Some(()));
            prop_assert_eq!(runs.get(), limit);
        }

        #[test]
        fn prop_do_while_m_runs_body_at_least_once(limit in 0_u32..500) {
            let runs = Cell::new(0_u32);
            let last = do_while_m(
                || Some(runs.get() < limit),
                || {
                    runs.set(runs.get() + 1);
                    Some(runs.get())
                },
            );
            let expected = limit.max(1);
            prop_assert_eq!(last, Some(expected));
            prop_assert_eq!(runs.get(), expected);
        }
    }
}

#[cfg(feature = "compose")]
mod compose_laws {
    use lambars_cond::conditional::conditional_compose;
    use lambars_cond::typeclass::{Category, Endo};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_disabled_step_is_identity(input in any::<i64>()) {
            let step = conditional_compose(false, Endo::new(|n: i64| n.wrapping_mul(3)));
            prop_assert_eq!(step.apply(input), input);
        }

        #[test]
        fn prop_enabled_step_is_the_step(input in any::<i64>()) {
            let step = conditional_compose(true, Endo::new(|n: i64| n.wrapping_mul(3)));
            prop_assert_eq!(step.apply(input), input.wrapping_mul(3));
        }

        #[test]
        fn prop_identity_is_neutral_for_compose(input in any::<i64>()) {
            let left = Endo::identity().compose(Endo::new(|n: i64| n.wrapping_sub(7)));
            let right = Endo::new(|n: i64| n.wrapping_sub(7)).compose(Endo::identity());
            prop_assert_eq!(left.apply(input), right.apply(input));
        }
    }
}
