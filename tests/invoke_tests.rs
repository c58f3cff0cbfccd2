//! Integration tests for the invocation primitive.
//!
//! A method gives the same result for every receiver shape: owned,
//! borrowed, mutably borrowed, boxed and reference counted.

#![cfg(feature = "compose")]

use std::rc::Rc;
use std::sync::Arc;

use kleisli::compose::{Invoke, curry, field, invoke, method};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Account {
    owner: String,
    balance: i64,
}

impl Account {
    fn projected(&self, months: i64, rate: i64) -> i64 {
        self.balance
            .wrapping_add(self.balance.wrapping_mul(rate).wrapping_mul(months) / 100)
    }

    fn greeting(&self) -> String {
        format!("hello, {}", self.owner)
    }
}

fn account(balance: i64) -> Account {
    Account {
        owner: "ada".to_string(),
        balance,
    }
}

// =============================================================================
// Receiver shapes
// =============================================================================

proptest! {
    #[test]
    fn prop_method_result_is_receiver_independent(
        balance in -1_000_000i64..1_000_000,
        months in 0i64..120,
        rate in 0i64..20,
    ) {
        let projected = method::<Account, _>(Account::projected);
        let expected = account(balance).projected(months, rate);

        let mut mutable = account(balance);
        prop_assert_eq!(invoke(projected, (account(balance), months, rate)), expected);
        prop_assert_eq!(invoke(projected, (&account(balance), months, rate)), expected);
        prop_assert_eq!(invoke(projected, (&mut mutable, months, rate)), expected);
        prop_assert_eq!(invoke(projected, (Box::new(account(balance)), months, rate)), expected);
        prop_assert_eq!(invoke(projected, (Rc::new(account(balance)), months, rate)), expected);
        prop_assert_eq!(invoke(projected, (Arc::new(account(balance)), months, rate)), expected);
    }
}

#[rstest]
fn nullary_methods_take_only_the_receiver() {
    let greeting = method::<Account, _>(Account::greeting);
    assert_eq!(invoke(greeting, (Rc::new(account(1)),)), "hello, ada");
}

#[rstest]
fn fields_borrow_from_every_receiver_shape() {
    let owner = field(|account: &Account| &account.owner);
    let plain = account(3);
    let boxed = Box::new(account(3));
    let shared = Arc::new(account(3));

    assert_eq!(invoke(owner, (&plain,)), "ada");
    assert_eq!(invoke(owner, (&boxed,)), "ada");
    assert_eq!(invoke(owner, (&shared,)), "ada");
}

#[rstest]
fn field_results_live_as_long_as_the_receiver() {
    let balance = field(|account: &Account| &account.balance);
    let accounts = vec![account(5), account(8)];
    let balances: Vec<&i64> = accounts.iter().map(|item| invoke(balance, (item,))).collect();
    assert_eq!(balances, vec![&5, &8]);
}

#[rstest]
fn plain_callables_invoke_through_the_trait() {
    let concat = |left: String, right: &str| left + right;
    assert_eq!(concat.invoke(kleisli::args!["ab".to_string(), "cd"]), "abcd");
}

#[rstest]
fn invoked_methods_can_be_curried() {
    let projected = curry::<_, (_, kleisli::Args![Account, i64, i64])>(method::<Account, _>(
        Account::projected,
    ));
    let after_a_year = projected.call((account(1000), 12));
    assert_eq!(after_a_year.call((5,)), 1600);
}
