//! Invocation and currying.
//!
//! This module provides the two primitives every derived operation in the
//! crate is built from:
//!
//! - [`invoke`]: call anything callable with a tuple of arguments. Plain
//!   functions and closures, methods applied to a receiver in any ownership
//!   shape ([`method`]), and field projections ([`field`]) all go through
//!   the single [`Invoke`] trait.
//! - [`curry`]: wrap a callable so its arguments can be supplied across any
//!   number of calls. The wrapped function runs as soon as the last
//!   parameter arrives; until then every call returns a new [`Curried`]
//!   value holding the arguments captured so far.
//!
//! Whether a call completes or stays partial is decided by the types alone,
//! so there is no runtime check and no boxing.
//!
//! # Helper Function
//!
//! - [`identity`]: returns its argument unchanged
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use kleisli::compose::curry;
//!
//! let volume = curry(|width: u32, height: u32, depth: u32| width * height * depth);
//!
//! let flat = volume.call((2, 3));
//! assert_eq!(flat.call((4,)), 24);
//!
//! // Any split point gives the same answer.
//! assert_eq!(volume.call((2,)).call((3, 4)), 24);
//! assert_eq!(volume.call((2, 3, 4)), 24);
//! ```
//!
//! ## Methods and Fields
//!
//! ```
//! use std::rc::Rc;
//! use kleisli::compose::{field, invoke, method};
//!
//! struct Account {
//!     balance: i64,
//! }
//!
//! impl Account {
//!     fn projected(&self, deposit: i64) -> i64 {
//!         self.balance + deposit
//!     }
//! }
//!
//! let account = Account { balance: 100 };
//! let projected = method::<Account, _>(Account::projected);
//!
//! assert_eq!(invoke(projected, (&account, 5)), 105);
//! assert_eq!(invoke(projected, (Rc::new(Account { balance: 1 }), 5)), 6);
//!
//! let balance = field(|account: &Account| &account.balance);
//! assert_eq!(*invoke(balance, (&account,)), 100);
//! ```

/// Destructuring pattern for an argument list of plain identifiers.
macro_rules! arg_pattern {
    () => { $crate::compose::HNil };
    ($head:ident $(, $tail:ident)* $(,)?) => {
        $crate::compose::HCons($head, arg_pattern!($($tail),*))
    };
}

mod curry;
mod hlist;
mod invoke;
mod utils;

pub use curry::{
    Appended, Apply, CallOutput, Curried, Curry, IsCurried, IsFunction, Remaining, Resolve, curry,
};
pub use hlist::{Append, ArgList, HCons, HNil, IntoArgs, Supply};
pub use invoke::{Field, Invoke, Method, field, invoke, method};
pub use utils::identity;
