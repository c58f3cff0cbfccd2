//! The currying engine.
//!
//! [`curry`] turns any callable into a [`Curried`] value that accepts its
//! arguments in batches. Each call appends the batch to the captured
//! arguments and matches it against the parameters still pending:
//!
//! - nothing left pending: the function is invoked and its result returned;
//! - parameters left: a new [`Curried`] value holding the longer captured
//!   list is returned.
//!
//! The choice is made by [`Resolve`] on the remaining parameter list, so the
//! return type of every call is known at compile time.
//!
//! # Examples
//!
//! ```
//! use kleisli::compose::curry;
//!
//! fn greet(greeting: &str, name: &str, punctuation: char) -> String {
//!     format!("{greeting}, {name}{punctuation}")
//! }
//!
//! let hello = curry(greet).call(("Hello",));
//! assert_eq!(hello.call(("world", '!')), "Hello, world!");
//! assert_eq!(hello.call(("Rust",)).call(('?',)), "Hello, Rust?");
//! ```
//!
//! Supplying more arguments than the function still needs is rejected:
//!
//! ```compile_fail
//! use kleisli::compose::curry;
//!
//! let add = curry(|first: i32, second: i32| first + second);
//! add.call((1, 2, 3));
//! ```
//!
//! and so is an argument of the wrong type:
//!
//! ```compile_fail
//! use kleisli::compose::curry;
//!
//! let add = curry(|first: i32, second: i32| first + second);
//! add.call(("one",));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::hlist::{Append, ArgList, HCons, HNil, IntoArgs, Supply};
use super::invoke::Invoke;

/// The parameters left pending after supplying `Batch`.
pub type Remaining<Pending, Batch> = <Pending as Supply<Batch>>::Rest;

/// The captured arguments after appending `Batch`.
pub type Appended<Captured, Batch> = <Captured as Append<Batch>>::Output;

/// What [`Curried::call`] returns for a given batch.
pub type CallOutput<F, Pending, Captured, Batch> =
    <Remaining<Pending, Batch> as Resolve<F, Appended<Captured, Batch>>>::Output;

/// A callable together with the arguments captured so far.
///
/// `Pending` lists the parameter types still missing and `Captured` holds
/// the supplied arguments in application order.
pub struct Curried<F, Pending, Captured> {
    function: F,
    captured: Captured,
    pending: PhantomData<fn() -> Pending>,
}

impl<F, Pending, Captured> Curried<F, Pending, Captured> {
    const fn with_captured(function: F, captured: Captured) -> Self {
        Self {
            function,
            captured,
            pending: PhantomData,
        }
    }

    /// Supplies a batch of arguments.
    ///
    /// Returns the function's result once every parameter has been
    /// supplied, and a new partially applied value otherwise. A batch longer
    /// than the remaining parameters does not compile; the surplus is never
    /// dropped or carried into the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use kleisli::compose::curry;
    ///
    /// let clamp = curry(|low: i32, high: i32, value: i32| value.clamp(low, high));
    /// let percent = clamp.call((0, 100));
    ///
    /// assert_eq!(percent.call((150,)), 100);
    /// assert_eq!(percent.call((-5,)), 0);
    /// ```
    ///
    /// ```compile_fail
    /// use kleisli::compose::curry;
    ///
    /// let clamp = curry(|low: i32, high: i32, value: i32| value.clamp(low, high));
    /// clamp.call((0, 100)).call((150, 7));
    /// ```
    #[inline]
    pub fn call<Batch>(self, batch: Batch) -> CallOutput<F, Pending, Captured, Batch::List>
    where
        Batch: IntoArgs,
        Pending: Supply<Batch::List>,
        Captured: Append<Batch::List>,
        Remaining<Pending, Batch::List>: Resolve<F, Appended<Captured, Batch::List>>,
    {
        let captured = self.captured.append(batch.into_args());
        <Remaining<Pending, Batch::List> as Resolve<F, _>>::resolve(self.function, captured)
    }

    /// Supplies a batch without consuming `self`.
    ///
    /// ```
    /// use kleisli::compose::curry;
    ///
    /// let label = String::from("total");
    /// let format = curry(|label: String, value: u32| format!("{label}: {value}"));
    /// let total = format.call((label,));
    ///
    /// assert_eq!(total.call_ref((1,)), "total: 1");
    /// assert_eq!(total.call_ref((2,)), "total: 2");
    /// ```
    #[inline]
    pub fn call_ref<Batch>(&self, batch: Batch) -> CallOutput<F, Pending, Captured, Batch::List>
    where
        Self: Clone,
        Batch: IntoArgs,
        Pending: Supply<Batch::List>,
        Captured: Append<Batch::List>,
        Remaining<Pending, Batch::List>: Resolve<F, Appended<Captured, Batch::List>>,
    {
        self.clone().call(batch)
    }

    /// Supplies a single argument; the same as `call((argument,))`.
    #[inline]
    pub fn apply<A>(self, argument: A) -> CallOutput<F, Pending, Captured, crate::Args![A]>
    where
        Pending: Supply<crate::Args![A]>,
        Captured: Append<crate::Args![A]>,
        Remaining<Pending, crate::Args![A]>: Resolve<F, Appended<Captured, crate::Args![A]>>,
    {
        self.call((argument,))
    }

    /// Total number of parameters of the underlying function.
    #[inline]
    pub const fn arity(&self) -> usize
    where
        Pending: ArgList,
        Captured: ArgList,
    {
        Captured::LEN + Pending::LEN
    }

    /// Number of arguments captured so far.
    #[inline]
    pub const fn captured_len(&self) -> usize
    where
        Captured: ArgList,
    {
        Captured::LEN
    }

    /// Number of parameters still missing.
    #[inline]
    pub const fn pending_len(&self) -> usize
    where
        Pending: ArgList,
    {
        Pending::LEN
    }
}

impl<F: Clone, Pending, Captured: Clone> Clone for Curried<F, Pending, Captured> {
    fn clone(&self) -> Self {
        Self::with_captured(self.function.clone(), self.captured.clone())
    }
}

impl<F: Copy, Pending, Captured: Copy> Copy for Curried<F, Pending, Captured> {}

impl<F, Pending, Captured: fmt::Debug> fmt::Debug for Curried<F, Pending, Captured> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("captured", &self.captured)
            .field("pending", &std::any::type_name::<Pending>())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Decides what supplying arguments produces, by the remaining parameters.
///
/// Implemented for [`HNil`] (invoke with everything captured) and for
/// [`HCons`] (stay partially applied).
pub trait Resolve<F, Captured> {
    /// The function's result, or the next [`Curried`] value.
    type Output;

    /// Produces the output from the function and the captured arguments.
    fn resolve(function: F, captured: Captured) -> Self::Output;
}

impl<F, Captured> Resolve<F, Captured> for HNil
where
    F: Invoke<Captured>,
    Captured: ArgList,
{
    type Output = F::Output;

    #[inline]
    fn resolve(function: F, captured: Captured) -> Self::Output {
        trace_event!(arity = Captured::LEN, "curried function saturated");
        function.invoke(captured)
    }
}

impl<F, Captured, H, T> Resolve<F, Captured> for HCons<H, T>
where
    Captured: ArgList,
    T: ArgList,
{
    type Output = Curried<F, Self, Captured>;

    #[inline]
    fn resolve(function: F, captured: Captured) -> Self::Output {
        trace_event!(
            captured = Captured::LEN,
            pending = Self::LEN,
            "curried function partially applied"
        );
        Curried::with_captured(function, captured)
    }
}

// =============================================================================
// Curry
// =============================================================================

/// Marker selecting the [`Curry`] impl for plain callables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsFunction;

/// Marker selecting the [`Curry`] impl for values that are already curried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsCurried;

/// Conversion into a [`Curried`] value.
///
/// `Marker` only keeps the two impls apart and is always inferred.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be curried",
    label = "expected a callable with annotated parameter types, or a curried value",
    note = "closure parameters need explicit types, e.g. `|x: i32| x + 1`"
)]
pub trait Curry<Marker> {
    /// The curried form.
    type Curried;

    /// Performs the conversion.
    fn curry(self) -> Self::Curried;
}

impl<F, Args> Curry<(IsFunction, Args)> for F
where
    F: Invoke<Args>,
    Args: ArgList,
{
    type Curried = Curried<F, Args, HNil>;

    #[inline]
    fn curry(self) -> Self::Curried {
        Curried::with_captured(self, HNil)
    }
}

impl<F, Pending, Captured> Curry<IsCurried> for Curried<F, Pending, Captured> {
    type Curried = Self;

    #[inline]
    fn curry(self) -> Self {
        self
    }
}

/// Curries `callable`.
///
/// Currying a value that is already curried returns it unchanged.
///
/// # Examples
///
/// ```
/// use kleisli::compose::curry;
///
/// let add = curry(|first: i32, second: i32| first + second);
/// let add_ten = curry(add.call((10,)));
///
/// assert_eq!(add_ten.call((5,)), 15);
/// assert_eq!(curry(|| 7).call(()), 7);
/// ```
#[inline]
pub fn curry<T, Marker>(callable: T) -> T::Curried
where
    T: Curry<Marker>,
{
    callable.curry()
}

/// Supplying a single argument, as a trait for generic code.
///
/// [`ap`](crate::typeclass::ap) needs to feed payloads into a curried
/// function without knowing whether the result completes.
pub trait Apply<A> {
    /// The result of supplying the argument.
    type Output;

    /// Supplies `argument`.
    fn apply(self, argument: A) -> Self::Output;
}

impl<F, Pending, Captured, A> Apply<A> for Curried<F, Pending, Captured>
where
    Pending: Supply<crate::Args![A]>,
    Captured: Append<crate::Args![A]>,
    Remaining<Pending, crate::Args![A]>: Resolve<F, Appended<Captured, crate::Args![A]>>,
{
    type Output = CallOutput<F, Pending, Captured, crate::Args![A]>;

    #[inline]
    fn apply(self, argument: A) -> Self::Output {
        self.call((argument,))
    }
}
