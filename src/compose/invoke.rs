//! The uniform invocation primitive.
//!
//! Three shapes of callable share one trait:
//!
//! | Shape | Built with | Arguments |
//! |---|---|---|
//! | plain callable | any `FnOnce` | the parameters, in order |
//! | method | [`method::<S, _>(S::name)`](method) | a receiver, then the parameters |
//! | field projection | [`field(\|s: &S\| &s.x)`](field) | a borrowed receiver |
//!
//! A receiver may be given as `S`, `&S`, `&mut S`, `Box<S>`, `Rc<S>`,
//! `Arc<S>` or anything else implementing [`Borrow<S>`].
//!
//! Methods taking `&mut self` or `self` need no wrapper: `S::name` is
//! already a plain callable whose first parameter is the receiver.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use super::hlist::IntoArgs;

/// A callable that accepts the argument list `Args`.
///
/// # Examples
///
/// ```
/// use kleisli::args;
/// use kleisli::compose::Invoke;
///
/// let add = |first: i32, second: i32| first + second;
/// assert_eq!(add.invoke(args!(2, 3)), 5);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked with the argument list `{Args}`",
    label = "not invocable with these arguments",
    note = "plain callables take up to 8 arguments; wrap methods with `method::<Receiver, _>` and fields with `field`"
)]
pub trait Invoke<Args> {
    /// What the invocation returns.
    type Output;

    /// Calls `self` with `arguments`.
    fn invoke(self, arguments: Args) -> Self::Output;
}

/// Invokes `callable` with a tuple of arguments.
///
/// # Examples
///
/// ```
/// use kleisli::compose::invoke;
///
/// assert_eq!(invoke(|text: &str| text.len(), ("four",)), 4);
/// assert_eq!(invoke(i32::pow, (2, 10)), 1024);
/// assert_eq!(invoke(|| "nothing", ()), "nothing");
/// ```
///
/// Errors returned by the callable come back untouched:
///
/// ```
/// use kleisli::compose::invoke;
///
/// let parsed = invoke(str::parse::<u8>, ("300",));
/// assert!(parsed.is_err());
/// ```
#[inline]
pub fn invoke<F, Arguments>(
    callable: F,
    arguments: Arguments,
) -> <F as Invoke<Arguments::List>>::Output
where
    Arguments: IntoArgs,
    F: Invoke<Arguments::List>,
{
    callable.invoke(arguments.into_args())
}

// =============================================================================
// Plain callables
// =============================================================================

macro_rules! impl_invoke_for_callables {
    ($($parameter:ident),*) => {
        paste::paste! {
            impl<Function, R, $($parameter),*> Invoke<crate::Args![$($parameter),*]> for Function
            where
                Function: FnOnce($($parameter),*) -> R,
            {
                type Output = R;

                #[inline]
                fn invoke(self, arguments: crate::Args![$($parameter),*]) -> R {
                    let arg_pattern!($([<$parameter:lower>]),*) = arguments;
                    self($([<$parameter:lower>]),*)
                }
            }
        }
    };
}

impl_invoke_for_callables!();
impl_invoke_for_callables!(A1);
impl_invoke_for_callables!(A1, A2);
impl_invoke_for_callables!(A1, A2, A3);
impl_invoke_for_callables!(A1, A2, A3, A4);
impl_invoke_for_callables!(A1, A2, A3, A4, A5);
impl_invoke_for_callables!(A1, A2, A3, A4, A5, A6);
impl_invoke_for_callables!(A1, A2, A3, A4, A5, A6, A7);
impl_invoke_for_callables!(A1, A2, A3, A4, A5, A6, A7, A8);

// =============================================================================
// Methods
// =============================================================================

/// A method of `S` applied to a receiver passed as the first argument.
///
/// The wrapped function takes `&S` first. The receiver argument may be
/// any type that borrows as `S`; a receiver of an unrelated type does
/// not compile:
///
/// ```compile_fail
/// use kleisli::compose::{invoke, method};
///
/// struct Meters(f64);
/// struct Feet(f64);
///
/// impl Meters {
///     fn value(&self) -> f64 {
///         self.0
///     }
/// }
///
/// let value = method::<Meters, _>(Meters::value);
/// invoke(value, (Feet(3.0),));
/// ```
pub struct Method<F, S> {
    function: F,
    receiver: PhantomData<fn(&S)>,
}

/// Wraps `function` as a method of `S`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use kleisli::compose::{invoke, method};
///
/// struct Greeter {
///     name: String,
/// }
///
/// impl Greeter {
///     fn greet(&self, greeting: &str) -> String {
///         format!("{greeting}, {}", self.name)
///     }
/// }
///
/// let greet = method::<Greeter, _>(Greeter::greet);
/// let shared = Arc::new(Greeter { name: "Ada".to_string() });
///
/// assert_eq!(invoke(greet, (shared, "Hello")), "Hello, Ada");
/// ```
#[inline]
pub const fn method<S, F>(function: F) -> Method<F, S> {
    Method {
        function,
        receiver: PhantomData,
    }
}

impl<F: Clone, S> Clone for Method<F, S> {
    fn clone(&self) -> Self {
        method(self.function.clone())
    }
}

impl<F: Copy, S> Copy for Method<F, S> {}

impl<F, S> fmt::Debug for Method<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Method<{}>", std::any::type_name::<S>())
    }
}

macro_rules! impl_invoke_for_methods {
    ($($parameter:ident),*) => {
        paste::paste! {
            impl<Function, S, Receiver, R, $($parameter),*>
                Invoke<crate::Args![Receiver $(, $parameter)*]> for Method<Function, S>
            where
                Receiver: Borrow<S>,
                Function: FnOnce(&S $(, $parameter)*) -> R,
            {
                type Output = R;

                #[inline]
                fn invoke(self, arguments: crate::Args![Receiver $(, $parameter)*]) -> R {
                    let arg_pattern!(receiver $(, [<$parameter:lower>])*) = arguments;
                    (self.function)(Borrow::<S>::borrow(&receiver) $(, [<$parameter:lower>])*)
                }
            }
        }
    };
}

impl_invoke_for_methods!();
impl_invoke_for_methods!(A1);
impl_invoke_for_methods!(A1, A2);
impl_invoke_for_methods!(A1, A2, A3);
impl_invoke_for_methods!(A1, A2, A3, A4);
impl_invoke_for_methods!(A1, A2, A3, A4, A5);
impl_invoke_for_methods!(A1, A2, A3, A4, A5, A6);

// =============================================================================
// Field projections
// =============================================================================

/// A projection from `S` to one of its fields of type `T`.
///
/// Invoking it with a borrowed receiver returns a reference into that
/// receiver.
pub struct Field<F, S, T> {
    projection: F,
    shape: PhantomData<fn(&S) -> &T>,
}

/// Wraps `projection` as a field accessor.
///
/// # Examples
///
/// ```
/// use kleisli::compose::{field, invoke};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point = Point { x: 3, y: 4 };
/// let y = field(|point: &Point| &point.y);
///
/// assert_eq!(invoke(y, (&point,)), &4);
/// assert_eq!(invoke(y, (&Box::new(point),)), &4);
/// ```
#[inline]
pub const fn field<S, T, F>(projection: F) -> Field<F, S, T>
where
    F: Fn(&S) -> &T,
{
    Field {
        projection,
        shape: PhantomData,
    }
}

impl<F: Clone, S, T> Clone for Field<F, S, T> {
    fn clone(&self) -> Self {
        Self {
            projection: self.projection.clone(),
            shape: PhantomData,
        }
    }
}

impl<F: Copy, S, T> Copy for Field<F, S, T> {}

impl<F, S, T> fmt::Debug for Field<F, S, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Field<{} -> {}>",
            std::any::type_name::<S>(),
            std::any::type_name::<T>()
        )
    }
}

impl<'a, F, S, T, Receiver> Invoke<crate::Args![&'a Receiver]> for Field<F, S, T>
where
    Receiver: Borrow<S> + ?Sized,
    F: Fn(&S) -> &T,
    S: 'a,
    T: 'a,
{
    type Output = &'a T;

    #[inline]
    fn invoke(self, arguments: crate::Args![&'a Receiver]) -> &'a T {
        let arg_pattern!(receiver) = arguments;
        (self.projection)(Borrow::<S>::borrow(receiver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use rstest::rstest;
    use std::rc::Rc;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        count: u32,
        label: &'static str,
    }

    impl Counter {
        fn scaled(&self, factor: u32) -> u32 {
            self.count * factor
        }

        fn describe(&self) -> String {
            format!("{}={}", self.label, self.count)
        }

        fn increment(&mut self, step: u32) {
            self.count += step;
        }
    }

    fn sample() -> Counter {
        Counter {
            count: 7,
            label: "hits",
        }
    }

    #[rstest]
    fn nullary_callable() {
        assert_eq!((|| 11).invoke(args!()), 11);
    }

    #[rstest]
    fn eight_argument_callable() {
        let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
            a + b + c + d + e + f + g + h
        };
        assert_eq!(invoke(sum, (1, 2, 3, 4, 5, 6, 7, 8)), 36);
    }

    #[rstest]
    fn function_pointer_callable() {
        let negate: fn(i64) -> i64 = |value| -value;
        assert_eq!(invoke(negate, (5,)), -5);
    }

    #[rstest]
    fn callable_result_is_returned_unchanged() {
        let checked = |value: i32| if value > 0 { Ok(value) } else { Err("negative") };
        assert_eq!(invoke(checked, (-1,)), Err("negative"));
        assert_eq!(invoke(checked, (4,)), Ok(4));
    }

    #[rstest]
    fn method_accepts_every_receiver_shape() {
        let scaled = method::<Counter, _>(Counter::scaled);
        let mut owned_for_mut = sample();

        assert_eq!(invoke(scaled, (sample(), 3)), 21);
        assert_eq!(invoke(scaled, (&sample(), 3)), 21);
        assert_eq!(invoke(scaled, (&mut owned_for_mut, 3)), 21);
        assert_eq!(invoke(scaled, (Box::new(sample()), 3)), 21);
        assert_eq!(invoke(scaled, (Rc::new(sample()), 3)), 21);
        assert_eq!(invoke(scaled, (Arc::new(sample()), 3)), 21);
    }

    #[rstest]
    fn method_without_parameters() {
        let describe = method::<Counter, _>(Counter::describe);
        assert_eq!(invoke(describe, (&sample(),)), "hits=7");
    }

    #[rstest]
    fn mutating_method_is_a_plain_callable() {
        let mut counter = sample();
        invoke(Counter::increment, (&mut counter, 5));
        assert_eq!(counter.count, 12);
    }

    #[rstest]
    fn field_borrows_from_receiver() {
        let counter = sample();
        let label = field(|counter: &Counter| &counter.label);
        let count = field(|counter: &Counter| &counter.count);

        assert_eq!(*invoke(label, (&counter,)), "hits");
        assert_eq!(*invoke(count, (&Rc::new(sample()),)), 7);
        assert_eq!(*invoke(count, (&Arc::new(sample()),)), 7);
    }

    #[rstest]
    fn panics_propagate() {
        let outcome = std::panic::catch_unwind(|| invoke(|| -> u8 { panic!("boom") }, ()));
        assert!(outcome.is_err());
    }
}
