//! Writer Monad - computation with accumulated output.
//!
//! A `Writer<W, A>` pairs a payload `A` with a log `W`. The log type must be
//! a [`Monoid`]: a fresh value starts from `W::empty()`, and every chained
//! step combines the predecessor's log with the continuation's log, in that
//! order. Log contributions are never reordered, so a `Vec<String>` log
//! reads as an audit trail.
//!
//! A step that only writes to the log has payload `()`. [`LogOnly<W>`] names
//! that shape and [`tell`] builds it.
//!
//! | predecessor | continuation | result |
//! |---|---|---|
//! | `Writer<W, A>` | `Writer<W, B>` | `Writer<W, B>`, log `l1 + l2` |
//! | `Writer<W, A>` | `LogOnly<W>` | `LogOnly<W>`, log `l1 + l2` |
//! | `LogOnly<W>` | `LogOnly<W>` | `LogOnly<W>`, log `l1 + l2` |
//! | `LogOnly<W>` | `Writer<W, B>` | `Writer<W, B>`, log `l1 + l2` |
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `Writer::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Writer::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Log Laws
//!
//! - `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//! - `Writer::listen(tell(w))` exposes `w` as part of the payload
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::{Writer, run_writer, tell, writer};
//!
//! let computation = tell(vec!["start".to_string()])
//!     .then_with(|| writer(3, vec!["got 3".to_string()]))
//!     .flat_map(|n| writer(n + 4, vec!["added 4".to_string()]));
//!
//! let (result, log) = run_writer(computation);
//! assert_eq!(result, 7);
//! assert_eq!(log, vec!["start", "got 3", "added 4"]);
//! ```
//!
//! Writer is also a [`Monad`](crate::typeclass::Monad) through
//! [`WriterKind`], so the derived operations apply:
//!
//! ```rust
//! use kleisli::effect::{Writer, WriterKind, writer};
//! use kleisli::typeclass::{lift_m2, map};
//!
//! let doubled = map(|n: i32| n * 2, writer(21, String::from("a")));
//! assert_eq!(doubled, Writer::new(42, String::from("a")));
//!
//! let add = lift_m2::<WriterKind<String>, _, _, _, _>(|a: i32, b: i32| a + b);
//! let total = add.call((writer(1, String::from("x")), writer(2, String::from("y"))));
//! assert_eq!(total.run(), (3, String::from("xy")));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Kind, Monad, Monoid, Semigroup, TypeConstructor};

/// A payload accompanied by an accumulated log.
///
/// # Type Parameters
///
/// - `W`: The log type (a `Monoid` wherever logs are combined)
/// - `A`: The payload type; `()` for a log-only step
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::Writer;
///
/// let computation: Writer<Vec<String>, i32> = Writer::tell(vec!["log".to_string()])
///     .then(Writer::pure(42));
///
/// let (result, output) = computation.run();
/// assert_eq!(result, 42);
/// assert_eq!(output, vec!["log"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    /// The payload.
    result: A,
    /// The accumulated log.
    output: W,
}

/// A Writer step that only contributes to the log.
pub type LogOnly<W> = Writer<W, ()>;

impl<W, A> Writer<W, A> {
    /// Creates a new Writer with the given payload and log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["initial".to_string()]);
    /// assert_eq!(writer.eval(), 42);
    /// ```
    #[inline]
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Returns the payload and the log, cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["log".to_string()]);
    /// let (result, output) = writer.run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["log"]);
    /// ```
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.result.clone(), self.output.clone())
    }

    /// Returns the payload, cloned.
    pub fn eval(&self) -> A
    where
        A: Clone,
    {
        self.result.clone()
    }

    /// Returns the log, cloned.
    pub fn exec(&self) -> W
    where
        W: Clone,
    {
        self.output.clone()
    }

    /// Splits the Writer into its payload and log.
    #[inline]
    pub fn into_parts(self) -> (A, W) {
        (self.result, self.output)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.result
    }

    /// Borrows the log.
    #[inline]
    pub const fn log(&self) -> &W {
        &self.output
    }

    /// Wraps `value` with an empty log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::pure(42);
    /// let (result, output) = writer.run();
    /// assert_eq!(result, 42);
    /// assert!(output.is_empty());
    /// ```
    pub fn pure(value: A) -> Self
    where
        W: Monoid,
    {
        Self::new(value, W::empty())
    }

    /// Maps a function over the payload, keeping the log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(21, vec!["log".to_string()]);
    /// let (result, output) = writer.fmap(|value| value * 2).run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["log"]);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.result), self.output)
    }

    /// Feeds the payload into `function`, appending its log to this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(10, vec!["first".to_string()]);
    /// let chained =
    ///     writer.flat_map(|value| Writer::new(value * 2, vec!["second".to_string()]));
    /// assert_eq!(chained.run(), (20, vec!["first".to_string(), "second".to_string()]));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        W: Semigroup,
        F: FnOnce(A) -> Writer<W, B>,
    {
        let Self { result, output } = self;
        let next = function(result);
        Writer::new(next.result, output.combine(next.output))
    }

    /// Alias for [`Writer::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        W: Semigroup,
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.flat_map(function)
    }

    /// Discards the payload and continues with `next`, keeping both logs.
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B>
    where
        W: Semigroup,
    {
        self.flat_map(|_| next)
    }

    /// Combines two Writers' payloads with `function`; logs are combined in
    /// the order `self`, `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let first: Writer<String, i32> = Writer::new(10, "a".to_string());
    /// let second: Writer<String, i32> = Writer::new(20, "b".to_string());
    /// assert_eq!(first.map2(second, |a, b| a + b).run(), (30, "ab".to_string()));
    /// ```
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        W: Semigroup,
        F: FnOnce(A, B) -> C,
    {
        self.flat_map(|a| other.fmap(|b| function(a, b)))
    }

    /// Exposes the log accumulated so far as part of the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::new(1, "seen".to_string());
    /// let ((value, seen), log) = Writer::listen(writer).run();
    /// assert_eq!((value, seen.as_str(), log.as_str()), (1, "seen", "seen"));
    /// ```
    pub fn listen(computation: Self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let Self { result, output } = computation;
        Writer::new((result, output.clone()), output)
    }

    /// Rewrites the log of `computation` with `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["hello".to_string()]);
    /// let censored = Writer::censor(
    ///     |output: Vec<String>| output.into_iter().map(|s| s.to_uppercase()).collect(),
    ///     writer,
    /// );
    /// assert_eq!(censored.exec(), vec!["HELLO"]);
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        let Self { result, output } = computation;
        Self::new(result, modifier(output))
    }
}

impl<W> Writer<W, ()> {
    /// Creates a log-only step.
    #[inline]
    pub const fn tell(output: W) -> Self {
        Self::new((), output)
    }

    /// Continues a log-only step with a computation that takes no payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{exec_writer, tell};
    ///
    /// let audit = tell(String::from("a")).then_with(|| tell(String::from("b")));
    /// assert_eq!(exec_writer(audit), "ab");
    /// ```
    pub fn then_with<B, F>(self, next: F) -> Writer<W, B>
    where
        W: Semigroup,
        F: FnOnce() -> Writer<W, B>,
    {
        self.flat_map(|()| next())
    }
}

impl<W: Monoid, A: Default> Default for Writer<W, A> {
    fn default() -> Self {
        Self::pure(A::default())
    }
}

impl<W: fmt::Debug, A: fmt::Display> fmt::Display for Writer<W, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} with log {:?}", self.result, self.output)
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Creates a Writer with a payload and a log.
#[inline]
pub const fn writer<W, A>(value: A, log: W) -> Writer<W, A> {
    Writer::new(value, log)
}

/// Creates a log-only Writer.
#[inline]
pub const fn tell<W>(log: W) -> LogOnly<W> {
    Writer::tell(log)
}

/// Extracts the payload and the log.
///
/// ```rust
/// use kleisli::effect::{run_writer, writer};
///
/// assert_eq!(run_writer(writer('v', vec![1, 2])), ('v', vec![1, 2]));
/// ```
#[inline]
pub fn run_writer<W, A>(computation: Writer<W, A>) -> (A, W) {
    computation.into_parts()
}

/// Extracts the log only.
#[inline]
pub fn exec_writer<W, A>(computation: Writer<W, A>) -> W {
    computation.output
}

// =============================================================================
// Classification
// =============================================================================

/// A Writer value with a monoid log.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Writer value",
    label = "expected `Writer<W, A>` with `W: Monoid`"
)]
pub trait Logged: TypeConstructor {
    /// The log type.
    type Log: Monoid;
}

impl<W: Monoid, A> Logged for Writer<W, A> {
    type Log = W;
}

// =============================================================================
// Monad Instance
// =============================================================================

/// Brand for [`Writer`] with log type `W`.
pub struct WriterKind<W>(PhantomData<fn() -> W>);

impl<W> WriterKind<W> {
    /// Creates the brand value.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<W> Default for WriterKind<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for WriterKind<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for WriterKind<W> {}

impl<W> fmt::Debug for WriterKind<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Writer<{}, _>", std::any::type_name::<W>())
    }
}

impl<W> Kind for WriterKind<W> {
    type Applied<T> = Writer<W, T>;
}

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type Constructor = WriterKind<W>;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }
}

impl<W: Monoid> Monad for WriterKind<W> {
    #[inline]
    fn pure<A>(value: A) -> Writer<W, A> {
        Writer::pure(value)
    }

    #[inline]
    fn bind<A, B, F>(monadic: Writer<W, A>, continuation: F) -> Writer<W, B>
    where
        F: FnMut(A) -> Writer<W, B>,
    {
        monadic.flat_map(continuation)
    }
}

static_assertions::assert_impl_all!(WriterKind<Vec<String>>: Monad, Kind, Copy, Send, Sync);
static_assertions::assert_impl_all!(Writer<String, i32>: Logged, Clone, Send, Sync);
