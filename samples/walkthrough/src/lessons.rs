//! The walkthrough computations.
//!
//! Every lesson returns its result so that it can be checked; `main` only
//! reports them.

use std::ops::{Add, Mul};

use kleisli::control::{EmptyAccessError, Maybe, MaybeKind};
use kleisli::effect::{LogOnly, Writer, WriterKind, run_writer, tell, writer};
use kleisli::typeclass::{Sum, VecKind, bind, lift_m, lift_m2, pure};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced while running the walkthrough.
#[derive(Debug, Error)]
pub enum WalkthroughError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A lesson produced `Nothing` where a value was expected.
    #[error("lesson produced no value: {0}")]
    Empty(#[from] EmptyAccessError),
}

/// The audit trail written by the logged addition.
pub type AuditLog = Vec<String>;

fn square<T: Mul<Output = T> + Copy>(value: T) -> T {
    value * value
}

fn plus<T: Add<Output = T>>(first: T, second: T) -> T {
    first + second
}

// =============================================================================
// Maybe
// =============================================================================

/// Squares a `Maybe`.
pub fn square_maybe(value: Maybe<i32>) -> Maybe<i32> {
    lift_m::<MaybeKind, _, _, _>(square::<i32>).call((value,))
}

/// Adds two `Maybe`s, passing the arguments one at a time.
pub fn sum_maybe<T>(first: Maybe<T>, second: Maybe<T>) -> Maybe<T>
where
    T: Add<Output = T> + Clone,
{
    lift_m2::<MaybeKind, _, _, _, _>(plus::<T>)
        .call((first,))
        .call((second,))
}

/// Squares both arguments, then adds them.
pub fn sum_of_squares_maybe(first: Maybe<i32>, second: Maybe<i32>) -> Maybe<i32> {
    sum_maybe(square_maybe(first), square_maybe(second))
}

/// The sum of squares as a plain number.
///
/// # Errors
///
/// Returns [`WalkthroughError::Empty`] when either argument is `Nothing`.
pub fn sum_of_squares_value(first: Maybe<i32>, second: Maybe<i32>) -> Result<i32, WalkthroughError> {
    Ok(sum_of_squares_maybe(first, second).from_maybe()?)
}

// =============================================================================
// Vec
// =============================================================================

/// Squares every element.
pub fn square_list(values: Vec<i32>) -> Vec<i32> {
    lift_m::<VecKind, _, _, _>(square::<i32>).call((values,))
}

/// Adds every element of `first` to every element of `second`.
pub fn sum_list<T>(first: Vec<T>, second: Vec<T>) -> Vec<T>
where
    T: Add<Output = T> + Clone,
{
    lift_m2::<VecKind, _, _, _, _>(plus::<T>).call((first, second))
}

/// Joins every prefix with every suffix.
pub fn concat_list(prefixes: Vec<String>, suffixes: Vec<String>) -> Vec<String> {
    lift_m2::<VecKind, _, _, _, _>(|prefix: String, suffix: String| prefix + &suffix)
        .call((prefixes, suffixes))
}

/// Squares both lists, then adds them element by element.
pub fn sum_of_squares_list(first: Vec<i32>, second: Vec<i32>) -> Vec<i32> {
    sum_list(square_list(first), square_list(second))
}

/// The lone-value list `[value]`.
pub fn singleton(value: i32) -> Vec<i32> {
    pure::<VecKind, _>(value)
}

// =============================================================================
// Writer
// =============================================================================

fn log_line(line: String) -> AuditLog {
    pure::<VecKind, _>(line)
}

/// A number with a log line announcing it.
pub fn log_number(number: i32) -> Writer<AuditLog, i32> {
    writer(number, log_line(format!("Got number: {number}")))
}

/// Adds two logged numbers; both announcements stay in the log.
pub fn log_addition(first: i32, second: i32) -> Writer<AuditLog, i32> {
    lift_m2::<WriterKind<AuditLog>, _, _, _, _>(plus::<i32>)
        .call((log_number(first), log_number(second)))
}

/// Announces the start, adds the numbers and records the result.
pub fn audited_addition(first: i32, second: i32) -> (i32, AuditLog) {
    let start: LogOnly<AuditLog> = tell(log_line("Starting computation...".to_string()));

    let computation = start
        .then_with(|| log_addition(first, second))
        .flat_map(|result| writer(result, log_line(format!("Result is: {result}"))));

    run_writer(computation)
}

/// Binds `steps` times with a step that counts itself in the log.
pub fn count_steps(steps: u32) -> (&'static str, Sum<u32>) {
    let count_operation = |payload: &'static str| writer(payload, Sum(1));

    let computation = (0..steps).fold(
        writer("the answer to life, the universe and everything", Sum(0)),
        |computation, _| bind(computation, count_operation),
    );

    run_writer(computation)
}
