//! Integration tests for the Writer effect.
//!
//! Exercises the four predecessor/continuation transitions, the observers,
//! and lifting plain functions into Writer.

#![cfg(feature = "effect")]

use kleisli::effect::{
    LogOnly, Writer, WriterKind, exec_writer, run_writer, tell, writer,
};
use kleisli::probe::is_writer;
use kleisli::typeclass::{Monoid, Product, Sum, bind, lift_m, lift_m2, pure};
use rstest::rstest;

type Log = Vec<String>;

fn line(text: &str) -> Log {
    vec![text.to_string()]
}

fn log_number(number: i32) -> Writer<Log, i32> {
    writer(number, line(&format!("Got number: {number}")))
}

// =============================================================================
// Transitions
// =============================================================================

#[rstest]
fn valued_then_valued() {
    let result = log_number(1).flat_map(|n| writer(n + 1, line("bumped")));
    assert_eq!(run_writer(result), (2, vec!["Got number: 1".to_string(), "bumped".to_string()]));
}

#[rstest]
fn valued_then_log_only() {
    let result: LogOnly<Log> = log_number(1).flat_map(|n| tell(line(&format!("saw {n}"))));
    assert_eq!(exec_writer(result), vec!["Got number: 1", "saw 1"]);
}

#[rstest]
fn log_only_then_log_only() {
    let result = tell(line("a")).then_with(|| tell(line("b")));
    assert_eq!(run_writer(result), ((), vec!["a".to_string(), "b".to_string()]));
}

#[rstest]
fn log_only_then_valued() {
    let result = tell(line("start")).then_with(|| log_number(9));
    assert_eq!(run_writer(result), (9, vec!["start".to_string(), "Got number: 9".to_string()]));
}

// =============================================================================
// End to end
// =============================================================================

#[rstest]
fn chained_steps_accumulate_in_order() {
    let start: Writer<Log, i32> = writer(3, Vec::new());
    let step1 = start.flat_map(|n| writer(n + 1, line("step1")));
    let step2 = step1.flat_map(|n| writer(n * 2, line("step2")));

    let (value, log) = run_writer(step2);
    assert_eq!(value, 8);
    assert_eq!(log, vec!["step1", "step2"]);
}

#[rstest]
fn lifted_addition_keeps_both_announcements() {
    let add = lift_m2::<WriterKind<Log>, _, _, _, _>(|a: i32, b: i32| a + b);

    let computation = tell(line("Starting computation..."))
        .then_with(|| add.call((log_number(3), log_number(4))))
        .flat_map(|result| writer(result, line(&format!("Result is: {result}"))));

    let (result, log) = run_writer(computation);
    assert_eq!(result, 7);
    assert_eq!(
        log,
        vec![
            "Starting computation...",
            "Got number: 3",
            "Got number: 4",
            "Result is: 7",
        ]
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(42)]
fn counting_log_counts_every_bind(#[case] steps: u32) {
    let count_operation = |payload: &'static str| writer(payload, Sum(1_u32));
    let computation = (0..steps).fold(writer("answer", Sum(0_u32)), |computation, _| {
        bind(computation, count_operation)
    });
    assert_eq!(run_writer(computation), ("answer", Sum(steps)));
}

#[rstest]
fn product_log_multiplies() {
    let scale = lift_m::<WriterKind<Product<u64>>, _, _, _>(|n: u64| n + 1);
    let computation = writer(1_u64, Product(2)).flat_map(|n| scale.call((writer(n, Product(5)),)));
    assert_eq!(computation.run(), (2, Product(10)));
}

#[rstest]
fn pure_starts_from_the_empty_log() {
    let wrapped = pure::<WriterKind<String>, _>('x');
    assert_eq!(wrapped.exec(), String::empty());
    assert_eq!(wrapped.eval(), 'x');
}

// =============================================================================
// Observers and helpers
// =============================================================================

#[rstest]
fn observers_do_not_consume() {
    let computation = log_number(5);
    assert_eq!(computation.eval(), 5);
    assert_eq!(computation.exec(), line("Got number: 5"));
    assert_eq!(computation.run(), (5, line("Got number: 5")));
    assert_eq!(computation.value(), &5);
    assert_eq!(computation.log(), &line("Got number: 5"));
}

#[rstest]
fn listen_then_censor() {
    let listened = Writer::listen(log_number(2));
    let ((value, seen), _) = listened.run();
    assert_eq!((value, seen), (2, line("Got number: 2")));

    let censored = Writer::censor(|log: Log| log.into_iter().rev().collect(), log_number(1).then(log_number(2)));
    assert_eq!(censored.exec(), vec!["Got number: 2", "Got number: 1"]);
}

#[rstest]
fn writers_are_classified() {
    assert!(is_writer::<Writer<Log, i32>>());
    assert!(is_writer::<LogOnly<Sum<u8>>>());
}
