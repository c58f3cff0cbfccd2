#![cfg(feature = "tracing")]

//! Tests for the `TRACE` events emitted by the currying engine.

use std::io;
use std::sync::{Arc, Mutex};

use kleisli::compose::curry;
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("capture buffer poisoned"))?
            .extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_events(body: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, body);
    capture.contents()
}

#[test]
fn partial_application_reports_captured_and_pending_counts() {
    let output = capture_events(|| {
        let partial = curry(|a: i32, b: i32, c: i32| a + b + c).call((1,));
        assert_eq!(partial.pending_len(), 2);
    });

    assert!(output.contains("curried function partially applied"));
    assert!(output.contains("captured=1"));
    assert!(output.contains("pending=2"));
    assert!(!output.contains("saturated"));
}

#[test]
fn saturation_reports_arity() {
    let output = capture_events(|| {
        assert_eq!(curry(|a: i32, b: i32| a * b).call((6, 7)), 42);
    });

    assert!(output.contains("curried function saturated"));
    assert!(output.contains("arity=2"));
}
