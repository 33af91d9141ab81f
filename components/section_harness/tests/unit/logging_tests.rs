//! Tracing events emitted while running sections

use section_harness::{assert, section, CollectingSink};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.contents()
}

#[test]
fn test_outcomes_and_section_are_logged() {
    let out = capture(|| {
        let mut sink = CollectingSink::new();
        section(&mut sink, "logged", |t| {
            t.test("a", || Ok(()))?;
            t.test("b", || Ok(assert(false, "bad")?))
        })
        .unwrap();
    });

    assert!(out.contains("DEBUG"));
    assert!(out.contains("test finished"));
    assert!(out.contains("test=a"));
    assert!(out.contains("passed=true"));
    assert!(out.contains("passed=false"));
    assert!(out.contains("INFO"));
    assert!(out.contains("section complete"));
    assert!(out.contains("section=logged"));
}

#[test]
fn test_unexpected_error_is_logged_as_warning() {
    let out = capture(|| {
        let mut sink = CollectingSink::new();
        let result = section(&mut sink, "broken", |t| {
            t.test("x", || Err(anyhow::anyhow!("boom")))
        });
        assert!(result.is_err());
    });

    assert!(out.contains("WARN"));
    assert!(out.contains("unexpected error in test"));
    assert!(out.contains("error=boom"));
    assert!(!out.contains("section complete"));
}
