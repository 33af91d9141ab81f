//! End-to-End Integration Tests
//!
//! Runs sections through the harness into a JSON-lines file, then loads and
//! renders that file with the viewer.

use clap::Parser as ClapParser;
use section_cli::{run, Cli};
use section_harness::{
    assert, assert_eq_values, check, ConsoleRenderer, Harness, JsonLinesSink,
};
use std::fs::File;
use tempfile::TempDir;
use termcolor::Buffer;

fn run_fixture_sections(harness: &mut Harness<JsonLinesSink<File>>) {
    harness
        .section("number", |t| {
            t.test("parseInt parses integer", || {
                let n: i64 = "42".parse()?;
                Ok(assert_eq_values(n, 42)?)
            })?;
            t.test("division by zero is infinite", || {
                let x = 1.0_f64 / 0.0;
                check!(x.is_infinite(), "expected: Infinity, got: {}", x);
                Ok(())
            })?;
            t.test("NaN equals itself", || {
                let nan = f64::NAN;
                #[allow(clippy::eq_op)]
                let same = nan == nan;
                Ok(assert(same, "expected NaN == NaN to be true")?)
            })
        })
        .unwrap();

    // Aborted by an unexpected error: never reaches the file
    let aborted = harness.section("functions", |t| {
        t.test("call", || Ok(()))?;
        t.test("parse", || {
            let _: i64 = "not a number".parse()?;
            Ok(())
        })?;
        t.test("never runs", || Ok(()))
    });
    assert!(aborted.is_err());

    harness
        .section("null", |t| {
            t.test("None is none", || {
                let value: Option<i32> = None;
                Ok(assert(value.is_none(), "expected None")?)
            })
        })
        .unwrap();
}

/// Test: harness output is rendered by the viewer
#[test]
fn test_e2e_harness_to_viewer() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.jsonl");

    let mut harness = Harness::new(JsonLinesSink::new(File::create(&path).unwrap()));
    run_fixture_sections(&mut harness);
    let harness_summary = harness.finish();

    let cli = Cli::try_parse_from(["section-report", "--color", "never", path.to_str().unwrap()])
        .unwrap();
    let mut out = Buffer::no_color();
    let viewer_summary = run(&cli, &mut out).unwrap();

    assert_eq!(viewer_summary, harness_summary);
    assert_eq!(viewer_summary.sections, 2);
    assert_eq!(viewer_summary.total, 4);
    assert_eq!(viewer_summary.failed, 1);

    let rendered = String::from_utf8(out.into_inner()).unwrap();
    assert_eq!(
        rendered,
        "// running 4 tests in 2 sections:\n\n\
         // number\n\
         \x20 - parseInt parses integer\n\
         \x20 - division by zero is infinite\n\
         \x20 - NaN equals itself\n\
         \x20     reason: expected NaN == NaN to be true\n\n\
         // null\n\
         \x20 - None is none\n\n"
    );
    assert!(!rendered.contains("functions"));
}

/// Test: the console renderer works as a live sink
#[test]
fn test_e2e_console_sink() {
    let mut harness = Harness::new(ConsoleRenderer::new(Buffer::no_color()));
    harness
        .section("arrow functions", |t| {
            t.test("returns expression value", || {
                let func = || 123;
                Ok(assert_eq_values(func(), 123)?)
            })
        })
        .unwrap();

    let (renderer, summary) = harness.into_parts();
    assert!(summary.is_success());
    let out = String::from_utf8(renderer.into_inner().into_inner()).unwrap();
    assert_eq!(out, "// arrow functions\n  - returns expression value\n\n");
}

/// Test: an unexpected error bubbles to the caller as the original error
#[test]
fn test_e2e_unexpected_error_type_is_preserved() {
    let mut harness = Harness::new(ConsoleRenderer::new(Buffer::no_color()));
    let err = harness
        .section("s", |t| {
            t.test("parse", || {
                let _: i64 = "x".parse()?;
                Ok(())
            })
        })
        .unwrap_err();

    assert!(err.downcast_ref::<std::num::ParseIntError>().is_some());
    let (renderer, _) = harness.into_parts();
    assert!(renderer.into_inner().into_inner().is_empty());
}

/// Test: anyhow context on an assertion keeps it soft
#[test]
fn test_e2e_assertion_with_context_stays_soft() {
    use anyhow::Context;

    let mut harness = Harness::new(ConsoleRenderer::new(Buffer::no_color()));
    harness
        .section("s", |t| {
            t.test("wrapped", || {
                assert(false, "inner").context("while checking")?;
                Ok(())
            })
        })
        .unwrap();

    let summary = harness.finish();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failures[0].message, "inner");
}
