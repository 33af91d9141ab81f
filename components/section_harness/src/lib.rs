//! Section Test Harness
//!
//! A small synchronous harness for registering named test cases in
//! sections, recording assertion failures per test and emitting one
//! structured report per completed section.
//!
//! ```
//! use section_harness::{assert, check, CollectingSink, Harness};
//!
//! let mut harness = Harness::new(CollectingSink::new());
//! harness
//!     .section("array", |t| {
//!         t.test("length", || {
//!             let a = vec![0; 5];
//!             check!(a.len() == 5, "expected: 5, got: {}", a.len());
//!             Ok(())
//!         })?;
//!         t.test("push", || {
//!             let mut a = Vec::new();
//!             a.push(123);
//!             assert(a[0] == 123, "expected pushed value to be 123")?;
//!             Ok(())
//!         })
//!     })
//!     .unwrap();
//!
//! let (sink, summary) = harness.into_parts();
//! assert_eq!(sink.reports().len(), 1);
//! assert!(summary.is_success());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assertion;
pub mod console;
pub mod error;
pub mod report;
pub mod runner;
pub mod section;
pub mod sink;

pub use assertion::{assert, assert_eq_values, AssertionFailure};
pub use console::{ConsoleRenderer, RenderOptions};
pub use error::{HarnessError, SinkError};
pub use report::{FailureRecord, RunSummary, SectionReport, TestOutcome};
pub use runner::TestRegistrar;
pub use section::{section, Harness};
pub use sink::{CollectingSink, JsonLinesSink, ReportSink};
