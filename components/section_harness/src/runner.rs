//! Test unit runner
//!
//! [`TestRegistrar`] owns the outcome list of one section while its
//! registration callback runs. Each [`TestRegistrar::test`] call runs one
//! body to completion and records exactly one outcome, unless the body
//! raises something other than an [`AssertionFailure`].

use crate::assertion::AssertionFailure;
use crate::report::{SectionReport, TestOutcome};
use tracing::{debug, warn};

/// Registers and runs the tests of a single section
#[derive(Debug)]
pub struct TestRegistrar {
    section: String,
    outcomes: Vec<TestOutcome>,
}

impl TestRegistrar {
    pub(crate) fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            outcomes: Vec::new(),
        }
    }

    /// Run `body` now and record its outcome under `name`.
    ///
    /// An assertion failure is recorded as a failed outcome and `Ok(())` is
    /// returned. Any other error is returned unchanged with nothing
    /// recorded; propagating it with `?` ends the section. Panics unwind
    /// through untouched.
    pub fn test<F>(&mut self, name: impl Into<String>, body: F) -> anyhow::Result<()>
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        let name = name.into();

        match body() {
            Ok(()) => {
                debug!(section = %self.section, test = %name, passed = true, "test finished");
                self.outcomes.push(TestOutcome::pass(name));
                Ok(())
            }
            Err(error) => match error.downcast::<AssertionFailure>() {
                Ok(failure) => {
                    debug!(section = %self.section, test = %name, passed = false, "test finished");
                    self.outcomes
                        .push(TestOutcome::fail(name, failure.into_message()));
                    Ok(())
                }
                Err(error) => {
                    warn!(section = %self.section, test = %name, error = %error, "unexpected error in test");
                    Err(error)
                }
            },
        }
    }

    /// Name of the section being registered
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Outcomes recorded so far, in registration order
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub(crate) fn into_report(self) -> SectionReport {
        SectionReport::new(self.section, self.outcomes)
    }
}
