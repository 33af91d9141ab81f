//! Section reports and run summaries

use serde::{Deserialize, Serialize};

/// Outcome of a single registered test.
///
/// A message is present exactly when the test failed; the constructors are
/// the only way to build one, and deserialization rejects records that
/// break this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOutcome")]
pub struct TestOutcome {
    #[serde(rename = "test")]
    name: String,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Deserialize)]
struct RawOutcome {
    test: String,
    passed: bool,
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<RawOutcome> for TestOutcome {
    type Error = String;

    fn try_from(raw: RawOutcome) -> Result<Self, Self::Error> {
        match (raw.passed, raw.message) {
            (true, None) => Ok(TestOutcome::pass(raw.test)),
            (false, Some(message)) => Ok(TestOutcome::fail(raw.test, message)),
            (true, Some(_)) => Err(format!("passing test '{}' carries a message", raw.test)),
            (false, None) => Err(format!("failing test '{}' has no message", raw.test)),
        }
    }
}

impl TestOutcome {
    /// Outcome of a test whose body completed
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: None,
        }
    }

    /// Outcome of a test whose body failed an assertion
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: Some(message.into()),
        }
    }

    /// Test name as registered
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the test passed
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Assertion message of a failed test
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Report emitted once per completed section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    /// Section name
    #[serde(rename = "section")]
    name: String,
    /// Outcomes in registration order
    #[serde(rename = "results")]
    outcomes: Vec<TestOutcome>,
}

impl SectionReport {
    /// Create a report from outcomes already in registration order
    pub fn new(name: impl Into<String>, outcomes: Vec<TestOutcome>) -> Self {
        Self {
            name: name.into(),
            outcomes,
        }
    }

    /// Section name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outcomes in registration order
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// Consume the report, returning its outcomes
    pub fn into_outcomes(self) -> Vec<TestOutcome> {
        self.outcomes
    }

    /// Number of recorded outcomes
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the section recorded no outcomes
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of passing tests
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of failing tests
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    /// Failing outcomes in registration order
    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// Check if every recorded test passed
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(TestOutcome::passed)
    }
}

/// A failed test, qualified by its section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Section the test belongs to
    pub section: String,
    /// Test name
    pub test: String,
    /// Assertion message
    pub message: String,
}

/// Aggregate statistics over any number of section reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of sections reported
    pub sections: usize,
    /// Total number of recorded tests
    pub total: usize,
    /// Number of tests that passed
    pub passed: usize,
    /// Number of tests that failed
    pub failed: usize,
    /// Every failure, in report order
    pub failures: Vec<FailureRecord>,
}

impl RunSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a summary from a sequence of reports
    pub fn from_reports<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a SectionReport>,
    {
        let mut summary = Self::new();
        for report in reports {
            summary.add_section(report);
        }
        summary
    }

    /// Fold one section report into the summary
    pub fn add_section(&mut self, report: &SectionReport) {
        self.sections += 1;
        for outcome in report.outcomes() {
            self.total += 1;
            match outcome.message() {
                None => self.passed += 1,
                Some(message) => {
                    self.failed += 1;
                    self.failures.push(FailureRecord {
                        section: report.name().to_string(),
                        test: outcome.name().to_string(),
                        message: message.to_string(),
                    });
                }
            }
        }
    }

    /// Calculate the pass rate as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Check if no recorded test failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Sections: {}\n\
             Total: {}\n\
             Passed: {} ({:.1}%)\n\
             Failed: {}",
            self.sections,
            self.total,
            self.passed,
            self.pass_rate(),
            self.failed
        )
    }

    /// Merge another summary into this one
    pub fn merge(&mut self, other: &RunSummary) {
        self.sections += other.sections;
        self.total += other.total;
        self.passed += other.passed;
        self.failed += other.failed;
        self.failures.extend(other.failures.iter().cloned());
    }

    /// Export summary as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import summary from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
