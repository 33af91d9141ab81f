//! Assertion primitive
//!
//! A failed assertion is an ordinary error value. Test bodies propagate it
//! with `?`, and the test runner recognises it on the way out and records
//! it instead of aborting the section.

use std::fmt;
use thiserror::Error;

/// Signal raised when a checked condition is false
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    /// Create a failure carrying `message` verbatim
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied to the failed assertion
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the failure, returning its message
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Check `condition`, failing with `message` when it is false.
///
/// # Examples
///
/// ```
/// use section_harness::assert;
///
/// assert!(assert(1 + 1 == 2, "math works").is_ok());
///
/// let failure = assert(1 == 2, "bad").unwrap_err();
/// assert_eq!(failure.message(), "bad");
/// ```
pub fn assert(condition: bool, message: impl Into<String>) -> Result<(), AssertionFailure> {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(message))
    }
}

/// Check that `actual == expected`, failing with
/// `"expected: {expected}, got: {actual}"` otherwise.
pub fn assert_eq_values<T>(actual: T, expected: T) -> Result<(), AssertionFailure>
where
    T: PartialEq + fmt::Display,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionFailure::new(format!(
            "expected: {}, got: {}",
            expected, actual
        )))
    }
}

/// Return early from a test body with an [`AssertionFailure`] when the
/// condition is false. The message is only formatted on failure.
///
/// ```
/// use section_harness::check;
///
/// fn body(len: usize) -> anyhow::Result<()> {
///     check!(len == 5, "expected: 5, got: {}", len);
///     Ok(())
/// }
///
/// assert!(body(5).is_ok());
/// assert_eq!(body(4).unwrap_err().to_string(), "expected: 5, got: 4");
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(
                $crate::AssertionFailure::new(::std::format!($($arg)+)).into(),
            );
        }
    };
}
