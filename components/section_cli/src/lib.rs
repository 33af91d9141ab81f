//! Section Report Viewer
//!
//! Loads section reports emitted as JSON records and renders them to the
//! console, or folds them into a run summary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod loader;
pub mod telemetry;
pub mod viewer;

pub use cli::{Cli, ColorMode};
pub use error::{ViewerError, ViewerResult};
pub use loader::{collect_inputs, load_reports, parse_reports, Input};
pub use viewer::run;
