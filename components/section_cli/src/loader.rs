//! Report discovery and parsing
//!
//! An input holds any number of report records, either newline-delimited
//! or simply concatenated.

use crate::error::{ViewerError, ViewerResult};
use section_harness::SectionReport;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A source of report records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A report file
    File(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_report_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "json" || ext == "jsonl")
        .unwrap_or(false)
}

/// Resolve command line paths into inputs.
///
/// No paths means stdin. Files are taken as given; directories are walked
/// recursively for `.json` and `.jsonl` files in file name order.
pub fn collect_inputs(paths: &[PathBuf]) -> ViewerResult<Vec<Input>> {
    if paths.is_empty() {
        return Ok(vec![Input::Stdin]);
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && is_report_file(entry.path()) {
                    inputs.push(Input::File(entry.into_path()));
                }
            }
        } else {
            inputs.push(Input::File(path.clone()));
        }
    }
    debug!(count = inputs.len(), "collected report inputs");
    Ok(inputs)
}

/// Parse every report record in `text`
pub fn parse_reports(input: &str, text: &str) -> ViewerResult<Vec<SectionReport>> {
    serde_json::Deserializer::from_str(text)
        .into_iter::<SectionReport>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ViewerError::Parse {
            input: input.to_string(),
            source,
        })
}

fn read_input(input: &Input) -> ViewerResult<String> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| ViewerError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(text)
        }
        Input::File(path) => fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.clone(),
            source,
        }),
    }
}

/// Load the reports of every input, in input order
pub fn load_reports(inputs: &[Input]) -> ViewerResult<Vec<SectionReport>> {
    let mut reports = Vec::new();
    for input in inputs {
        let text = read_input(input)?;
        let parsed = parse_reports(&input.to_string(), &text)?;
        debug!(input = %input, sections = parsed.len(), "loaded reports");
        reports.extend(parsed);
    }
    Ok(reports)
}
