//! CLI support for tally
//!
//! Provides programmatic access to the tally CLI so the line-oriented modes
//! can be driven from any reader and writer.

mod docs;
mod report;
mod run;

pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use report::to_report;
pub use run::{execute_line, run_lines, RunOptions};

use std::io;

use crate::config::ConfigError;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Invalid evaluator configuration
    Config(ConfigError),
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Invalid configuration: {}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::UnknownCategory(c) => {
                write!(f, "Unknown category: '{}'\nRun 'tally docs' to see available categories.", c)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
