//! CLI support for statecheck
//!
//! Provides programmatic access to the statecheck CLI functionality for
//! embedding in other tools.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, OutputFormat, SchemaSource, execute_check, list_ids};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Validation aborted
    #[error("Validation error: {0}")]
    Validation(#[from] crate::ValidationError),
    /// Schema document could not be read
    #[error("Schema error: {0}")]
    Schema(#[from] crate::SchemaError),
    /// Report could not be rendered
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No schema provided
    #[error("No schema provided. Use --schema or pipe the schema JSON to stdin.")]
    NoSchema,
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'statecheck docs' to see available categories.")]
    UnknownCategory(String),
}
