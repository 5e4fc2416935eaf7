//! Validate expressions against a schema document

use std::fs;
use std::path::PathBuf;

use super::CliError;
use crate::{ExpressionValidator, StateSchema, ValidationReport, output};

/// Where the schema document comes from
#[derive(Debug, Clone)]
pub enum SchemaSource {
    /// Path to a JSON file
    File(PathBuf),
    /// JSON text, e.g. read from stdin
    Inline(String),
}

impl SchemaSource {
    pub fn load(&self) -> Result<StateSchema, CliError> {
        let json = match self {
            SchemaSource::File(path) => fs::read_to_string(path)?,
            SchemaSource::Inline(json) => json.clone(),
        };
        Ok(StateSchema::from_json_str(&json)?)
    }
}

/// Output format for the check command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    PrettyJson,
}

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// The expression to validate
    pub expression: String,
    /// Schema document
    pub schema: Option<SchemaSource>,
    /// How to render the report
    pub format: OutputFormat,
}

/// Result of a check operation
#[derive(Debug)]
pub struct CheckResult {
    pub report: ValidationReport,
    /// Report rendered in the requested format
    pub rendered: String,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.report.is_valid
    }
}

/// Execute a statecheck check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let schema = options
        .schema
        .as_ref()
        .ok_or(CliError::NoSchema)?
        .load()?;

    let report = ExpressionValidator::new().validate(&options.expression, &schema)?;
    let rendered = match options.format {
        OutputFormat::Text => output::to_text(&report),
        OutputFormat::Json => output::to_json(&report),
        OutputFormat::PrettyJson => output::to_json_pretty(&report)?,
    };

    Ok(CheckResult { report, rendered })
}

/// Every schema id, one per line
pub fn list_ids(source: &SchemaSource) -> Result<String, CliError> {
    let schema = source.load()?;
    Ok(schema.flattened_ids().join("\n"))
}
