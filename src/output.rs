//! Rendering of validation reports.
//!
//! # Examples
//!
//! ```
//! use statecheck::{ValidationReport, output::to_json};
//!
//! let report = ValidationReport { is_valid: true, diagnostics: vec![] };
//! assert_eq!(to_json(&report), r#"{"valid":true,"diagnostics":[]}"#);
//! ```

use serde_json::{Value, json};

use crate::validator::ValidationReport;

pub fn to_value(report: &ValidationReport) -> Value {
    json!({
        "valid": report.is_valid,
        "diagnostics": report.messages(),
    })
}

/// Compact JSON.
pub fn to_json(report: &ValidationReport) -> String {
    to_value(report).to_string()
}

/// Two-space indented JSON.
pub fn to_json_pretty(report: &ValidationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_value(report))
}

/// Human-readable summary, one diagnostic per line.
///
/// ```text
/// Expression is not valid.
///   - Path '$.height' is not valid.
/// ```
pub fn to_text(report: &ValidationReport) -> String {
    let mut out = String::from(if report.is_valid {
        "Expression is valid."
    } else {
        "Expression is not valid."
    });
    for message in report.messages() {
        out.push_str("\n  - ");
        out.push_str(&message);
    }
    out
}
