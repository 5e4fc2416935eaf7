//! Drives one expression through lexer, parser and interpreter.

use crate::{
    diagnostics::{Diagnostic, Diagnostics, ValidationError},
    evaluator::Interpreter,
    lexer::Lexer,
    parser::Parser,
    schema::StateSchema,
};

/// Outcome of a validation call that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// The expression type-checks to `TRUE` and nothing was recorded
    pub is_valid: bool,
    /// Problems collected along the way, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Checks state expressions against a schema.
///
/// Holds no per-call state, so one instance can be shared freely; each call
/// gets its own diagnostics and returns them in its report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionValidator;

impl ExpressionValidator {
    pub fn new() -> Self {
        ExpressionValidator
    }

    /// Type-checks `expression` against `schema`.
    ///
    /// `Err` means the call was aborted: unbalanced parentheses, an unknown
    /// word, or a path landing on an OBJECT/ARRAY node. Everything else is
    /// collected into the report.
    ///
    /// # Examples
    ///
    /// ```
    /// use statecheck::{ExpressionValidator, SchemaNode, StateSchema};
    ///
    /// let schema = StateSchema::new(SchemaNode::object([
    ///     ("age", SchemaNode::number()),
    ///     ("name", SchemaNode::string()),
    /// ]));
    ///
    /// let validator = ExpressionValidator::new();
    /// let report = validator
    ///     .validate("($.age >= 30) || ($.age < 40)", &schema)
    ///     .unwrap();
    /// assert!(report.is_valid);
    /// assert!(report.diagnostics.is_empty());
    ///
    /// assert!(validator.validate("($.name != John)", &schema).is_err());
    /// ```
    pub fn validate(
        &self,
        expression: &str,
        schema: &StateSchema,
    ) -> Result<ValidationReport, ValidationError> {
        log::debug!("validating expression {expression:?}");
        let mut diagnostics = Diagnostics::new();

        if expression.is_empty() {
            diagnostics.push(Diagnostic::EmptyExpression);
        }

        let tokens = Lexer::new(expression, &mut diagnostics)?.scan_tokens()?;
        let tree = Parser::new(tokens, schema, &mut diagnostics)?.parse();
        let checked = Interpreter::new(&mut diagnostics).interpret(tree.as_ref());
        // A recorded diagnostic fails the check even when the tree reduces to TRUE
        let is_valid = checked && diagnostics.is_empty();

        log::debug!(
            "expression {expression:?} is {} ({} diagnostics)",
            if is_valid { "valid" } else { "not valid" },
            diagnostics.len()
        );

        Ok(ValidationReport {
            is_valid,
            diagnostics: diagnostics.into_vec(),
        })
    }
}

/// Shorthand for [`ExpressionValidator::validate`].
pub fn validate(
    expression: &str,
    schema: &StateSchema,
) -> Result<ValidationReport, ValidationError> {
    ExpressionValidator::new().validate(expression, schema)
}
