//! Collected and fatal validation problems.
//!
//! A validation call owns one [`Diagnostics`] collector and lends it to the
//! lexer, the parser and the interpreter in turn, so a single call can report
//! problems found at every stage. Conditions that abort the call are
//! [`ValidationError`]s instead.

use std::slice;

use thiserror::Error;

use crate::ast::{BinOp, LogicalOp, TokenKind};

/// A non-fatal problem, recorded and reported alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Expression string was empty
    #[error("Malformed expression: expression is empty.")]
    EmptyExpression,

    /// Character outside the language
    #[error("Unexpected character '{character}' in expression {expression}")]
    UnexpectedCharacter { character: char, expression: String },

    /// String literal without a closing quote
    #[error("Unterminated string.")]
    UnterminatedString,

    /// Path that does not resolve against the schema
    #[error("Path '{0}' is not valid.")]
    InvalidPath(String),

    /// Grammar point with no expression
    #[error("Expect expression.")]
    ExpectExpression,

    /// Token left over once a complete expression has been read
    #[error("Unexpected '{0}' after expression.")]
    UnexpectedToken(String),

    /// Grouping without a closing parenthesis
    #[error("Expect ')' after expression.")]
    MissingClosingParen,

    /// Relational operator applied to non-number operands
    #[error(
        "The operators <, <=, > and >= can only be used for INTEGER and NUMBER types (got {left} {op} {right})."
    )]
    InvalidComparisonOperands {
        op: BinOp,
        left: TokenKind,
        right: TokenKind,
    },

    /// Equality operator applied to operands of different classes
    #[error(
        "The operators != and == can only be used between strings and null, booleans, or numbers (got {left} {op} {right})."
    )]
    InvalidEqualityOperands {
        op: BinOp,
        left: TokenKind,
        right: TokenKind,
    },

    /// Logical operator applied to non-boolean operands
    #[error("Not a valid boolean: {left} {op} {right}.")]
    InvalidLogicalOperands {
        op: LogicalOp,
        left: TokenKind,
        right: TokenKind,
    },

    /// Fault caught while walking the tree
    #[error("Malformed expression. Interpreter could not evaluate: {0}")]
    EvaluationFailed(String),
}

/// A condition that aborts the validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Parentheses do not balance
    #[error("Malformed expression '{expression}'. Parenthesis is not matching.")]
    MalformedExpression { expression: String },

    /// Bare word other than `true`, `false` or `null`
    #[error("Malformed expression '{expression}'. Unknown type '{identifier}'.")]
    UnknownExpressionType {
        identifier: String,
        expression: String,
    },

    /// Path resolves to a node without a literal kind
    #[error("State type '{node_type}' at path '{path}' is not valid")]
    UnsupportedPathType { path: String, node_type: String },
}

/// Append-only, ordered collector of [`Diagnostic`]s for one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("diagnostic recorded: {diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
