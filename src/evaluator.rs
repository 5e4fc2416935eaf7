use thiserror::Error;

use crate::{
    ast::{BinOp, Expr, LogicalOp, TokenKind},
    diagnostics::{Diagnostic, Diagnostics},
};

/// Faults that stop a tree walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The parser left a hole where an operand should be
    #[error("missing operand")]
    MissingOperand,
}

/// Type-checking tree walker.
///
/// Every node reduces to a [`TokenKind`]: literals to their own kind, and
/// operators to `TRUE` when their operands are compatible or `FALSE` when
/// they are not. Literal values are never looked at.
pub struct Interpreter<'a> {
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Interpreter<'a> {
    pub fn new(diagnostics: &'a mut Diagnostics) -> Self {
        Interpreter { diagnostics }
    }

    /// Checks a whole tree.
    ///
    /// An absent tree is `false`; the parser has already said why. Faults
    /// during the walk are recorded and also give `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use statecheck::{BinOp, Diagnostics, Expr, Interpreter, TokenKind};
    ///
    /// let tree = Expr::binary(
    ///     Some(Expr::Literal(TokenKind::Number)),
    ///     BinOp::Greater,
    ///     Some(Expr::Literal(TokenKind::Number)),
    /// );
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// assert!(Interpreter::new(&mut diagnostics).interpret(Some(&tree)));
    /// assert!(diagnostics.is_empty());
    /// ```
    pub fn interpret(&mut self, expr: Option<&Expr>) -> bool {
        let Some(expr) = expr else {
            return false;
        };

        match self.evaluate(expr) {
            Ok(kind) => kind == TokenKind::True,
            Err(e) => {
                self.diagnostics
                    .push(Diagnostic::EvaluationFailed(e.to_string()));
                false
            }
        }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<TokenKind, EvalError> {
        match expr {
            Expr::Literal(kind) => Ok(*kind),
            Expr::Grouping(inner) => self.evaluate_operand(inner.as_deref()),
            Expr::Binary { left, op, right } => {
                let left = self.evaluate_operand(left.as_deref())?;
                let right = self.evaluate_operand(right.as_deref())?;
                Ok(truth(self.check_binary(*op, left, right)))
            }
            Expr::Logical { left, op, right } => {
                let left = self.evaluate_operand(left.as_deref())?;
                let right = self.evaluate_operand(right.as_deref())?;
                Ok(truth(self.check_logical(*op, left, right)))
            }
        }
    }

    fn evaluate_operand(&mut self, operand: Option<&Expr>) -> Result<TokenKind, EvalError> {
        match operand {
            Some(expr) => self.evaluate(expr),
            None => Err(EvalError::MissingOperand),
        }
    }

    fn check_binary(&mut self, op: BinOp, left: TokenKind, right: TokenKind) -> bool {
        if op.is_relational() {
            let valid = left.is_number_class() && right.is_number_class();
            if !valid {
                self.diagnostics
                    .push(Diagnostic::InvalidComparisonOperands { op, left, right });
            }
            return valid;
        }

        let valid = (left.is_string_or_nil() && right.is_string_or_nil())
            || (left.is_boolean_class() && right.is_boolean_class())
            || (left.is_number_class() && right.is_number_class());
        if !valid {
            self.diagnostics
                .push(Diagnostic::InvalidEqualityOperands { op, left, right });
        }
        valid
    }

    /// `&&` and `||` reduce the same way: both sides must be booleans and
    /// neither may be `FALSE`.
    fn check_logical(&mut self, op: LogicalOp, left: TokenKind, right: TokenKind) -> bool {
        let booleans = left.is_boolean_class() && right.is_boolean_class();
        if !booleans {
            self.diagnostics
                .push(Diagnostic::InvalidLogicalOperands { op, left, right });
            return false;
        }
        left != TokenKind::False && right != TokenKind::False
    }
}

fn truth(valid: bool) -> TokenKind {
    if valid {
        TokenKind::True
    } else {
        TokenKind::False
    }
}
