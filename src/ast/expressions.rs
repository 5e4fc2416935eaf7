use crate::ast::{BinOp, LogicalOp, TokenKind};

/// An operand slot in the tree.
///
/// `None` marks a point where the parser expected an expression and found
/// none; the parser has already recorded a diagnostic for it.
pub type Operand = Option<Box<Expr>>;

/// Expression tree produced by the parser.
///
/// Literals keep only their kind: the checker never looks at values.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal or resolved path
    ///
    /// # Example
    /// ```text
    /// "John"      // Literal(STRING)
    /// $.age       // Literal(NUMBER) once resolved
    /// ```
    Literal(TokenKind),

    /// Parenthesized expression
    ///
    /// # Example
    /// ```text
    /// ($.age >= 30)
    /// ```
    Grouping(Operand),

    /// Equality or relational comparison
    ///
    /// # Example
    /// ```text
    /// $.age >= 30
    /// $.name != null
    /// ```
    Binary {
        left: Operand,
        op: BinOp,
        right: Operand,
    },

    /// `&&` / `||`
    Logical {
        left: Operand,
        op: LogicalOp,
        right: Operand,
    },
}

impl Expr {
    pub fn grouping(inner: Option<Expr>) -> Self {
        Expr::Grouping(inner.map(Box::new))
    }

    pub fn binary(left: Option<Expr>, op: BinOp, right: Option<Expr>) -> Self {
        Expr::Binary {
            left: left.map(Box::new),
            op,
            right: right.map(Box::new),
        }
    }

    pub fn logical(left: Option<Expr>, op: LogicalOp, right: Option<Expr>) -> Self {
        Expr::Logical {
            left: left.map(Box::new),
            op,
            right: right.map(Box::new),
        }
    }
}
