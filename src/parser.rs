//! Recursive-descent parser.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression → or ;
//! or         → and ( "||" and )* ;
//! and        → equality ( "&&" equality )* ;
//! equality   → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison → primary ( ( ">" | ">=" | "<" | "<=" ) primary )* ;
//! primary    → TRUE | FALSE | BOOLEAN | NIL | NUMBER | STRING | JSON_PATH
//!            | "(" expression ")" ;
//! ```
//!
//! Paths are resolved against the schema before any rule runs, so the
//! grammar only ever sees literal kinds. A path that does not resolve stays
//! `JSON_PATH` and fails later, at the operator that uses it.

use crate::{
    ast::{BinOp, Expr, LogicalOp, Token, TokenKind},
    diagnostics::{Diagnostic, Diagnostics, ValidationError},
    schema::{SchemaKind, SchemaNode, StatePath, StateSchema},
};

pub struct Parser<'a> {
    tokens: Vec<Token>,
    current: usize,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Parser<'a> {
    /// Resolves every path token against `schema` and prepares to parse.
    pub fn new(
        tokens: Vec<Token>,
        schema: &StateSchema,
        diagnostics: &'a mut Diagnostics,
    ) -> Result<Self, ValidationError> {
        let mut tokens = resolve_paths(&tokens, schema, diagnostics)?;
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            tokens.push(Token::eof());
        }

        Ok(Parser {
            tokens,
            current: 0,
            diagnostics,
        })
    }

    /// Parses one expression; `None` when nothing could be parsed.
    ///
    /// Tokens after a complete expression are left unread, and the first of
    /// them is recorded.
    pub fn parse(&mut self) -> Option<Expr> {
        let expr = self.parse_expression();
        if !self.is_at_end() {
            let lexeme = self.tokens[self.current].lexeme.clone();
            self.diagnostics.push(Diagnostic::UnexpectedToken(lexeme));
        }
        expr
    }

    fn peek(&self) -> TokenKind {
        self.tokens
            .get(self.current)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    fn is_at_end(&self) -> bool {
        self.peek() == TokenKind::Eof
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek() == kind
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Option<Expr> {
        let mut left = self.parse_and();

        while self.match_kind(TokenKind::Or) {
            let right = self.parse_and();
            left = Some(Expr::logical(left, LogicalOp::Or, right));
        }
        left
    }

    fn parse_and(&mut self) -> Option<Expr> {
        let mut left = self.parse_equality();

        while self.match_kind(TokenKind::And) {
            let right = self.parse_equality();
            left = Some(Expr::logical(left, LogicalOp::And, right));
        }
        left
    }

    fn parse_equality(&mut self) -> Option<Expr> {
        let mut left = self.parse_comparison();

        while let Some(op) = self.match_operator(&[BinOp::NotEqual, BinOp::Equal]) {
            let right = self.parse_comparison();
            left = Some(Expr::binary(left, op, right));
        }
        left
    }

    /// Operands are primaries, so `a < b < c` chains left without nesting
    /// comparisons inside comparisons.
    fn parse_comparison(&mut self) -> Option<Expr> {
        let mut left = self.parse_primary();

        while let Some(op) = self.match_operator(&[
            BinOp::Greater,
            BinOp::GreaterEqual,
            BinOp::Less,
            BinOp::LessEqual,
        ]) {
            let right = self.parse_primary();
            left = Some(Expr::binary(left, op, right));
        }
        left
    }

    fn match_operator(&mut self, allowed: &[BinOp]) -> Option<BinOp> {
        let op = BinOp::from_token(self.peek()).filter(|op| allowed.contains(op))?;
        self.advance();
        Some(op)
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        match self.peek() {
            kind @ (TokenKind::True
            | TokenKind::False
            | TokenKind::Boolean
            | TokenKind::Nil
            | TokenKind::Number
            | TokenKind::Integer
            | TokenKind::String
            | TokenKind::JsonPath) => {
                self.advance();
                Some(Expr::Literal(kind))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expression();
                self.consume_right_paren();
                Some(Expr::grouping(inner))
            }
            _ => {
                self.diagnostics.push(Diagnostic::ExpectExpression);
                None
            }
        }
    }

    /// A missing `)` is recorded and parsing carries on as if it were there.
    fn consume_right_paren(&mut self) {
        if !self.match_kind(TokenKind::RightParen) {
            self.diagnostics.push(Diagnostic::MissingClosingParen);
        }
    }
}

/// Replaces each `JSON_PATH` token with the literal kind its schema node
/// declares.
///
/// Unresolvable paths are recorded and passed through unchanged. A path that
/// lands on an OBJECT or ARRAY node is fatal: the schema gives it no literal
/// kind.
pub fn resolve_paths(
    tokens: &[Token],
    schema: &StateSchema,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Token>, ValidationError> {
    tokens
        .iter()
        .map(|token| {
            if token.kind != TokenKind::JsonPath {
                return Ok(token.clone());
            }

            let node = StatePath::new(token.lexeme.as_str())
                .ok()
                .and_then(|path| schema.resolve(&path));

            match node {
                Some(node) => {
                    let kind = literal_kind(node, &token.lexeme)?;
                    log::debug!("path {} resolved to {}", token.lexeme, kind);
                    Ok(token.with_kind(kind))
                }
                None => {
                    diagnostics.push(Diagnostic::InvalidPath(token.lexeme.clone()));
                    Ok(token.clone())
                }
            }
        })
        .collect()
}

/// Token kind a path takes on when it resolves to `node`.
///
/// Only the declared type counts; a `const` never narrows the kind.
pub fn literal_kind(node: &SchemaNode, path: &str) -> Result<TokenKind, ValidationError> {
    match &node.kind {
        SchemaKind::Integer { .. } | SchemaKind::Number { .. } => Ok(TokenKind::Number),
        SchemaKind::String { .. } => Ok(TokenKind::String),
        SchemaKind::Boolean { .. } => Ok(TokenKind::Boolean),
        SchemaKind::Object { .. } | SchemaKind::Array { .. } => {
            Err(ValidationError::UnsupportedPathType {
                path: path.to_string(),
                node_type: node.schema_type().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn schema() -> StateSchema {
        StateSchema::new(SchemaNode::object([
            ("age", SchemaNode::integer()),
            ("active", SchemaNode::boolean_const(true)),
            ("tags", SchemaNode::array(SchemaNode::string())),
        ]))
    }

    #[test]
    fn rewrites_resolved_paths() {
        let (tokens, _) = tokenize("$.age == $.active").unwrap();
        let mut diagnostics = Diagnostics::new();
        let resolved = resolve_paths(&tokens, &schema(), &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(resolved[0].kind, TokenKind::Number);
        assert_eq!(resolved[0].lexeme, "$.age");
        assert_eq!(resolved[2].kind, TokenKind::Boolean);
        // Input tokens are untouched
        assert_eq!(tokens[0].kind, TokenKind::JsonPath);
    }

    #[test]
    fn reports_leftover_tokens() {
        let (tokens, mut diagnostics) = tokenize("true $.age < 1").unwrap();
        let tree = Parser::new(tokens, &schema(), &mut diagnostics)
            .unwrap()
            .parse();

        assert_eq!(tree, Some(Expr::Literal(TokenKind::True)));
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnexpectedToken("$.age".into())]
        );
    }

    #[test]
    fn keeps_unresolved_paths() {
        let (tokens, _) = tokenize("$.height").unwrap();
        let mut diagnostics = Diagnostics::new();
        let resolved = resolve_paths(&tokens, &schema(), &mut diagnostics).unwrap();

        assert_eq!(resolved[0].kind, TokenKind::JsonPath);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::InvalidPath("$.height".into())]
        );
    }

    #[test]
    fn array_paths_are_fatal() {
        let (tokens, _) = tokenize("$.tags == null").unwrap();
        let mut diagnostics = Diagnostics::new();
        let err = resolve_paths(&tokens, &schema(), &mut diagnostics).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnsupportedPathType { node_type, .. } if node_type == "ARRAY"
        ));
    }
}
