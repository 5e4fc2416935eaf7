use std::fmt;

use rust_decimal::Decimal;

/// Categorical type of a lexical unit.
///
/// Literal kinds double as type markers for the checker: `Number` and
/// `Integer` share a comparability class, and `True`, `False` and `Boolean`
/// form the boolean class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `||`
    Or,
    /// `&&`
    And,

    // Literal kinds
    /// Double-quoted string, or a path declared `STRING`
    String,
    /// Decimal number, or a path declared `INTEGER`/`NUMBER`
    Number,
    /// Integer marker, same comparability class as `Number`
    Integer,
    /// Path declared `BOOLEAN` without a constant
    Boolean,
    /// `true`, case-insensitive
    True,
    /// `false`, case-insensitive
    False,
    /// `null`, case-insensitive
    Nil,

    /// State path such as `$.user.age`, before it is resolved against a schema
    JsonPath,

    /// End of input
    Eof,
}

impl TokenKind {
    /// `TRUE`, `FALSE` or `BOOLEAN`.
    pub fn is_boolean_class(self) -> bool {
        matches!(self, TokenKind::True | TokenKind::False | TokenKind::Boolean)
    }

    /// `NUMBER` or `INTEGER`.
    pub fn is_number_class(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Integer)
    }

    /// `STRING` or `NIL`.
    pub fn is_string_or_nil(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Nil)
    }

    fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Nil => "NIL",
            TokenKind::JsonPath => "JSON_PATH",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Contents of a string literal, without the quotes
    String(String),
    /// Parsed numeric literal
    Number(Decimal),
}

/// A lexical unit of an expression.
///
/// # Examples
/// ```text
/// $.age >= 30
/// ```
/// scans to `JSON_PATH "$.age"`, `GREATER_EQUAL ">="`, `NUMBER "30"`, `EOF ""`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
        }
    }

    /// Same lexeme and literal under a different kind.
    pub fn with_kind(&self, kind: TokenKind) -> Self {
        Token {
            kind,
            lexeme: self.lexeme.clone(),
            literal: self.literal.clone(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "", None)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}
