use rust_decimal::Decimal;

use crate::{
    ast::{Literal, Token, TokenKind},
    diagnostics::{Diagnostic, Diagnostics, ValidationError},
};

pub struct Lexer<'a> {
    expression: &'a str,
    input: Vec<char>,
    start: usize,
    position: usize,
    tokens: Vec<Token>,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Lexer<'a> {
    /// Checks that parentheses balance before any scanning happens.
    pub fn new(
        expression: &'a str,
        diagnostics: &'a mut Diagnostics,
    ) -> Result<Self, ValidationError> {
        if !parentheses_balanced(expression) {
            return Err(ValidationError::MalformedExpression {
                expression: expression.to_string(),
            });
        }

        Ok(Lexer {
            expression,
            input: expression.chars().collect(),
            start: 0,
            position: 0,
            tokens: Vec::new(),
            diagnostics,
        })
    }

    /// Scans the whole expression, ending with an `EOF` token.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, ValidationError> {
        while self.current_char().is_some() {
            self.start = self.position;
            self.scan_token()?;
        }

        self.tokens.push(Token::eof());
        log::debug!("scanned {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current_char();
        self.position += 1;
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme(), literal);
        log::trace!("token {token}");
        self.tokens.push(token);
    }

    fn scan_token(&mut self) -> Result<(), ValidationError> {
        let Some(ch) = self.advance() else {
            return Ok(());
        };

        match ch {
            '(' => self.add_token(TokenKind::LeftParen, None),
            ')' => self.add_token(TokenKind::RightParen, None),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind, None);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind, None);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind, None);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind, None);
            }
            // Lone '|' and '&' are dropped
            '|' => {
                if self.match_char('|') {
                    self.add_token(TokenKind::Or, None);
                }
            }
            '&' => {
                if self.match_char('&') {
                    self.add_token(TokenKind::And, None);
                }
            }
            ' ' | '\r' | '\t' => {}
            '$' => {
                if self.match_char('.') {
                    self.read_path();
                }
            }
            '"' => self.read_string(),
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_ascii_alphabetic() => self.read_identifier()?,
            c => self.diagnostics.push(Diagnostic::UnexpectedCharacter {
                character: c,
                expression: self.expression.to_string(),
            }),
        }

        Ok(())
    }

    /// `$.` has been consumed; takes letter runs joined by single dots.
    fn read_path(&mut self) {
        self.skip_letters();
        while self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|c| c.is_ascii_alphabetic())
        {
            self.advance();
            self.skip_letters();
        }

        self.add_token(TokenKind::JsonPath, None);
    }

    fn skip_letters(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }
    }

    fn read_string(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                break;
            }
            self.advance();
        }

        if self.current_char().is_none() {
            self.diagnostics.push(Diagnostic::UnterminatedString);
            return;
        }

        // Closing quote
        self.advance();

        let value: String = self.input[self.start + 1..self.position - 1].iter().collect();
        self.add_token(TokenKind::String, Some(Literal::String(value)));
    }

    fn read_number(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let literal = self
            .lexeme()
            .parse::<Decimal>()
            .ok()
            .map(Literal::Number);
        self.add_token(TokenKind::Number, literal);
    }

    fn read_identifier(&mut self) -> Result<(), ValidationError> {
        while self.current_char().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let identifier = self.lexeme();
        let kind = match identifier.to_lowercase().as_str() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Nil,
            _ => {
                return Err(ValidationError::UnknownExpressionType {
                    identifier,
                    expression: self.expression.to_string(),
                });
            }
        };

        self.add_token(kind, None);
        Ok(())
    }
}

/// Stack check: every `)` closes an open `(` and nothing is left open.
pub fn parentheses_balanced(expression: &str) -> bool {
    let mut stack = Vec::new();
    for ch in expression.chars() {
        match ch {
            '(' => stack.push(ch),
            ')' => {
                if stack.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Scans `expression` with a throwaway collector.
pub fn tokenize(expression: &str) -> Result<(Vec<Token>, Diagnostics), ValidationError> {
    let mut diagnostics = Diagnostics::new();
    let tokens = Lexer::new(expression, &mut diagnostics)?.scan_tokens()?;
    Ok((tokens, diagnostics))
}

#[test]
fn test_keywords() {
    let (tokens, _) = tokenize("true FALSE Null").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::True, TokenKind::False, TokenKind::Nil, TokenKind::Eof]
    );
}

#[test]
fn test_path_comparison() {
    let (tokens, diagnostics) = tokenize("($.age >= 30)").unwrap();
    assert!(diagnostics.is_empty());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::JsonPath,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "$.age");
}

#[test]
fn test_balanced_parentheses() {
    assert!(parentheses_balanced("(())"));
    assert!(parentheses_balanced(""));
    assert!(!parentheses_balanced("(()"));
    assert!(!parentheses_balanced(")("));
}
