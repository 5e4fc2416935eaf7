// tests/lexer_tests.rs

use statecheck::ast::{Literal, TokenKind};
use statecheck::diagnostics::{Diagnostic, Diagnostics, ValidationError};
use statecheck::lexer::{Lexer, tokenize};
use rust_decimal::Decimal;

fn kinds(expression: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(expression).unwrap();
    tokens.iter().map(|t| t.kind).collect()
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("!", TokenKind::Bang),
        ("=", TokenKind::Equal),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::Eof],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", TokenKind::EqualEqual),
        ("!=", TokenKind::BangEqual),
        ("<=", TokenKind::LessEqual),
        (">=", TokenKind::GreaterEqual),
        ("||", TokenKind::Or),
        ("&&", TokenKind::And),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            kinds(input),
            vec![expected, TokenKind::Eof],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_two_char_vs_single_char() {
    assert_eq!(
        kinds("< =="),
        vec![TokenKind::Less, TokenKind::EqualEqual, TokenKind::Eof]
    );
    assert_eq!(
        kinds("<= ="),
        vec![TokenKind::LessEqual, TokenKind::Equal, TokenKind::Eof]
    );
}

#[test]
fn test_lone_pipe_and_ampersand_are_dropped() {
    let (tokens, diagnostics) = tokenize("true | false & null").unwrap();
    let found: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        found,
        vec![TokenKind::True, TokenKind::False, TokenKind::Nil, TokenKind::Eof]
    );
    assert!(diagnostics.is_empty());
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_string_literal() {
    let (tokens, diagnostics) = tokenize("\"some name\"").unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"some name\"");
    assert_eq!(
        tokens[0].literal,
        Some(Literal::String("some name".to_string()))
    );
}

#[test]
fn test_unterminated_string() {
    let (tokens, diagnostics) = tokenize("$.name == \"abc").unwrap();
    let found: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        found,
        vec![TokenKind::JsonPath, TokenKind::EqualEqual, TokenKind::Eof]
    );
    assert_eq!(diagnostics.into_vec(), vec![Diagnostic::UnterminatedString]);
}

#[test]
fn test_numbers() {
    let (tokens, _) = tokenize("30 3.25 7.").unwrap();
    assert_eq!(tokens[0].lexeme, "30");
    assert_eq!(tokens[0].literal, Some(Literal::Number(Decimal::from(30))));
    assert_eq!(tokens[1].lexeme, "3.25");
    assert_eq!(
        tokens[1].literal,
        Some(Literal::Number(Decimal::new(325, 2)))
    );
    // Trailing dot is not part of the number
    assert_eq!(tokens[2].lexeme, "7");
}

#[test]
fn test_keywords_any_case() {
    assert_eq!(
        kinds("TRUE False nULL"),
        vec![TokenKind::True, TokenKind::False, TokenKind::Nil, TokenKind::Eof]
    );
}

#[test]
fn test_unknown_identifier_is_fatal() {
    let err = tokenize("($.name != John)").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownExpressionType {
            identifier: "John".to_string(),
            expression: "($.name != John)".to_string(),
        }
    );
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_single_segment_path() {
    let (tokens, _) = tokenize("$.age").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::JsonPath);
    assert_eq!(tokens[0].lexeme, "$.age");
}

#[test]
fn test_dotted_path_is_one_token() {
    let (tokens, diagnostics) = tokenize("$.address.city == null").unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(tokens[0].lexeme, "$.address.city");
    assert_eq!(tokens[1].kind, TokenKind::EqualEqual);
}

#[test]
fn test_path_stops_at_trailing_dot() {
    let (tokens, diagnostics) = tokenize("$.age.").unwrap();
    assert_eq!(tokens[0].lexeme, "$.age");
    assert_eq!(
        diagnostics.into_vec(),
        vec![Diagnostic::UnexpectedCharacter {
            character: '.',
            expression: "$.age.".to_string(),
        }]
    );
}

#[test]
fn test_dollar_without_dot_is_dropped() {
    assert_eq!(kinds("$ true"), vec![TokenKind::True, TokenKind::Eof]);
}

// ============================================================================
// Whitespace and stray characters
// ============================================================================

#[test]
fn test_whitespace() {
    assert_eq!(
        kinds(" \t\rtrue\t"),
        vec![TokenKind::True, TokenKind::Eof]
    );
}

#[test]
fn test_newline_is_unexpected() {
    let (tokens, diagnostics) = tokenize("true\nfalse").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics.iter().next(),
        Some(Diagnostic::UnexpectedCharacter { character: '\n', .. })
    ));
}

#[test]
fn test_unexpected_characters_keep_scanning() {
    let (tokens, diagnostics) = tokenize("1 # 2 @ 3").unwrap();
    let numbers = tokens.iter().filter(|t| t.kind == TokenKind::Number).count();
    assert_eq!(numbers, 3);
    assert_eq!(diagnostics.len(), 2);
}

// ============================================================================
// Parenthesis check
// ============================================================================

#[test]
fn test_unbalanced_parentheses_fail_before_scanning() {
    for expression in ["(()", ")(", "($.age >= 30 || ($.age < 40)"] {
        let mut diagnostics = Diagnostics::new();
        let err = Lexer::new(expression, &mut diagnostics).err();
        assert_eq!(
            err,
            Some(ValidationError::MalformedExpression {
                expression: expression.to_string(),
            }),
            "Failed for input: {}",
            expression
        );
        assert!(diagnostics.is_empty());
    }
}

#[test]
fn test_balanced_parentheses_pass() {
    assert_eq!(
        kinds("(())"),
        vec![
            TokenKind::LeftParen,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}
