use std::sync::Arc;
use std::thread;

use statecheck::{
    Diagnostic, ExpressionValidator, SchemaNode, StateSchema, ValidationError, ValidationReport,
    validate,
};

fn person_schema() -> StateSchema {
    StateSchema::new(SchemaNode::object([
        ("age", SchemaNode::number()),
        ("name", SchemaNode::string()),
        ("employed", SchemaNode::boolean()),
    ]))
}

fn fixture_schema() -> StateSchema {
    StateSchema::from_json_str(include_str!("fixtures/example_state_schema.json")).unwrap()
}

fn check(expression: &str) -> ValidationReport {
    validate(expression, &person_schema()).unwrap()
}

#[test]
fn test_or_of_number_comparisons() {
    let report = check("($.age >= 30) || ($.age < 40)");
    assert!(report.is_valid);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_string_against_null() {
    let report = check("$.name != null");
    assert!(report.is_valid);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_unbalanced_is_fatal() {
    let err = validate("($.age >= 30 || ($.age < 40)", &person_schema()).unwrap_err();
    assert!(matches!(err, ValidationError::MalformedExpression { .. }));
}

#[test]
fn test_bare_identifier_is_fatal() {
    let err = validate("($.name != John)", &person_schema()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::UnknownExpressionType { identifier, .. } if identifier == "John"
    ));
}

#[test]
fn test_unknown_nested_path() {
    let report = check("$.unknown.path == 1");
    assert!(!report.is_valid);
    let path_errors: Vec<&Diagnostic> = report
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::InvalidPath(_)))
        .collect();
    assert_eq!(
        path_errors,
        vec![&Diagnostic::InvalidPath("$.unknown.path".into())]
    );
    assert_eq!(
        report.messages()[0],
        "Path '$.unknown.path' is not valid."
    );
}

#[test]
fn test_comparison_checks_types_not_values() {
    let report = check("$.age > $.age");
    assert!(report.is_valid);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_and_or_reduce_alike() {
    let or = check("(true || false)");
    let and = check("(true && false)");
    assert_eq!(or, and);
    // A false operand makes both false
    assert!(!or.is_valid);
    assert!(or.diagnostics.is_empty());

    assert!(check("(true || true)").is_valid);
    assert!(check("(true && true)").is_valid);
}

#[test]
fn test_string_compared_with_number() {
    let report = check("$.name < 3");
    assert!(!report.is_valid);
    assert_eq!(report.diagnostics.len(), 1);
    assert!(matches!(
        report.diagnostics[0],
        Diagnostic::InvalidComparisonOperands { .. }
    ));
}

#[test]
fn test_equality_across_classes() {
    let report = check("$.employed == \"yes\"");
    assert!(!report.is_valid);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::InvalidEqualityOperands { .. }]
    ));
}

#[test]
fn test_empty_expression() {
    let report = check("");
    assert!(!report.is_valid);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::EmptyExpression, Diagnostic::ExpectExpression]
    );
}

#[test]
fn test_missing_operand_is_not_a_crash() {
    let report = check("$.age >= ");
    assert!(!report.is_valid);
    assert_eq!(
        report.diagnostics,
        vec![
            Diagnostic::ExpectExpression,
            Diagnostic::EvaluationFailed("missing operand".into()),
        ]
    );
}

#[test]
fn test_diagnostics_from_every_stage() {
    // lexer: '#', parser: unknown path, interpreter: PATH == NUMBER
    let report = check("$.height # == 1");
    assert!(!report.is_valid);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [
            Diagnostic::UnexpectedCharacter { character: '#', .. },
            Diagnostic::InvalidPath(_),
            Diagnostic::InvalidEqualityOperands { .. },
        ]
    ));
}

#[test]
fn test_recovered_paren_still_fails() {
    let report = check("($.age > 1 true)");
    assert!(!report.is_valid);
    assert_eq!(
        report.diagnostics,
        vec![
            Diagnostic::MissingClosingParen,
            Diagnostic::UnexpectedToken("true".into()),
        ]
    );
}

#[test]
fn test_invalid_path_fails_a_true_expression() {
    // The checked expression is `true`; the bad path is left over
    let report = check("true $.bad.x");
    assert!(!report.is_valid);
    assert_eq!(
        report.diagnostics,
        vec![
            Diagnostic::InvalidPath("$.bad.x".into()),
            Diagnostic::UnexpectedToken("$.bad.x".into()),
        ]
    );
}

#[test]
fn test_leftover_type_error_is_not_ignored() {
    let report = check("true $.name < 1");
    assert!(!report.is_valid);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnexpectedToken("$.name".into())]
    );
}

#[test]
fn test_expressions_valid_against_fixture() {
    let schema = fixture_schema();
    let validator = ExpressionValidator::new();

    let expressions = [
        "($.age >= 30) || ($.age < 40)",
        "$.name != null",
        "$.name != \"null\"",
        "$.name == \"someCoolName\"",
        "$.position == 0",
        "$.employed == false",
        "(($.employed == false) && ($.employed != true)) ",
        "$.employed != false && $.age > 60",
        "((($.position != 4) || ($.position < 50)) != true)",
        "($.age != 30) || ($.age < 40) && ($.employed == true)",
        "$.address.city != null && $.address.zip >= 1000",
    ];

    for expression in expressions {
        let report = validator.validate(expression, &schema).unwrap();
        assert!(report.is_valid, "{expression}: {:?}", report.messages());
    }
}

#[test]
fn test_array_path_is_fatal() {
    let err = validate("$.tags == null", &fixture_schema()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnsupportedPathType {
            path: "$.tags".to_string(),
            node_type: "ARRAY".to_string(),
        }
    );
}

#[test]
fn test_boolean_const_checks_as_boolean() {
    let schema = StateSchema::new(SchemaNode::object([
        ("on", SchemaNode::boolean_const(true)),
        ("off", SchemaNode::boolean_const(false)),
        ("flag", SchemaNode::boolean()),
    ]));

    for expression in ["$.on && true", "$.off && true", "$.flag && true", "$.on == $.off"] {
        let report = validate(expression, &schema).unwrap();
        assert!(report.is_valid, "{expression}: {:?}", report.messages());
        assert!(report.diagnostics.is_empty(), "{expression}");
    }
}

#[test]
fn test_validator_is_shareable() {
    let schema = Arc::new(person_schema());
    let validator = ExpressionValidator::new();

    let handles: Vec<_> = ["$.age > 1", "$.name < 1"]
        .into_iter()
        .map(|expression| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || validator.validate(expression, &schema).unwrap())
        })
        .collect();

    let reports: Vec<ValidationReport> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(reports[0].is_valid);
    assert!(!reports[1].is_valid);
    assert_eq!(reports[1].diagnostics.len(), 1);
}
