//! Documentation content for the statecheck CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Types,
    Schema,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "paths" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "types" | "type" => Some(Self::Types),
            "schema" | "schemas" => Some(Self::Schema),
            "errors" | "diagnostics" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"STATECHECK DOCUMENTATION

statecheck type-checks small boolean expressions whose operands are literals or
paths into a state schema. It never looks at real state values: it only checks
that the types declared at each path fit the operators used on them.

DOCUMENTATION CATEGORIES

  syntax            Literals, paths, grouping
  operators         Comparison, equality, and logical operators
  types             Type classes and how paths map onto them
  schema            The JSON schema document format
  errors            Fatal errors and collected diagnostics

QUICK REFERENCE

  $.field           Path into the state
  $.a.b             Nested path
  "text" 42 1.5     String and number literals
  true false null   Keywords (any letter case)
  < <= > >=         Number comparison
  == !=             Equality
  && ||             Logical

Run 'statecheck doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Types) => Ok(TYPES_DOC),
        Some(DocCategory::Schema) => Ok(SCHEMA_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Literals, Paths and Grouping

PATHS
  $.field
  $.field.nested
    A path into the state. Segments are letters only and are joined by dots.
    Each path is looked up in the schema and replaced by the type declared
    there before the expression is parsed.

    Example:
      Schema:      {"age": NUMBER}
      Expression:  $.age >= 30
      Checked as:  NUMBER >= NUMBER

LITERALS
  "text"            String (no escapes; runs to the next double quote)
  42  3.14          Number (no sign, no exponent)
  true  false       Booleans, any letter case
  null              Null, any letter case

    Any other bare word is a fatal error:
      $.name != John     ->  Unknown type 'John'

GROUPING
  ( expression )
    Parentheses must balance; an unbalanced expression is rejected before
    scanning starts.

WHITESPACE
  Spaces, tabs and carriage returns are ignored. Newlines are not whitespace.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

PRECEDENCE (lowest first)
  ||
  &&
  == !=
  < <= > >=

  All operators are left-associative.

COMPARISON
  <  <=  >  >=
    Both sides must be numbers (NUMBER or INTEGER paths, number literals).

    Example:
      $.age > 18         valid when age is NUMBER or INTEGER
      $.name > 18        not valid

EQUALITY
  ==  !=
    Both sides must be in the same class:
      - strings and null, in any mix
      - booleans
      - numbers

    Example:
      $.name != null     valid when name is STRING
      $.age == "30"      not valid when age is NUMBER

LOGICAL
  &&  ||
    Both sides must be booleans. The result is true only when neither side
    is a false literal. The two operators are checked the same way.
"#;

const TYPES_DOC: &str = r#"TYPES

TYPE CLASSES
  number            NUMBER, INTEGER
  string            STRING (NIL also matches in == and !=)
  boolean           TRUE, FALSE, BOOLEAN

PATH TYPES
  Schema type       Checked as
  INTEGER           NUMBER
  NUMBER            NUMBER
  STRING            STRING
  BOOLEAN           BOOLEAN (a "const" does not change this)
  OBJECT, ARRAY     fatal: no literal type

  A path that does not exist in the schema keeps its raw path type and fails
  at whichever operator uses it.
"#;

const SCHEMA_DOC: &str = r#"SCHEMA - Document Format

  {
    "definition": {
      "type": "OBJECT",
      "properties": {
        "age":      {"type": "NUMBER", "validation": {"required": true}},
        "name":     {"type": "STRING"},
        "employed": {"type": "BOOLEAN"},
        "tags":     {"type": "ARRAY", "items": {"type": "STRING"}}
      }
    }
  }

NODE TYPES
  OBJECT            "properties": map of name -> node
  ARRAY             "items": node
  INTEGER NUMBER BOOLEAN STRING
                    optional "const" of the matching JSON type

  Every node may carry "validation": {"required": bool}.
  Unknown keys are ignored.

IDS
  root              the definition
  root/age          property 'age' of the root
  root/tags         array items share the array's id

  A path is valid when every segment before the last names an OBJECT node
  and the last names any node.

Run 'statecheck ids --schema FILE' to list every id in a schema.
"#;

const ERRORS_DOC: &str = r#"ERRORS

FATAL (no result)
  - Unbalanced parentheses
  - A bare word other than true, false or null
  - A path that names an OBJECT or ARRAY node

DIAGNOSTICS (collected, the expression is reported as not valid)
  - Empty expression
  - Unexpected character
  - Unterminated string
  - Path not found in the schema
  - Missing expression
  - Missing ')' after a grouping
  - Tokens left over after a complete expression
  - Operator applied to incompatible types
"#;
