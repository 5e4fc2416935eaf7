pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod schema;
pub mod validator;

pub use ast::{BinOp, Expr, LogicalOp, Token, TokenKind};
pub use diagnostics::{Diagnostic, Diagnostics, ValidationError};
pub use evaluator::{EvalError, Interpreter};
pub use lexer::Lexer;
pub use output::{to_json, to_json_pretty};
pub use parser::Parser;
pub use schema::{SchemaError, SchemaNode, SchemaType, StatePath, StateSchema};
pub use validator::{ExpressionValidator, ValidationReport, validate};
