//! # State Expression Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the expression tree for the state
//! expression language: small boolean expressions whose operands are literals
//! or paths into a typed state schema.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression tree nodes (literal, grouping, binary, logical)
//! - **[operators]** - Binary and logical operators
//!
//! ## Quick Start
//!
//! ```text
//! ($.age >= 30) || ($.age < 40)
//! ```
//!
//! With a schema declaring `age` as a `NUMBER`, both comparisons see two
//! number operands and the expression checks as valid.
//!
//! ## Core Concepts
//!
//! ### Paths
//!
//! A path starts with `$.` and names nested object properties separated by
//! dots. Before parsing, every path is replaced by the literal kind declared
//! for it in the schema:
//!
//! ```text
//! $.age > 18         // NUMBER > NUMBER
//! $.user.name == ""  // STRING == STRING
//! ```
//!
//! ### Type Classes
//!
//! - **number** - `NUMBER`, `INTEGER`
//! - **string** - `STRING`, plus `NIL` for equality
//! - **boolean** - `TRUE`, `FALSE`, `BOOLEAN`
//!
//! The tree never holds literal values, only their kinds.
pub mod tokens;
pub mod expressions;
pub mod operators;

pub use tokens::{Literal, Token, TokenKind};
pub use expressions::{Expr, Operand};
pub use operators::{BinOp, LogicalOp};
