//! Lexical analysis module.
//!
//! Turns a character stream into a flat list of tokens. It handles:
//!
//! - Keywords, identifiers and boolean literals
//! - Integer and float literals, including signed ones like `-5`
//! - Quoted string literals
//! - Operators and brackets
//! - Skipping whitespace and comments

pub mod lexer;
pub mod number;
pub mod operator;
pub mod tokens;
