use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_KEYWORDS: HashSet<&'static str> = [
        "if", "else", "for", "while", "break", "continue", "return", "func", "var", "int",
        "float", "bool", "void", "string",
    ]
    .into_iter()
    .collect();
}

pub const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];

const TYPE_NAMES: [&str; 5] = ["bool", "int", "float", "void", "string"];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Bracket,
    StringLiteral,
    FloatLiteral,
    BooleanLiteral,
    IntegerLiteral,
}

impl TokenKind {
    /// Classifies a completed identifier-shaped lexeme.
    pub fn of_word(word: &str) -> TokenKind {
        if RESERVED_KEYWORDS.contains(word) {
            TokenKind::Keyword
        } else if BOOLEAN_LITERALS.iter().any(|b| *b == word) {
            TokenKind::BooleanLiteral
        } else {
            TokenKind::Identifier
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "variable",
            TokenKind::Operator => "operator",
            TokenKind::Bracket => "bracket",
            TokenKind::StringLiteral => "string",
            TokenKind::FloatLiteral => "float",
            TokenKind::BooleanLiteral => "boolean",
            TokenKind::IntegerLiteral => "integer",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type:{}, Value:{}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_variable(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_scalar(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::FloatLiteral,
            TokenKind::BooleanLiteral,
            TokenKind::IntegerLiteral,
            TokenKind::StringLiteral,
        ])
    }

    pub fn is_number(&self) -> bool {
        self.is_one_of_many(&[TokenKind::IntegerLiteral, TokenKind::FloatLiteral])
    }

    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    /// Variables and literals: anything that can stand as an operand.
    pub fn is_value(&self) -> bool {
        self.is_variable() || self.is_scalar()
    }

    pub fn is_type(&self) -> bool {
        TYPE_NAMES.iter().any(|t| *t == self.value)
    }
}
