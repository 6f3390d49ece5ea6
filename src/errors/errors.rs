use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnresolvedOperator { .. } => "UnresolvedOperator",
            ErrorImpl::SourceUnavailable { .. } => "SourceUnavailable",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenKind { .. } => "UnexpectedTokenKind",
            ErrorImpl::UnexpectedEnd { .. } => "UnexpectedEnd",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { quote } => ErrorTip::Suggestion(format!(
                "String literal never closed, add a matching `{}`",
                quote
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment never closed, add `*/`"))
            }
            ErrorImpl::MalformedNumber { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number has at most one `.` and a sign needs digits",
                lexeme
            )),
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnresolvedOperator { lexeme } => {
                ErrorTip::Suggestion(format!("`{}` is not a known operator", lexeme))
            }
            ErrorImpl::SourceUnavailable { reason, .. } => {
                ErrorTip::Suggestion(format!("Could not read source: {}", reason))
            }
            ErrorImpl::UnexpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::UnexpectedTokenKind { expected, received } => ErrorTip::Suggestion(
                format!("Expected a token of kind {}, received {}", expected, received),
            ),
            ErrorImpl::UnexpectedEnd { expected } => {
                ErrorTip::Suggestion(format!("Expected {} before the end of input", expected))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal opened with {quote:?}")]
    UnterminatedString { quote: char },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("malformed number: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unresolved operator: {lexeme:?}")]
    UnresolvedOperator { lexeme: String },
    #[error("source {path:?} unavailable: {reason}")]
    SourceUnavailable { path: String, reason: String },
    #[error("syntax error: expected value {expected:?}, received {received:?}")]
    UnexpectedToken { expected: String, received: String },
    #[error("syntax error: expected kind {expected}, received {received}")]
    UnexpectedTokenKind { expected: String, received: String },
    #[error("syntax error: expected {expected}, reached end of input")]
    UnexpectedEnd { expected: String },
}
