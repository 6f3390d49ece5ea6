//! Numeric literal scanning.
//!
//! Integers and decimals with an optional leading sign, e.g. `42`, `007`,
//! `-5`, `+.5`, `1.`, `0.25`. The lexeme is kept exactly as written.

use std::io::BufRead;

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberState {
    Start,
    /// Only zeros so far.
    LeadingZero,
    Integer,
    /// A lone `+` or `-`.
    Signed,
    /// Digits then `.`; a fraction may follow.
    Point,
    /// `.` with no digits before it; a digit must follow.
    BarePoint,
    Fraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Consume the character and move on.
    Advance(NumberState),
    /// Stop before the character; the literal is complete.
    Finish(TokenKind),
    Fail,
}

impl NumberState {
    /// Kind of literal if scanning stopped in this state, `None` if the
    /// text so far is not a number on its own.
    pub fn accepting(self) -> Option<TokenKind> {
        match self {
            NumberState::LeadingZero | NumberState::Integer => Some(TokenKind::IntegerLiteral),
            NumberState::Point | NumberState::Fraction => Some(TokenKind::FloatLiteral),
            NumberState::Start | NumberState::Signed | NumberState::BarePoint => None,
        }
    }

    pub fn step(self, c: char) -> Step {
        use NumberState::*;

        let next = match (self, c) {
            (Start, '0') => LeadingZero,
            (Start, '1'..='9') => Integer,
            (Start, '+' | '-') => Signed,
            (Start, '.') => BarePoint,

            (LeadingZero, '0') => LeadingZero,
            (LeadingZero, '1'..='9') => Integer,
            (LeadingZero, '.') => Point,

            (Integer, '0'..='9') => Integer,
            (Integer, '.') => Point,

            (Signed, '0'..='9') => Integer,
            (Signed, '.') => BarePoint,

            (Point | BarePoint | Fraction, '0'..='9') => Fraction,
            (Point | Fraction, '.') => return Step::Fail,

            _ => {
                return match self.accepting() {
                    Some(kind) => Step::Finish(kind),
                    None => Step::Fail,
                }
            }
        };

        Step::Advance(next)
    }
}

impl<R: BufRead> Lexer<R> {
    /// Scans one numeric literal, looking at each character before
    /// deciding to consume it.
    pub(super) fn scan_number(&mut self) -> Result<Token, Error> {
        let start = self.stream.position();
        let mut state = NumberState::Start;
        let mut value = String::new();

        loop {
            let Some(c) = self.stream.peek() else {
                return match state.accepting() {
                    Some(kind) => Ok(self.make_token(kind, value, start)),
                    None => Err(self.error_at(ErrorImpl::MalformedNumber { lexeme: value }, start)),
                };
            };

            match state.step(c) {
                Step::Advance(next) => {
                    self.stream.next();
                    value.push(c);
                    state = next;
                }
                Step::Finish(kind) => return Ok(self.make_token(kind, value, start)),
                Step::Fail => {
                    value.push(c);
                    return Err(self.error_at(ErrorImpl::MalformedNumber { lexeme: value }, start));
                }
            }
        }
    }
}
