//! Operator and punctuation scanning.
//!
//! The scanner is driven entirely by two tables: transitions keyed by
//! `(state, character)`, and the one-character operator each intermediate
//! state falls back to when the next character does not extend it.

use lazy_static::lazy_static;
use std::{collections::HashMap, io::BufRead};

use crate::errors::errors::{Error, ErrorImpl};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorState {
    Start,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Greater,
    Less,
    Assign,
    Bang,
    Amp,
    Pipe,
    Caret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Consume the character and continue in the given state.
    Goto(OperatorState),
    /// Consume the character and emit the operator.
    Emit(&'static str),
}

/// What an intermediate state emits when it cannot be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    pub operator: &'static str,
    /// Emitted instead when `LexerConfig::legacy_operator_fallback` is set.
    pub legacy: &'static str,
}

use OperatorState::*;
use Transition::*;

const TRANSITION_TABLE: &[(OperatorState, char, Transition)] = &[
    (Start, '+', Goto(Plus)),
    (Start, '-', Goto(Minus)),
    (Start, '*', Goto(Star)),
    (Start, '/', Goto(Slash)),
    (Start, '%', Goto(Percent)),
    (Start, '>', Goto(Greater)),
    (Start, '<', Goto(Less)),
    (Start, '=', Goto(Assign)),
    (Start, '!', Goto(Bang)),
    (Start, '&', Goto(Amp)),
    (Start, '|', Goto(Pipe)),
    (Start, '^', Goto(Caret)),
    (Start, ',', Emit(",")),
    (Start, ';', Emit(";")),
    (Plus, '+', Emit("++")),
    (Plus, '=', Emit("+=")),
    (Minus, '-', Emit("--")),
    (Minus, '=', Emit("-=")),
    (Star, '=', Emit("*=")),
    (Slash, '=', Emit("/=")),
    (Percent, '=', Emit("%=")),
    (Greater, '=', Emit(">=")),
    (Greater, '>', Emit(">>")),
    (Less, '=', Emit("<=")),
    (Less, '<', Emit("<<")),
    (Assign, '=', Emit("==")),
    (Bang, '=', Emit("!=")),
    (Amp, '&', Emit("&&")),
    (Amp, '=', Emit("&=")),
    (Pipe, '|', Emit("||")),
    (Pipe, '=', Emit("|=")),
    (Caret, '^', Emit("^^")),
    (Caret, '=', Emit("^=")),
];

const FALLBACK_TABLE: &[(OperatorState, &str, &str)] = &[
    (Plus, "+", "+"),
    (Minus, "-", "-"),
    (Star, "*", "="),
    (Slash, "/", "="),
    (Percent, "%", "%"),
    (Greater, ">", ">"),
    (Less, "<", "<"),
    (Assign, "=", "="),
    (Bang, "!", "="),
    (Amp, "&", "&"),
    (Pipe, "|", "|"),
    (Caret, "^", "^"),
];

lazy_static! {
    pub static ref OPERATOR_TRANSITIONS: HashMap<(OperatorState, char), Transition> =
        TRANSITION_TABLE
            .iter()
            .map(|&(state, c, transition)| ((state, c), transition))
            .collect();
    pub static ref OPERATOR_FALLBACKS: HashMap<OperatorState, Fallback> = FALLBACK_TABLE
        .iter()
        .map(|&(state, operator, legacy)| (state, Fallback { operator, legacy }))
        .collect();
}

pub fn is_operator_start(c: char) -> bool {
    OPERATOR_TRANSITIONS.contains_key(&(Start, c))
}

impl<R: BufRead> Lexer<R> {
    /// Scans one operator. A character read past a one-character operator
    /// is pushed back for the next scan.
    pub(super) fn scan_operator(&mut self) -> Result<Token, Error> {
        let start = self.stream.position();
        let mut state = Start;
        let mut lexeme = String::new();

        loop {
            let c = self.stream.next();
            let transition = c.and_then(|c| OPERATOR_TRANSITIONS.get(&(state, c)).copied());

            match (transition, c) {
                (Some(Emit(operator)), _) => {
                    return Ok(self.make_token(TokenKind::Operator, operator.to_string(), start))
                }
                (Some(Goto(next)), Some(c)) => {
                    lexeme.push(c);
                    state = next;
                }
                _ => {
                    if let Some(c) = c {
                        self.stream.put_back(c);
                    }

                    return match OPERATOR_FALLBACKS.get(&state) {
                        Some(fallback) => {
                            let operator = if self.config.legacy_operator_fallback {
                                fallback.legacy
                            } else {
                                fallback.operator
                            };
                            Ok(self.make_token(TokenKind::Operator, operator.to_string(), start))
                        }
                        None => {
                            lexeme.extend(c);
                            Err(self.error_at(ErrorImpl::UnresolvedOperator { lexeme }, start))
                        }
                    };
                }
            }
        }
    }
}
