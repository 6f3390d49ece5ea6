use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Cursor over lexed tokens for a hand-written parser.
///
/// Supports lookahead, rewinding by any number of tokens, and matching the
/// next token against an expected value or kind.
pub struct PeekTokenStream {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the next token to hand out
    current: usize,
}

impl PeekTokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        PeekTokenStream { tokens, current: 0 }
    }

    /// Returns the next token and moves past it.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    pub fn has_next(&self) -> bool {
        self.current < self.tokens.len()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Rewinds by `n` tokens, stopping at the first one.
    pub fn put_back(&mut self, n: usize) {
        self.current = self.current.saturating_sub(n);
    }

    pub fn position(&self) -> usize {
        self.current
    }

    /// Consumes the next token if its value is exactly `value`.
    pub fn next_match(&mut self, value: &str) -> Result<&Token, Error> {
        let index = self.current;
        let Some(token) = self.tokens.get(index) else {
            return Err(self.unexpected_end(format!("`{}`", value)));
        };

        if token.value != value {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: value.to_string(),
                    received: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        self.current += 1;
        Ok(&self.tokens[index])
    }

    /// Consumes the next token if it is of kind `kind`.
    pub fn next_match_kind(&mut self, kind: TokenKind) -> Result<&Token, Error> {
        let index = self.current;
        let Some(token) = self.tokens.get(index) else {
            return Err(self.unexpected_end(format!("a token of kind {}", kind)));
        };

        if token.kind != kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenKind {
                    expected: kind.to_string(),
                    received: token.kind.to_string(),
                },
                token.span.start.clone(),
            ));
        }

        self.current += 1;
        Ok(&self.tokens[index])
    }

    fn unexpected_end(&self, expected: String) -> Error {
        let position = self
            .tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(Position::null);

        Error::new(ErrorImpl::UnexpectedEnd { expected }, position)
    }
}
