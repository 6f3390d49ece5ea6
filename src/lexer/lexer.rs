use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
    rc::Rc,
};

use crate::{
    config::LexerConfig,
    errors::errors::{Error, ErrorImpl},
    stream::CharStream,
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    operator::is_operator_start,
    tokens::{Token, TokenKind},
};

pub struct Lexer<R> {
    pub(super) stream: CharStream<R>,
    tokens: Vec<Token>,
    file: Rc<String>,
    pub(super) config: LexerConfig,
}

impl Lexer<Cursor<Vec<u8>>> {
    pub fn from_source(source: impl Into<String>, config: LexerConfig) -> Self {
        Lexer::new(CharStream::from_source(source), config)
    }
}

impl<R: BufRead> Lexer<R> {
    pub fn new(stream: CharStream<R>, config: LexerConfig) -> Self {
        let file = Rc::new(
            config
                .source_name
                .clone()
                .unwrap_or_else(|| String::from("shell")),
        );

        Lexer {
            stream,
            tokens: vec![],
            file,
            config,
        }
    }

    /// Scans the whole source. The first lexical error aborts the scan and
    /// the tokens collected so far are dropped.
    pub fn analyse(mut self) -> Result<Vec<Token>, Error> {
        tracing::debug!("lexing {}", self.file);

        loop {
            let start = self.stream.position();
            let Some(c) = self.stream.next() else {
                break;
            };
            let lookahead = self.stream.peek();

            let token = match c {
                ' ' | '\t' | '\n' | '\r' => None,
                '/' if lookahead == Some('/') => {
                    self.skip_line_comment();
                    None
                }
                '/' if lookahead == Some('*') => {
                    self.skip_block_comment(start)?;
                    None
                }
                '{' | '}' | '(' | ')' => {
                    Some(self.make_token(TokenKind::Bracket, c.to_string(), start))
                }
                '"' | '\'' => {
                    self.stream.put_back(c);
                    Some(self.scan_string()?)
                }
                c if is_letter(c) => {
                    self.stream.put_back(c);
                    Some(self.scan_word()?)
                }
                c if c.is_ascii_digit() => {
                    self.stream.put_back(c);
                    Some(self.scan_number()?)
                }
                c if begins_signed_number(c, lookahead, self.tokens.last()) => {
                    self.stream.put_back(c);
                    Some(self.scan_number()?)
                }
                c if is_operator_start(c) => {
                    self.stream.put_back(c);
                    Some(self.scan_operator()?)
                }
                c => {
                    return Err(self.error_at(
                        ErrorImpl::UnexpectedCharacter { character: c },
                        start,
                    ))
                }
            };

            if let Some(token) = token {
                self.push(token);
            }
        }

        tracing::debug!("lexed {} tokens from {}", self.tokens.len(), self.file);
        Ok(self.tokens)
    }

    pub fn push(&mut self, token: Token) {
        tracing::trace!("{} at {}", token, token.span.start.0);
        self.tokens.push(token);
    }

    /// Builds a token that began at `start` and ends at the current position.
    pub(super) fn make_token(&self, kind: TokenKind, value: String, start: u32) -> Token {
        MK_TOKEN!(
            kind,
            value,
            MK_SPAN!(start, self.stream.position(), self.file)
        )
    }

    pub(super) fn error_at(&self, error: ErrorImpl, offset: u32) -> Error {
        Error::new(error, Position(offset, Rc::clone(&self.file)))
    }

    /// Error for a sub-scanner that was entered on a character it cannot
    /// start with, or with nothing left to read.
    pub(super) fn unexpected(&self, found: Option<char>, expected: &str, offset: u32) -> Error {
        match found {
            Some(character) => self.error_at(ErrorImpl::UnexpectedCharacter { character }, offset),
            None => self.error_at(
                ErrorImpl::UnexpectedEnd {
                    expected: expected.to_string(),
                },
                offset,
            ),
        }
    }

    /// Called with the opening `/` consumed; eats through the newline.
    fn skip_line_comment(&mut self) {
        for c in self.stream.by_ref() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Called with the opening `/` consumed and `*` next.
    fn skip_block_comment(&mut self, start: u32) -> Result<(), Error> {
        self.stream.next();

        while let Some(c) = self.stream.next() {
            if c == '*' && self.stream.peek() == Some('/') {
                self.stream.next();
                return Ok(());
            }
        }

        Err(self.error_at(ErrorImpl::UnterminatedComment, start))
    }

    /// Scans a quoted literal. The lexeme keeps both quotes and every
    /// character in between verbatim.
    fn scan_string(&mut self) -> Result<Token, Error> {
        let start = self.stream.position();
        let quote = match self.stream.next() {
            Some(c) if c == '"' || c == '\'' => c,
            other => return Err(self.unexpected(other, "a quote", start)),
        };

        let mut value = quote.to_string();
        while let Some(c) = self.stream.next() {
            value.push(c);
            if c == quote {
                return Ok(self.make_token(TokenKind::StringLiteral, value, start));
            }
        }

        Err(self.error_at(ErrorImpl::UnterminatedString { quote }, start))
    }

    /// Scans an identifier, keyword or boolean literal.
    fn scan_word(&mut self) -> Result<Token, Error> {
        let start = self.stream.position();
        let mut value = String::new();

        while let Some(c) = self.stream.peek() {
            if !is_literal(c) {
                break;
            }
            value.push(c);
            self.stream.next();
        }

        if value.is_empty() {
            let found = self.stream.peek();
            return Err(self.unexpected(found, "an identifier", start));
        }

        Ok(self.make_token(TokenKind::of_word(&value), value, start))
    }
}

pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Characters allowed after the first one of an identifier.
pub fn is_literal(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Decides whether `+`, `-` or `.` opens a number rather than acting as an
/// operator. A digit must follow; a sign may also be followed by `.`
/// (`-.5`). Then only the previous token matters: after an operand
/// (`a - 5`) it is an operator, anywhere else (`x = -5`, `(-5`, start of
/// input) it is part of the literal.
pub fn begins_signed_number(c: char, lookahead: Option<char>, last: Option<&Token>) -> bool {
    let opens = match (c, lookahead) {
        ('+' | '-', Some(l)) => l.is_ascii_digit() || l == '.',
        ('.', Some(l)) => l.is_ascii_digit(),
        _ => false,
    };
    if !opens {
        return false;
    }

    match last {
        None => true,
        Some(token) => !token.is_value() || token.is_operator(),
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let config = match file {
        Some(file) => LexerConfig::named(file),
        None => LexerConfig::default(),
    };

    Lexer::from_source(source, config).analyse()
}

/// Lexes the file at `path`. The file is closed before this returns,
/// whether lexing succeeded or not.
pub fn tokenize_file(path: impl AsRef<Path>, config: LexerConfig) -> Result<Vec<Token>, Error> {
    let path = path.as_ref();
    let unavailable = |reason: String| {
        let name = path.display().to_string();
        Error::new(
            ErrorImpl::SourceUnavailable {
                path: name.clone(),
                reason,
            },
            Position(0, Rc::new(name)),
        )
    };

    let absolute = std::path::absolute(path).map_err(|e| unavailable(e.to_string()))?;
    let file = File::open(&absolute).map_err(|e| unavailable(e.to_string()))?;

    let mut config = config;
    if config.source_name.is_none() {
        config.source_name = Some(absolute.display().to_string());
    }

    Lexer::new(CharStream::new(BufReader::new(file)), config).analyse()
}
