//! Character source for the lexer.
//!
//! Wraps any buffered byte reader (a file, an in-memory string) and hands
//! out Unicode characters one at a time, with lookahead and pushback.

pub mod stream;

pub use stream::CharStream;
