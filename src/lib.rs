#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod stream;

pub use config::LexerConfig;
pub use lexer::lexer::{tokenize, tokenize_file, Lexer};
pub use lexer::tokens::{Token, TokenKind};
pub use stream::CharStream;

/// Character offset into a source, plus the source's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Maps a character offset to `(line number, line text, column)`.
///
/// Lines are 1-based, columns 0-based. An offset past the end lands on the
/// last line, one column past its final character.
pub fn line_and_column(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;
    let mut start = 0;
    let mut last = (1, String::new(), 0);

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let len = line.chars().count();
        if (start..start + len).contains(&pos) {
            return (index + 1, line.to_string(), pos - start);
        }

        last = (index + 1, line.to_string(), len);
        start += len;
    }

    if last.1.ends_with('\n') {
        return (last.0 + 1, String::new(), 0);
    }
    last
}

#[cfg(test)]
mod tests {
    use super::line_and_column;

    #[test]
    fn test_line_and_column() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = line_and_column(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = line_and_column(source, 27);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_line_and_column_past_end() {
        let (line_number, line, line_pos) = line_and_column("\"abc", 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "\"abc");
        assert_eq!(line_pos, 4);

        let (line_number, _, line_pos) = line_and_column("x\n", 2);
        assert_eq!(line_number, 2);
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_line_and_column_counts_characters() {
        let (_, _, line_pos) = line_and_column("é = 1", 2);
        assert_eq!(line_pos, 2);
    }
}

pub fn display_error(error: &Error, source: &str) {
    /*
        error: message
        -> main.bd
           |
        20 | var a = #;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = line_and_column(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", position.1);
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
