use std::{
    collections::VecDeque,
    io::{self, BufRead, Cursor, ErrorKind},
};

/// Pull-based reader of characters with unlimited pushback.
///
/// End of input is reported as `None`, which can never collide with a real
/// character. Once the underlying reader is exhausted the end flag stays set.
pub struct CharStream<R> {
    reader: R,
    /// Characters waiting to be returned again, front first.
    pending: VecDeque<char>,
    is_end: bool,
    /// Number of characters consumed so far, net of pushback. Saturates at
    /// `u32::MAX`.
    position: u32,
}

impl CharStream<Cursor<Vec<u8>>> {
    pub fn from_source(source: impl Into<String>) -> Self {
        CharStream::new(Cursor::new(source.into().into_bytes()))
    }
}

impl<R: BufRead> CharStream<R> {
    pub fn new(reader: R) -> Self {
        CharStream {
            reader,
            pending: VecDeque::new(),
            is_end: false,
            position: 0,
        }
    }

    /// True if a pushed-back character is waiting or the reader can still
    /// produce one. A character read here is cached, never lost.
    pub fn has_next(&mut self) -> bool {
        if !self.pending.is_empty() {
            return true;
        }

        match self.read_char() {
            Some(c) => {
                self.pending.push_back(c);
                true
            }
            None => false,
        }
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        if let Some(&c) = self.pending.front() {
            return Some(c);
        }

        let c = self.read_char()?;
        self.pending.push_back(c);
        Some(c)
    }

    /// Re-injects `c` so that it is the next character returned.
    pub fn put_back(&mut self, c: char) {
        self.pending.push_front(c);
        self.position = self.position.saturating_sub(1);
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    fn read_char(&mut self) -> Option<char> {
        if self.is_end {
            return None;
        }

        match self.decode() {
            Ok(Some(c)) => Some(c),
            Ok(None) => {
                tracing::debug!("character stream exhausted after {} chars", self.position);
                self.is_end = true;
                None
            }
            Err(err) => {
                tracing::warn!("reading source failed, treating as end of input: {}", err);
                self.is_end = true;
                None
            }
        }
    }

    /// Decodes one UTF-8 code point. Invalid sequences decode to U+FFFD and
    /// only the bytes examined so far are dropped.
    fn decode(&mut self) -> io::Result<Option<char>> {
        let first = match self.read_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = utf8_width(first);
        match width {
            0 => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            1 => return Ok(Some(first as char)),
            _ => {}
        }

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(byte) if byte & 0xC0 == 0x80 => {
                    *slot = byte;
                    self.reader.consume(1);
                }
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(decoded))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }
}

impl<R: BufRead> Iterator for CharStream<R> {
    type Item = char;

    /// Returns the next character, preferring pushed-back ones.
    fn next(&mut self) -> Option<char> {
        let c = match self.pending.pop_front() {
            Some(c) => Some(c),
            None => self.read_char(),
        };

        if c.is_some() {
            self.position = self.position.saturating_add(1);
        }
        c
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
