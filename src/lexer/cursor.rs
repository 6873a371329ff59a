//! Character cursor over the source text.
//!
//! The cursor holds exactly one character of state (`current`) plus its
//! line and column. Moving onto a `'\n'` bumps the line and resets the column
//! to 0, so the first character after a newline sits at column 1.

use crate::Position;

/// Returned by the cursor once every character has been consumed.
pub const EOF_CHAR: char = '\0';

#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    /// Byte offset of `current` in `source`.
    offset: usize,
    line: u32,
    column: u32,
    current: char,
}

impl Cursor {
    pub fn new(source: String) -> Self {
        let mut cursor = Cursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
            current: EOF_CHAR,
        };
        cursor.load();
        cursor
    }

    /// Moves to the next character and returns it.
    ///
    /// Once the end of the source is reached this keeps returning
    /// [`EOF_CHAR`] without touching the line or column.
    pub fn advance(&mut self) -> char {
        if self.is_at_end() {
            return EOF_CHAR;
        }

        self.offset += self.current.len_utf8();
        self.column += 1;
        self.load();
        self.current
    }

    /// The character after `current`, without moving.
    pub fn peek(&self) -> char {
        if self.is_at_end() {
            return EOF_CHAR;
        }

        self.source[self.offset + self.current.len_utf8()..]
            .chars()
            .next()
            .unwrap_or(EOF_CHAR)
    }

    pub fn current(&self) -> char {
        self.current
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn load(&mut self) {
        self.current = match self.source[self.offset..].chars().next() {
            Some(c) => c,
            None => EOF_CHAR,
        };

        if self.current == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }
}
