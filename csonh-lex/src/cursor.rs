//! Character cursor for traversing (already newline-normalized) source text.
//!
//! The cursor is the only thing in the lexer that touches raw bytes; every
//! other module asks it for the current/peeked character and its
//! (line, column) position and never indexes `source` directly.

use csonh_util::Position;

/// A cursor over a `&str`, tracking byte offset and 1-based line/column.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current character, or `'\0'` past the end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Character `offset` code points ahead of the current one (0 = current).
    pub fn peek(&self, offset: usize) -> char {
        let mut chars = self.source[self.position..].chars();
        for _ in 0..offset {
            if chars.next().is_none() {
                return '\0';
            }
        }
        chars.next().unwrap_or('\0')
    }

    /// Advances the cursor by one code point, updating line/column.
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Consumes `current()` if it equals `c`, returning whether it matched.
    pub fn eat(&mut self, c: char) -> bool {
        if self.current() == c {
            self.advance();
            true
        } else {
            false
        }
    }
}
