//! Source position tracking.
//!
//! A [`Position`] is the one piece of location information every token,
//! every lexer error, and every parse error carries. It is deliberately
//! small: CSONH has no multi-file source map and no byte-range spans to
//! track, just the (line, column) pair a diagnostic needs to point a user
//! at the offending character.

use std::fmt;

/// A 1-based (line, column) pair identifying a single code point in the
/// original source text.
///
/// Both fields are 1-based per the data model: the first character of the
/// first line is `Position { line: 1, column: 1 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of the document.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the position directly after this one on the same line.
    #[inline]
    pub const fn advance_column(self, by: u32) -> Self {
        Position {
            line: self.line,
            column: self.column + by,
        }
    }

    /// Returns the position at the start of the next line.
    #[inline]
    pub const fn advance_line(self) -> Self {
        Position {
            line: self.line + 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_one_one() {
        assert_eq!(Position::START, Position::new(1, 1));
    }

    #[test]
    fn advance_column_keeps_line() {
        let p = Position::new(3, 5).advance_column(2);
        assert_eq!(p, Position::new(3, 7));
    }

    #[test]
    fn advance_line_resets_column() {
        let p = Position::new(3, 5).advance_line();
        assert_eq!(p, Position::new(4, 1));
    }

    #[test]
    fn display_is_line_colon_column() {
        assert_eq!(Position::new(2, 9).to_string(), "2:9");
    }
}
