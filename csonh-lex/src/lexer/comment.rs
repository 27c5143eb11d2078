//! Comment lexing.
//!
//! Comments produce no tokens. `#` runs to the end of the line; three
//! consecutive `#` open a block comment that runs until the next `###`
//! (block comments do not nest).

use crate::error::LexError;
use crate::lexer::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn skip_comment(&mut self) -> Result<(), LexError> {
        if self.cursor().peek(1) == '#' && self.cursor().peek(2) == '#' {
            self.skip_block_comment()
        } else {
            self.skip_line_comment();
            Ok(())
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.cursor().is_at_end() && self.cursor().current() != '\n' {
            self.cursor().advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.position();
        self.cursor().advance(); // first '#'
        self.cursor().advance(); // second '#'
        self.cursor().advance(); // third '#'

        loop {
            if self.cursor().is_at_end() {
                return Err(LexError::UnterminatedBlockComment { position: start });
            }
            if self.cursor().current() == '#'
                && self.cursor().peek(1) == '#'
                && self.cursor().peek(2) == '#'
            {
                self.cursor().advance();
                self.cursor().advance();
                self.cursor().advance();
                return Ok(());
            }
            self.cursor().advance();
        }
    }
}
