//! Indentation bookkeeping.
//!
//! [`IndentState`] is the lexer-private stack: a stack of non-decreasing
//! column widths starting with 0, an indent unit
//! (the first positive increment observed), and an indent character
//! (space or tab, fixed on first use). It is consulted once per non-blank
//! logical line and turns a single measured column width into zero or
//! more synthetic [`TokenKind::Indent`]/[`TokenKind::Dedent`] tokens.

use csonh_util::Position;

use crate::error::LexError;
use crate::token::TokenKind;

pub struct IndentState {
    stack: Vec<u32>,
    unit: Option<u32>,
    indent_char: Option<char>,
}

impl IndentState {
    pub fn new() -> Self {
        Self {
            stack: vec![0],
            unit: None,
            indent_char: None,
        }
    }

    /// Records which whitespace character this document indents with,
    /// failing if a later line switches characters.
    pub fn adopt_char(&mut self, ch: char, position: Position) -> Result<(), LexError> {
        match self.indent_char {
            None => {
                self.indent_char = Some(ch);
                Ok(())
            }
            Some(adopted) if adopted == ch => Ok(()),
            Some(_) => Err(LexError::InconsistentIndentChar { position }),
        }
    }

    /// Given the measured indentation width of a non-blank logical line,
    /// returns the INDENT/DEDENT tokens it implies.
    pub fn process(&mut self, column: u32, position: Position) -> Result<Vec<TokenKind>, LexError> {
        let top = *self.stack.last().expect("stack always has a bottom 0");

        if column > top {
            let delta = column - top;
            let unit = match self.unit {
                Some(unit) => unit,
                None => {
                    self.unit = Some(delta);
                    delta
                }
            };
            if unit == 0 || delta % unit != 0 {
                return Err(LexError::InconsistentIndentUnit { position });
            }
            let levels = delta / unit;
            let mut tokens = Vec::with_capacity(levels as usize);
            for step in 1..=levels {
                self.stack.push(top + unit * step);
                tokens.push(TokenKind::Indent);
            }
            Ok(tokens)
        } else if column == top {
            Ok(Vec::new())
        } else {
            let mut tokens = Vec::new();
            while *self.stack.last().expect("stack always has a bottom 0") > column {
                self.stack.pop();
                tokens.push(TokenKind::Dedent);
            }
            if *self.stack.last().expect("stack always has a bottom 0") != column {
                return Err(LexError::DedentMismatch { position });
            }
            Ok(tokens)
        }
    }

    /// Pops the stack down to its bottom (0), emitting one DEDENT per pop.
    /// Called once at end of input.
    pub fn unwind(&mut self) -> Vec<TokenKind> {
        let mut tokens = Vec::new();
        while self.stack.len() > 1 {
            self.stack.pop();
            tokens.push(TokenKind::Dedent);
        }
        tokens
    }
}

impl Default for IndentState {
    fn default() -> Self {
        Self::new()
    }
}
