//! Core lexer implementation: the main token loop and line-start dispatch.

use csonh_util::Position;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::indent::IndentState;
use crate::token::{Token, TokenKind};

/// Lexer for CSONH source text.
///
/// Construct with [`Lexer::new`] and call [`Lexer::tokenize`] once; the
/// lexer consumes itself and returns the full token vector rather than
/// tokens on demand, since a parse attempt always walks the whole source.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    indent: IndentState,
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    /// Builds a lexer over already newline-normalized, BOM-stripped
    /// source text. Use [`crate::tokenize`] rather than this directly
    /// unless you have already performed that normalization yourself.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            indent: IndentState::new(),
            at_line_start: true,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            if self.at_line_start {
                self.at_line_start = false;
                tokens.extend(self.handle_line_start()?);
            }

            self.skip_inline_whitespace();

            if self.cursor.is_at_end() {
                break;
            }

            let position = self.cursor.position();
            let c = self.cursor.current();

            match c {
                '#' => {
                    self.skip_comment()?;
                    continue;
                }
                '\n' => {
                    self.cursor.advance();
                    self.at_line_start = true;
                    tokens.push(Token::new(TokenKind::Newline, position));
                }
                '{' => {
                    self.cursor.advance();
                    tokens.push(Token::new(TokenKind::LBrace, position));
                }
                '}' => {
                    self.cursor.advance();
                    tokens.push(Token::new(TokenKind::RBrace, position));
                }
                '[' => {
                    self.cursor.advance();
                    tokens.push(Token::new(TokenKind::LBracket, position));
                }
                ']' => {
                    self.cursor.advance();
                    tokens.push(Token::new(TokenKind::RBracket, position));
                }
                ':' => {
                    self.cursor.advance();
                    tokens.push(Token::new(TokenKind::Colon, position));
                }
                ',' => {
                    self.cursor.advance();
                    tokens.push(Token::new(TokenKind::Comma, position));
                }
                '\'' | '"' => tokens.push(self.lex_string()?),
                c if c.is_ascii_digit() => tokens.push(self.lex_number()?),
                '.' if self.cursor.peek(1).is_ascii_digit() => tokens.push(self.lex_number()?),
                '-' if self.cursor.peek(1).is_ascii_digit() || self.cursor.peek(1) == '.' => {
                    tokens.push(self.lex_number()?)
                }
                c if is_identifier_start(c) => tokens.push(self.lex_identifier()),
                other => {
                    return Err(LexError::UnexpectedCharacter {
                        found: other,
                        position,
                    })
                }
            }
        }

        let eof_position = self.cursor.position();
        for kind in self.indent.unwind() {
            tokens.push(Token::new(kind, eof_position));
        }
        tokens.push(Token::new(TokenKind::Eof, eof_position));
        Ok(tokens)
    }

    /// Skips spaces and tabs (but not newlines) between tokens on a line.
    fn skip_inline_whitespace(&mut self) {
        while matches!(self.cursor.current(), ' ' | '\t') {
            self.cursor.advance();
        }
    }

    /// Measures the leading indentation of a fresh logical line and turns
    /// it into INDENT/DEDENT tokens, unless the line is blank or
    /// comment-only.
    fn handle_line_start(&mut self) -> Result<Vec<Token>, LexError> {
        let start = self.cursor.position();
        let (column, ch) = self.measure_indent()?;

        match self.cursor.current() {
            '\0' | '\n' | '#' => return Ok(Vec::new()),
            _ => {}
        }

        if let Some(ch) = ch {
            self.indent.adopt_char(ch, start)?;
        }

        Ok(self
            .indent
            .process(column, start)?
            .into_iter()
            .map(|kind| Token::new(kind, start))
            .collect())
    }

    fn measure_indent(&mut self) -> Result<(u32, Option<char>), LexError> {
        let start = self.cursor.position();
        let mut spaces = 0u32;
        let mut tabs = 0u32;

        loop {
            match self.cursor.current() {
                ' ' => {
                    spaces += 1;
                    self.cursor.advance();
                }
                '\t' => {
                    tabs += 1;
                    self.cursor.advance();
                }
                _ => break,
            }
        }

        if spaces > 0 && tabs > 0 {
            return Err(LexError::MixedTabsAndSpaces { position: start });
        }

        let ch = if tabs > 0 {
            Some('\t')
        } else if spaces > 0 {
            Some(' ')
        } else {
            None
        };
        Ok((spaces + tabs, ch))
    }

    pub(super) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(super) fn position(&self) -> Position {
        self.cursor.position()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

pub(super) fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
