//! Identifier and keyword lexing.
//!
//! Bareword keys and the `true`/`yes`/`on`/`false`/`no`/`off`/`null`
//! literal keywords share one scan: `[A-Za-z_$][A-Za-z0-9_$]*`,
//! classified afterward by exact text match.

use crate::lexer::core::is_identifier_continue;
use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_identifier(&mut self) -> Token {
        let start = self.position();
        let mut text = String::new();

        while is_identifier_continue(self.cursor().current()) {
            text.push(self.cursor().current());
            self.cursor().advance();
        }

        let kind = match text.as_str() {
            "true" | "yes" | "on" => TokenKind::True,
            "false" | "no" | "off" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Identifier(text),
        };

        Token::new(kind, start)
    }
}
