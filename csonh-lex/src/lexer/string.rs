//! String literal lexing.
//!
//! Single-line strings (`'...'` or `"..."`) are decoded here: escapes are
//! resolved immediately and an unescaped `\n` or end of input fails the
//! literal. Triple-quoted strings (`'''...'''`/`"""..."""`) are captured
//! raw — dedenting and escape decoding are deferred to the parser, which
//! needs the closing delimiter's own indentation to do either.

use csonh_util::Position;

use crate::error::LexError;
use crate::lexer::core::Lexer;
use crate::token::{StringLiteral, Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> Result<Token, LexError> {
        let start = self.position();
        let quote = self.cursor().current();
        let delimiter: String = std::iter::repeat(quote).take(3).collect();

        if self.cursor().remaining().starts_with(&delimiter) {
            self.lex_triple_string(start, quote)
        } else {
            self.lex_single_line_string(start, quote)
        }
    }

    fn lex_single_line_string(&mut self, start: Position, quote: char) -> Result<Token, LexError> {
        self.cursor().advance(); // opening quote
        let mut content = String::new();

        loop {
            if self.cursor().is_at_end() {
                return Err(LexError::UnterminatedString { position: start });
            }

            let c = self.cursor().current();

            if c == quote {
                self.cursor().advance();
                break;
            }
            if c == '\n' {
                return Err(LexError::NewlineInSingleLineString { position: start });
            }
            if quote == '"' && c == '#' && self.cursor().peek(1) == '{' {
                return Err(LexError::InterpolationNotAllowed { position: self.position() });
            }

            if c == '\\' {
                let escape_pos = self.position();
                self.cursor().advance();
                content.push(self.decode_escape(escape_pos)?);
            } else {
                content.push(c);
                self.cursor().advance();
            }
        }

        Ok(Token::new(
            TokenKind::String(StringLiteral::Plain(content)),
            start,
        ))
    }

    fn lex_triple_string(&mut self, start: Position, quote: char) -> Result<Token, LexError> {
        let delimiter: String = std::iter::repeat(quote).take(3).collect();
        for _ in 0..3 {
            self.cursor().advance();
        }
        let mut raw = String::new();

        loop {
            if self.cursor().is_at_end() {
                return Err(LexError::UnterminatedString { position: start });
            }
            if self.cursor().remaining().starts_with(&delimiter) {
                for _ in 0..3 {
                    self.cursor().advance();
                }
                break;
            }
            if quote == '"' && self.cursor().current() == '#' && self.cursor().peek(1) == '{' {
                return Err(LexError::InterpolationNotAllowed { position: self.position() });
            }

            raw.push(self.cursor().current());
            self.cursor().advance();
        }

        Ok(Token::new(
            TokenKind::String(StringLiteral::Triple { quote, raw }),
            start,
        ))
    }

    fn decode_escape(&mut self, escape_pos: Position) -> Result<char, LexError> {
        if self.cursor().is_at_end() {
            return Err(LexError::InvalidEscape { position: escape_pos });
        }
        let c = self.cursor().current();
        self.cursor().advance();

        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '\\' => Ok('\\'),
            '\'' => Ok('\''),
            '"' => Ok('"'),
            'u' => self.decode_unicode_escape(escape_pos),
            _ => Err(LexError::InvalidEscape { position: escape_pos }),
        }
    }

    /// Decodes `\uXXXX`, combining a high/low surrogate pair into the
    /// single code point it encodes. A surrogate that cannot be paired
    /// cannot be represented by a Rust `char`, so it is replaced with
    /// U+FFFD rather than rejected outright.
    fn decode_unicode_escape(&mut self, escape_pos: Position) -> Result<char, LexError> {
        let unit = self.read_hex4(escape_pos)?;

        if (0xD800..=0xDBFF).contains(&unit) {
            if self.cursor().current() == '\\'
                && self.cursor().peek(1) == 'u'
                && (2..6).all(|o| self.cursor().peek(o).is_ascii_hexdigit())
            {
                let low_hex: String = (2..6).map(|o| self.cursor().peek(o)).collect();
                let low = u32::from_str_radix(&low_hex, 16).expect("pre-checked hex digits");
                if (0xDC00..=0xDFFF).contains(&low) {
                    for _ in 0..6 {
                        self.cursor().advance();
                    }
                    let combined = 0x10000 + (unit - 0xD800) * 0x400 + (low - 0xDC00);
                    return char::from_u32(combined)
                        .ok_or(LexError::InvalidUnicodeEscape { position: escape_pos });
                }
            }
            return Ok('\u{FFFD}');
        }
        if (0xDC00..=0xDFFF).contains(&unit) {
            return Ok('\u{FFFD}');
        }

        char::from_u32(unit).ok_or(LexError::InvalidUnicodeEscape { position: escape_pos })
    }

    fn read_hex4(&mut self, escape_pos: Position) -> Result<u32, LexError> {
        let mut hex = String::with_capacity(4);
        for _ in 0..4 {
            let h = self.cursor().current();
            if !h.is_ascii_hexdigit() {
                return Err(LexError::InvalidUnicodeEscape { position: escape_pos });
            }
            hex.push(h);
            self.cursor().advance();
        }
        Ok(u32::from_str_radix(&hex, 16).expect("pre-checked hex digits"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::{StringLiteral, TokenKind};

    fn string_literal(source: &str) -> StringLiteral {
        let tokens = Lexer::new(source).tokenize().unwrap();
        match tokens.into_iter().next().unwrap().kind {
            TokenKind::String(s) => s,
            other => panic!("expected a string, got {other:?}"),
        }
    }

    #[test]
    fn plain_string_with_escapes() {
        assert_eq!(
            string_literal(r#""hello\nworld""#),
            StringLiteral::Plain("hello\nworld".to_string())
        );
    }

    #[test]
    fn single_quoted_string() {
        assert_eq!(
            string_literal("'hello'"),
            StringLiteral::Plain("hello".to_string())
        );
    }

    #[test]
    fn unicode_escape() {
        assert_eq!(
            string_literal("\"\\u0041\""),
            StringLiteral::Plain("A".to_string())
        );
    }

    #[test]
    fn surrogate_pair_escape() {
        assert_eq!(
            string_literal(r#""😀""#),
            StringLiteral::Plain("\u{1F600}".to_string())
        );
    }

    #[test]
    fn newline_in_single_line_string_fails() {
        let err = Lexer::new("\"a\nb\"").tokenize().unwrap_err();
        assert!(matches!(
            err,
            crate::error::LexError::NewlineInSingleLineString { .. }
        ));
    }

    #[test]
    fn unterminated_string_fails() {
        let err = Lexer::new("\"abc").tokenize().unwrap_err();
        assert!(matches!(err, crate::error::LexError::UnterminatedString { .. }));
    }

    #[test]
    fn interpolation_marker_rejected() {
        let err = Lexer::new(r#""a#{b}""#).tokenize().unwrap_err();
        assert!(matches!(
            err,
            crate::error::LexError::InterpolationNotAllowed { .. }
        ));
    }

    #[test]
    fn triple_quoted_string_is_captured_raw() {
        let literal = string_literal("\"\"\"line one\n  line two\"\"\"");
        match literal {
            StringLiteral::Triple { quote, raw } => {
                assert_eq!(quote, '"');
                assert_eq!(raw, "line one\n  line two");
            }
            other => panic!("expected a triple-quoted string, got {other:?}"),
        }
    }

    #[test]
    fn triple_quoted_allows_embedded_single_quote_pairs() {
        let literal = string_literal("'''He said \"hi\"'''");
        match literal {
            StringLiteral::Triple { quote, raw } => {
                assert_eq!(quote, '\'');
                assert_eq!(raw, "He said \"hi\"");
            }
            other => panic!("expected a triple-quoted string, got {other:?}"),
        }
    }

    #[test]
    fn property_arbitrary_plain_strings_round_trip() {
        use proptest::prelude::*;

        proptest!(|(content in "[a-zA-Z0-9 _.,!?-]{0,64}")| {
            let source = format!("'{content}'");
            prop_assert_eq!(string_literal(&source), StringLiteral::Plain(content));
        });
    }
}
