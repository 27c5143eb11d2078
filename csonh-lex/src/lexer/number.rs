//! Numeric literal lexing.
//!
//! Covers decimal, hex (`0x`), binary (`0b`), and octal (`0o`) integers and
//! decimal floats with an optional exponent. Sign and base prefix are
//! handled up front; the remaining digit scanning tracks whether a `.`
//! or exponent was seen to decide integer vs. float.

use csonh_util::Position;

use crate::error::LexError;
use crate::lexer::core::Lexer;
use crate::token::{NumberLiteral, Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self) -> Result<Token, LexError> {
        let start = self.position();
        let mut text = String::new();
        let negative = self.cursor().eat('-');
        if negative {
            text.push('-');
        }

        if self.cursor().current() == '0' && matches!(self.cursor().peek(1), 'x' | 'X' | 'b' | 'B' | 'o' | 'O') {
            return self.lex_radix_integer(start, negative);
        }

        if self.cursor().current() == '0' && self.cursor().peek(1).is_ascii_digit() {
            return Err(LexError::LeadingZeros { position: start });
        }

        let mut is_float = false;

        if self.cursor().current() == '.' {
            is_float = true;
            text.push('.');
            self.cursor().advance();
            if self.cursor().current() == '.' {
                return Err(LexError::RangeOperator { position: self.position() });
            }
            self.consume_digits(&mut text);
        } else {
            self.consume_digits(&mut text);

            if self.cursor().current() == '.' {
                if self.cursor().peek(1) == '.' {
                    return Err(LexError::RangeOperator { position: self.position() });
                }
                is_float = true;
                text.push('.');
                self.cursor().advance();
                self.consume_digits(&mut text);
            }
        }

        if matches!(self.cursor().current(), 'e' | 'E') {
            is_float = true;
            text.push(self.cursor().current());
            self.cursor().advance();

            if self.cursor().eat('+') {
                text.push('+');
            } else if self.cursor().eat('-') {
                text.push('-');
            }

            let exponent_start = self.position();
            let before = text.len();
            self.consume_digits(&mut text);
            if text.len() == before {
                return Err(LexError::InvalidScientificNotation { position: exponent_start });
            }
        }

        let kind = if is_float {
            let normalized = normalize_float_literal(&text);
            let value: f64 = normalized
                .parse()
                .map_err(|_| LexError::InvalidScientificNotation { position: start })?;
            NumberLiteral::Float(value)
        } else {
            let value: i64 = text
                .parse()
                .map_err(|_| LexError::InvalidDigit { position: start })?;
            NumberLiteral::Integer(value)
        };

        Ok(Token::new(TokenKind::Number(kind), start))
    }

    fn consume_digits(&mut self, text: &mut String) {
        while self.cursor().current().is_ascii_digit() {
            text.push(self.cursor().current());
            self.cursor().advance();
        }
    }

    fn lex_radix_integer(&mut self, start: Position, negative: bool) -> Result<Token, LexError> {
        self.cursor().advance(); // '0'
        let prefix = self.cursor().current();
        self.cursor().advance(); // x/X, b/B, o/O

        let radix = match prefix {
            'x' | 'X' => 16,
            'b' | 'B' => 2,
            'o' | 'O' => 8,
            _ => unreachable!("caller already matched the prefix set"),
        };

        let digits_start = self.position();
        let mut digits = String::new();
        while is_radix_digit(self.cursor().current(), radix) {
            digits.push(self.cursor().current());
            self.cursor().advance();
        }

        if digits.is_empty() {
            return Err(LexError::InvalidDigit { position: digits_start });
        }

        let value = i64::from_str_radix(&digits, radix)
            .map_err(|_| LexError::InvalidDigit { position: digits_start })?;
        let value = if negative { -value } else { value };

        Ok(Token::new(TokenKind::Number(NumberLiteral::Integer(value)), start))
    }
}

fn is_radix_digit(c: char, radix: u32) -> bool {
    match radix {
        16 => c.is_ascii_hexdigit(),
        2 => c == '0' || c == '1',
        8 => ('0'..='7').contains(&c),
        _ => unreachable!("only hex/binary/octal radixes are used"),
    }
}

/// Rewrites a scanned float literal so it is always valid input for
/// [`str::parse`], even when the source wrote a bare leading or trailing
/// dot (`.5`, `5.`, `-.5`).
fn normalize_float_literal(raw: &str) -> String {
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };

    let mantissa = if let Some(frac) = mantissa.strip_prefix('.') {
        format!("0.{}", if frac.is_empty() { "0" } else { frac })
    } else if let Some(int_part) = mantissa.strip_suffix('.') {
        format!("{int_part}.0")
    } else {
        mantissa.to_string()
    };

    format!("{sign}{mantissa}{exponent}")
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::{NumberLiteral, TokenKind};

    fn number(source: &str) -> NumberLiteral {
        let tokens = Lexer::new(source).tokenize().unwrap();
        match &tokens[0].kind {
            TokenKind::Number(n) => *n,
            other => panic!("expected a number, got {other:?}"),
        }
    }

    #[test]
    fn plain_integer() {
        assert_eq!(number("42"), NumberLiteral::Integer(42));
    }

    #[test]
    fn negative_integer() {
        assert_eq!(number("-42"), NumberLiteral::Integer(-42));
    }

    #[test]
    fn hex_binary_octal() {
        assert_eq!(number("0xFF"), NumberLiteral::Integer(255));
        assert_eq!(number("0b1010"), NumberLiteral::Integer(10));
        assert_eq!(number("0o17"), NumberLiteral::Integer(15));
    }

    #[test]
    fn plain_zero_and_float_with_zero_integer_part_are_legal() {
        assert_eq!(number("0"), NumberLiteral::Integer(0));
        assert_eq!(number("0.5"), NumberLiteral::Float(0.5));
    }

    #[test]
    fn leading_dot_and_trailing_dot() {
        assert_eq!(number(".5"), NumberLiteral::Float(0.5));
        assert_eq!(number("-.5"), NumberLiteral::Float(-0.5));
        assert_eq!(number("5."), NumberLiteral::Float(5.0));
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(number("2.5e10"), NumberLiteral::Float(2.5e10));
        assert_eq!(number("1E-3"), NumberLiteral::Float(1e-3));
    }

    #[test]
    fn leading_zeros_rejected() {
        let err = Lexer::new("0123").tokenize().unwrap_err();
        assert!(matches!(err, crate::error::LexError::LeadingZeros { .. }));
    }

    #[test]
    fn range_operator_rejected() {
        let err = Lexer::new("1..10").tokenize().unwrap_err();
        assert!(matches!(err, crate::error::LexError::RangeOperator { .. }));
    }

    #[test]
    fn missing_exponent_digits_rejected() {
        let err = Lexer::new("1e").tokenize().unwrap_err();
        assert!(matches!(
            err,
            crate::error::LexError::InvalidScientificNotation { .. }
        ));
    }

    #[test]
    fn property_arbitrary_decimal_digit_strings_lex_to_one_integer() {
        use proptest::prelude::*;

        proptest!(|(digits in "[1-9][0-9]{0,17}")| {
            let value: i64 = digits.parse().unwrap();
            prop_assert_eq!(number(&digits), NumberLiteral::Integer(value));
        });
    }

    #[test]
    fn property_hex_bin_oct_agree_with_decimal() {
        use proptest::prelude::*;

        proptest!(|(value in 0i64..0xFFFF)| {
            let decimal = number(&value.to_string());
            let hex = number(&format!("0x{value:X}"));
            let bin = number(&format!("0b{value:b}"));
            let oct = number(&format!("0o{value:o}"));
            prop_assert_eq!(decimal, hex);
            prop_assert_eq!(hex, bin);
            prop_assert_eq!(bin, oct);
        });
    }
}
