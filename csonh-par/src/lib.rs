//! Parser and value tree for CSONH source text.
//!
//! [`parse`] is the public entry point: it tokenizes with
//! [`csonh_lex::tokenize`] and feeds the result to [`parser::Parser`].
//! A lexer failure and a parser failure are both surfaced through
//! [`CsonhParseError`] so a caller matches one type regardless of which
//! stage produced it.

mod dedent;
mod error;
mod parser;
mod value;

use parser::Parser;

pub use error::ParseError;
pub use value::Value;

/// Either stage of the pipeline can fail; this wraps both so `parse`
/// has a single error type.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum CsonhParseError {
    #[error(transparent)]
    Lex(#[from] csonh_lex::LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub fn parse(source: &str) -> Result<Value, CsonhParseError> {
    let tokens = csonh_lex::tokenize(source)?;
    Ok(Parser::new(tokens).run()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_is_empty_object() {
        let value = parse("").unwrap();
        assert_eq!(value.as_object().unwrap().len(), 0);
    }

    #[test]
    fn lex_failure_surfaces_as_lex_variant() {
        let err = parse("a: \"val #{x}\"").unwrap_err();
        assert!(matches!(err, CsonhParseError::Lex(_)));
    }

    #[test]
    fn parse_failure_surfaces_as_parse_variant() {
        let err = parse("[1 2]").unwrap_err();
        assert!(matches!(err, CsonhParseError::Parse(_)));
    }

    #[test]
    fn round_trips_across_integer_bases() {
        let decimal = parse("a: 255").unwrap();
        let hex = parse("a: 0xFF").unwrap();
        let bin = parse("a: 0b11111111").unwrap();
        let oct = parse("a: 0o377").unwrap();
        assert_eq!(decimal["a"].as_i64(), hex["a"].as_i64());
        assert_eq!(hex["a"].as_i64(), bin["a"].as_i64());
        assert_eq!(bin["a"].as_i64(), oct["a"].as_i64());
    }

    #[test]
    fn property_integer_bases_agree_for_arbitrary_values() {
        use proptest::prelude::*;

        proptest!(|(value in 0i64..0xFFFF)| {
            let decimal = parse(&format!("a: {value}")).unwrap();
            let hex = parse(&format!("a: 0x{value:X}")).unwrap();
            let bin = parse(&format!("a: 0b{value:b}")).unwrap();
            let oct = parse(&format!("a: 0o{value:o}")).unwrap();
            prop_assert_eq!(decimal["a"].as_i64(), Some(value));
            prop_assert_eq!(hex["a"].as_i64(), Some(value));
            prop_assert_eq!(bin["a"].as_i64(), Some(value));
            prop_assert_eq!(oct["a"].as_i64(), Some(value));
        });
    }
}
