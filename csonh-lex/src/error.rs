//! Lexical error taxonomy.
//!
//! One variant per lexical failure. Every variant carries
//! the [`Position`] of the offending code point and nothing else —
//! messages are generated from the variant via `thiserror`'s `#[error]`
//! rather than built ad hoc at the call site, so every site that raises
//! the same failure produces the same wording.

use csonh_util::Position;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LexError {
    #[error("mixed tabs and spaces in indentation at {position}")]
    MixedTabsAndSpaces { position: Position },

    #[error("inconsistent indent character at {position}")]
    InconsistentIndentChar { position: Position },

    #[error("inconsistent indent unit at {position}")]
    InconsistentIndentUnit { position: Position },

    #[error("dedent does not match any enclosing indentation level at {position}")]
    DedentMismatch { position: Position },

    #[error("unterminated string starting at {position}")]
    UnterminatedString { position: Position },

    #[error("newline in single-line string at {position}")]
    NewlineInSingleLineString { position: Position },

    #[error("string interpolation is not allowed at {position}")]
    InterpolationNotAllowed { position: Position },

    #[error("unterminated block comment starting at {position}")]
    UnterminatedBlockComment { position: Position },

    #[error("invalid escape sequence at {position}")]
    InvalidEscape { position: Position },

    #[error("invalid unicode escape at {position}")]
    InvalidUnicodeEscape { position: Position },

    #[error("invalid scientific notation at {position}")]
    InvalidScientificNotation { position: Position },

    #[error("leading zeros are not allowed at {position}")]
    LeadingZeros { position: Position },

    #[error("range operator is not allowed at {position}")]
    RangeOperator { position: Position },

    #[error("invalid digit in numeric literal at {position}")]
    InvalidDigit { position: Position },

    #[error("unexpected character '{found}' at {position}")]
    UnexpectedCharacter { found: char, position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match *self {
            LexError::MixedTabsAndSpaces { position }
            | LexError::InconsistentIndentChar { position }
            | LexError::InconsistentIndentUnit { position }
            | LexError::DedentMismatch { position }
            | LexError::UnterminatedString { position }
            | LexError::NewlineInSingleLineString { position }
            | LexError::InterpolationNotAllowed { position }
            | LexError::UnterminatedBlockComment { position }
            | LexError::InvalidEscape { position }
            | LexError::InvalidUnicodeEscape { position }
            | LexError::InvalidScientificNotation { position }
            | LexError::LeadingZeros { position }
            | LexError::RangeOperator { position }
            | LexError::InvalidDigit { position }
            | LexError::UnexpectedCharacter { position, .. } => position,
        }
    }
}
