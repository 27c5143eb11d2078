//! Syntactic error taxonomy.
//!
//! Mirrors [`csonh_lex::LexError`] in shape: one variant per named
//! failure, each carrying the [`Position`] of the offending token.

use csonh_util::Position;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected an object key at {position}, found {found}")]
    ExpectedKey { position: Position, found: String },

    #[error("expected ':' after key at {position}, found {found}")]
    ExpectedColon { position: Position, found: String },

    #[error("expected a value at {position}, found {found}")]
    ExpectedValue { position: Position, found: String },

    #[error("bareword rejected as value at {position}")]
    BarewordRejectedAsValue { position: Position },

    #[error("expected ',' or newline between entries at {position}, found {found}")]
    ExpectedSeparator { position: Position, found: String },

    #[error("unclosed object starting at {position}")]
    UnclosedObject { position: Position },

    #[error("unclosed array starting at {position}")]
    UnclosedArray { position: Position },

    #[error("root must be an object or an array at {position}")]
    RootMustBeObjectOrArray { position: Position },

    #[error("trailing junk after root value at {position}")]
    TrailingJunk { position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match *self {
            ParseError::ExpectedKey { position, .. }
            | ParseError::ExpectedColon { position, .. }
            | ParseError::ExpectedValue { position, .. }
            | ParseError::BarewordRejectedAsValue { position }
            | ParseError::ExpectedSeparator { position, .. }
            | ParseError::UnclosedObject { position }
            | ParseError::UnclosedArray { position }
            | ParseError::RootMustBeObjectOrArray { position }
            | ParseError::TrailingJunk { position } => position,
        }
    }
}
