//! CSONH: a strict, data-only, indentation-based configuration format.
//!
//! This crate is a thin facade over [`csonh_par`], the implementation
//! crate doing the actual lexing and parsing, re-exporting the one
//! entry point a downstream crate needs: [`parse`].

pub use csonh_par::{ParseError, Value};

/// Either stage of the pipeline can fail; `csonh_lex::LexError` and
/// `csonh_par::ParseError` are both reachable through this type.
pub use csonh_par::CsonhParseError as CsonhError;

/// Parses a complete CSONH document into a [`Value`] tree.
///
/// Fails fast: the first lexical or syntactic error halts parsing and
/// is returned with the position of the offending token.
pub fn parse(source: &str) -> Result<Value, CsonhError> {
    log::trace!("csonh::parse: {} bytes", source.len());
    match csonh_par::parse(source) {
        Ok(value) => {
            log::trace!("csonh::parse: ok, root is {}", root_shape(&value));
            Ok(value)
        }
        Err(err) => {
            log::debug!("csonh::parse: failed: {err}");
            Err(err)
        }
    }
}

fn root_shape(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Null => "null",
    }
}
