//! Tokenizer for CSONH source text.
//!
//! [`tokenize`] is the public entry point: it normalizes line endings and
//! strips a leading BOM, then runs [`Lexer`] over the result. The lexer
//! emits a flat token vector rather than tokens on demand, since a parse
//! attempt always consumes the whole source in one pass.

mod cursor;
mod error;
mod indent;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{NumberLiteral, StringLiteral, Token, TokenKind};

/// Tokenizes a complete CSONH document.
///
/// Normalizes `\r\n` and lone `\r` to `\n` and strips a leading UTF-8 BOM
/// before lexing, so the lexer itself only ever sees `\n` as a line
/// separator.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let normalized = normalize(source);
    Lexer::new(&normalized).tokenize()
}

fn normalize(source: &str) -> String {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    if !source.contains('\r') {
        return source.to_string();
    }
    let mut normalized = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            normalized.push('\n');
        } else {
            normalized.push(c);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn strips_bom() {
        assert_eq!(kinds("\u{feff}a: 1\n"), kinds("a: 1\n"));
    }

    #[test]
    fn normalizes_crlf_and_lone_cr() {
        assert_eq!(kinds("a: 1\r\nb: 2\r\n"), kinds("a: 1\nb: 2\n"));
        assert_eq!(kinds("a: 1\rb: 2\r"), kinds("a: 1\nb: 2\n"));
    }
}
