//! Recursive-descent parser over the lexer's token stream.
//!
//! One routine, [`Parser::value_following_colon`], is shared by the
//! indented-object grammar and the bracketed grammars — the two differ
//! only in how entries are terminated and separated, not in how a value
//! itself is parsed.

use csonh_lex::{NumberLiteral, StringLiteral, Token, TokenKind};
use indexmap::IndexMap;

use crate::dedent::decode_triple_quoted;
use crate::error::ParseError;
use crate::value::Value;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            !tokens.is_empty() && tokens.last().map(|t| &t.kind) == Some(&TokenKind::Eof),
            "lexer always terminates the token stream with Eof"
        );
        Self { tokens, pos: 0 }
    }

    pub fn run(mut self) -> Result<Value, ParseError> {
        self.skip_newlines();

        let value = match self.peek().kind.clone() {
            TokenKind::Eof => Value::Object(IndexMap::new()),
            TokenKind::LBracket => self.bracketed_array()?,
            TokenKind::LBrace => self.bracketed_object()?,
            TokenKind::Identifier(_) | TokenKind::String(_)
                if matches!(self.peek_at(1).kind, TokenKind::Colon) =>
            {
                Value::Object(self.indented_object_body()?)
            }
            _ => {
                return Err(ParseError::RootMustBeObjectOrArray {
                    position: self.peek().position,
                })
            }
        };

        self.skip_newlines();
        if !matches!(self.peek().kind, TokenKind::Eof) {
            return Err(ParseError::TrailingJunk {
                position: self.peek().position,
            });
        }
        Ok(value)
    }

    /// Parses entries until the next token no longer looks like the
    /// start of one. A non-entry token (anything other than DEDENT/EOF)
    /// is left unconsumed rather than treated as an error here — at the
    /// root this lets the top-level seal check report it as trailing
    /// junk at its own position instead of as a misleading "expected
    /// colon" pointing past it.
    fn indented_object_body(&mut self) -> Result<IndexMap<String, Value>, ParseError> {
        let mut map = IndexMap::new();
        while self.at_entry_start() {
            let key = self.key()?;
            self.expect_colon()?;
            self.skip_newlines();
            let value = self.value_following_colon()?;
            map.insert(key, value);
            self.skip_newlines();
        }
        Ok(map)
    }

    fn at_entry_start(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Identifier(_) | TokenKind::String(_))
            && matches!(self.peek_at(1).kind, TokenKind::Colon)
    }

    fn value_following_colon(&mut self) -> Result<Value, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Indent => {
                self.advance();
                let map = self.indented_object_body()?;
                if matches!(self.peek().kind, TokenKind::Dedent) {
                    self.advance();
                }
                Ok(Value::Object(map))
            }
            TokenKind::LBrace => self.bracketed_object(),
            TokenKind::LBracket => self.bracketed_array(),
            _ => self.literal_value(),
        }
    }

    fn bracketed_object(&mut self) -> Result<Value, ParseError> {
        let start = self.peek().position;
        self.advance(); // LBrace
        let mut map = IndexMap::new();

        loop {
            self.skip_indentation_noise();
            if matches!(self.peek().kind, TokenKind::RBrace) {
                self.advance();
                break;
            }
            if matches!(self.peek().kind, TokenKind::Eof) {
                return Err(ParseError::UnclosedObject { position: start });
            }

            let key = self.key()?;
            self.expect_colon()?;
            self.skip_indentation_noise();
            let value = self.value_following_colon()?;
            map.insert(key, value);
            self.expect_entry_separator(|kind| matches!(kind, TokenKind::RBrace))?;
        }

        Ok(Value::Object(map))
    }

    fn bracketed_array(&mut self) -> Result<Value, ParseError> {
        let start = self.peek().position;
        self.advance(); // LBracket
        let mut items = Vec::new();

        loop {
            self.skip_indentation_noise();
            if matches!(self.peek().kind, TokenKind::RBracket) {
                self.advance();
                break;
            }
            if matches!(self.peek().kind, TokenKind::Eof) {
                return Err(ParseError::UnclosedArray { position: start });
            }

            let value = self.value_following_colon()?;
            items.push(value);
            self.expect_entry_separator(|kind| matches!(kind, TokenKind::RBracket))?;
        }

        Ok(Value::Array(items))
    }

    fn literal_value(&mut self) -> Result<Value, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::String(literal) => {
                self.advance();
                Ok(Value::String(self.decode_string(literal)))
            }
            TokenKind::Number(NumberLiteral::Integer(i)) => {
                self.advance();
                Ok(Value::Integer(i))
            }
            TokenKind::Number(NumberLiteral::Float(f)) => {
                self.advance();
                Ok(Value::Float(f))
            }
            TokenKind::True => {
                self.advance();
                Ok(Value::Boolean(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Boolean(false))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Value::Null)
            }
            TokenKind::Identifier(_) => Err(ParseError::BarewordRejectedAsValue {
                position: self.peek().position,
            }),
            _ => Err(ParseError::ExpectedValue {
                position: self.peek().position,
                found: self.peek().kind.label(),
            }),
        }
    }

    fn key(&mut self) -> Result<String, ParseError> {
        match self.peek().kind.clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            TokenKind::String(literal) => {
                self.advance();
                Ok(self.decode_string(literal))
            }
            _ => Err(ParseError::ExpectedKey {
                position: self.peek().position,
                found: self.peek().kind.label(),
            }),
        }
    }

    fn expect_colon(&mut self) -> Result<(), ParseError> {
        if matches!(self.peek().kind, TokenKind::Colon) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::ExpectedColon {
                position: self.peek().position,
                found: self.peek().kind.label(),
            })
        }
    }

    fn expect_entry_separator(
        &mut self,
        is_closer: impl Fn(&TokenKind) -> bool,
    ) -> Result<(), ParseError> {
        if is_closer(&self.peek().kind) {
            return Ok(());
        }
        match self.peek().kind {
            TokenKind::Comma => {
                self.advance();
                Ok(())
            }
            TokenKind::Newline => {
                while matches!(self.peek().kind, TokenKind::Newline) {
                    self.advance();
                }
                Ok(())
            }
            _ => Err(ParseError::ExpectedSeparator {
                position: self.peek().position,
                found: self.peek().kind.label(),
            }),
        }
    }

    fn decode_string(&self, literal: StringLiteral) -> String {
        match literal {
            StringLiteral::Plain(s) => s,
            StringLiteral::Triple { raw, .. } => decode_triple_quoted(&raw),
        }
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    /// Inside brackets, indentation carries no grammatical meaning — a
    /// stray INDENT/DEDENT is discarded wherever a separator or entry
    /// start would otherwise be expected.
    fn skip_indentation_noise(&mut self) {
        while matches!(
            self.peek().kind,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent
        ) {
            self.advance();
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_at(&self, offset: usize) -> &Token {
        &self.tokens[(self.pos + offset).min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos.min(self.tokens.len() - 1)].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }
}
