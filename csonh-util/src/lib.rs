//! csonh-util - Shared foundation for the CSONH lexer and parser.
//!
//! This crate holds the one type both `csonh-lex` and `csonh-par` need to
//! agree on before either can define its own error enum: [`Position`], the
//! (line, column) pair every token and every diagnostic carries.
//!
//! Deliberately absent here: a source map, byte-range spans, string
//! interning, arena allocation. CSONH documents are parsed once, in full,
//! single-threaded, and turned into an owned value tree — none of the
//! machinery a multi-file, incrementally-recompiled language frontend
//! needs applies to a single-shot config-format parse.

mod position;

pub use position::Position;
