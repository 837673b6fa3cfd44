//! Lenient SQL tokenization and statement splitting.
//!
//! This module groups the lexical building blocks the safety engine uses to
//! reason about a SQL text without a full parser:
//!
//! - `keyword`    : Keyword table and compound-phrase pairs.
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with source span and
//!   arena child indices.
//! - `tokenizer`  : Single pass tokenizer producing a walkable `TokenTree`.
//! - `splitter`   : Top-level semicolon statement splitting.
//!
//! Design principles:
//! 1. Accept malformed SQL; a safety check must always be able to run.
//! 2. String/comment interiors are opaque, never keyword-matched.
//! 3. Traversal is iterative over arena indices, never call-stack recursive.
//!
//! NOTE: This is **not** a full SQL parser. It covers exactly what blacklist
//! evaluation needs; use the `format` module (sqlparser-backed) when real
//! parsing is required.

pub mod keyword;
pub mod splitter;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use splitter::split_statements;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{TokenTree, tokenize};

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Token, TokenKind, TokenTree, split_statements, tokenize};
}
