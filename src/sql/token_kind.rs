//! Token classification for the lenient SQL tokenizer.
//!
//! Each `TokenKind` variant represents a syntactic atom discovered during
//! scanning. The tokenizer avoids strict SQL rules; anything unrecognized
//! becomes `Other` rather than an error, so a safety scan can always run.

use derive_more::Display;

/// Classification for a token produced by the tokenizer.
///
/// Not a full SQL lexeme set; intentionally small and pragmatic. The text of
/// a token is recovered by slicing the source with its span, so variants
/// carry no payload.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Recognized SQL keyword (single word or merged compound phrase).
    #[display("keyword")]
    Keyword,
    /// Table / alias / column name, including double-quoted identifiers.
    #[display("identifier")]
    Ident,
    /// Single-quoted string literal, interior treated as opaque.
    #[display("string")]
    StringLit,
    /// Numeric literal.
    #[display("number")]
    Number,
    /// Single punctuation character (comma, parens, operators, semicolon).
    #[display("punctuation")]
    Punct,
    /// Run of whitespace.
    #[display("whitespace")]
    Whitespace,
    /// Line (`--`) or block (`/* */`) comment, interior opaque.
    #[display("comment")]
    Comment,
    /// Compound node grouping nested tokens (parenthesized run, CASE block).
    #[display("group")]
    Group,
    /// Anything else, including unparseable fragments.
    #[display("other")]
    Other,
}

impl TokenKind {
    /// True if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword)
    }

    /// True if this token carries no SQL meaning (whitespace or comment).
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// True if this token is a compound node holding child tokens.
    pub fn is_group(&self) -> bool {
        matches!(self, TokenKind::Group)
    }
}
