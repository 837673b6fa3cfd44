//! Token model tying a `TokenKind` to its source span and tree position.
//!
//! Tokens live in an arena owned by [`crate::sql::tokenizer::TokenTree`];
//! nesting (parenthesized runs, `CASE..END` blocks) is expressed through
//! child *indices* into that arena rather than owned subtrees, so traversal
//! never recurses on adversarial input depth.
//!
//! Offsets always refer to the statement text supplied to the tokenizer,
//! which lets downstream code slice the original text instead of carrying a
//! parallel reconstructed string.

use crate::sql::token_kind::TokenKind;

/// A lexical token with inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range of the tokenized statement
/// - `children` is non-empty only for `TokenKind::Group` nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    /// Arena indices of nested tokens, in document order.
    pub children: Vec<usize>,
    /// True for merged multi-word keywords and for group nodes.
    pub compound: bool,
}

impl Token {
    /// Construct a new leaf token.
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            children: Vec::new(),
            compound: false,
        }
    }

    /// Construct a merged compound keyword spanning several words.
    pub const fn compound_keyword(start: usize, end: usize) -> Self {
        Self {
            kind: TokenKind::Keyword,
            start,
            end,
            children: Vec::new(),
            compound: true,
        }
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The token's text within the statement it was lexed from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// True for tokens that span more than one lexical unit.
    pub fn is_compound(&self) -> bool {
        self.compound || !self.children.is_empty()
    }

    /// Convenience: convert to a `(start, end)` tuple.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}
