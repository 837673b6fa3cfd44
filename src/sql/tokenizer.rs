use crate::sql::{keyword, token::Token, token_kind::TokenKind};

/// Lenient SQL tokenizer producing a shallow token tree.
///
/// Scope / Intent:
/// - Designed for safety scanning: every keyword anywhere in the statement,
///   including inside subqueries and `CASE..END` blocks, must be reachable by
///   a single document-order walk.
/// - Accepts incomplete / syntactically invalid SQL; unparseable fragments
///   degrade to `Other` tokens instead of errors.
/// - String literals, double-quoted identifiers and comments are lexed as
///   single opaque tokens so their interior is never keyword-matched.
///
/// Behavior:
/// - Aggregates `[A-Za-z0-9_]` runs into words, classifying them against the
///   table in `keyword.rs` (lowercased once, original casing preserved).
/// - Merges known two-word phrases (`INSERT INTO`, `OWNER TO`, ...) into a
///   single compound keyword token.
/// - Groups parenthesized runs and `CASE..END` blocks into `Group` nodes
///   holding child indices; unclosed groups stay open to end of input.
///
/// Guarantees:
/// - Never panics on valid UTF-8; never returns an error.
/// - `walk()` yields tokens in document order, depth-first.
#[derive(Debug, Clone, Default)]
pub struct TokenTree {
    nodes: Vec<Token>,
    roots: Vec<usize>,
}

impl TokenTree {
    /// All tokens in the arena, in allocation order.
    pub fn nodes(&self) -> &[Token] {
        &self.nodes
    }

    /// Arena indices of the top-level tokens.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// True if no tokens were produced.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Document-order depth-first traversal over the arena.
    ///
    /// Group nodes are yielded before their children. The walk is iterative
    /// over an explicit index stack, so input nesting depth cannot overflow
    /// the call stack.
    pub fn walk(&self) -> Walk<'_> {
        let mut stack: Vec<usize> = self.roots.clone();
        stack.reverse();
        Walk { tree: self, stack }
    }
}

/// Iterator state for [`TokenTree::walk`].
pub struct Walk<'t> {
    tree: &'t TokenTree,
    stack: Vec<usize>,
}

impl<'t> Iterator for Walk<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let token = &self.tree.nodes[idx];
        for child in token.children.iter().rev() {
            self.stack.push(*child);
        }
        Some(token)
    }
}

enum GroupStyle {
    Paren,
    Case,
}

/// Tokenize one statement into a [`TokenTree`].
///
/// Empty input yields an empty tree; malformed input yields best-effort
/// tokens (unterminated strings and comments run to end of input).
pub fn tokenize(sql: &str) -> TokenTree {
    let flat = lex(sql);
    let mut nodes: Vec<Token> = Vec::with_capacity(flat.len());
    let mut roots: Vec<usize> = Vec::new();
    let mut open: Vec<(usize, GroupStyle)> = Vec::new();

    fn attach(nodes: &mut Vec<Token>, roots: &mut Vec<usize>, parent: Option<usize>, idx: usize) {
        match parent {
            Some(p) => {
                let end = nodes[idx].end;
                nodes[p].children.push(idx);
                if nodes[p].end < end {
                    nodes[p].end = end;
                }
            }
            None => roots.push(idx),
        }
    }

    let mut i = 0;
    while i < flat.len() {
        let tok = &flat[i];
        let parent = open.last().map(|(p, _)| *p);

        // Merge `keyword whitespace keyword` into one compound token when the
        // pair is a known phrase.
        if tok.kind == TokenKind::Keyword
            && i + 2 < flat.len()
            && flat[i + 1].kind == TokenKind::Whitespace
            && flat[i + 2].kind == TokenKind::Keyword
        {
            let first = tok.text(sql).to_ascii_lowercase();
            let second = flat[i + 2].text(sql).to_ascii_lowercase();
            if keyword::is_compound_pair(&first, &second) {
                let idx = nodes.len();
                nodes.push(Token::compound_keyword(tok.start, flat[i + 2].end));
                attach(&mut nodes, &mut roots, parent, idx);
                i += 3;
                continue;
            }
        }

        let is_open_paren = tok.kind == TokenKind::Punct && tok.text(sql) == "(";
        let is_close_paren = tok.kind == TokenKind::Punct && tok.text(sql) == ")";
        let is_case = tok.kind == TokenKind::Keyword && tok.text(sql).eq_ignore_ascii_case("case");
        let is_end = tok.kind == TokenKind::Keyword && tok.text(sql).eq_ignore_ascii_case("end");

        if is_open_paren || is_case {
            let group = nodes.len();
            nodes.push(Token {
                kind: TokenKind::Group,
                start: tok.start,
                end: tok.end,
                children: Vec::new(),
                compound: true,
            });
            attach(&mut nodes, &mut roots, parent, group);
            let style = if is_case {
                GroupStyle::Case
            } else {
                GroupStyle::Paren
            };
            open.push((group, style));
            let child = nodes.len();
            nodes.push(tok.clone());
            attach(&mut nodes, &mut roots, Some(group), child);
            i += 1;
            continue;
        }

        let closes = match open.last() {
            Some((_, GroupStyle::Paren)) => is_close_paren,
            Some((_, GroupStyle::Case)) => is_end,
            None => false,
        };
        if closes {
            let idx = nodes.len();
            nodes.push(tok.clone());
            attach(&mut nodes, &mut roots, parent, idx);
            open.pop();
            i += 1;
            continue;
        }

        let idx = nodes.len();
        nodes.push(tok.clone());
        attach(&mut nodes, &mut roots, parent, idx);
        i += 1;
    }

    TokenTree { nodes, roots }
}

/// Single pass flat lexer. O(n) time, O(t) space for `t` tokens.
fn lex(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let len = sql.len();
    let mut i = 0;

    while i < len {
        let rest = &sql[i..];
        let Some(c) = rest.chars().next() else { break };
        let start = i;

        if c.is_whitespace() {
            i += c.len_utf8();
            while let Some(cc) = sql[i..].chars().next() {
                if cc.is_whitespace() {
                    i += cc.len_utf8();
                } else {
                    break;
                }
            }
            out.push(Token::new(TokenKind::Whitespace, start, i));
            continue;
        }

        // Line comment runs to (not including) the newline.
        if rest.starts_with("--") {
            i = match rest.find('\n') {
                Some(p) => start + p,
                None => len,
            };
            out.push(Token::new(TokenKind::Comment, start, i));
            continue;
        }

        // Block comment; unterminated runs to end of input.
        if rest.starts_with("/*") {
            i = match sql[start + 2..].find("*/") {
                Some(p) => start + 2 + p + 2,
                None => len,
            };
            out.push(Token::new(TokenKind::Comment, start, i));
            continue;
        }

        // String literal with doubled-quote escape; unterminated runs to end.
        if c == '\'' {
            i = scan_quoted(sql, start, '\'');
            out.push(Token::new(TokenKind::StringLit, start, i));
            continue;
        }

        // Double-quoted identifier, same escape rule.
        if c == '"' {
            i = scan_quoted(sql, start, '"');
            out.push(Token::new(TokenKind::Ident, start, i));
            continue;
        }

        if c.is_ascii_digit() {
            i += 1;
            while i < len {
                let b = sql.as_bytes()[i];
                if b.is_ascii_digit() || b == b'.' {
                    i += 1;
                } else {
                    break;
                }
            }
            out.push(Token::new(TokenKind::Number, start, i));
            continue;
        }

        // Word path: keyword or identifier.
        if c.is_ascii_alphabetic() || c == '_' {
            i += 1;
            while i < len {
                let b = sql.as_bytes()[i];
                if b.is_ascii_alphanumeric() || b == b'_' {
                    i += 1;
                } else {
                    break;
                }
            }
            let lower = sql[start..i].to_ascii_lowercase();
            let kind = if keyword::is_keyword(&lower) {
                TokenKind::Keyword
            } else {
                TokenKind::Ident
            };
            out.push(Token::new(kind, start, i));
            continue;
        }

        i += c.len_utf8();
        let kind = match c {
            ',' | '.' | '(' | ')' | ';' | '*' | '=' | '<' | '>' | '+' | '-' | '/' | '%' => {
                TokenKind::Punct
            }
            _ => TokenKind::Other,
        };
        out.push(Token::new(kind, start, i));
    }

    out
}

/// Scan a quoted region starting at `start` (which holds the quote char),
/// honoring the SQL doubled-quote escape. Returns the exclusive end offset.
fn scan_quoted(sql: &str, start: usize, quote: char) -> usize {
    let qlen = quote.len_utf8();
    let mut i = start + qlen;
    loop {
        match sql[i..].find(quote) {
            None => return sql.len(),
            Some(p) => {
                let q = i + p;
                if sql[q + qlen..].starts_with(quote) {
                    i = q + qlen * 2;
                } else {
                    return q + qlen;
                }
            }
        }
    }
}
