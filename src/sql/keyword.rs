//! SQL keyword tables used by the tokenizer.
//!
//! The set is deliberately generous: the blacklist evaluator only ever
//! compares collected keyword text against configured entries, so an extra
//! recognized keyword is harmless, while a missing one would let a forbidden
//! statement slip through as an identifier. Entries are lowercase and sorted
//! so lookups can binary-search.

/// Reserved words classified as keyword tokens. Must stay sorted.
pub const KEYWORDS: &[&str] = &[
    "add",
    "all",
    "alter",
    "and",
    "any",
    "as",
    "asc",
    "begin",
    "between",
    "by",
    "case",
    "cast",
    "check",
    "column",
    "commit",
    "create",
    "cross",
    "current",
    "database",
    "default",
    "delete",
    "desc",
    "distinct",
    "drop",
    "else",
    "end",
    "escape",
    "except",
    "exists",
    "foreign",
    "from",
    "full",
    "grant",
    "group",
    "having",
    "if",
    "in",
    "index",
    "inner",
    "insert",
    "intersect",
    "into",
    "is",
    "join",
    "key",
    "left",
    "like",
    "limit",
    "not",
    "null",
    "offset",
    "on",
    "or",
    "order",
    "outer",
    "owner",
    "primary",
    "recursive",
    "references",
    "rename",
    "replace",
    "revoke",
    "right",
    "rollback",
    "select",
    "set",
    "table",
    "then",
    "to",
    "truncate",
    "union",
    "unique",
    "update",
    "using",
    "values",
    "view",
    "when",
    "where",
    "with",
];

/// Two-word phrases lexed as a single compound keyword token, so that
/// configured entries like `INSERT INTO` or `OWNER TO` are matchable as they
/// appear. The constituent words remain visible to the evaluator.
pub const COMPOUND_KEYWORDS: &[(&str, &str)] = &[
    ("create", "index"),
    ("create", "table"),
    ("create", "view"),
    ("drop", "index"),
    ("drop", "table"),
    ("drop", "view"),
    ("group", "by"),
    ("insert", "into"),
    ("order", "by"),
    ("owner", "to"),
    ("primary", "key"),
    ("rename", "to"),
];

/// Attempt to classify a *lower-cased* word slice as a keyword.
///
/// NOTE: The caller is responsible for lower-casing the input. This avoids
/// allocating new strings for each token; `to_ascii_lowercase` is typically
/// performed once per word lexeme outside this function.
pub fn is_keyword(lower: &str) -> bool {
    KEYWORDS.binary_search(&lower).is_ok()
}

/// True if the *lower-cased* word pair forms a compound keyword.
pub fn is_compound_pair(first: &str, second: &str) -> bool {
    COMPOUND_KEYWORDS
        .iter()
        .any(|(a, b)| *a == first && *b == second)
}
