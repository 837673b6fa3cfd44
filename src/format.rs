//! SQL formatting helpers built on a real parser.
//!
//! The safety tokenizer is deliberately lenient; when canonical rendering is
//! needed (display, change detection between saved revisions) we lean on
//! `sqlparser` instead.

use crate::*;
use itertools::Itertools as _;
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

static POSTGRES: PostgreSqlDialect = PostgreSqlDialect {};

/// Parse and re-render `sql` in canonical form, one statement per line,
/// keywords uppercased, each terminated with a semicolon.
pub fn fmt_sql(sql: &str) -> Result<String> {
    let ast = Parser::parse_sql(&POSTGRES, sql)?;
    Ok(ast.iter().map(|stmt| format!("{stmt};")).join("\n"))
}

/// True when two texts render to the same canonical SQL. Texts that do not
/// parse are compared literally (modulo surrounding whitespace) instead.
pub fn compare_sql(old: &str, new: &str) -> bool {
    match (fmt_sql(old), fmt_sql(new)) {
        (Ok(a), Ok(b)) => a == b,
        _ => old.trim() == new.trim(),
    }
}
