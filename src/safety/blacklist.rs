//! Token-based blacklist evaluation.
//!
//! The text is split into statements, each statement is tokenized, and the
//! set of keyword-classified token texts (uppercased once at collection) is
//! matched by exact equality against the configured blacklist. String
//! literals, quoted identifiers and comments never contribute; a keyword
//! buried in a subquery or `CASE..END` block always does.
//!
//! The result is computed fresh on every call — the same template can yield
//! different results after parameter substitution, so callers must re-check
//! the final SQL before every execution.

use crate::*;
use itertools::Itertools as _;
use std::collections::HashSet;

/// Outcome of a blacklist evaluation.
///
/// A failing result is a normal value, not an error; `offending` holds the
/// matched blacklist entries as configured, deduplicated, in blacklist
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistResult {
    pub passes: bool,
    pub offending: Vec<String>,
}

impl BlacklistResult {
    /// User-facing validation message, present only on failure.
    pub fn failure_message(&self) -> Option<String> {
        (!self.passes).then(|| {
            format!(
                "Query failed the SQL blacklist: {}",
                self.offending.iter().join(", ")
            )
        })
    }

    /// Convert into a `Result` for call sites that must refuse to proceed.
    pub fn into_result(self) -> Result {
        if self.passes {
            Ok(())
        } else {
            Err(Error::Blacklist(self.offending))
        }
    }
}

/// Evaluate `sql` against the policy's blacklist.
///
/// An empty blacklist passes everything. The whitelist plays no role here;
/// it belongs to [`passes_blacklist_legacy`](crate::passes_blacklist_legacy).
pub fn passes_blacklist(sql: &str, policy: &SafetyPolicy) -> BlacklistResult {
    let mut seen: HashSet<String> = HashSet::new();
    for stmt in split_statements(sql) {
        collect_keywords(stmt, &mut seen);
    }

    let offending: Vec<String> = policy
        .blacklist
        .iter()
        .filter(|entry| seen.contains(&entry.to_uppercase()))
        .unique()
        .cloned()
        .collect();
    let passes = offending.is_empty();
    debug!(passes, ?offending, "sql blacklist evaluation");
    BlacklistResult { passes, offending }
}

/// Walk one statement's token tree and record every matchable keyword form.
///
/// For a compound keyword the constituent words are recorded too, and any
/// keyword followed by whitespace in the source also records its
/// trailing-space form, so entries like `RENAME ` match as configured.
fn collect_keywords(stmt: &str, seen: &mut HashSet<String>) {
    let tree = tokenize(stmt);
    for tok in tree.walk() {
        if !tok.kind.is_keyword() {
            continue;
        }
        let upper = collapse_upper(tok.text(stmt));
        if tok.is_compound() {
            let mut parts = tok.text(stmt).split_whitespace().peekable();
            while let Some(part) = parts.next() {
                let part = part.to_uppercase();
                if parts.peek().is_some() {
                    seen.insert(format!("{part} "));
                }
                seen.insert(part);
            }
        }
        if stmt[tok.end..].starts_with(|c: char| c.is_whitespace()) {
            seen.insert(format!("{upper} "));
        }
        seen.insert(upper);
    }
}

/// Uppercase and collapse interior whitespace, so `insert   into` in source
/// matches the single-space configured form.
fn collapse_upper(text: &str) -> String {
    text.split_whitespace().join(" ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn policy(blacklist: &[&str]) -> SafetyPolicy {
        common_init();
        SafetyPolicy::new(blacklist.iter().copied(), Vec::<String>::new())
    }

    #[test]
    fn keyword_inside_string_literal_does_not_match() {
        let res = passes_blacklist(
            "SELECT * FROM t WHERE t.value = 'Grant Date';",
            &policy(&["GRANT"]),
        );
        assert!(res.passes);
        assert!(res.offending.is_empty());
    }

    #[test]
    fn keyword_inside_identifier_does_not_match() {
        let res = passes_blacklist(
            "SELECT * FROM student droptable WHERE name LIKE 'Robert%'",
            &policy(&["DROP"]),
        );
        assert!(res.passes);
    }

    #[test]
    fn quoted_identifier_does_not_match() {
        let res = passes_blacklist("SELECT 1+1 AS \"DELETE\";", &SafetyPolicy::default());
        assert!(res.passes, "quoted identifier is not a keyword token");
    }

    #[test]
    fn case_when_passes_while_nested_delete_is_caught() {
        let ok = passes_blacklist(
            "SELECT ProductNumber, CASE WHEN ListPrice < 50 THEN 'cheap' ELSE 'pricey' END FROM p",
            &SafetyPolicy::default(),
        );
        assert!(ok.passes);

        let bad = passes_blacklist(
            "SELECT * FROM t WHERE id IN (SELECT id FROM (DELETE FROM u))",
            &SafetyPolicy::default(),
        );
        assert!(!bad.passes);
        assert!(bad.offending.iter().any(|w| w == "DELETE"));
    }

    #[test]
    fn multi_statement_scan_reports_each_entry_once() {
        common_init();
        let sql = "'distraction'; deLeTe from table; SELECT 1+1 AS TWO; drop view foo;";
        let res = passes_blacklist(sql, &SafetyPolicy::default());
        assert!(!res.passes);
        assert_eq!(res.offending, vec!["DROP", "DELETE"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let res = passes_blacklist("delete from t", &policy(&["DELETE"]));
        assert!(!res.passes);
    }

    #[test]
    fn empty_blacklist_passes_everything() {
        let res = passes_blacklist("drop table x; delete from y", &SafetyPolicy::permissive());
        assert!(res.passes);
    }

    #[rstest]
    #[case("insert into foo values (1)", "INSERT INTO")]
    #[case("create table foo (id int)", "CREATE TABLE")]
    #[case("alter table foo owner to bob", "OWNER TO")]
    fn compound_entries_match_as_configured(#[case] sql: &str, #[case] entry: &str) {
        let res = passes_blacklist(sql, &SafetyPolicy::default());
        assert!(!res.passes);
        assert!(res.offending.iter().any(|w| w == entry), "{entry} expected");
    }

    #[test]
    fn trailing_space_entry_matches_keyword_followed_by_whitespace() {
        let res = passes_blacklist("alter table t rename column a to b", &policy(&["RENAME "]));
        assert!(!res.passes);
        let res = passes_blacklist("select rename", &policy(&["RENAME "]));
        assert!(res.passes, "no trailing whitespace, entry must not match");
    }

    #[test]
    fn exact_token_match_not_substring() {
        let res = passes_blacklist("select updated_at from t", &policy(&["UPDATE"]));
        assert!(res.passes);
    }

    #[test]
    fn failure_message_format() {
        let sql = "drop view foo; delete from bar;";
        let res = passes_blacklist(sql, &SafetyPolicy::default());
        assert_eq!(
            res.failure_message().as_deref(),
            Some("Query failed the SQL blacklist: DROP, DELETE")
        );
        assert!(matches!(res.into_result(), Err(Error::Blacklist(_))));
    }

    #[test]
    fn passing_result_converts_to_ok() {
        let res = passes_blacklist("SELECT 1", &SafetyPolicy::default());
        assert!(res.failure_message().is_none());
        assert!(res.into_result().is_ok());
    }
}
