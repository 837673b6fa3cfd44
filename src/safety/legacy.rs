//! Legacy substring-based blacklist check.
//!
//! Predates the tokenizer: the text is uppercased, every whitelist phrase is
//! stripped, and each blacklist entry is then matched as a plain substring.
//! Cruder than [`passes_blacklist`](crate::passes_blacklist) — `droptable`
//! or a quoted `"DELETE"` will trip it — but kept for callers that depend on
//! the historical written-word behavior, where the whitelist exists
//! precisely to punch holes in the substring matching.

use crate::*;
use itertools::Itertools as _;

/// Substring variant of the blacklist check.
///
/// `cleanse(sql)` uppercases and removes every occurrence of each whitelist
/// phrase; a blacklist entry fails the check when it occurs anywhere in the
/// cleansed text.
pub fn passes_blacklist_legacy(sql: &str, policy: &SafetyPolicy) -> BlacklistResult {
    let clean = cleanse(sql, &policy.whitelist);
    let offending: Vec<String> = policy
        .blacklist
        .iter()
        .filter(|entry| clean.contains(&entry.to_uppercase()))
        .unique()
        .cloned()
        .collect();
    let passes = offending.is_empty();
    debug!(passes, ?offending, "legacy substring blacklist evaluation");
    BlacklistResult { passes, offending }
}

fn cleanse(sql: &str, whitelist: &[String]) -> String {
    whitelist.iter().fold(sql.to_uppercase(), |acc, phrase| {
        acc.replace(&phrase.to_uppercase(), "")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletes_and_drops_are_refused() {
        common_init();
        let sql = "'distraction'; deLeTe from table; SELECT 1+1 AS TWO; drop view foo;";
        let res = passes_blacklist_legacy(sql, &SafetyPolicy::default());
        assert!(!res.passes);
        assert_eq!(res.offending, vec!["DROP", "DELETE"]);
    }

    #[test]
    fn dropping_views_is_refused_case_insensitively() {
        let res =
            passes_blacklist_legacy("SELECT 1+1 AS TWO; drop ViEw foo;", &SafetyPolicy::default());
        assert!(!res.passes);
    }

    #[test]
    fn whitelist_phrase_is_stripped_before_matching() {
        let policy = SafetyPolicy::new(DEFAULT_BLACKLIST.iter().copied(), ["dropper"]);
        let res = passes_blacklist_legacy("SELECT 1+1 AS TWO; dropper ViEw foo;", &policy);
        assert!(res.passes);
    }

    #[test]
    fn default_whitelist_spares_created_and_updated_columns() {
        let res = passes_blacklist_legacy(
            "SELECT created, updated, deleted FROM audit_log",
            &SafetyPolicy::default(),
        );
        assert!(res.passes);
    }

    #[test]
    fn substring_matching_is_cruder_than_token_matching() {
        let sql = "SELECT 1+1 AS \"DELETE\";";
        assert!(!passes_blacklist_legacy(sql, &SafetyPolicy::default()).passes);
        assert!(passes_blacklist(sql, &SafetyPolicy::default()).passes);
    }
}
