//! Parameter substitution.
//!
//! Values are spliced into the SQL text as raw literals — no quoting, no
//! escaping, no driver-level binding. A supplied value can therefore change
//! the statement's meaning entirely, which is why the blacklist must be
//! re-evaluated on the substituted result before every execution, never on
//! the template alone.

use crate::params::extract::PARAM_RE;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Replace each placeholder whose name appears in `values` with the string
/// form of the supplied value. The whole occurrence — markers, label and
/// default decoration included — is replaced.
///
/// Name matching is case-insensitive. Keys in `values` that match no
/// placeholder are dropped; placeholders with no supplied value are left as
/// literal text. An empty `values` map returns the input unchanged.
pub fn swap_params<V: Display>(sql: &str, values: &BTreeMap<String, V>) -> String {
    if values.is_empty() {
        return sql.to_string();
    }
    let lookup: BTreeMap<String, String> = values
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.to_string()))
        .collect();
    PARAM_RE
        .replace_all(sql, |caps: &regex::Captures<'_>| {
            match lookup.get(&caps[1].to_lowercase()) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn params_get_swapped() {
        let got = swap_params(
            "please swap $$this$$ and $$that$$",
            &values([("this", "here"), ("that", "there")]),
        );
        assert_eq!(got, "please swap here and there");
    }

    #[test]
    fn empty_values_do_nothing() {
        let sql = "please swap $$this$$ and $$that$$";
        assert_eq!(swap_params(sql, &BTreeMap::<String, String>::new()), sql);
    }

    #[test]
    fn non_string_value_uses_its_display_form() {
        let mut v = BTreeMap::new();
        v.insert("this".to_string(), 1);
        assert_eq!(swap_params("please swap $$this$$", &v), "please swap 1");
    }

    #[test]
    fn default_decoration_is_replaced_along_with_the_marker() {
        let got = swap_params("select '$$foo:bar$$';", &values([("foo", "baz")]));
        assert_eq!(got, "select 'baz';");
    }

    #[test]
    fn label_decoration_is_replaced_too() {
        let got = swap_params(
            "where d > $$start|Start Date:2020-01-01$$",
            &values([("start", "2021-06-01")]),
        );
        assert_eq!(got, "where d > 2021-06-01");
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        assert_eq!(swap_params("$$FOO$$", &values([("foo", "x")])), "x");
        assert_eq!(swap_params("$$foo$$", &values([("FOO", "x")])), "x");
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let sql = "select $$foo$$";
        assert_eq!(swap_params(sql, &values([("bar", "x")])), sql);
    }

    #[test]
    fn unmatched_placeholders_stay_verbatim() {
        let got = swap_params("$$a$$ $$b$$", &values([("a", "1")]));
        assert_eq!(got, "1 $$b$$");
    }

    #[test]
    fn repeated_placeholders_all_resolve() {
        let got = swap_params("$$x$$ + $$x$$", &values([("x", "2")]));
        assert_eq!(got, "2 + 2");
    }

    #[test]
    fn value_containing_regex_metacharacters_is_inert() {
        let got = swap_params("$$v$$", &values([("v", "$1 ${cap} \\d")]));
        assert_eq!(got, "$1 ${cap} \\d");
    }

    #[test]
    fn injected_keyword_is_spliced_verbatim() {
        let got = swap_params("$$command$$ from bar;", &values([("command", "delete")]));
        assert_eq!(got, "delete from bar;");
    }
}
