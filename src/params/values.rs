//! Helpers for building and merging runtime parameter values.

use crate::params::extract::PARAM_TOKEN;
use std::collections::BTreeMap;

/// Wrap a name in placeholder markers: `param("foo")` is `"$$foo$$"`.
pub fn param(name: &str) -> String {
    format!("{PARAM_TOKEN}{name}{PARAM_TOKEN}")
}

/// Strict shared-keys-only merge: copy values from `source` into `target`
/// for keys `target` already has. Keys present only in `source` are dropped,
/// never added — a supplied value cannot introduce a parameter the query
/// does not declare.
pub fn shared_keys_update(target: &mut BTreeMap<String, String>, source: &BTreeMap<String, String>) {
    for (key, value) in target.iter_mut() {
        if let Some(supplied) = source.get(key) {
            *value = supplied.clone();
        }
    }
}

/// Parse a `name:value|name:value` bundle (the query-string encoding used by
/// callers to pass runtime values). Returns `None` for any malformed input,
/// matching the tolerant all-or-nothing behavior callers rely on. Extra
/// colon-separated segments after the value are ignored.
pub fn parse_param_string(raw: &str) -> Option<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    for pair in raw.split('|') {
        let mut segments = pair.splitn(3, ':');
        let name = segments.next()?;
        let value = segments.next()?;
        out.insert(name.to_string(), value.to_string());
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn param_wraps_name_in_markers() {
        assert_eq!(param("foo"), "$$foo$$");
    }

    #[test]
    fn shared_keys_update_ignores_unknown_keys() {
        let mut target = map([("bar", "")]);
        shared_keys_update(&mut target, &map([("foo", "1"), ("bar", "2")]));
        assert_eq!(target, map([("bar", "2")]));
    }

    #[test]
    fn shared_keys_update_keeps_defaults_without_supplied_value() {
        let mut target = map([("a", "default"), ("b", "kept")]);
        shared_keys_update(&mut target, &map([("a", "override")]));
        assert_eq!(target, map([("a", "override"), ("b", "kept")]));
    }

    #[test]
    fn parse_param_string_splits_pairs() {
        assert_eq!(
            parse_param_string("foo:bar|qux:mux"),
            Some(map([("foo", "bar"), ("qux", "mux")]))
        );
    }

    #[test]
    fn parse_param_string_rejects_malformed_input() {
        assert_eq!(parse_param_string(""), None);
        assert_eq!(parse_param_string("missing-delimiter"), None);
        assert_eq!(parse_param_string("ok:1|broken"), None);
    }

    #[test]
    fn parse_param_string_drops_extra_segments() {
        assert_eq!(
            parse_param_string("when:10:30"),
            Some(map([("when", "10")]))
        );
    }
}
