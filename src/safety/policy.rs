use crate::config::Config;

/// Default forbidden keywords. `RENAME ` carries its trailing space on
/// purpose: entries are matched exactly as configured, and the evaluator
/// collects a trailing-space form for keywords followed by whitespace.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "ALTER",
    "RENAME ",
    "DROP",
    "TRUNCATE",
    "INSERT INTO",
    "UPDATE",
    "REPLACE",
    "DELETE",
    "CREATE TABLE",
    "GRANT",
    "OWNER TO",
];

/// Default phrases stripped before the legacy substring check. The token
/// evaluator never consults this list; exact keyword matching does not need
/// the loophole.
pub const DEFAULT_WHITELIST: &[&str] = &["CREATED", "UPDATED", "DELETED", "REGEXP_REPLACE"];

/// Read-only snapshot of the safety configuration.
///
/// Built once by the caller (from defaults, [`Config`], or any other source)
/// and passed explicitly into every check. The engine never consults ambient
/// mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyPolicy {
    pub blacklist: Vec<String>,
    pub whitelist: Vec<String>,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST.iter().copied(), DEFAULT_WHITELIST.iter().copied())
    }
}

impl SafetyPolicy {
    pub fn new(
        blacklist: impl IntoIterator<Item = impl Into<String>>,
        whitelist: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            blacklist: blacklist.into_iter().map(Into::into).collect(),
            whitelist: whitelist.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy with no forbidden keywords; every query passes.
    pub fn permissive() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    /// Build a policy from environment configuration, falling back to the
    /// defaults where no override is set.
    ///
    /// Override entries are comma-separated. Leading whitespace around each
    /// entry is dropped, trailing whitespace is kept so forms like `RENAME `
    /// remain expressible.
    pub fn from_config(cfg: &Config) -> Self {
        let parse = |raw: &Option<String>, fallback: &[&str]| -> Vec<String> {
            match raw {
                Some(s) => s
                    .split(',')
                    .map(|e| e.trim_start())
                    .filter(|e| !e.is_empty())
                    .map(str::to_string)
                    .collect(),
                None => fallback.iter().map(|e| e.to_string()).collect(),
            }
        };
        Self {
            blacklist: parse(&cfg.sql_blacklist, DEFAULT_BLACKLIST),
            whitelist: parse(&cfg.sql_whitelist, DEFAULT_WHITELIST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_carries_the_documented_lists() {
        let p = SafetyPolicy::default();
        assert_eq!(p.blacklist.len(), 11);
        assert!(p.blacklist.iter().any(|e| e == "RENAME "));
        assert_eq!(p.whitelist.len(), 4);
    }

    #[test]
    fn permissive_policy_is_empty() {
        let p = SafetyPolicy::permissive();
        assert!(p.blacklist.is_empty());
        assert!(p.whitelist.is_empty());
    }

    #[test]
    fn from_config_overrides_split_on_commas() {
        let cfg = Config {
            sql_blacklist: Some("DROP, DELETE,RENAME ".into()),
            sql_whitelist: None,
            default_rows: 1000,
        };
        let p = SafetyPolicy::from_config(&cfg);
        assert_eq!(p.blacklist, vec!["DROP", "DELETE", "RENAME "]);
        assert_eq!(p.whitelist.len(), 4);
    }
}
