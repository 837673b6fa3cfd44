use confique::Config as _;
use std::sync::OnceLock;

/// Environment-driven overrides for the safety policy and query defaults.
///
/// The engine itself never reads this directly; callers build a
/// [`crate::SafetyPolicy`] snapshot from it (or from any other source) and
/// pass that explicitly into every check.
#[derive(confique::Config)]
pub struct Config {
    /// Comma-separated replacement for the default forbidden keyword list.
    #[config(env = "SQLGUARD_SQL_BLACKLIST")]
    pub sql_blacklist: Option<String>,
    /// Comma-separated replacement for the default whitelist phrases used by
    /// the legacy substring check.
    #[config(env = "SQLGUARD_SQL_WHITELIST")]
    pub sql_whitelist: Option<String>,
    /// Row limit suggested to query execution when the caller supplies none.
    #[config(env = "SQLGUARD_DEFAULT_ROWS", default = 1000)]
    pub default_rows: u32,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let cfg = config();
        assert_eq!(cfg.default_rows, 1000);
    }
}
