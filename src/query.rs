//! High-level flow tying parameters and safety checking together.

use crate::*;
use std::collections::BTreeMap;

/// A user-authored SQL text plus its stored runtime parameter values.
///
/// The raw template is never mutated; every accessor derives a fresh value
/// from it. The intended flow is: inspect [`param_specs`](Self::param_specs)
/// for the UI, then call [`validated_sql`](Self::validated_sql) immediately
/// before execution — the blacklist runs on the substituted result, so an
/// injected keyword in a parameter value is still caught.
#[derive(Debug, Clone, Default)]
pub struct SqlQuery {
    sql: String,
    params: BTreeMap<String, String>,
}

impl SqlQuery {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: BTreeMap::new(),
        }
    }

    /// Attach supplied runtime values. Keys are folded to lowercase to match
    /// the canonical parameter names.
    pub fn with_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params = params
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        self
    }

    /// The raw, unsubstituted template.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameter declarations extracted from the raw template.
    pub fn param_specs(&self) -> ParamMap {
        extract_params(&self.sql)
    }

    /// Effective values for substitution: extracted defaults overridden by
    /// supplied values, shared keys only. A parameter with neither a default
    /// nor a supplied value resolves to the empty string.
    pub fn available_params(&self) -> BTreeMap<String, String> {
        let mut merged: BTreeMap<String, String> = self
            .param_specs()
            .into_iter()
            .map(|(name, spec)| (name, spec.default))
            .collect();
        shared_keys_update(&mut merged, &self.params);
        merged
    }

    /// The final SQL: template with every declared parameter substituted.
    pub fn final_sql(&self) -> String {
        swap_params(&self.sql, &self.available_params())
    }

    /// Blacklist-check the final (substituted) SQL.
    pub fn check(&self, policy: &SafetyPolicy) -> BlacklistResult {
        passes_blacklist(&self.final_sql(), policy)
    }

    /// The final SQL, or the blacklist violation preventing its execution.
    pub fn validated_sql(&self, policy: &SafetyPolicy) -> Result<String> {
        let sql = self.final_sql();
        passes_blacklist(&sql, policy).into_result()?;
        Ok(sql)
    }
}
