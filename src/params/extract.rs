//! Parameter extraction from raw (unsubstituted) SQL text.
//!
//! The placeholder grammar is `$$name[|label][:default]$$`:
//!
//! - `name`: `[a-z0-9_]+`, case-insensitive, folded to lowercase as the key.
//! - `|label`: anything except `$` or `:` (spaces and unicode allowed).
//! - `:default`: anything except `$` (spaces and unicode allowed).
//!
//! Extraction must run on the raw template: after substitution the
//! placeholder syntax no longer exists.
//!
//! Pinned carve-outs (the optional segments require at least one character,
//! so these shapes are inert text rather than parameters):
//! `$$name $$`, `$$name:$$`, `$$name$other$$`, and anything unterminated.

use crate::params::spec::{ParamMap, ParamSpec};
use regex::Regex;
use std::sync::LazyLock;

/// The delimiter on both sides of a placeholder.
pub const PARAM_TOKEN: &str = "$$";

/// The single source of truth for the placeholder grammar; substitution
/// reuses it so both sides accept exactly the same shapes.
pub(crate) static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$\$([a-z0-9_]+)(?:\|([^$:]+))?(?::([^$]+))?\$\$")
        .expect("parameter grammar pattern is valid")
});

/// Scan `sql` for placeholders and return one [`ParamSpec`] per distinct
/// name. The first occurrence of a name defines its label and default;
/// repeated placeholders all resolve from that single spec.
pub fn extract_params(sql: &str) -> ParamMap {
    let mut out = ParamMap::new();
    for caps in PARAM_RE.captures_iter(sql) {
        let name = caps[1].to_lowercase();
        let label = caps.get(2).map_or("", |m| m.as_str());
        let default = caps.get(3).map_or("", |m| m.as_str());
        out.entry(name).or_insert_with(|| ParamSpec::new(label, default));
    }
    out
}
