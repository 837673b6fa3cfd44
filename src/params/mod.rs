//! The `$$name[|label][:default]$$` parameter micro-syntax.
//!
//! - `spec`    : `ParamSpec` / `ParamMap` data model.
//! - `extract` : Placeholder discovery on the raw template.
//! - `swap`    : Substitution of runtime values into the text.
//! - `values`  : Placeholder building, shared-keys merging, query-string
//!   value bundles.

pub mod extract;
pub mod spec;
pub mod swap;
pub mod values;

pub use extract::{PARAM_TOKEN, extract_params};
pub use spec::{ParamMap, ParamSpec};
pub use swap::swap_params;
pub use values::{param, parse_param_string, shared_keys_update};
