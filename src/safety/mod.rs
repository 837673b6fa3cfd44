//! Safety policy and blacklist evaluation.
//!
//! - `policy`    : `SafetyPolicy` snapshot plus the default keyword lists.
//! - `blacklist` : Token-based evaluator (the current engine).
//! - `legacy`    : Historical substring-based variant with whitelist
//!   phrase-stripping.

pub mod blacklist;
pub mod legacy;
pub mod policy;

pub use blacklist::{BlacklistResult, passes_blacklist};
pub use legacy::passes_blacklist_legacy;
pub use policy::{DEFAULT_BLACKLIST, DEFAULT_WHITELIST, SafetyPolicy};
