//! SQL safety & parameterization engine.
//!
//! The crate validates user-authored SQL against a configurable keyword
//! blacklist and implements the `$$name[|label][:default]$$` parameter
//! micro-syntax (extraction, defaults, labels, substitution). Substituted
//! values are spliced verbatim, so the blacklist must always be re-checked
//! on the final SQL — see [`SqlQuery`] for the combined flow.

reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(sql);
reexport!(safety);
reexport!(params);
reexport!(query);
reexport!(format);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, info, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
