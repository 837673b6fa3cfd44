use std::collections::BTreeMap;

/// Extracted parameter declarations, keyed by lowercase parameter name.
pub type ParamMap = BTreeMap<String, ParamSpec>;

/// Declaration of one `$$name[|label][:default]$$` parameter.
///
/// The name itself is the map key in [`ParamMap`]; label and default are
/// empty strings when the placeholder omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSpec {
    pub label: String,
    pub default: String,
}

impl ParamSpec {
    pub fn new(label: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default: default.into(),
        }
    }

    /// Label to present in a UI, falling back to the parameter name when the
    /// placeholder declared none.
    pub fn display_label<'a>(&'a self, name: &'a str) -> &'a str {
        if self.label.is_empty() {
            name
        } else {
            &self.label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_falls_back_to_name() {
        assert_eq!(ParamSpec::default().display_label("start_date"), "start_date");
        assert_eq!(
            ParamSpec::new("Start Date", "2020-01-01").display_label("start_date"),
            "Start Date"
        );
    }
}
