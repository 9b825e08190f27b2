//! Filter input state

use crate::api::TransactionFilter;

/// Value of the type selector meaning "no type constraint"
pub const ALL_TYPES: &str = "all";

/// Current values of the four filter inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInputs {
    pub type_name: String,
    pub start_date: String,
    pub end_date: String,
    pub search: String,
}

impl Default for FilterInputs {
    fn default() -> Self {
        Self {
            type_name: ALL_TYPES.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            search: String::new(),
        }
    }
}

impl FilterInputs {
    /// Back to the selector default and empty fields
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read the inputs as request criteria; empty fields and `all` become `None`
    pub fn to_filter(&self) -> TransactionFilter {
        fn non_empty(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        TransactionFilter {
            kind: non_empty(&self.type_name).filter(|t| !t.eq_ignore_ascii_case(ALL_TYPES)),
            start_date: non_empty(&self.start_date),
            end_date: non_empty(&self.end_date),
            search: non_empty(&self.search),
        }
    }
}
