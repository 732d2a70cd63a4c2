//! Error types for calendar and time conversions.

use thiserror::Error;

/// Errors from calendar validation or timestamp parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },
    /// Timezone offset outside −12..=+14 hours.
    #[error("timezone offset {0} h outside -12..=14")]
    InvalidTimezone(f64),
    /// Text could not be parsed as an ISO-8601 UTC timestamp.
    #[error("cannot parse timestamp '{0}'")]
    Parse(String),
    /// Julian date is NaN or infinite.
    #[error("non-finite Julian date")]
    NonFiniteJd,
}

impl TimeError {
    pub(crate) fn field(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidField {
            field,
            value: value.to_string(),
        }
    }
}
