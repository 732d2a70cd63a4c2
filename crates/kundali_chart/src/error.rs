//! The error type exposed by the chart pipeline.
//!
//! Lower layers each carry their own enum; everything funnels into one of
//! the four [`ChartError`] kinds on the way out.

use kundali_core::EphemerisError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A request field or argument was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The oracle is missing or cannot answer for the instant.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),
    /// A computed value became NaN or infinite.
    #[error("calculation diverged: {0}")]
    CalculationDivergence(String),
    /// The oracle does not serve the requested body.
    #[error("unknown body: {0}")]
    UnknownBody(String),
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        match e {
            EphemerisError::Unavailable(msg) => Self::EphemerisUnavailable(msg),
            EphemerisError::UnknownBody(body) => Self::UnknownBody(body),
            EphemerisError::Divergence(msg) => Self::CalculationDivergence(msg),
            EphemerisError::InvalidConfig(msg) => Self::InvalidInput(msg.to_string()),
            other => Self::EphemerisUnavailable(other.to_string()),
        }
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::CalculationDivergence(msg) => Self::CalculationDivergence(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
